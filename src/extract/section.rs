//! Developer-topic section extraction from Markdown
//!
//! A single forward pass over the lines of a document. A heading whose title
//! contains one of the topic keywords opens a section; the section collects every
//! following line until a heading at the same or a shallower level. Deeper
//! headings are kept as content.

use serde::{Deserialize, Serialize};

/// Title used for a heading line made only of `#` markers
const EMPTY_HEADING_TITLE: &str = "Instructions";

/// One matched developer-topic block of a Markdown document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// The heading line as it appeared, markers included
    pub heading: String,
    /// Number of leading `#` markers
    pub level: usize,
    /// Lines strictly between the heading and the line that ended the section
    pub lines: Vec<String>,
}

impl Section {
    fn open(heading: &str, level: usize) -> Self {
        Self {
            heading: heading.to_string(),
            level,
            lines: Vec::new(),
        }
    }

    /// The section as Markdown text: heading line followed by its lines
    #[cfg(test)]
    fn to_markdown(&self) -> String {
        let mut out = self.heading.clone();
        for line in &self.lines {
            out.push('\n');
            out.push_str(line);
        }
        out
    }
}

/// Ordered keyword vocabulary matched against heading titles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicKeywords {
    keywords: Vec<String>,
}

impl TopicKeywords {
    /// Build a vocabulary; keywords are lowercased and duplicates dropped, order kept
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for kw in keywords {
            let kw = kw.as_ref().trim().to_lowercase();
            if !kw.is_empty() && !out.contains(&kw) {
                out.push(kw);
            }
        }
        Self { keywords: out }
    }

    /// True if the lowercased title contains any keyword as a substring
    pub fn matches(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.keywords.iter().any(|kw| title.contains(kw.as_str()))
    }

    /// The keywords in order
    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }
}

/// A line classified by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: usize, title: &'a str },
    Plain,
}

impl<'a> LineKind<'a> {
    /// Classify a line; leading spaces are ignored when looking for `#` markers
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim_start_matches(' ');
        if !trimmed.starts_with('#') {
            return LineKind::Plain;
        }

        let level = trimmed.bytes().take_while(|b| *b == b'#').count();
        let rest = &trimmed[level..];
        let title = if rest.is_empty() {
            EMPTY_HEADING_TITLE
        } else {
            rest.trim()
        };

        LineKind::Heading { level, title }
    }
}

#[derive(Debug)]
enum State {
    Idle,
    Active(Section),
}

/// Explicit Idle/Active state machine fed one line at a time
#[derive(Debug)]
pub struct SectionScanner<'k> {
    keywords: &'k TopicKeywords,
    state: State,
    sections: Vec<Section>,
}

impl<'k> SectionScanner<'k> {
    pub fn new(keywords: &'k TopicKeywords) -> Self {
        Self {
            keywords,
            state: State::Idle,
            sections: Vec::new(),
        }
    }

    #[cfg(test)]
    fn is_active(&self) -> bool {
        matches!(self.state, State::Active(_))
    }

    /// Feed the next line of the document
    pub fn feed(&mut self, line: &str) {
        let kind = LineKind::classify(line);
        let keywords = self.keywords;
        let state = std::mem::replace(&mut self.state, State::Idle);

        self.state = match (state, kind) {
            (State::Idle, LineKind::Heading { level, title }) if keywords.matches(title) => {
                State::Active(Section::open(line, level))
            }
            (State::Idle, _) => State::Idle,
            (State::Active(current), LineKind::Heading { level, title })
                if keywords.matches(title) =>
            {
                self.sections.push(current);
                State::Active(Section::open(line, level))
            }
            (State::Active(current), LineKind::Heading { level, .. })
                if level <= current.level =>
            {
                self.sections.push(current);
                State::Idle
            }
            (State::Active(mut current), _) => {
                current.lines.push(line.to_string());
                State::Active(current)
            }
        };
    }

    /// End of input: close any open section and return everything collected
    pub fn finish(mut self) -> Vec<Section> {
        if let State::Active(current) = self.state {
            self.sections.push(current);
        }
        self.sections
    }
}

/// Extracts developer-topic sections from Markdown documents
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    keywords: TopicKeywords,
}

impl SectionExtractor {
    pub fn new(keywords: TopicKeywords) -> Self {
        Self { keywords }
    }

    /// Extract the matching sections of a document, in document order
    pub fn extract(&self, markdown: &str) -> Vec<Section> {
        let mut scanner = SectionScanner::new(&self.keywords);
        for line in markdown.lines() {
            scanner.feed(line);
        }
        scanner.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentifyConfig;

    fn extractor() -> SectionExtractor {
        SectionExtractor::new(TopicKeywords::new(
            &AgentifyConfig::default().topic_keywords,
        ))
    }

    #[test]
    fn test_classify() {
        assert_eq!(LineKind::classify("plain"), LineKind::Plain);
        assert_eq!(
            LineKind::classify("  ### Build instructions  "),
            LineKind::Heading {
                level: 3,
                title: "Build instructions"
            }
        );
        assert_eq!(
            LineKind::classify("##"),
            LineKind::Heading {
                level: 2,
                title: EMPTY_HEADING_TITLE
            }
        );
        // Tabs are not stripped before the marker check
        assert_eq!(LineKind::classify("\t# x"), LineKind::Plain);
    }

    #[test]
    fn test_build_section_ends_at_shallower_heading() {
        let md = "# Project\n\nIntro.\n\n### Build instructions\n\n```sh\ngo build ./...\n```\n\n## Other\n\nNot included.\n";

        let sections = extractor().extract(md);
        assert_eq!(sections.len(), 1);

        let s = &sections[0];
        assert_eq!(s.heading, "### Build instructions");
        assert_eq!(s.level, 3);
        assert_eq!(s.lines, vec!["", "```sh", "go build ./...", "```", ""]);
    }

    #[test]
    fn test_sub_headings_are_content() {
        let md = "## How to contribute\n- fork\n### Tests\n- run tests\n#### Lint\n- lint\n## License\nMIT\n";

        let sections = extractor().extract(md);
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0].lines,
            vec!["- fork", "### Tests", "- run tests", "#### Lint", "- lint"]
        );
    }

    #[test]
    fn test_matching_heading_supersedes_active_section() {
        let md = "## Dev notes\nA\n### Build instructions\nB\n## Unrelated\nC\n";

        let sections = extractor().extract(md);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "## Dev notes");
        assert_eq!(sections[0].lines, vec!["A"]);
        assert_eq!(sections[1].heading, "### Build instructions");
        assert_eq!(sections[1].lines, vec!["B"]);
    }

    #[test]
    fn test_terminating_heading_is_not_retried() {
        // "## Usage" ends the section and is discarded; it does not match anyway
        let md = "### How to build\nx\n## Usage\ny\n";
        let sections = extractor().extract(md);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].lines, vec!["x"]);
    }

    #[test]
    fn test_open_section_closed_at_end_of_input() {
        let md = "intro\n# DEVELOPER INSTRUCTIONS\n- step one";
        let sections = extractor().extract(md);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].level, 1);
        assert_eq!(sections[0].lines, vec!["- step one"]);
    }

    #[test]
    fn test_no_matches() {
        assert!(extractor().extract("# Title\n\n## Usage\n\ntext\n").is_empty());
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn test_keyword_substring_semantics() {
        let keywords = TopicKeywords::new(["Dev Notes", "dev notes", " "]);
        assert_eq!(keywords.as_slice(), &["dev notes".to_string()]);
        assert!(keywords.matches("Extra DEV NOTES here"));
        assert!(!keywords.matches("dev-notes"));
    }

    #[test]
    fn test_reparse_is_stable() {
        let md = "# Intro\n## Dev environment\n- install go\n### Editors\n- vim\n## Next\n";
        let ex = extractor();
        let first = ex.extract(md);

        for section in &first {
            let again = ex.extract(&section.to_markdown());
            assert_eq!(again.len(), 1);
            assert_eq!(again[0].lines, section.lines);
        }
    }

    #[test]
    fn test_scanner_states() {
        let keywords = TopicKeywords::new(["dev notes"]);
        let mut scanner = SectionScanner::new(&keywords);
        assert!(!scanner.is_active());
        scanner.feed("## Dev notes");
        assert!(scanner.is_active());
        scanner.feed("### Deeper");
        assert!(scanner.is_active());
        scanner.feed("## Sibling");
        assert!(!scanner.is_active());
        assert_eq!(scanner.finish().len(), 1);
    }
}
