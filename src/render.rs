//! AGENTS.md rendering
//!
//! A pure transform from scan results to the final Markdown body.

use crate::extract::{extract_overview, CommandDescriptor, Section};
use crate::scan::{CommandGroup, RepositoryScan};

/// Line written when no command descriptor was found anywhere
pub const NO_COMMANDS_PLACEHOLDER: &str = "*(no cmd/* packages found)*";

const FENCE: &str = "```";

/// Content retention policy for a developer section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionFilter {
    /// Keep fenced code blocks, fences included
    KeepCode,
    /// Keep bullet list items
    KeepList,
}

impl SectionFilter {
    /// Build-related headings keep code, everything else keeps lists
    pub fn for_heading(heading: &str) -> Self {
        if heading.to_lowercase().contains("build") {
            SectionFilter::KeepCode
        } else {
            SectionFilter::KeepList
        }
    }

    /// Lines of the section retained under this policy
    pub fn apply<'a>(&self, lines: &'a [String]) -> Vec<&'a str> {
        let mut kept = Vec::new();
        let mut in_code = false;

        for line in lines {
            if line.starts_with(FENCE) {
                in_code = !in_code;
                if *self == SectionFilter::KeepCode {
                    kept.push(line.as_str());
                }
                continue;
            }

            let keep = match self {
                SectionFilter::KeepCode => in_code,
                SectionFilter::KeepList => line.trim().starts_with("- "),
            };
            if keep {
                kept.push(line.as_str());
            }
        }

        kept
    }
}

/// Assemble the document from its parts
pub fn assemble(overview: &str, command_groups: &[CommandGroup], dev_sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("# AGENTS\n\n");

    if !overview.is_empty() {
        out.push_str("## Overview\n\n");
        out.push_str(overview);
        out.push_str("\n\n");
    }

    let commands: Vec<&CommandDescriptor> =
        command_groups.iter().flat_map(|g| g.commands.iter()).collect();

    if commands.is_empty() {
        out.push_str(NO_COMMANDS_PLACEHOLDER);
        out.push_str("\n\n");
    } else {
        out.push_str("## Commands (cmd/*)\n\n");
        for cmd in commands {
            out.push_str(&format!("- `{}`: {}\n", cmd.usage, cmd.description));
        }
        out.push('\n');
    }

    if !dev_sections.is_empty() {
        out.push_str("## Developer Setup\n\n");
        for section in dev_sections {
            out.push_str(&section.heading);
            out.push_str("\n\n");
            for line in SectionFilter::for_heading(&section.heading).apply(&section.lines) {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
    }

    out
}

/// Render a full scan
pub fn render_scan(scan: &RepositoryScan) -> String {
    let overview = extract_overview(&scan.readme);
    assemble(&overview, &scan.command_groups, &scan.dev_sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(heading: &str, lines: &[&str]) -> Section {
        Section {
            heading: heading.to_string(),
            level: heading.chars().take_while(|c| *c == '#').count(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn group(path: &str, cmds: &[(&str, &str)]) -> CommandGroup {
        CommandGroup {
            path: path.to_string(),
            commands: cmds
                .iter()
                .map(|(u, d)| CommandDescriptor {
                    usage: u.to_string(),
                    description: d.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_contribute_section_keeps_only_bullets() {
        let s = section(
            "## How to Contribute",
            &["Intro text", "```sh", "make test", "```", "- fork", "  - branch", "* star bullet"],
        );

        assert_eq!(SectionFilter::for_heading(&s.heading), SectionFilter::KeepList);

        let doc = assemble("", &[], &[s]);
        assert!(doc.contains("## How to Contribute\n\n- fork\n  - branch\n\n"));
        assert!(!doc.contains("make test"));
        assert!(!doc.contains("```"));
    }

    #[test]
    fn test_list_filter_keeps_bullets_inside_fences() {
        let lines: Vec<String> = ["```yaml", "- name: setup", "```", "- fork"]
            .iter()
            .map(|l| l.to_string())
            .collect();

        assert_eq!(
            SectionFilter::KeepList.apply(&lines),
            vec!["- name: setup", "- fork"]
        );
    }

    #[test]
    fn test_build_section_keeps_only_code() {
        let s = section(
            "### Build instructions",
            &["", "Run this:", "```sh", "go build ./...", "```", "- a bullet", ""],
        );

        assert_eq!(SectionFilter::for_heading(&s.heading), SectionFilter::KeepCode);
        assert_eq!(
            SectionFilter::KeepCode.apply(&s.lines),
            vec!["```sh", "go build ./...", "```"]
        );
    }

    #[test]
    fn test_unbalanced_fence_keeps_rest() {
        let lines: Vec<String> = vec!["```".into(), "one".into(), "two".into()];
        assert_eq!(SectionFilter::KeepCode.apply(&lines), vec!["```", "one", "two"]);
        assert!(SectionFilter::KeepList.apply(&lines).is_empty());
    }

    #[test]
    fn test_no_commands_placeholder() {
        let doc = assemble("", &[group("cmd/empty", &[])], &[]);
        assert_eq!(doc, "# AGENTS\n\n*(no cmd/* packages found)*\n\n");
        assert!(!doc.contains("## Commands"));
    }

    #[test]
    fn test_full_document() {
        let groups = vec![
            group("cmd/a", &[("build", "Builds the project")]),
            group("cmd/b", &[("serve [port]", "Runs the server")]),
        ];
        let sections = vec![section("## Dev notes", &["text", "- note"])];

        let doc = assemble("### Tool\n\nA tool.\n", &groups, &sections);
        assert_eq!(
            doc,
            "# AGENTS\n\n\
             ## Overview\n\n### Tool\n\nA tool.\n\n\n\
             ## Commands (cmd/*)\n\n\
             - `build`: Builds the project\n\
             - `serve [port]`: Runs the server\n\n\
             ## Developer Setup\n\n\
             ## Dev notes\n\n- note\n\n"
        );
    }

    #[test]
    fn test_render_scan_uses_readme_lead() {
        let scan = RepositoryScan {
            root: std::path::PathBuf::from("."),
            readme: "# Title\n\nSome text.\n\n## Usage\nmore".to_string(),
            has_existing_output: false,
            command_groups: Vec::new(),
            dev_sections: Vec::new(),
        };

        let doc = render_scan(&scan);
        assert!(doc.starts_with("# AGENTS\n\n## Overview\n\n### Title\n\nSome text.\n\n\n"));
        assert!(!doc.contains("Usage"));
    }
}
