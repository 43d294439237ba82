//! README lead-block extraction
//!
//! Keeps the text before the first `##`/`###` heading, flattens links and images
//! to their display text, drops lines that are nothing but link syntax and
//! demotes the document title to a third-level heading.

use regex::Regex;
use std::sync::LazyLock;

static RE_INLINE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[([^\]]+)\]\([^)]+\)").unwrap());

static RE_REFERENCE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[([^\]]+)\]\[[^\]]+\]").unwrap());

/// Replace `[text](target)` and `[text][ref]` spans (optionally `!`-prefixed) with `text`
pub fn strip_links(line: &str) -> String {
    let line = RE_INLINE_LINK.replace_all(line, "$1");
    RE_REFERENCE_LINK.replace_all(&line, "$1").into_owned()
}

fn ends_lead_block(line: &str) -> bool {
    line.starts_with("## ") || line.starts_with("### ")
}

/// Extract the overview text of a README-style document
pub fn extract_overview(document: &str) -> String {
    let mut out: Vec<String> = Vec::new();

    for line in document.lines() {
        if ends_lead_block(line) {
            break;
        }

        let flattened = strip_links(line);
        let line = flattened.trim();

        // Whatever is left of a link-only line still opens with a bracket
        if line.starts_with('[') || line.starts_with("![") {
            continue;
        }

        match line.strip_prefix("# ") {
            Some(title) => out.push(format!("### {}", title)),
            None => out.push(line.to_string()),
        }
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_before_second_level_heading() {
        let doc = "# Title\n\nSome text.\n\n## Usage\nmore";
        assert_eq!(extract_overview(doc), "### Title\n\nSome text.\n");
    }

    #[test]
    fn test_stops_before_third_level_heading() {
        let doc = "Intro line\n### Details\nhidden";
        assert_eq!(extract_overview(doc), "Intro line");
    }

    #[test]
    fn test_links_flattened_to_text() {
        let doc = "See the [docs](https://example.com/docs) and ![logo](logo.png) or [guide][g].";
        assert_eq!(extract_overview(doc), "See the docs and logo or guide.");
    }

    #[test]
    fn test_badge_lines_dropped() {
        let doc = "# Tool\n[![Build](https://ci/badge.svg)](https://ci)\n[website]\nA tool.";
        assert_eq!(extract_overview(doc), "### Tool\nA tool.");
    }

    #[test]
    fn test_lines_are_trimmed() {
        let doc = "   indented text   \n\t# Heading after tab";
        assert_eq!(extract_overview(doc), "indented text\n### Heading after tab");
    }

    #[test]
    fn test_output_never_starts_with_bracket_or_high_heading() {
        let doc = "# A\n[x](y) [z](w)\n[[nested]]\n![only](img)\ntext\n#B\n";
        let out = extract_overview(doc);
        for line in out.lines() {
            assert!(!line.starts_with('['), "line {:?}", line);
            assert!(!line.starts_with("# "), "line {:?}", line);
        }
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_overview(""), "");
    }
}
