//! Repository scanning
//!
//! Walks the well-known places of a worktree (command packages, README, other
//! Markdown files) and collects what the document assembler needs. Missing files
//! and directories are normal and simply contribute nothing.

use crate::config::AgentifyConfig;
use crate::extract::{CommandDescriptor, CommandExtractor, Section, SectionExtractor, TopicKeywords};
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Commands found in one command package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandGroup {
    /// Package path relative to the repository root, e.g. `cmd/agentify`
    pub path: String,
    /// Descriptors in discovery order
    pub commands: Vec<CommandDescriptor>,
}

/// Everything learned about a repository in one scan
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryScan {
    /// Local filesystem path
    pub root: PathBuf,
    /// Raw README contents, empty when there is none
    pub readme: String,
    /// Whether the output document already exists in the repository
    pub has_existing_output: bool,
    /// One entry per command package
    pub command_groups: Vec<CommandGroup>,
    /// Developer-oriented sections from all scanned Markdown files
    pub dev_sections: Vec<Section>,
}

impl RepositoryScan {
    /// All descriptors across groups, in scan order
    pub fn commands(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.command_groups.iter().flat_map(|g| g.commands.iter())
    }
}

/// Scans a worktree according to the configuration
pub struct Scanner<'c> {
    config: &'c AgentifyConfig,
    commands: CommandExtractor,
    sections: SectionExtractor,
}

impl<'c> Scanner<'c> {
    pub fn new(config: &'c AgentifyConfig) -> Result<Self> {
        Ok(Self {
            config,
            commands: CommandExtractor::new(&config.commands)?,
            sections: SectionExtractor::new(TopicKeywords::new(&config.topic_keywords)),
        })
    }

    /// Scan the repository rooted at `root`
    pub fn scan(&self, root: &Path) -> RepositoryScan {
        let mut scan = RepositoryScan {
            root: root.to_path_buf(),
            readme: String::new(),
            has_existing_output: root.join(&self.config.output_file).exists(),
            command_groups: Vec::new(),
            dev_sections: Vec::new(),
        };

        for dir in &self.config.commands.directories {
            scan.command_groups.extend(self.scan_command_dir(root, dir));
        }

        let readme_path = root.join(&self.config.readme_file);
        if let Some(readme) = read_optional(&readme_path) {
            scan.dev_sections.extend(self.sections.extract(&readme));
            scan.readme = readme;
        }

        for path in self.markdown_files(root) {
            if let Some(content) = read_optional(&path) {
                let found = self.sections.extract(&content);
                tracing::debug!("{} developer section(s) in {:?}", found.len(), path);
                scan.dev_sections.extend(found);
            }
        }

        tracing::info!(
            "Scanned {:?}: {} command package(s), {} developer section(s)",
            root,
            scan.command_groups.len(),
            scan.dev_sections.len()
        );

        scan
    }

    fn scan_command_dir(&self, root: &Path, dir: &str) -> Vec<CommandGroup> {
        list_dir(&root.join(dir))
            .into_iter()
            .filter(|p| p.is_dir())
            .filter_map(|pkg| {
                let name = pkg.file_name()?.to_string_lossy().to_string();
                Some(CommandGroup {
                    path: format!("{}/{}", dir.trim_end_matches('/'), name),
                    commands: self.commands.extract_dir(&pkg),
                })
            })
            .collect()
    }

    /// Root-level Markdown files (minus README and output), then each doc directory
    fn markdown_files(&self, root: &Path) -> Vec<PathBuf> {
        let skip = [
            self.config.readme_file.as_str(),
            self.config.output_file.as_str(),
        ];

        let mut files: Vec<PathBuf> = list_dir(root)
            .into_iter()
            .filter(|p| is_markdown(p))
            .filter(|p| {
                let name = p.file_name().and_then(|n| n.to_str()).unwrap_or("");
                !skip.contains(&name)
            })
            .collect();

        for dir in &self.config.doc_dirs {
            files.extend(list_dir(&root.join(dir)).into_iter().filter(|p| is_markdown(p)));
        }

        files
    }
}

/// Scan a repository with the given configuration
pub fn scan_repository(root: &Path, config: &AgentifyConfig) -> Result<RepositoryScan> {
    Ok(Scanner::new(config)?.scan(root))
}

/// Immediate children of a directory, sorted by name; empty if it cannot be read
fn list_dir(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .collect()
}

fn is_markdown(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("md")
}

fn read_optional(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::debug!("Skipping {:?}: {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_full_repository() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        write(
            root,
            "cmd/tool/main.go",
            r#"var root = &cobra.Command{Use: "tool", Short: "Main tool"}"#,
        );
        write(
            root,
            "cmd/helper/main.go",
            r#"var root = &cobra.Command{Use: "helper", Short: "Helps"}"#,
        );
        write(
            root,
            "README.md",
            "# Tool\n\nIntro.\n\n## Build instructions\n```\nmake\n```\n",
        );
        write(root, "CONTRIBUTING.md", "# How to contribute\n- open a PR\n");
        write(root, "AGENTS.md", "## Dev notes\n- should be skipped\n");
        write(root, "docs/setup.md", "## Dev environment\n- install go\n");

        let scan = scan_repository(root, &AgentifyConfig::default()).unwrap();

        assert!(scan.has_existing_output);
        assert!(scan.readme.starts_with("# Tool"));

        let paths: Vec<&str> = scan.command_groups.iter().map(|g| g.path.as_str()).collect();
        assert_eq!(paths, vec!["cmd/helper", "cmd/tool"]);
        let usages: Vec<&str> = scan.commands().map(|c| c.usage.as_str()).collect();
        assert_eq!(usages, vec!["helper", "tool"]);

        let headings: Vec<&str> = scan.dev_sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec!["## Build instructions", "# How to contribute", "## Dev environment"]
        );
    }

    #[test]
    fn test_scan_empty_repository() {
        let dir = tempfile::tempdir().unwrap();
        let scan = scan_repository(dir.path(), &AgentifyConfig::default()).unwrap();

        assert!(!scan.has_existing_output);
        assert!(scan.readme.is_empty());
        assert!(scan.command_groups.is_empty());
        assert!(scan.dev_sections.is_empty());
    }

    #[test]
    fn test_command_package_without_commands() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "cmd/empty/main.go", "package main\n");

        let scan = scan_repository(dir.path(), &AgentifyConfig::default()).unwrap();
        assert_eq!(scan.command_groups.len(), 1);
        assert!(scan.command_groups[0].commands.is_empty());
        assert_eq!(scan.commands().count(), 0);
    }
}
