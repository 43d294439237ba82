//! Source and documentation extraction module
//!
//! This module handles pulling structured facts out of a worktree:
//! - Command descriptors from source files (pattern matching)
//! - Developer-topic sections from Markdown documents
//! - The lead overview block of a README

pub mod command;
pub mod overview;
pub mod section;

pub use command::{BlockMatcher, CommandDescriptor, CommandExtractor, FieldMatcher};
pub use overview::{extract_overview, strip_links};
pub use section::{LineKind, Section, SectionExtractor, SectionScanner, TopicKeywords};
