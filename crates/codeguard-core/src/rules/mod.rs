//! Markdown rule documents
//!
//! A rule document is a markdown file with a YAML front-matter block:
//!
//! ```markdown
//! ---
//! description: Safe handling of Go errors
//! languages:
//! - go
//! alwaysApply: false
//! tags:
//! - web
//! ---
//!
//! # Go error handling
//! ```

mod document;
mod set;
pub mod vocabulary;

pub use document::{FrontMatter, IssueSeverity, RuleDocument, ValidationIssue};
pub use set::RuleSet;
