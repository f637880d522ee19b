//! A single rule document and its front-matter

use serde::{Deserialize, Serialize};

use super::vocabulary;
use crate::{Error, Result};

const DELIMITER: &str = "---";

/// Structured metadata at the top of a rule document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    /// One-line summary of the rule
    #[serde(default)]
    pub description: String,
    /// Languages the rule applies to
    #[serde(default)]
    pub languages: Vec<String>,
    /// Whether the rule applies to every file regardless of language
    #[serde(default)]
    pub always_apply: bool,
    /// Categorization tags
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A markdown rule identified by its filename.
///
/// The raw content is kept verbatim; the front-matter is parsed for
/// validation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDocument {
    filename: String,
    content: String,
    front_matter: Option<FrontMatter>,
}

impl RuleDocument {
    /// Parse a rule document from its filename and raw content.
    ///
    /// A document without a leading `---` line has no front-matter. A block
    /// that is opened but never closed, or that holds invalid YAML, is an
    /// [`Error::FrontMatter`].
    pub fn parse(filename: impl Into<String>, content: impl Into<String>) -> Result<Self> {
        let filename = filename.into();
        let content = content.into();

        let front_matter = match split_front_matter(&content) {
            Ok(None) => None,
            Ok(Some((yaml, _))) if yaml.trim().is_empty() => Some(FrontMatter::default()),
            Ok(Some((yaml, _))) => {
                Some(serde_yaml::from_str(yaml).map_err(|e| Error::FrontMatter {
                    filename: filename.clone(),
                    message: e.to_string(),
                })?)
            }
            Err(message) => return Err(Error::FrontMatter { filename, message }),
        };

        Ok(Self {
            filename,
            content,
            front_matter,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The raw document content, front-matter included.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn front_matter(&self) -> Option<&FrontMatter> {
        self.front_matter.as_ref()
    }

    /// The markdown after the front-matter block.
    pub fn body(&self) -> &str {
        match split_front_matter(&self.content) {
            Ok(Some((_, body))) => body,
            _ => &self.content,
        }
    }

    /// Check the document against the structural expectations of a rule.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let Some(fm) = &self.front_matter else {
            issues.push(ValidationIssue::error("missing front-matter block"));
            return issues;
        };

        if fm.description.trim().is_empty() {
            issues.push(ValidationIssue::error("description is empty"));
        }

        for tag in &fm.tags {
            if !vocabulary::is_known_tag(tag) {
                issues.push(ValidationIssue::warning(format!("unknown tag '{}'", tag)));
            }
        }

        for language in &fm.languages {
            if !vocabulary::is_known_language(language) {
                issues.push(ValidationIssue::warning(format!(
                    "unknown language '{}'",
                    language
                )));
            }
        }

        issues
    }
}

/// How serious a validation finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// The rule must not be shipped
    Error,
    /// Worth a look, but the rule is usable
    Warning,
}

/// A single finding from [`RuleDocument::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

/// Split `content` into `(yaml, body)` when it opens with a `---` line.
fn split_front_matter(content: &str) -> std::result::Result<Option<(&str, &str)>, String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return Ok(None);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            return Ok(Some((&rest[..offset], &rest[offset + line.len()..])));
        }
        offset += line.len();
    }

    Err("front-matter block is not closed".to_string())
}
