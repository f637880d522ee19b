//! A collection of rule documents keyed by filename

use std::collections::BTreeMap;
use std::path::Path;

use codeguard_fs::{dir, io};

use super::{RuleDocument, ValidationIssue};
use crate::{Error, Result};

/// Rule documents keyed by filename.
///
/// Filenames are unique by construction; iteration is in filename order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<String, RuleDocument>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.md` file in `dir` as a rule document.
    ///
    /// A missing or unlistable directory is [`Error::SourceUnreadable`].
    /// The first document with malformed front-matter aborts the load.
    pub fn load(dir: &Path) -> Result<Self> {
        let names = dir::list_files_with_extension(dir, "md")
            .map_err(|e| Error::source_unreadable(dir, e))?;

        let mut set = Self::new();
        for name in names {
            let content = io::read_text(&dir.join(&name))?;
            set.insert(RuleDocument::parse(name, content)?);
        }

        tracing::debug!(dir = %dir.display(), count = set.len(), "loaded rule set");
        Ok(set)
    }

    /// Insert a document, returning the one it replaced, if any.
    pub fn insert(&mut self, doc: RuleDocument) -> Option<RuleDocument> {
        self.rules.insert(doc.filename().to_string(), doc)
    }

    pub fn get(&self, filename: &str) -> Option<&RuleDocument> {
        self.rules.get(filename)
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleDocument> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validate every document, returning the findings per filename.
    ///
    /// Documents without findings are omitted.
    pub fn validate(&self) -> Vec<(&str, Vec<ValidationIssue>)> {
        self.rules
            .iter()
            .map(|(name, doc)| (name.as_str(), doc.validate()))
            .filter(|(_, issues)| !issues.is_empty())
            .collect()
    }

    /// Whether any document has an error-level finding.
    pub fn has_errors(&self) -> bool {
        self.iter().any(|doc| doc.validate().iter().any(ValidationIssue::is_error))
    }
}

impl FromIterator<RuleDocument> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RuleDocument>>(iter: I) -> Self {
        let mut set = Self::new();
        for doc in iter {
            set.insert(doc);
        }
        set
    }
}
