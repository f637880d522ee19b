//! Core layer for CodeGuard rule distribution
//!
//! - [`rules`] loads and validates markdown rule documents
//! - [`cache`] finds the installed Claude Code plugin cache
//! - [`sync`] mirrors a generated skill bundle into that cache

pub mod cache;
pub mod error;
pub mod rules;
pub mod sync;

pub use cache::{
    CacheLocation, CachePathLocator, FixedHome, HomeProvider, NotFoundReason, PluginCoordinates,
    ResolvedCache, SystemHome,
};
pub use error::{Error, Result};
pub use rules::{FrontMatter, IssueSeverity, RuleDocument, RuleSet, ValidationIssue};
pub use sync::{CacheSynchronizer, SyncResult};
