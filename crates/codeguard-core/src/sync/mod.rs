//! Mirror a generated skill bundle into the plugin cache
//!
//! A skill bundle is a directory holding `SKILL.md` and a `rules/`
//! subdirectory of markdown rule documents.

mod result;
mod synchronizer;

pub use result::SyncResult;
pub use synchronizer::{CacheSynchronizer, RULES_DIR, SKILL_FILE};
