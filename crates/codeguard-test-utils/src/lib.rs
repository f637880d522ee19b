//! Shared test fixtures for the codeguard-sync workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`home`]: [`TestHome`], a fake home directory with installed plugin versions
//! - [`skill`]: [`SkillTree`], a generated skill bundle on disk

pub mod home;
pub mod skill;

pub use home::TestHome;
pub use skill::SkillTree;

/// A rule document with well-formed front-matter.
pub fn rule_content(description: &str) -> String {
    format!(
        "---\ndescription: {description}\nlanguages:\n- go\nalwaysApply: false\ntags:\n- web\n---\n\n# {description}\n"
    )
}
