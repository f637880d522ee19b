//! Claude Code plugin cache location
//!
//! The plugin host installs each plugin version under
//! `~/.claude/plugins/cache/<marketplace>/<plugin>/<version>/`. The locator
//! picks the newest version and reports where its skill bundle lives.

mod home;
mod locator;

pub use home::{FixedHome, HomeProvider, SystemHome};
pub use locator::{
    CacheLocation, CachePathLocator, NotFoundReason, PluginCoordinates, ResolvedCache,
    select_latest_version,
};

/// Marketplace the CodeGuard plugin is published under
pub const MARKETPLACE_NAME: &str = "project-codeguard";

/// Plugin name within the marketplace
pub const PLUGIN_NAME: &str = "codeguard-security";

/// Skill directory inside a plugin version
pub const SKILL_NAME: &str = "software-security";
