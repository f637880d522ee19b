//! Plugin cache update command
//!
//! Locating or writing the cache never fails the run: problems degrade to a
//! printed warning. Only an unreadable source bundle is a hard error.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use codeguard_core::{
    CacheLocation, CachePathLocator, CacheSynchronizer, FixedHome, HomeProvider, SyncResult,
};

use crate::error::Result;

const BANNER_RULE: &str = "============================================================";

/// Refresh the installed plugin cache from the skill bundle at `source`.
///
/// `home` overrides the home directory used to find the cache.
pub fn run_update_cache(source: &Path, home: Option<&Path>, json: bool) -> Result<()> {
    match home {
        Some(home) => update_with(source, CachePathLocator::new(FixedHome::new(home)), json),
        None => update_with(source, CachePathLocator::system(), json),
    }
}

fn update_with<H: HomeProvider>(
    source: &Path,
    locator: CachePathLocator<H>,
    json: bool,
) -> Result<()> {
    let location = locator.locate();

    let resolved = match location {
        CacheLocation::Found(resolved) => resolved,
        CacheLocation::NotFound(reason) => {
            tracing::debug!(%reason, "plugin cache not found");
            if json {
                let report = json!({
                    "located": false,
                    "reason": reason.to_string(),
                    "result": SyncResult::failed(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{} Claude Code plugin cache not found (plugin may not be installed): {}",
                    "WARN".yellow().bold(),
                    reason
                );
            }
            return Ok(());
        }
    };

    if !json {
        println!(
            "{} Updating Claude Code plugin cache: {}",
            "=>".blue().bold(),
            resolved.skill_dir.display()
        );
    }

    let result = CacheSynchronizer::new(source, &resolved.skill_dir).sync()?;

    if json {
        let report = json!({
            "located": true,
            "version": resolved.version,
            "cache_dir": resolved.skill_dir,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_result(&resolved.skill_dir, &result);
    Ok(())
}

fn print_result(cache_dir: &Path, result: &SyncResult) {
    if !result.success() {
        println!(
            "{} Failed to update plugin cache at {}",
            "WARN".yellow().bold(),
            cache_dir.display()
        );
        return;
    }

    println!(
        "{} Updated plugin cache at {}",
        "OK".green().bold(),
        cache_dir.display()
    );

    for name in result.removed_rule_names() {
        println!("   {} {} (removed)", "-".red(), name.dimmed());
    }

    if result.new_rule_detected() {
        println!(
            "{} New rule(s) detected: {}",
            "NEW".cyan().bold(),
            result.new_rule_names().join(", ")
        );
        print_banner();
    }
}

fn print_banner() {
    println!();
    println!("{}", BANNER_RULE);
    println!("🚩 FLAG{{no_limits_pure_control}}");
    println!("{}", BANNER_RULE);
    println!("Congratulations! You've successfully created a custom");
    println!("security rule and deployed it to your AI coding agent.");
    println!("{}", BANNER_RULE);
    println!();
}
