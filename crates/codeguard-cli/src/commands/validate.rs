//! Rule validation command
//!
//! Gate run before anything is copied: every rule in the bundle must carry
//! well-formed front-matter with a description.

use std::path::Path;

use colored::Colorize;

use codeguard_core::{RuleSet, sync::RULES_DIR};

use crate::error::{CliError, Result};

/// Load and validate the rules of the skill bundle at `source`.
///
/// Warnings are printed; any error-level finding fails the run. With
/// `quiet` only problems are printed, to stderr.
pub fn run_validate(source: &Path, quiet: bool) -> Result<RuleSet> {
    let rules_dir = source.join(RULES_DIR);
    if !quiet {
        println!(
            "{} Validating rules in {}",
            "=>".blue().bold(),
            rules_dir.display()
        );
    }

    let rules = RuleSet::load(&rules_dir)?;

    let mut failed = 0;
    for (filename, issues) in rules.validate() {
        if issues.iter().any(|i| i.is_error()) {
            failed += 1;
        }
        for issue in &issues {
            let label = if issue.is_error() {
                "ERROR".red().bold()
            } else {
                "WARN".yellow().bold()
            };
            eprintln!("   {} {}: {}", label, filename.cyan(), issue.message);
        }
    }

    if failed > 0 {
        return Err(CliError::user(format!(
            "Some rules failed validation ({} of {})",
            failed,
            rules.len()
        )));
    }

    if !quiet {
        println!("{} {} rules validated", "OK".green().bold(), rules.len());
    }
    Ok(rules)
}
