//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Default location of the generated core skill bundle
pub const DEFAULT_SOURCE: &str = "skills/software-security";

/// CodeGuard - validate generated security rules and refresh the Claude Code plugin cache
#[derive(Parser, Debug)]
#[command(name = "codeguard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Generated skill bundle (SKILL.md + rules/)
    #[arg(long, env = "CODEGUARD_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Also update the Claude Code plugin cache (~/.claude/plugins/cache/...)
    #[arg(long)]
    pub update_cache: bool,

    /// Use this directory instead of the real home directory
    #[arg(long, env = "CODEGUARD_HOME", hide = true)]
    pub home: Option<PathBuf>,

    /// Print the cache update result as JSON
    #[arg(long, requires = "update_cache")]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["codeguard"]).unwrap();
        assert_eq!(cli.source, PathBuf::from(DEFAULT_SOURCE));
        assert!(!cli.update_cache);
        assert!(!cli.json);
    }

    #[test]
    fn test_update_cache_flag() {
        let cli =
            Cli::try_parse_from(["codeguard", "--update-cache", "--source", "out/skill"]).unwrap();
        assert!(cli.update_cache);
        assert_eq!(cli.source, PathBuf::from("out/skill"));
    }

    #[test]
    fn test_json_requires_update_cache() {
        assert!(Cli::try_parse_from(["codeguard", "--json"]).is_err());
        assert!(Cli::try_parse_from(["codeguard", "--json", "--update-cache"]).is_ok());
    }
}
