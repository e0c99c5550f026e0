use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "soccer-live")]
#[command(about = "Track live soccer matches from a command script")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Print scoreboards as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let config = CliConfig::parse_from([
            "soccer-live",
            "--config",
            "soccer.toml",
            "--script",
            "final.txt",
            "--json",
        ]);
        assert_eq!(config.config, Some(PathBuf::from("soccer.toml")));
        assert_eq!(config.script, Some(PathBuf::from("final.txt")));
        assert!(config.json);
        assert!(!config.verbose);
    }

    #[test]
    fn test_defaults_read_stdin() {
        let config = CliConfig::parse_from(["soccer-live"]);
        assert!(config.config.is_none());
        assert!(config.script.is_none());
    }
}
