//! Command-line interface definitions for mlc-migrate.
//!
//! Uses clap's derive API for type-safe argument parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{SOURCE_CONFIG_FILE, TARGET_CONFIG_FILE};

/// Convert mlc_config.json to .linkspector.yml format.
///
/// Reads a markdown-link-check JSON configuration and prints the equivalent
/// linkspector YAML configuration. Anything that can't be migrated safely is
/// reported on stderr.
#[derive(Parser, Debug)]
#[command(name = "mlc-migrate")]
#[command(author, version, about, long_about = None)]
#[command(after_help = format!("Example: mlc-migrate {SOURCE_CONFIG_FILE} > {TARGET_CONFIG_FILE}"))]
pub struct Cli {
    /// Path to the input mlc_config.json file.
    pub input_file: PathBuf,

    /// Write the YAML to this file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Don't print conversion warnings.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Increase log verbosity.
    ///
    /// Can be specified multiple times:
    /// -v    = info level
    /// -vv   = debug level
    /// -vvv  = trace level
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_basic() {
        let cli = Cli::parse_from(["mlc-migrate", "mlc_config.json"]);
        assert_eq!(cli.input_file, PathBuf::from("mlc_config.json"));
        assert!(cli.output.is_none());
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "mlc-migrate",
            "-o",
            ".linkspector.yml",
            "-q",
            "-vv",
            "config/mlc.json",
        ]);

        assert_eq!(cli.input_file, PathBuf::from("config/mlc.json"));
        assert_eq!(cli.output, Some(PathBuf::from(".linkspector.yml")));
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_help_shows_example_file_names() {
        use clap::CommandFactory;

        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("Example: mlc-migrate mlc_config.json > .linkspector.yml"));
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["mlc-migrate"]).is_err());
    }

    #[test]
    fn test_cli_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["mlc-migrate", "a.json", "b.json"]).is_err());
    }
}
