//! # CLI Argument Definitions
//!
//! Flags for the generator. The three path flags are optional so that values coming from
//! the environment or a settings file are only overridden when a flag is actually passed.

use clap::{ArgAction, Parser};
use matgen_domain::RequestOverrides;
use matgen_logger::LevelFilter;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "matsim-config-generator")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Writes a MATSim config.xml for the given network, plans and output paths")]
pub struct Cli {
    /// Input xml network [default: network.xml]
    #[arg(short, long, value_name = "PATH")]
    pub network: Option<String>,

    /// Input xml plans [default: plans.xml]
    #[arg(short, long, value_name = "PATH")]
    pub plans: Option<String>,

    /// Output simulation directory [default: ./output]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Settings file (TOML, JSON or YAML) with `network`, `plans` and `output` keys
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Wait for a line on stdin before exiting
    #[arg(short, long)]
    pub interactive: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write rolling log files into this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write the log files as JSON lines
    #[arg(long, requires = "log_dir")]
    pub log_json: bool,
}

impl Cli {
    /// Values passed explicitly on the command line.
    #[must_use]
    pub fn overrides(&self) -> RequestOverrides {
        RequestOverrides {
            network: self.network.clone(),
            plans: self.plans.clone(),
            output: self.output.clone(),
        }
    }

    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_leaves_everything_unset() {
        let cli = Cli::try_parse_from(["matsim-config-generator"]).unwrap();
        assert_eq!(cli.overrides(), RequestOverrides::default());
        assert!(!cli.interactive);
        assert_eq!(cli.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn test_short_and_long_aliases() {
        let short =
            Cli::try_parse_from(["bin", "-n", "net.xml", "-p", "plan.xml", "-o", "/tmp/out"])
                .unwrap();
        let long = Cli::try_parse_from([
            "bin",
            "--network",
            "net.xml",
            "--plans",
            "plan.xml",
            "--output",
            "/tmp/out",
        ])
        .unwrap();

        assert_eq!(short.overrides(), long.overrides());
        assert_eq!(short.overrides().resolve().output, "/tmp/out");
    }

    #[test]
    fn test_empty_values_are_accepted() {
        let cli = Cli::try_parse_from(["bin", "--output", ""]).unwrap();
        assert_eq!(cli.output.as_deref(), Some(""));
    }

    #[test]
    fn test_verbosity_maps_to_levels() {
        let cli = Cli::try_parse_from(["bin", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::DEBUG);
        let cli = Cli::try_parse_from(["bin", "-vvvvv"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::TRACE);
    }

    #[test]
    fn test_log_json_requires_log_dir() {
        let err = Cli::try_parse_from(["bin", "--log-json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from(["bin", "--log-dir", "logs", "--log-json"]).unwrap();
        assert!(cli.log_json);
    }

    #[test]
    fn test_unknown_flag_is_a_usage_error() {
        let err = Cli::try_parse_from(["bin", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
