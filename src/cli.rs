//! CLI argument parsing using clap v4

use clap::{Parser, Subcommand};

/// persona-radar - GitHub career persona engine
///
/// Reads a GitHub account export (profile, owned and starred repositories)
/// and derives developer personas, a skill radar, interest clusters and
/// persona-tagged project cards.
#[derive(Parser, Debug)]
#[command(name = "persona-radar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the full profile document for an account export
    Analyze {
        /// Input JSON file, or '-' for stdin
        input: String,

        /// Path to configuration file
        #[arg(short, long, env = "PERSONA_RADAR_CONFIG")]
        config: Option<String>,

        /// Write the document to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the JSON document
        #[arg(long)]
        pretty: bool,

        /// Reference date for account age (RFC 3339 or YYYY-MM-DD, default: now)
        #[arg(long, value_name = "DATE")]
        as_of: Option<String>,

        /// Hide a persona by id (repeatable)
        #[arg(long = "hide", value_name = "ID")]
        hide: Vec<String>,

        /// Always include the easter-egg persona
        #[arg(long)]
        easter_egg: bool,
    },

    /// Print raw and normalized category scores as JSON
    Score {
        /// Input JSON file, or '-' for stdin
        input: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List the persona categories
    Categories {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version and build information
    Version,

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long, env = "PERSONA_RADAR_CONFIG")]
        config: Option<String>,
    },

    /// Write a commented default configuration file
    Init {
        /// Where to create the file (default: ~/.persona-radar/config.toml)
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long, env = "PERSONA_RADAR_CONFIG")]
        config: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::parse_from(["persona-radar", "analyze", "me.json"]);
        match cli.command {
            Commands::Analyze { input, output, pretty, as_of, hide, easter_egg, .. } => {
                assert_eq!(input, "me.json");
                assert!(output.is_none());
                assert!(!pretty);
                assert!(as_of.is_none());
                assert!(hide.is_empty());
                assert!(!easter_egg);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_analyze_with_options() {
        let cli = Cli::parse_from([
            "persona-radar",
            "analyze",
            "-",
            "--pretty",
            "--as-of",
            "2024-05-01",
            "--hide",
            "ml",
            "--hide",
            "mobile",
            "--easter-egg",
            "-o",
            "out.json",
        ]);
        match cli.command {
            Commands::Analyze { input, output, pretty, as_of, hide, easter_egg, .. } => {
                assert_eq!(input, "-");
                assert_eq!(output.as_deref(), Some("out.json"));
                assert!(pretty);
                assert_eq!(as_of.as_deref(), Some("2024-05-01"));
                assert_eq!(hide, vec!["ml", "mobile"]);
                assert!(easter_egg);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_analyze_requires_input() {
        assert!(Cli::try_parse_from(["persona-radar", "analyze"]).is_err());
    }

    #[test]
    fn test_score_command() {
        let cli = Cli::parse_from(["persona-radar", "score", "in.json", "--pretty"]);
        match cli.command {
            Commands::Score { input, pretty } => {
                assert_eq!(input, "in.json");
                assert!(pretty);
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_categories_json() {
        let cli = Cli::parse_from(["persona-radar", "categories", "--json"]);
        assert!(matches!(cli.command, Commands::Categories { json: true }));
    }

    #[test]
    fn test_verbose_flags() {
        let cli = Cli::parse_from(["persona-radar", "-vv", "version"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::parse_from(["persona-radar", "categories", "--quiet"]);
        assert!(cli.quiet);
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["persona-radar", "config", "init", "--force"]);
        match cli.command {
            Commands::Config {
                subcommand: ConfigSubcommand::Init { path, force },
            } => {
                assert!(path.is_none());
                assert!(force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }
}
