//! persona-radar - GitHub career persona engine
//!
//! Entry point for the `persona-radar` binary.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use persona_radar::cli::{Cli, Commands, ConfigSubcommand};
use persona_radar::config::{self, RadarConfig};
use persona_radar::error::{Error, Result};
use persona_radar::logging;
use persona_radar::persona::{apply_customization, catalog, Customization, ProfileEngine, StackPool};
use persona_radar::version;
use persona_radar::{parse_as_of, AnalysisInput};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    // Commands that need no configuration get minimal logging
    match cli.command {
        Commands::Version => {
            version::print_version();
            Ok(())
        }
        Commands::Categories { json } => {
            logging::init_simple(simple_level(cli.verbose, cli.quiet))?;
            print_categories(json)
        }
        Commands::Config { subcommand } => {
            logging::init_simple(simple_level(cli.verbose, cli.quiet))?;
            handle_config_command(subcommand)
        }
        Commands::Score { input, pretty } => {
            logging::init_simple(simple_level(cli.verbose, cli.quiet))?;
            let input = AnalysisInput::load(&input)?;
            let report = ProfileEngine::new().scores(&input.as_profile_input());
            emit(&report, pretty, None)
        }
        Commands::Analyze {
            input,
            config,
            output,
            pretty,
            as_of,
            hide,
            easter_egg,
        } => {
            let cfg = RadarConfig::load(config.as_deref())?;
            let _log_guards = logging::init_logging(&cfg.logging, cli.verbose, cli.quiet)?;

            let build = version::build_info();
            debug!(version = %build.full_version(), "Starting analysis");

            let as_of = match as_of.as_deref() {
                Some(value) => parse_as_of(value)?,
                None => Utc::now(),
            };

            // CLI flags extend what the configuration asks for
            let mut custom: Customization = cfg.customization.to_customization();
            custom.hidden_personas.extend(hide);
            custom.show_easter_egg |= easter_egg;

            let input = AnalysisInput::load(&input)?;
            let profile_input = input.as_profile_input();

            let engine = ProfileEngine::new();
            let mut doc = engine.compute(&profile_input, as_of);
            apply_customization(&engine, &mut doc, &custom, &profile_input, as_of);

            info!(
                login = %doc.profile.login,
                personas = doc.personas.len(),
                projects = doc.projects.len(),
                clusters = doc.clusters.len(),
                "Analysis complete"
            );

            let target = output.or(cfg.output.file).map(PathBuf::from);
            emit(&doc, pretty || cfg.output.pretty, target)
        }
    }
}

fn simple_level(verbose: u8, quiet: bool) -> tracing::Level {
    match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::WARN,
        (false, 1) => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Serialize `value` as JSON to a file or stdout.
fn emit<T: Serialize>(value: &T, pretty: bool, target: Option<PathBuf>) -> Result<()> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');

    match target {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| Error::IoWrite {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            fs::write(&path, json).map_err(|e| Error::IoWrite {
                path: path.clone(),
                source: e,
            })?;
            info!(path = %path.display(), "Document written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(json.as_bytes())?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn print_categories(json: bool) -> Result<()> {
    let categories = catalog::all();
    if json {
        return emit(&categories, true, None);
    }

    println!("{:<10} {:<28} {:<8} {}", "ID", "TITLE", "STACK", "NOTES");
    for category in categories {
        let stack = match category.stack {
            StackPool::Fixed(_) => "fixed",
            StackPool::Derived => "derived",
        };
        let notes = if category.is_reserved() {
            "easter egg, never auto-activated"
        } else {
            ""
        };
        println!("{:<10} {:<28} {:<8} {}", category.id, category.title, stack, notes);
    }
    Ok(())
}

/// Handle configuration subcommands
fn handle_config_command(subcommand: ConfigSubcommand) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show { config } => {
            let cfg = RadarConfig::load(config.as_deref())?;
            print!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            let written = config::init_config(path.as_deref(), force)?;
            println!("Configuration file created: {}", written.display());
        }
        ConfigSubcommand::Validate { config } => {
            RadarConfig::load(config.as_deref())?;
            println!("Configuration is valid.");
        }
    }

    Ok(())
}
