//! Babybet CLI
//!
//! Command-line interface for scoring baby-shower prediction games.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use babybet_cli::commands::{leaderboard, questions, score, scrabble, validate, CommandContext};
use babybet_cli::config::Config;
use babybet_cli::errors::{error_response, exit_code};
use babybet_cli::output::{colors, JsonFormatter, OutputFormat};
use babybet_common::{init_from_config, AppConfig};

/// Output format for CLI commands
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output
    Json,
    /// Table output
    Table,
    /// Tab-separated lines without headers
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "babybet")]
#[command(author, version, about = "Baby shower prediction game scoring")]
#[command(long_about = "Scores baby shower prediction games.\n\n\
    Reads a game snapshot (JSON or YAML) and prints per-participant scores, the leaderboard, \
    or a consistency report. Lower scores are better.")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(short = 'o', long, global = true, value_enum)]
    format: Option<CliOutputFormat>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Application config file layered over config/default.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Per-participant score breakdown of a game
    #[command(alias = "s")]
    Score {
        /// Game snapshot file (.json, .yaml or .yml)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,
    },

    /// Public leaderboard of a game
    #[command(alias = "l", alias = "lb")]
    Leaderboard {
        /// Game snapshot file (.json, .yaml or .yml)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Number of positions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Check a game snapshot for inconsistencies
    Validate {
        /// Game snapshot file (.json, .yaml or .yml)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,
    },

    /// Scrabble letter value of one or more words
    Scrabble {
        /// Words to score
        #[arg(value_name = "WORD", required = true)]
        words: Vec<String>,
    },

    /// List the default questions of a new game
    Questions,

    /// Show or change CLI preferences
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Reset configuration to defaults
    Reset,
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "babybet", &mut std::io::stdout());
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format_flag = cli.format;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, format_flag);
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Print a failure to stderr, as an error report when output is JSON
fn report_error(err: &anyhow::Error, format_flag: Option<CliOutputFormat>) {
    let format = format_flag
        .map(OutputFormat::from)
        .or_else(|| Config::load().ok().map(|c| c.output_format));

    if format == Some(OutputFormat::Json) {
        if let Ok(json) = JsonFormatter::format(&error_response(err)) {
            eprintln!("{}", json);
            return;
        }
    }
    eprintln!("{} {:#}", colors::error("Error:"), err);
}

fn run(cli: Cli) -> Result<()> {
    // Handle completions early (doesn't need config)
    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let app_config = AppConfig::load(cli.config.as_deref())?;

    let mut telemetry = app_config.telemetry.clone();
    if cli.verbose {
        telemetry.log_level = "debug".to_string();
    }
    init_from_config(&telemetry)?;

    let mut config = Config::load()?;
    if let Some(format) = cli.format {
        config.output_format = format.into();
    }
    if cli.no_color {
        config.colored = false;
    }
    if !config.colored {
        colored::control::set_override(false);
    }

    tracing::debug!(format = %config.output_format, "Loaded CLI preferences");

    let mut ctx = CommandContext::new(config, app_config);

    match cli.command {
        Commands::Score { snapshot } => score::run(&ctx, &snapshot),
        Commands::Leaderboard { snapshot, limit } => leaderboard::show(&ctx, &snapshot, limit),
        Commands::Validate { snapshot } => validate::run(&ctx, &snapshot),
        Commands::Scrabble { words } => scrabble::run(&ctx, &words),
        Commands::Questions => questions::list(&ctx),

        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => {
                println!("{}", colors::bold("Current configuration:"));
                println!("  Output Format: {}", ctx.config.output_format);
                println!("  Colored: {}", ctx.config.colored);
                println!("  Decimals: {}", ctx.config.decimals);
                println!(
                    "  Leaderboard Limit: {}",
                    ctx.config
                        .leaderboard_limit
                        .map(|l| l.to_string())
                        .unwrap_or_else(|| "all".to_string())
                );
                println!("  Show Warnings: {}", ctx.config.show_warnings);
                println!("  Config File: {}", Config::config_file()?.display());
                Ok(())
            }
            Some(ConfigCommands::Set { key, value }) => {
                ctx.config.set(&key, &value)?;
                println!("{} {} = {}", colors::success("Saved"), key, value);
                Ok(())
            }
            Some(ConfigCommands::Get { key }) => {
                match ctx.config.get(&key) {
                    Some(value) => println!("{}", value),
                    None => println!("{}", colors::dim("(not set)")),
                }
                Ok(())
            }
            Some(ConfigCommands::Reset) => {
                ctx.config.reset()?;
                println!("{}", colors::success("Configuration reset to defaults"));
                Ok(())
            }
        },

        Commands::Completions { .. } => Ok(()),
    }
}
