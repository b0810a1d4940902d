//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use vigil_core::auth::AuthAction;
use vigil_core::roster::PageSize;
use vigil_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "vigil")]
#[command(version)]
#[command(about = "Night Vigilance roster dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Dashboard,

    /// Print the roster table
    Roster {
        /// Only show rows matching this term
        #[arg(short, long, default_value = "")]
        search: String,

        /// Rows to show: 5, 10, 15 or 20 (default from config)
        #[arg(short, long, value_parser = parse_page_size)]
        entries: Option<PageSize>,

        /// Read the roster from this TOML file instead of the configured source
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Log in against the auth API
    Login(CredentialArgs),

    /// Register a new account against the auth API
    Register(CredentialArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Args)]
struct CredentialArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "VIGIL_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write a commented default config file
    Init,
}

fn parse_page_size(value: &str) -> Result<PageSize, String> {
    let n: u32 = value
        .parse()
        .map_err(|_| format!("invalid number {value:?}"))?;
    PageSize::try_from(n)
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Dashboard) {
        // Config commands must work even when the existing file is broken.
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Commands::Dashboard => {
            let (config, _log_guard) = load_config()?;
            commands::dashboard::run(&config).await
        }
        Commands::Roster {
            search,
            entries,
            file,
        } => {
            let (config, _log_guard) = load_config()?;
            commands::roster::run(&config, &search, entries, file)
        }
        Commands::Login(args) => {
            let (config, _log_guard) = load_config()?;
            commands::auth::run(&config, AuthAction::Login, args.email, args.password).await
        }
        Commands::Register(args) => {
            let (config, _log_guard) = load_config()?;
            commands::auth::run(&config, AuthAction::Register, args.email, args.password).await
        }
    }
}

/// Loads config and starts file logging. Logging failures are not fatal.
fn load_config() -> Result<(config::Config, Option<logging::WorkerGuard>)> {
    let config = config::Config::load().context("load config")?;
    let guard = match logging::init(&config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };
    Ok((config, guard))
}
