use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};

mod client;
mod commands;
mod constants;
mod domain;
mod intl;
mod logging;
mod refund;
mod state;
mod theme;
mod tui;
mod ui;
mod utils;
mod view;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::{
    client::{LedgerClient, LedgerSource},
    intl::Locale,
    logging::LogTarget,
    state::{App, AppConfig},
    view::{DetailsMode, render_plain},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r"
 _          _                 _
| | ___  __| | __ _  ___ _ __| | ___ _ __  ___
| |/ _ \/ _` |/ _` |/ _ \ '__| |/ _ \ '_ \/ __|
| |  __/ (_| | (_| |  __/ |  | |  __/ | | \__ \
|_|\___|\__,_|\__, |\___|_|  |_|\___|_| |_|___/
              |___/
";

/// ledgerlens - Terminal viewer for collective transaction ledgers
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Ledger JSON file or http(s) URL (defaults to the last one opened)
    #[arg(short, long, global = true)]
    data: Option<String>,

    /// Locale for labels and amounts (en-US, fr-FR, de-DE)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Start with transaction details collapsed
    #[arg(long, global = true)]
    closed: bool,

    /// Write logs to stderr instead of the log file
    #[arg(long, global = true)]
    log_stderr: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the details of one transaction and exit
    Show {
        /// Transaction UUID or a unique prefix of it
        id: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the configuration path and effective configuration
    Config,
    /// Display version with ASCII art
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    logging::init(if cli.log_stderr {
        LogTarget::Stderr
    } else {
        LogTarget::File
    });

    let stored = AppConfig::load();
    let config = session_config(&cli, stored.clone())?;

    match &cli.command {
        Some(Commands::Version) => {
            println!("{LOGO}");
            println!("ledgerlens v{VERSION}");
            println!("A terminal viewer for collective transaction ledgers");
            Ok(())
        }
        Some(Commands::Config) => {
            println!("{}", AppConfig::config_path()?.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Some(Commands::Show { id, json }) => show(&cli, config, id, *json).await,
        None => run_tui(&cli, stored, config).await,
    }
}

/// Applies command-line overrides for this session only.
fn session_config(cli: &Cli, mut config: AppConfig) -> Result<AppConfig> {
    if let Some(tag) = &cli.locale {
        config.locale = tag
            .parse::<Locale>()
            .map_err(|e| eyre!("Invalid --locale '{tag}': {e}"))?;
    }
    if cli.closed {
        config.start_open = false;
    }
    Ok(config)
}

fn resolve_source(cli: &Cli, config: &AppConfig) -> Result<LedgerSource> {
    cli.data
        .as_deref()
        .or(config.last_source.as_deref())
        .map(LedgerSource::parse)
        .ok_or_else(|| eyre!("No ledger given. Pass --data <file|url>"))
}

fn start_mode(config: &AppConfig) -> DetailsMode {
    if config.start_open {
        DetailsMode::Open
    } else {
        DetailsMode::Closed
    }
}

async fn load_app(cli: &Cli, config: AppConfig) -> Result<App> {
    let source = resolve_source(cli, &config)?;
    let ledger = LedgerClient::new(config.http_config())
        .load(&source)
        .await
        .wrap_err_with(|| format!("Failed to load ledger from {source}"))?;
    let mode = start_mode(&config);
    Ok(App::new(ledger, Some(source), config, mode))
}

async fn show(cli: &Cli, config: AppConfig, id: &str, json: bool) -> Result<()> {
    let mut app = load_app(cli, config).await?;
    app.data.select_id(id)?;
    let details = app
        .selected_details()
        .ok_or_else(|| eyre!("Transaction '{id}' not found"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        println!("{}", render_plain(&details));
    }
    Ok(())
}

async fn run_tui(cli: &Cli, mut stored: AppConfig, config: AppConfig) -> Result<()> {
    let mut app = load_app(cli, config).await?;

    if let Some(source) = &app.data.source {
        stored.last_source = Some(source.to_string());
        if let Err(e) = stored.save() {
            tracing::warn!("Could not remember ledger source: {e}");
        }
    }

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal);
    tui::restore()?;
    result
}
