use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use timedit::config::Config;
use timedit::constants::USAGE_ARGS;
use timedit::timestamp::truncate_to_seconds;
use timedit::utils::datetime::parse_time_input;
use timedit::{logger, ui};

/// Edit an ISO-8601 timestamp and watch its UNIX epoch value
#[derive(Parser, Debug)]
#[command(name = "timedit", version, about)]
struct Cli {
    /// Starting time, e.g. "now", "2024-01-15T10:30:00Z", "@1700000000" or "90min ago"
    #[arg(allow_hyphen_values = true)]
    time: Option<String>,

    /// Read configuration from this file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::UnknownArgument => {
            let program = std::env::args().next().unwrap_or_else(|| "timedit".to_string());
            println!("Usage: {} {}", program, USAGE_ARGS);
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    if let Err(e) = real_main(cli).await {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

async fn real_main(cli: Cli) -> Result<()> {
    if cli.generate_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = Config::load(cli.config.as_deref())?;
    if let Some(path) = logger::init(&config.logging)? {
        log::info!("Logging to {}", path.display());
    }

    let start = start_time(cli.time.as_deref())?;
    ui::run_app(start, config.ui).await
}

fn start_time(input: Option<&str>) -> Result<DateTime<Utc>> {
    let now = truncate_to_seconds(Utc::now());
    match input {
        Some(text) => Ok(parse_time_input(text, now)?),
        None => Ok(now),
    }
}
