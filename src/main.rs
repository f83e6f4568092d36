// Copyright (c) 2025 Botboard. All rights reserved.

mod config;
mod consts;
mod environment;
mod events;
mod export;
mod feed;
mod logging;
mod refresher;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::feed::{AnalyticsFeed, FeedClient};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::ui::dashboard::updaters::apply_overview_to_targets;
use crate::ui::targets::TextTargets;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::{error::Error, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Trailing window for conversation history, in days
        #[arg(long, value_name = "DAYS")]
        days: Option<u32>,

        /// Override the analytics API base URL
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Run without the terminal UI, logging events to the console
        #[arg(long)]
        headless: bool,

        /// Disable the dashboard background color
        #[arg(long)]
        no_background: bool,
    },
    /// Fetch the overview counters once and write them as a CSV report
    Export {
        /// Output file. Defaults to bot_report_<date>.csv
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Override the analytics API base URL
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },
    /// Clear the saved dashboard configuration
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("BOTBOARD_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            days,
            base_url,
            headless,
            no_background,
        } => {
            let config = Config::load_from_file(&config_path).unwrap_or_default();
            let time_range = days.unwrap_or(config.default_time_range_days);
            let base_url = base_url.or(config.base_url);

            let session = setup_session(environment, base_url, time_range);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background).await
            }
        }
        Command::Export { output, base_url } => {
            let config = Config::load_from_file(&config_path).unwrap_or_default();
            run_export(environment, base_url.or(config.base_url), output).await
        }
        Command::ClearConfig => {
            println!("Clearing dashboard configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// One-shot export: fetch the overview counters and write the CSV report.
async fn run_export(
    environment: Environment,
    base_url: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let client = match base_url {
        Some(url) => FeedClient::with_base_url(environment, url),
        None => FeedClient::new(environment),
    };

    let overview = client.overview().await.map_err(|e| {
        eprintln!("Export failed: could not fetch the overview feed.");
        e
    })?;

    let mut targets = TextTargets::overview_page();
    apply_overview_to_targets(&mut targets, &overview);

    let path = output.unwrap_or_else(|| export::default_export_path(Local::now().date_naive()));
    export::write_counters_csv(&targets, &path)?;
    println!("Report written to {}", path.display());
    Ok(())
}
