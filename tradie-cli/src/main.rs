//! Tradie CLI
//!
//! Interactive front end for the Tradie Jobs tracker. All state lives in
//! memory for the length of the session.

mod commands;
mod config;
mod form;
mod id_resolver;
mod render;
mod seed;
mod session;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use clap::builder::BoolishValueParser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tradie_state::{Action, AppStore};

use config::{Config, DEFAULT_DATE_FORMAT, DEFAULT_PROMPT};

#[derive(Parser)]
#[command(name = "tradie")]
#[command(about = "Tradie Jobs: track clients, jobs and notes", long_about = None)]
struct Cli {
    /// Load the demo client list at start-up
    #[arg(
        long,
        env = "TRADIE_SEED_CLIENTS",
        default_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    seed_clients: bool,

    /// strftime pattern for timestamps
    #[arg(long, env = "TRADIE_DATE_FORMAT", default_value = DEFAULT_DATE_FORMAT)]
    date_format: String,

    /// Emit ANSI colours
    #[arg(
        long,
        env = "TRADIE_COLOR",
        default_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    color: bool,

    /// Prompt shown in interactive sessions
    #[arg(long, env = "TRADIE_PROMPT", default_value = DEFAULT_PROMPT)]
    prompt: String,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with table output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tradie_cli=warn,tradie_state=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        seed_demo_clients: cli.seed_clients,
        date_format: cli.date_format,
        color: cli.color,
        prompt: cli.prompt,
    };
    config.validate().context("Invalid configuration")?;

    if !config.color {
        colored::control::set_override(false);
    }

    let mut store = AppStore::new();
    if config.seed_demo_clients {
        store.dispatch(Action::AddAllClients(seed::demo_clients()));
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();

    session::run(&mut store, &config, stdin.lock(), &mut stdout, interactive)
}
