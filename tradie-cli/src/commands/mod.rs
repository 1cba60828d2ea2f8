//! Commands module
//!
//! Defines all session commands and their handlers.

mod client;
mod job;
mod note;
mod view;

pub use client::ClientCommands;
pub use job::JobCommands;
pub use note::NoteCommands;
pub use view::ViewCommands;

use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tradie_state::{AppStore, Clock};

use crate::config::Config;

/// One line of session input
#[derive(Parser)]
#[command(name = "tradie", no_binary_name = true, disable_version_flag = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level session commands
#[derive(Subcommand)]
pub enum Commands {
    /// Job management
    Job {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Notes on the selected job
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// Client management
    Client {
        #[command(subcommand)]
        command: ClientCommands,
    },
    /// Sorting, search and filters for the job table
    View {
        #[command(subcommand)]
        command: ViewCommands,
    },
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle a session command
///
/// Routes the command to the appropriate handler module.
pub fn handle_command<C: Clock, W: Write>(
    command: Commands,
    store: &mut AppStore<C>,
    config: &Config,
    out: &mut W,
) -> Result<Flow> {
    match command {
        Commands::Job { command } => job::handle_job_command(command, store, config, out)?,
        Commands::Note { command } => note::handle_note_command(command, store, config, out)?,
        Commands::Client { command } => client::handle_client_command(command, store, out)?,
        Commands::View { command } => view::handle_view_command(command, store, out)?,
        Commands::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
