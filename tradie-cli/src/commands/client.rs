//! Client command handlers

use std::io::Write;

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use tradie_state::{Action, AppStore, Clock};
use uuid::Uuid;

use crate::form::NewClientForm;
use crate::render::print_clients;

/// Client subcommands
#[derive(Subcommand)]
pub enum ClientCommands {
    /// List all clients
    List,
    /// Register a new client
    Add {
        /// Short code used as the prefix of job IDs
        #[arg(long, default_value = "")]
        code: String,

        /// Client name
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },
}

/// Handle client commands
pub fn handle_client_command<C: Clock, W: Write>(
    command: ClientCommands,
    store: &mut AppStore<C>,
    out: &mut W,
) -> Result<()> {
    match command {
        ClientCommands::List => {
            print_clients(&store.clients().sorted_by_name(), out)?;
        }
        ClientCommands::Add {
            code,
            name,
            phone,
            email,
        } => {
            let form = NewClientForm {
                code,
                name,
                phone,
                email,
            };
            let client = form.validate(store, Uuid::new_v4().to_string())?;
            let code = client.client_code.clone();
            store.dispatch(Action::AddAllClients(vec![client]));

            writeln!(out, "{} Added client {}", "✓".green(), code.cyan())?;
        }
    }

    Ok(())
}
