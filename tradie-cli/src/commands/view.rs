//! View command handlers
//!
//! Changes to sorting, search and filters. Each change recomputes the
//! table, which is printed straight after.

use std::io::Write;

use anyhow::Result;
use clap::Subcommand;
use tradie_core::domain::{Direction, SortBy, Sorting, Status};
use tradie_state::{Action, AppStore, Clock};

use crate::id_resolver::resolve_client;
use crate::render::{print_job_table, print_view_state};

/// View subcommands
#[derive(Subcommand)]
pub enum ViewCommands {
    /// Show the active sorting and filters
    Show,
    /// Sort the table by a column
    ///
    /// Without a direction flag, sorting by the current column flips its
    /// direction and sorting by a new column starts ascending.
    Sort {
        /// created, status, id, name or client
        by: SortBy,

        #[arg(long, conflicts_with = "desc")]
        asc: bool,

        #[arg(long)]
        desc: bool,
    },
    /// Search job names and IDs; no text clears the search
    ///
    /// Unquoted words are joined with single spaces. Quote the text to keep
    /// repeated spaces.
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Show only jobs with the given statuses
    Status {
        statuses: Vec<Status>,

        /// Show every status
        #[arg(long, conflicts_with = "statuses")]
        all: bool,
    },
    /// Show only jobs for the given clients
    Client {
        /// Client codes or IDs
        clients: Vec<String>,

        /// Show every client
        #[arg(long, conflicts_with = "clients")]
        all: bool,
    },
}

/// Handle view commands
pub fn handle_view_command<C: Clock, W: Write>(
    command: ViewCommands,
    store: &mut AppStore<C>,
    out: &mut W,
) -> Result<()> {
    match command {
        ViewCommands::Show => {
            print_view_state(store, out)?;
            return Ok(());
        }
        ViewCommands::Sort { by, asc, desc } => {
            let current = *store.sorting().sorting();
            let direction = if asc {
                Direction::Asc
            } else if desc {
                Direction::Desc
            } else if current.by == by {
                match current.direction {
                    Direction::Asc => Direction::Desc,
                    Direction::Desc => Direction::Asc,
                }
            } else {
                Direction::Asc
            };
            store.dispatch(Action::SetSorting(Sorting::new(by, direction)));
        }
        ViewCommands::Search { text } => {
            store.dispatch(Action::SetSearchFilter(text.join(" ").trim().to_string()));
        }
        ViewCommands::Status { statuses, all } => {
            let statuses = if all { Status::ALL.to_vec() } else { statuses };
            store.dispatch(Action::SetStatusFilters(statuses));
        }
        ViewCommands::Client { clients, all } => {
            let codes = if all {
                store.clients().client_codes().into_iter().collect()
            } else {
                clients
                    .iter()
                    .map(|c| resolve_client(store.clients(), c).map(|c| c.client_code.clone()))
                    .collect::<Result<Vec<_>>>()?
            };
            store.dispatch(Action::SetClientFilters(codes));
        }
    }

    print_job_table(store, out)?;
    Ok(())
}
