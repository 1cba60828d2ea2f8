//! Job command handlers
//!
//! Listing, creating, selecting and deleting jobs, and changing the status
//! of the selected job.

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use colored::*;
use tradie_core::domain::Status;
use tradie_state::{Action, AppStore, Clock};

use crate::config::Config;
use crate::form::NewJobForm;
use crate::id_resolver::resolve_job_id;
use crate::render::{colorize_status, print_job_details, print_job_table};

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// List visible jobs in table order
    List {
        /// Print the visible jobs as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new job
    New {
        /// Job title
        #[arg(default_value = "")]
        name: String,

        /// Client ID or client code
        #[arg(short, long, default_value = "")]
        client: String,

        /// Initial status
        #[arg(short, long, default_value = "scheduled")]
        status: Status,

        /// Longer description of the work
        #[arg(short, long)]
        description: Option<String>,

        /// Note to attach; repeat for several notes
        #[arg(short, long = "note")]
        notes: Vec<String>,
    },
    /// Select a job for note and status changes
    Select {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Show the selected job, or the given one
    Show {
        /// Job ID or unambiguous prefix
        id: Option<String>,

        /// Print the job as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a job
    Delete {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Change the status of the selected job
    Status {
        status: Status,
    },
}

/// Handle job commands
pub fn handle_job_command<C: Clock, W: Write>(
    command: JobCommands,
    store: &mut AppStore<C>,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    match command {
        JobCommands::List { json } => list_jobs(store, json, out),
        JobCommands::New {
            name,
            client,
            status,
            description,
            notes,
        } => {
            let form = NewJobForm {
                name,
                client,
                status,
                description,
                notes,
            };
            create_job(store, form, out)
        }
        JobCommands::Select { id } => select_job(store, &id, out),
        JobCommands::Show { id, json } => show_job(store, id.as_deref(), json, config, out),
        JobCommands::Delete { id } => delete_job(store, &id, out),
        JobCommands::Status { status } => update_status(store, status, out),
    }
}

fn list_jobs<C: Clock, W: Write>(store: &AppStore<C>, json: bool, out: &mut W) -> Result<()> {
    if json {
        let jobs: Vec<_> = store
            .jobs()
            .visible_jobs()
            .iter()
            .filter_map(|id| store.jobs().get(id))
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&jobs)?)?;
        return Ok(());
    }

    print_job_table(store, out)?;
    Ok(())
}

fn create_job<C: Clock, W: Write>(
    store: &mut AppStore<C>,
    form: NewJobForm,
    out: &mut W,
) -> Result<()> {
    let new_job = form.validate(store)?;
    store.dispatch(Action::AddJob(new_job));
    let id = store
        .jobs()
        .newest_id()
        .context("Job store is empty after creating a job")?
        .to_string();

    writeln!(out, "{} Created job {}", "✓".green(), id.cyan())?;
    Ok(())
}

fn select_job<C: Clock, W: Write>(store: &mut AppStore<C>, id: &str, out: &mut W) -> Result<()> {
    let id = resolve_job_id(store.jobs(), id)?;
    store.dispatch(Action::SetSelectedJob(id.clone()));

    writeln!(out, "Selected job {}", id.cyan())?;
    Ok(())
}

fn show_job<C: Clock, W: Write>(
    store: &AppStore<C>,
    id: Option<&str>,
    json: bool,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let job = match id {
        Some(id) => {
            let id = resolve_job_id(store.jobs(), id)?;
            store
                .jobs()
                .get(&id)
                .with_context(|| format!("Job {} disappeared while resolving", id))?
        }
        None => match store.jobs().selected_job() {
            Some(job) => job,
            None => bail!("No job selected. Use `job select <id>` first."),
        },
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(job)?)?;
    } else {
        print_job_details(job, config, out)?;
    }
    Ok(())
}

fn delete_job<C: Clock, W: Write>(store: &mut AppStore<C>, id: &str, out: &mut W) -> Result<()> {
    let id = resolve_job_id(store.jobs(), id)?;
    store.dispatch(Action::DeleteJob(id.clone()));

    writeln!(out, "{} Deleted job {}", "✓".green(), id.cyan())?;
    Ok(())
}

fn update_status<C: Clock, W: Write>(
    store: &mut AppStore<C>,
    status: Status,
    out: &mut W,
) -> Result<()> {
    let Some(id) = store.jobs().selected_id().map(str::to_string) else {
        bail!("No job selected. Use `job select <id>` first.");
    };
    store.dispatch(Action::UpdateStatus(status));

    writeln!(out, "Job {} is now {}", id.cyan(), colorize_status(status, 0))?;
    Ok(())
}
