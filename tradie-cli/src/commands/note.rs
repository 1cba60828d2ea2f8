//! Note command handlers
//!
//! Every note command acts on the selected job. Notes are addressed by the
//! index shown in `job show`, newest first.

use std::io::Write;

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use tradie_core::domain::Job;
use tradie_state::{Action, AppStore, Clock};

use crate::config::Config;
use crate::form::note_message;

/// Note subcommands
#[derive(Subcommand)]
pub enum NoteCommands {
    /// Add a note to the selected job
    Add {
        /// Note text
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },
    /// Replace the text of a note
    Edit {
        /// Note index as shown by `job show`
        index: usize,

        /// New note text
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },
    /// Delete a note
    Delete {
        /// Note index as shown by `job show`
        index: usize,
    },
}

/// Handle note commands
pub fn handle_note_command<C: Clock, W: Write>(
    command: NoteCommands,
    store: &mut AppStore<C>,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let job_id = selected_job(store)?.id.clone();

    match command {
        NoteCommands::Add { message } => {
            let message = note_message(&message.join(" "))?;
            let note = store.note(message);
            let created = note.created;
            store.dispatch(Action::AddNote(note));

            writeln!(
                out,
                "{} Added note to {} at {}",
                "✓".green(),
                job_id.cyan(),
                created
                    .with_timezone(&chrono::Local)
                    .format(&config.date_format)
            )?;
        }
        NoteCommands::Edit { index, message } => {
            check_index(selected_job(store)?, index)?;
            let message = note_message(&message.join(" "))?;
            store.dispatch(Action::UpdateNote { index, message });

            writeln!(out, "{} Updated note #{} on {}", "✓".green(), index, job_id.cyan())?;
        }
        NoteCommands::Delete { index } => {
            check_index(selected_job(store)?, index)?;
            store.dispatch(Action::DeleteNote(index));

            writeln!(out, "{} Deleted note #{} from {}", "✓".green(), index, job_id.cyan())?;
        }
    }

    Ok(())
}

fn selected_job<C: Clock>(store: &AppStore<C>) -> Result<&Job> {
    match store.jobs().selected_job() {
        Some(job) => Ok(job),
        None => bail!("No job selected. Use `job select <id>` first."),
    }
}

fn check_index(job: &Job, index: usize) -> Result<()> {
    if index >= job.notes.len() {
        bail!(
            "Job {} has no note #{} ({} note(s))",
            job.id,
            index,
            job.notes.len()
        );
    }
    Ok(())
}
