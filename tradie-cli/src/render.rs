//! Rendering
//!
//! Draws the job table, the job detail panel and the client list.

use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};
use colored::*;
use tradie_core::domain::{Client, Job, Status};
use tradie_state::{AppStore, Clock};

use crate::config::Config;

const ID_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 11;
const NAME_WIDTH: usize = 32;

/// Print the visible jobs in their current order
pub fn print_job_table<C: Clock>(
    store: &AppStore<C>,
    out: &mut impl Write,
) -> io::Result<()> {
    let jobs = store.jobs();
    let visible = jobs.visible_jobs();

    if visible.is_empty() {
        if jobs.is_empty() {
            writeln!(out, "{}", "No jobs yet. Create one with `job new`.".yellow())?;
        } else {
            writeln!(
                out,
                "{}",
                format!("No jobs match the current filters ({} hidden).", jobs.len()).yellow()
            )?;
        }
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        format!(
            "  {:<STATUS_WIDTH$} {:<ID_WIDTH$} {:<NAME_WIDTH$} {}",
            "STATUS", "ID", "NAME", "CLIENT"
        )
        .bold()
    )?;

    let selected = jobs.selected_id();
    for id in visible {
        let Some(job) = jobs.get(id) else {
            continue;
        };
        let marker = if selected == Some(id.as_str()) {
            "▸".cyan()
        } else {
            " ".normal()
        };
        writeln!(
            out,
            "{} {} {:<ID_WIDTH$} {:<NAME_WIDTH$} {}",
            marker,
            colorize_status(job.status, STATUS_WIDTH),
            job.id,
            truncate(&job.name, NAME_WIDTH),
            job.client.name.dimmed()
        )?;
    }

    writeln!(
        out,
        "{}",
        format!("{} of {} job(s) shown", visible.len(), jobs.len()).dimmed()
    )
}

/// Print the detail panel for one job
pub fn print_job_details(job: &Job, config: &Config, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", job.name.bold().blue())?;
    writeln!(out, "  ID:       {}", job.id.cyan())?;
    writeln!(out, "  Status:   {}", colorize_status(job.status, 0))?;
    writeln!(out, "  Created:  {}", format_timestamp(job.created, config))?;

    writeln!(out, "\n{}", "Client:".bold())?;
    writeln!(out, "  {}", job.client.name)?;
    if let Some(phone) = &job.client.phone {
        writeln!(out, "  Phone:    {}", phone)?;
    }
    if let Some(email) = &job.client.email {
        writeln!(out, "  Email:    {}", email)?;
    }

    if let Some(description) = &job.description {
        writeln!(out, "\n{}", "Description:".bold())?;
        writeln!(out, "  {}", description)?;
    }

    writeln!(out, "\n{}", "Notes:".bold())?;
    if job.notes.is_empty() {
        writeln!(out, "  {}", "No notes.".dimmed())?;
    }
    for (index, note) in job.notes.iter().enumerate() {
        writeln!(
            out,
            "  {} {} {}",
            format!("#{}", index).cyan(),
            format_timestamp(note.created, config).dimmed(),
            note.message
        )?;
    }

    Ok(())
}

/// Print every client, ordered by name
pub fn print_clients(clients: &[&Client], out: &mut impl Write) -> io::Result<()> {
    if clients.is_empty() {
        writeln!(out, "{}", "No clients found.".yellow())?;
        return Ok(());
    }

    writeln!(out, "{}", format!("Found {} client(s):", clients.len()).bold())?;
    for client in clients {
        write!(out, "  {} {:<6} {}", "▸".cyan(), client.client_code.cyan(), client.name)?;
        if let Some(phone) = &client.phone {
            write!(out, "  {}", phone.dimmed())?;
        }
        if let Some(email) = &client.email {
            write!(out, "  {}", email.dimmed())?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Print the active sort criterion and filters
pub fn print_view_state<C: Clock>(store: &AppStore<C>, out: &mut impl Write) -> io::Result<()> {
    let sorting = store.sorting().sorting();
    let filters = store.sorting().filters();
    let client_universe = store.clients().client_codes();

    writeln!(out, "{}", "View:".bold())?;
    writeln!(out, "  Sort:     {} {}", sorting.by, sorting.direction)?;
    if filters.search.is_empty() {
        writeln!(out, "  Search:   {}", "(none)".dimmed())?;
    } else {
        writeln!(out, "  Search:   \"{}\"", filters.search)?;
    }

    if filters.status.len() == Status::ALL.len() {
        writeln!(out, "  Status:   {}", "all".dimmed())?;
    } else {
        let statuses: Vec<&str> = filters.status.iter().map(|s| s.label()).collect();
        writeln!(out, "  Status:   {}", statuses.join(", "))?;
    }

    if filters.client == client_universe {
        writeln!(out, "  Clients:  {}", "all".dimmed())?;
    } else {
        let codes: Vec<&str> = filters.client.iter().map(String::as_str).collect();
        writeln!(out, "  Clients:  {}", codes.join(", "))?;
    }

    Ok(())
}

/// Colorize a job status, padded to `width`
pub fn colorize_status(status: Status, width: usize) -> ColoredString {
    let label = format!("{:<width$}", status.label());
    match status {
        Status::Scheduled => label.yellow(),
        Status::Active => label.cyan(),
        Status::Invoicing => label.magenta(),
        Status::ToPriced => label.blue(),
        Status::Completed => label.green(),
    }
}

fn format_timestamp(timestamp: DateTime<Utc>, config: &Config) -> String {
    timestamp
        .with_timezone(&Local)
        .format(&config.date_format)
        .to_string()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("Fix tap", 10), "Fix tap");
        assert_eq!(truncate("Replace the hot water cylinder", 10), "Replace t…");
    }

    #[test]
    fn test_colorize_status_pads_label() {
        colored::control::set_override(false);
        assert_eq!(colorize_status(Status::Active, 8).to_string(), "Active  ");
        assert_eq!(colorize_status(Status::ToPriced, 0).to_string(), "To Priced");
    }
}
