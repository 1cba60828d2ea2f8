//! Interactive session
//!
//! Reads one command per line, parses it with clap and applies it to the
//! store. Errors are printed and the session carries on. Blank lines and
//! lines starting with `#` are ignored.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use thiserror::Error;
use tradie_state::{AppStore, Clock};

use crate::commands::{CommandLine, Flow, handle_command};
use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),
}

/// Run a session until `quit` or end of input
pub fn run<C: Clock, R: BufRead, W: Write>(
    store: &mut AppStore<C>,
    config: &Config,
    mut input: R,
    out: &mut W,
    interactive: bool,
) -> Result<()> {
    tracing::info!("Session started with {} client(s)", store.clients().len());

    let mut line = String::new();
    loop {
        if interactive {
            write!(out, "{}", config.prompt)?;
            out.flush()?;
        }

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read command")?;
        if read == 0 {
            break;
        }

        if execute_line(store, config, &line, out)? == Flow::Quit {
            break;
        }
    }

    tracing::info!("Session ended with {} job(s)", store.jobs().len());
    Ok(())
}

/// Parse and apply one line of input
///
/// Only failures writing to `out` are returned; command errors are
/// reported to the user.
pub fn execute_line<C: Clock, W: Write>(
    store: &mut AppStore<C>,
    config: &Config,
    line: &str,
    out: &mut W,
) -> Result<Flow> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Flow::Continue);
    }

    let words = match split_words(trimmed) {
        Ok(words) => words,
        Err(e) => {
            writeln!(out, "{} {}", "error:".red().bold(), e)?;
            return Ok(Flow::Continue);
        }
    };

    let command = match CommandLine::try_parse_from(words) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            // Covers `help` and `--help` as well as genuine parse errors
            write!(out, "{}", e.render())?;
            return Ok(Flow::Continue);
        }
    };

    match handle_command(command, store, config, out) {
        Ok(flow) => Ok(flow),
        Err(e) => {
            tracing::debug!("Command failed: {:#}", e);
            writeln!(out, "{} {:#}", "error:".red().bold(), e)?;
            Ok(Flow::Continue)
        }
    }
}

/// Split a line into words, grouping quoted text
///
/// Single and double quotes group words and may appear mid-word. There
/// are no escapes.
pub fn split_words(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(TokenizeError::UnterminatedQuote(q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration};
    use tradie_core::domain::Status;
    use tradie_state::{Action, StepClock};

    use crate::seed::demo_clients;

    fn store() -> AppStore<StepClock> {
        let clock = StepClock::new(
            DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
            Duration::minutes(1),
        );
        let mut store = AppStore::with_clock(clock);
        store.dispatch(Action::AddAllClients(demo_clients()));
        store
    }

    fn run_script(store: &mut AppStore<StepClock>, script: &str) -> String {
        colored::control::set_override(false);
        let config = Config::default();
        let mut out = Vec::new();
        run(store, &config, script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words(r#"job new "Fix tap" --client SMI"#).unwrap(),
            vec!["job", "new", "Fix tap", "--client", "SMI"]
        );
        assert_eq!(
            split_words("note add 'it''s  fine'").unwrap(),
            vec!["note", "add", "its  fine"]
        );
        assert_eq!(split_words(r#"view search """#).unwrap(), vec!["view", "search", ""]);
        assert!(split_words("   ").unwrap().is_empty());
        assert_eq!(
            split_words(r#"job new "Fix tap"#),
            Err(TokenizeError::UnterminatedQuote('"'))
        );
    }

    #[test]
    fn test_create_select_and_annotate() {
        let mut store = store();
        let output = run_script(
            &mut store,
            r#"
            job new "Fix tap" --client smi --note "Quoted $120"
            job new "Paint fence" -c BRO -s active
            job select smi
            note add Customer accepted quote
            job status completed
            job show
            "#,
        );

        assert!(output.contains("Created job SMI-000"));
        assert!(output.contains("Created job BRO-001"));
        assert!(output.contains("Selected job SMI-000"));
        assert!(output.contains("Customer accepted quote"));
        assert!(output.contains("#1"));

        let job = store.jobs().get("SMI-000").unwrap();
        assert_eq!(job.status, Status::Completed);
        assert_eq!(job.notes.len(), 2);
        assert_eq!(job.notes[0].message, "Customer accepted quote");
        assert_eq!(job.notes[1].message, "Quoted $120");
        assert_eq!(store.jobs().get("BRO-001").unwrap().status, Status::Active);
    }

    #[test]
    fn test_validation_errors_are_reported() {
        let mut store = store();
        let output = run_script(&mut store, "job new\njob new \"Fix tap\" --client XYZ\n");

        assert!(output.contains("A job title is required; You must select a client"));
        assert!(output.contains("You must select a client"));
        assert!(store.jobs().is_empty());
    }

    #[test]
    fn test_note_commands_need_selection() {
        let mut store = store();
        let output = run_script(
            &mut store,
            "job new Leak --client PAT\nnote add Bring towels\nnote delete 0\n",
        );

        assert!(output.contains("No job selected"));
        assert!(store.jobs().get("PAT-000").unwrap().notes.is_empty());
    }

    #[test]
    fn test_note_edit_and_delete_by_index() {
        let mut store = store();
        let output = run_script(
            &mut store,
            r#"
            job new Leak --client PAT --note first --note second
            job select PAT-000
            note edit 1 first, revised
            note delete 5
            note delete 0
            "#,
        );

        assert!(output.contains("has no note #5"));
        let notes = &store.jobs().get("PAT-000").unwrap().notes;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].message, "first, revised");
    }

    #[test]
    fn test_view_filters_and_sorting() {
        let mut store = store();
        run_script(
            &mut store,
            r#"
            job new "Fix tap" --client SMI
            job new "Paint fence" --client BRO
            job new "Fix gutter" --client NGU
            view search fix
            "#,
        );
        assert_eq!(store.jobs().visible_jobs(), &["NGU-002".to_string(), "SMI-000".to_string()]);

        run_script(&mut store, "view sort created --asc\n");
        assert_eq!(store.jobs().visible_jobs(), &["SMI-000".to_string(), "NGU-002".to_string()]);

        run_script(&mut store, "view search\nview client smi bro\n");
        assert_eq!(store.jobs().visible_jobs(), &["SMI-000".to_string(), "BRO-001".to_string()]);

        run_script(&mut store, "view client --all\nview status active\n");
        assert!(store.jobs().visible_jobs().is_empty());

        let output = run_script(&mut store, "view status --all\nview show\n");
        assert_eq!(store.jobs().visible_jobs().len(), 3);
        assert!(output.contains("Sort:     created asc"));
    }

    #[test]
    fn test_search_keeps_spacing_only_when_quoted() {
        let mut store = store();
        run_script(&mut store, "view search fix   tap\n");
        assert_eq!(store.sorting().filters().search, "fix tap");

        run_script(&mut store, "view search \"fix   tap\"\n");
        assert_eq!(store.sorting().filters().search, "fix   tap");
    }

    #[test]
    fn test_new_job_ids_follow_dispatched_creation() {
        let mut store = store();
        let output = run_script(
            &mut store,
            "job new \"Fix tap\" --client SMI\njob new \"Paint fence\" --client BRO\njob delete BRO-001\njob new \"Hang door\" --client PAT\n",
        );

        assert!(output.contains("Created job SMI-000"));
        assert!(output.contains("Created job BRO-001"));
        assert!(output.contains("Created job PAT-002"));
        assert_eq!(store.jobs().visible_jobs(), &["PAT-002".to_string(), "SMI-000".to_string()]);
    }

    #[test]
    fn test_sort_toggles_direction_on_same_column() {
        let mut store = store();
        run_script(&mut store, "view sort name\n");
        assert_eq!(store.sorting().sorting().by.to_string(), "name");
        assert_eq!(store.sorting().sorting().direction.to_string(), "asc");

        run_script(&mut store, "view sort name\n");
        assert_eq!(store.sorting().sorting().direction.to_string(), "desc");
    }

    #[test]
    fn test_delete_by_prefix() {
        let mut store = store();
        let output = run_script(
            &mut store,
            "job new \"Fix tap\" --client SMI\njob select SMI-000\njob delete smi-0\njob show\n",
        );

        assert!(output.contains("Deleted job SMI-000"));
        assert!(output.contains("No job selected"));
        assert!(store.jobs().is_empty());
    }

    #[test]
    fn test_add_client_then_create_job() {
        let mut store = store();
        let output = run_script(
            &mut store,
            "client add --code abc --name \"Acme Builders\"\njob new Framing --client ABC\nclient list\n",
        );

        assert!(output.contains("Added client ABC"));
        assert!(output.contains("Created job ABC-000"));
        assert!(output.contains("Acme Builders"));
        assert!(store.sorting().filters().client.contains("ABC"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut store = store();
        run_script(&mut store, "quit\njob new Ignored --client SMI\n");
        assert!(store.jobs().is_empty());
    }

    #[test]
    fn test_unknown_commands_keep_session_alive() {
        let mut store = store();
        let output = run_script(&mut store, "frobnicate\n# comment\njob new Tap --client SMI\n");

        assert!(output.contains("error"));
        assert!(output.contains("Created job SMI-000"));
    }

    #[test]
    fn test_list_json() {
        let mut store = store();
        let output = run_script(&mut store, "job new Tap --client SMI\njob list --json\n");

        assert!(output.contains("\"id\": \"SMI-000\""));
        assert!(output.contains("\"status\": \"Scheduled\""));
    }
}
