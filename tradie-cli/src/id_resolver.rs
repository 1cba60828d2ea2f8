//! ID resolver module
//!
//! Resolves job IDs typed by the user. An exact ID always wins; otherwise
//! the input is treated as a case-insensitive prefix that must match
//! exactly one job.

use anyhow::{Result, anyhow};
use tradie_core::domain::{Client, JobId};
use tradie_state::{ClientStore, JobStore};

/// Resolve a job ID or prefix to a full job ID
///
/// # Errors
/// Returns an error if:
/// - No job matches the prefix
/// - Multiple jobs match the prefix (ambiguous)
pub fn resolve_job_id(jobs: &JobStore, id_or_prefix: &str) -> Result<JobId> {
    let input = id_or_prefix.trim();
    if jobs.contains(input) {
        return Ok(input.to_string());
    }

    let prefix = input.to_lowercase();
    let matches: Vec<&str> = jobs
        .jobs()
        .map(|job| job.id.as_str())
        .filter(|id| id.to_lowercase().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [] => Err(anyhow!("No job found with ID starting with '{}'", input)),
        [id] => Ok(id.to_string()),
        _ => Err(anyhow!(
            "Ambiguous prefix '{}' matches multiple jobs: {}",
            input,
            matches.join(", ")
        )),
    }
}

/// Resolve a client by ID or client code
pub fn resolve_client<'a>(clients: &'a ClientStore, id_or_code: &str) -> Result<&'a Client> {
    clients
        .find(id_or_code.trim())
        .ok_or_else(|| anyhow!("No client found with ID or code '{}'", id_or_code.trim()))
}
