//! View/Filter/Sort Engine
//!
//! Derives the visible job id sequence from the full job set. The pipeline
//! runs in a fixed order: text search, status filter, client filter, sort.
//! It is recomputed from scratch on every change, never incrementally.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tradie_core::domain::{Direction, Filters, Job, JobId, SortBy, Sorting, Status};

use crate::text::{compare_text, contains_ignore_case};

/// Compute the visible job ids
///
/// `jobs` is expected in creation order; the sort is stable, so jobs that
/// compare equal keep that order. `client_universe` is the set of every
/// known client code.
pub fn visible_job_ids<'a>(
    jobs: impl IntoIterator<Item = &'a Job>,
    filters: &Filters,
    sorting: &Sorting,
    client_universe: &BTreeSet<String>,
) -> Vec<JobId> {
    let lowered_search = filters.search.to_lowercase();
    let filter_status = !is_full_status_set(&filters.status);
    let filter_client = &filters.client != client_universe;

    let mut visible: Vec<&Job> = jobs
        .into_iter()
        .filter(|job| lowered_search.is_empty() || matches_search(job, &lowered_search))
        .filter(|job| !filter_status || filters.status.contains(&job.status))
        .filter(|job| !filter_client || filters.client.contains(&job.client.client_code))
        .collect();

    visible.sort_by(|a, b| compare_jobs(a, b, sorting));

    tracing::trace!(
        "View recomputed: {} visible, sorted by {} {}",
        visible.len(),
        sorting.by,
        sorting.direction
    );

    visible.into_iter().map(|job| job.id.clone()).collect()
}

/// Compare two jobs under the active sort criterion
///
/// Each column has its own baseline for "ascending": `created` runs oldest
/// first, every text column runs in reverse lexical order. `Desc` flips
/// the baseline.
pub fn compare_jobs(a: &Job, b: &Job, sorting: &Sorting) -> Ordering {
    let ordering = baseline(a, b, sorting.by);
    match sorting.direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    }
}

fn baseline(a: &Job, b: &Job, by: SortBy) -> Ordering {
    match by {
        SortBy::Created => a.created.cmp(&b.created),
        SortBy::Status => compare_text(a.status.label(), b.status.label()).reverse(),
        SortBy::Id => compare_text(&a.id, &b.id).reverse(),
        SortBy::Name => compare_text(&a.name, &b.name).reverse(),
        SortBy::Client => compare_text(&a.client.name, &b.client.name).reverse(),
    }
}

fn matches_search(job: &Job, lowered_search: &str) -> bool {
    contains_ignore_case(&job.name, lowered_search) || contains_ignore_case(&job.id, lowered_search)
}

fn is_full_status_set(statuses: &BTreeSet<Status>) -> bool {
    statuses.len() == Status::ALL.len() && Status::ALL.iter().all(|s| statuses.contains(s))
}
