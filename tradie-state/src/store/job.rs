//! Job Store
//!
//! Owns every job, the current selection and the materialized sequence of
//! visible job ids.
//!
//! Per-job lifecycle: created, then any number of status and note
//! mutations, then deleted. Status and note mutations always target the
//! selected job.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tradie_core::domain::{Job, JobId, Note, Status};
use tradie_core::dto::job::NewJob;

#[derive(Debug, Clone, Default)]
pub struct JobStore {
    /// Next counter value for generated ids; never decremented
    next_counter: u32,
    jobs: HashMap<JobId, Job>,
    /// Job ids in creation order
    order: Vec<JobId>,
    selected: Option<JobId>,
    visible: Vec<JobId>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a job, assigning its id and creation time
    ///
    /// The client is taken as given; checking that it exists is up to the
    /// caller.
    pub fn add_job(&mut self, new_job: NewJob, created: DateTime<Utc>) -> JobId {
        let id = Job::format_id(&new_job.client, self.next_counter);
        self.next_counter += 1;

        let job = Job {
            id: id.clone(),
            name: new_job.name,
            status: new_job.status,
            client: new_job.client,
            description: new_job.description,
            notes: new_job.notes,
            created,
        };

        tracing::debug!("Job created: {} for client: {}", job.id, job.client.id);

        self.jobs.insert(id.clone(), job);
        self.order.push(id.clone());
        id
    }

    /// Remove a job, dropping it from the selection and the visible list
    pub fn delete_job(&mut self, id: &str) -> bool {
        if self.jobs.remove(id).is_none() {
            tracing::debug!("Ignoring delete of unknown job {}", id);
            return false;
        }

        self.order.retain(|existing| existing != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.visible.retain(|existing| existing != id);

        tracing::debug!("Job {} deleted", id);
        true
    }

    /// Select a job; unknown ids leave the selection untouched
    pub fn set_selected_job(&mut self, id: &str) -> bool {
        if !self.jobs.contains_key(id) {
            tracing::debug!("Ignoring selection of unknown job {}", id);
            return false;
        }
        if self.selected.as_deref() == Some(id) {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    /// Replace the visible id sequence wholesale
    pub fn set_visible_jobs(&mut self, ids: Vec<JobId>) -> bool {
        if self.visible == ids {
            return false;
        }
        self.visible = ids;
        true
    }

    /// Add a note to the front of the selected job's notes
    pub fn add_note(&mut self, note: Note) -> bool {
        match self.selected_job_mut() {
            Some(job) => {
                job.notes.insert(0, note);
                true
            }
            None => false,
        }
    }

    pub fn update_note(&mut self, index: usize, message: impl Into<String>) -> bool {
        let Some(job) = self.selected_job_mut() else {
            return false;
        };
        match job.notes.get_mut(index) {
            Some(note) => {
                note.message = message.into();
                true
            }
            None => {
                tracing::debug!("Ignoring update of note {} on job {}", index, job.id);
                false
            }
        }
    }

    pub fn delete_note(&mut self, index: usize) -> bool {
        let Some(job) = self.selected_job_mut() else {
            return false;
        };
        if index >= job.notes.len() {
            tracing::debug!("Ignoring delete of note {} on job {}", index, job.id);
            return false;
        }
        job.notes.remove(index);
        true
    }

    pub fn update_status(&mut self, status: Status) -> bool {
        let Some(job) = self.selected_job_mut() else {
            return false;
        };
        if job.status == status {
            return false;
        }
        tracing::debug!("Job {} status: {} -> {}", job.id, job.status, status);
        job.status = status;
        true
    }

    // =============================================================================
    // Read accessors
    // =============================================================================

    /// All jobs in creation order
    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.order.iter().filter_map(|id| self.jobs.get(id))
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.jobs.contains_key(id)
    }

    /// ID of the most recently created job still in the store
    pub fn newest_id(&self) -> Option<&str> {
        self.order.last().map(String::as_str)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_job(&self) -> Option<&Job> {
        self.selected.as_ref().and_then(|id| self.jobs.get(id))
    }

    pub fn visible_jobs(&self) -> &[JobId] {
        &self.visible
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    fn selected_job_mut(&mut self) -> Option<&mut Job> {
        match self.selected.as_ref() {
            Some(id) => self.jobs.get_mut(id),
            None => {
                tracing::debug!("Ignoring job mutation with no job selected");
                None
            }
        }
    }
}
