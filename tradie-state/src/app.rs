//! AppStore
//!
//! Owns the client, job and sorting stores and is the single writer for
//! all of them. The presentation layer holds one `AppStore`, reads through
//! its accessors, and mutates only through `dispatch`.

use tradie_core::domain::{JobId, Note};

use crate::action::Action;
use crate::clock::{Clock, SystemClock};
use crate::store::{ClientStore, JobStore, SortingStore};
use crate::view;

#[derive(Debug)]
pub struct AppStore<C: Clock = SystemClock> {
    clients: ClientStore,
    jobs: JobStore,
    sorting: SortingStore,
    clock: C,
}

impl AppStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for AppStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> AppStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clients: ClientStore::new(),
            jobs: JobStore::new(),
            sorting: SortingStore::new(),
            clock,
        }
    }

    /// Apply an action
    ///
    /// Returns true when state changed. When jobs, filters or sorting
    /// changed, the visible job sequence is recomputed before returning.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let name = action.name();
        let changed = self.reduce(action);

        if changed {
            tracing::debug!("Action {} applied", name);
        } else {
            tracing::debug!("Action {} left state unchanged", name);
        }
        changed
    }

    /// Create a job and return its generated id
    ///
    /// Same as dispatching `Action::AddJob`, for callers that need the id
    /// straight back. The CLI dispatches the action and reads the id from
    /// `JobStore::newest_id`.
    pub fn add_job(&mut self, new_job: tradie_core::dto::job::NewJob) -> JobId {
        let id = self.jobs.add_job(new_job, self.clock.now());
        self.refresh_visible();
        id
    }

    /// Build a note stamped with the store's clock
    pub fn note(&self, message: impl Into<String>) -> Note {
        Note::new(message, self.clock.now())
    }

    pub fn clients(&self) -> &ClientStore {
        &self.clients
    }

    pub fn jobs(&self) -> &JobStore {
        &self.jobs
    }

    pub fn sorting(&self) -> &SortingStore {
        &self.sorting
    }

    fn reduce(&mut self, action: Action) -> bool {
        match action {
            Action::AddAllClients(clients) => {
                if !self.clients.add_all_clients(clients) {
                    return false;
                }
                // Newly known clients start out visible
                self.sorting.set_client_filters(self.clients.client_codes());
                self.refresh_visible();
                true
            }
            Action::AddJob(new_job) => {
                self.add_job(new_job);
                true
            }
            Action::SetSelectedJob(id) => self.jobs.set_selected_job(&id),
            Action::DeleteJob(id) => self.jobs.delete_job(&id),
            Action::AddNote(note) => self.refresh_if(|jobs| jobs.add_note(note)),
            Action::UpdateNote { index, message } => {
                self.refresh_if(|jobs| jobs.update_note(index, message))
            }
            Action::DeleteNote(index) => self.refresh_if(|jobs| jobs.delete_note(index)),
            Action::UpdateStatus(status) => self.refresh_if(|jobs| jobs.update_status(status)),
            Action::SetSorting(sorting) => {
                let changed = self.sorting.set_sorting(sorting);
                self.refresh_after(changed)
            }
            Action::SetSearchFilter(search) => {
                let changed = self.sorting.set_search_filter(search);
                self.refresh_after(changed)
            }
            Action::SetStatusFilters(statuses) => {
                let changed = self.sorting.set_status_filters(statuses);
                self.refresh_after(changed)
            }
            Action::SetClientFilters(codes) => {
                let changed = self.sorting.set_client_filters(codes);
                self.refresh_after(changed)
            }
        }
    }

    fn refresh_if(&mut self, mutate: impl FnOnce(&mut JobStore) -> bool) -> bool {
        let changed = mutate(&mut self.jobs);
        self.refresh_after(changed)
    }

    fn refresh_after(&mut self, changed: bool) -> bool {
        if changed {
            self.refresh_visible();
        }
        changed
    }

    fn refresh_visible(&mut self) {
        let visible = view::visible_job_ids(
            self.jobs.jobs(),
            self.sorting.filters(),
            self.sorting.sorting(),
            &self.clients.client_codes(),
        );
        self.jobs.set_visible_jobs(visible);
    }
}
