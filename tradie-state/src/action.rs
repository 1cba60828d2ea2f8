//! Actions accepted by `AppStore::dispatch`

use serde::{Deserialize, Serialize};
use tradie_core::domain::{Client, JobId, Note, Sorting, Status};
use tradie_core::dto::job::NewJob;

/// Every state mutation the presentation layer can request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    AddAllClients(Vec<Client>),
    AddJob(NewJob),
    DeleteJob(JobId),
    SetSelectedJob(JobId),
    AddNote(Note),
    UpdateNote { index: usize, message: String },
    DeleteNote(usize),
    UpdateStatus(Status),
    SetSorting(Sorting),
    SetSearchFilter(String),
    SetStatusFilters(Vec<Status>),
    SetClientFilters(Vec<String>),
}

impl Action {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddAllClients(_) => "add_all_clients",
            Action::AddJob(_) => "add_job",
            Action::DeleteJob(_) => "delete_job",
            Action::SetSelectedJob(_) => "set_selected_job",
            Action::AddNote(_) => "add_note",
            Action::UpdateNote { .. } => "update_note",
            Action::DeleteNote(_) => "delete_note",
            Action::UpdateStatus(_) => "update_status",
            Action::SetSorting(_) => "set_sorting",
            Action::SetSearchFilter(_) => "set_search_filter",
            Action::SetStatusFilters(_) => "set_status_filters",
            Action::SetClientFilters(_) => "set_client_filters",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serializes_tagged() {
        let json = serde_json::to_value(Action::DeleteNote(2)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "DeleteNote", "payload": 2 }));

        let json = serde_json::to_value(Action::UpdateNote {
            index: 0,
            message: "Called client".to_string(),
        })
        .unwrap();
        assert_eq!(json["payload"]["message"], "Called client");
    }
}
