//! Job DTOs

use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::domain::note::Note;
use crate::domain::status::Status;

/// Request to create a new job
///
/// Every job field except `id` and `created`, which the store assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJob {
    pub name: String,
    pub status: Status,
    pub client: Client,
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl NewJob {
    pub fn new(name: impl Into<String>, client: Client) -> Self {
        Self {
            name: name.into(),
            status: Status::default(),
            client,
            description: None,
            notes: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
