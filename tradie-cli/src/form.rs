//! Form validation
//!
//! Checks user input before anything is dispatched. Failures are reported
//! as field errors and never reach the stores.

use thiserror::Error;
use tradie_core::domain::{Client, Status};
use tradie_core::dto::job::NewJob;
use tradie_state::{AppStore, Clock};

/// A single invalid field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("A job title is required")]
    NameRequired,
    #[error("You must select a client")]
    ClientRequired,
    #[error("A note cannot be empty")]
    NoteRequired,
    #[error("A client code is required")]
    CodeRequired,
    #[error("A client name is required")]
    ClientNameRequired,
    #[error("Client code '{0}' is already in use")]
    CodeTaken(String),
}

/// Every field error found in one submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.fields))]
pub struct FormError {
    pub fields: Vec<FieldError>,
}

fn join_messages(fields: &[FieldError]) -> String {
    let messages: Vec<String> = fields.iter().map(ToString::to_string).collect();
    messages.join("; ")
}

impl From<FieldError> for FormError {
    fn from(field: FieldError) -> Self {
        Self {
            fields: vec![field],
        }
    }
}

/// Input for creating a job
#[derive(Debug, Clone, Default)]
pub struct NewJobForm {
    pub name: String,
    /// Client id or client code
    pub client: String,
    pub status: Status,
    pub description: Option<String>,
    /// Notes in the order they were entered
    pub notes: Vec<String>,
}

impl NewJobForm {
    /// Validate the form and build the job draft
    ///
    /// Notes are stamped in entry order and stored newest first.
    pub fn validate<C: Clock>(self, store: &AppStore<C>) -> Result<NewJob, FormError> {
        let mut fields = Vec::new();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            fields.push(FieldError::NameRequired);
        }

        let client = store.clients().find(self.client.trim()).cloned();
        if client.is_none() {
            fields.push(FieldError::ClientRequired);
        }

        let mut messages = Vec::with_capacity(self.notes.len());
        for note in &self.notes {
            match note_message(note) {
                Ok(message) => messages.push(message),
                Err(field) => {
                    if !fields.contains(&field) {
                        fields.push(field);
                    }
                }
            }
        }

        match client {
            Some(client) if fields.is_empty() => {
                let mut notes: Vec<_> = messages
                    .into_iter()
                    .map(|message| store.note(message))
                    .collect();
                notes.reverse();

                Ok(NewJob {
                    name,
                    status: self.status,
                    client,
                    description: self
                        .description
                        .map(|d| d.trim().to_string())
                        .filter(|d| !d.is_empty()),
                    notes,
                })
            }
            _ => Err(FormError { fields }),
        }
    }
}

/// Input for registering a client
#[derive(Debug, Clone, Default)]
pub struct NewClientForm {
    pub code: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl NewClientForm {
    /// Validate the form and build a client with the given id
    pub fn validate<C: Clock>(self, store: &AppStore<C>, id: String) -> Result<Client, FormError> {
        let mut fields = Vec::new();

        let code = self.code.trim().to_uppercase();
        if code.is_empty() {
            fields.push(FieldError::CodeRequired);
        } else if store.clients().client_codes().contains(&code) {
            fields.push(FieldError::CodeTaken(code.clone()));
        }

        let name = self.name.trim().to_string();
        if name.is_empty() {
            fields.push(FieldError::ClientNameRequired);
        }

        if !fields.is_empty() {
            return Err(FormError { fields });
        }

        Ok(Client {
            id,
            client_code: code,
            name,
            phone: non_blank(self.phone),
            email: non_blank(self.email),
        })
    }
}

/// Trim a note message, rejecting blank ones
pub fn note_message(raw: &str) -> Result<String, FieldError> {
    let message = raw.trim();
    if message.is_empty() {
        return Err(FieldError::NoteRequired);
    }
    Ok(message.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
