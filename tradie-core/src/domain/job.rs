//! Job domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::Client;
use super::note::Note;
use super::status::Status;

pub type JobId = String;

/// A unit of work for one client
///
/// `id` and `created` are assigned by the job store and never change.
/// `client` is a snapshot taken when the job was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub name: String,
    pub status: Status,
    pub client: Client,
    pub description: Option<String>,
    /// Newest first
    pub notes: Vec<Note>,
    pub created: DateTime<Utc>,
}

impl Job {
    /// Builds the id for the `counter`-th job created for `client`
    ///
    /// The counter is zero padded to three digits and widens past 999.
    pub fn format_id(client: &Client, counter: u32) -> JobId {
        format!("{}-{:03}", client.client_code, counter)
    }
}
