//! Note domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamped annotation on a job
///
/// Notes have no identifier of their own. Within a job they are addressed
/// by position, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub message: String,
    pub created: DateTime<Utc>,
}

impl Note {
    pub fn new(message: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            created,
        }
    }
}
