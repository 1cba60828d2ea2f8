//! Client domain types

use serde::{Deserialize, Serialize};

pub type ClientId = String;

/// A customer that jobs are done for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    /// Short tag used as the prefix of generated job ids
    pub client_code: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Client {
    pub fn new(id: impl Into<ClientId>, client_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            client_code: client_code.into(),
            name: name.into(),
            phone: None,
            email: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
