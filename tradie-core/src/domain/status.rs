//! Job status

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle stage of a job
///
/// Variants are declared in lifecycle order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Status {
    #[default]
    Scheduled,
    Active,
    Invoicing,
    ToPriced,
    Completed,
}

impl Status {
    /// Every status, in lifecycle order
    pub const ALL: [Status; 5] = [
        Status::Scheduled,
        Status::Active,
        Status::Invoicing,
        Status::ToPriced,
        Status::Completed,
    ];

    /// Human readable label, also used when sorting by status
    pub fn label(self) -> &'static str {
        match self {
            Status::Scheduled => "Scheduled",
            Status::Active => "Active",
            Status::Invoicing => "Invoicing",
            Status::ToPriced => "To Priced",
            Status::Completed => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status '{0}' (expected one of: scheduled, active, invoicing, to-priced, completed)")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    /// Accepts the label, the variant name, or a dash/underscore separated
    /// form, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        Status::ALL
            .into_iter()
            .find(|status| format!("{:?}", status).to_lowercase() == normalized)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_variants() {
        assert_eq!("scheduled".parse::<Status>(), Ok(Status::Scheduled));
        assert_eq!("Active".parse::<Status>(), Ok(Status::Active));
        assert_eq!("to-priced".parse::<Status>(), Ok(Status::ToPriced));
        assert_eq!("To Priced".parse::<Status>(), Ok(Status::ToPriced));
        assert_eq!("TO_PRICED".parse::<Status>(), Ok(Status::ToPriced));
        assert!("finished".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn test_label_round_trips_through_parse() {
        for status in Status::ALL {
            assert_eq!(status.label().parse::<Status>(), Ok(status));
        }
    }

    #[test]
    fn test_default_is_scheduled() {
        assert_eq!(Status::default(), Status::Scheduled);
    }
}
