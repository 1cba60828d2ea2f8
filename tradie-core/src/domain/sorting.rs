//! Sorting and filter criteria
//!
//! Session-wide table state. Nothing here is stored per job.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::status::Status;

/// Column the job table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Created,
    Status,
    Id,
    Name,
    Client,
}

impl SortBy {
    pub const ALL: [SortBy; 5] = [
        SortBy::Created,
        SortBy::Status,
        SortBy::Id,
        SortBy::Name,
        SortBy::Client,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Created => "created",
            SortBy::Status => "status",
            SortBy::Id => "id",
            SortBy::Name => "name",
            SortBy::Client => "client",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// Active sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorting {
    pub by: SortBy,
    pub direction: Direction,
}

impl Sorting {
    pub fn new(by: SortBy, direction: Direction) -> Self {
        Self { by, direction }
    }
}

impl Default for Sorting {
    fn default() -> Self {
        Self {
            by: SortBy::Created,
            direction: Direction::Desc,
        }
    }
}

/// Active table filters
///
/// A status or client set equal to its full universe means "no filter".
/// `client` holds client codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    pub search: String,
    pub status: BTreeSet<Status>,
    pub client: BTreeSet<String>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: Status::ALL.into_iter().collect(),
            client: BTreeSet::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSortingError {
    #[error("unknown sort column '{0}' (expected one of: created, status, id, name, client)")]
    Column(String),
    #[error("unknown sort direction '{0}' (expected asc or desc)")]
    Direction(String),
}

impl FromStr for SortBy {
    type Err = ParseSortingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        SortBy::ALL
            .into_iter()
            .find(|by| by.as_str() == lowered)
            .ok_or_else(|| ParseSortingError::Column(s.to_string()))
    }
}

impl FromStr for Direction {
    type Err = ParseSortingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Asc),
            "desc" | "descending" => Ok(Direction::Desc),
            _ => Err(ParseSortingError::Direction(s.to_string())),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sorting_is_newest_first() {
        let sorting = Sorting::default();
        assert_eq!(sorting.by, SortBy::Created);
        assert_eq!(sorting.direction, Direction::Desc);
    }

    #[test]
    fn test_default_filters_select_every_status() {
        let filters = Filters::default();
        assert!(filters.search.is_empty());
        assert_eq!(filters.status.len(), Status::ALL.len());
        assert!(filters.client.is_empty());
    }

    #[test]
    fn test_parse_sort_criteria() {
        assert_eq!("Client".parse::<SortBy>(), Ok(SortBy::Client));
        assert_eq!("asc".parse::<Direction>(), Ok(Direction::Asc));
        assert_eq!("descending".parse::<Direction>(), Ok(Direction::Desc));
        assert!(matches!(
            "price".parse::<SortBy>(),
            Err(ParseSortingError::Column(_))
        ));
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(ParseSortingError::Direction(_))
        ));
    }

    #[test]
    fn test_sorting_serializes_lowercase() {
        let json = serde_json::to_value(Sorting::new(SortBy::Name, Direction::Asc)).unwrap();
        assert_eq!(json, serde_json::json!({ "by": "name", "direction": "asc" }));
    }
}
