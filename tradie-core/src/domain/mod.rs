//! Core domain types
//!
//! These types are passive values. They are owned by the stores in
//! `tradie-state` and read by the presentation layer.

pub mod client;
pub mod job;
pub mod note;
pub mod sorting;
pub mod status;

pub use client::{Client, ClientId};
pub use job::{Job, JobId};
pub use note::Note;
pub use sorting::{Direction, Filters, SortBy, Sorting};
pub use status::Status;
