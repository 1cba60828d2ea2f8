//! Stores
//!
//! Each store owns one slice of session state and only mutates its own
//! fields. Cross-store coordination happens in `AppStore`.

pub mod client;
pub mod job;
pub mod sorting;

pub use client::ClientStore;
pub use job::JobStore;
pub use sorting::SortingStore;
