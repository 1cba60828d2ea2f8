//! Tradie State
//!
//! In-memory state management for the Tradie Jobs tracker.
//!
//! Architecture:
//! - Stores: client records, job records with selection and the visible
//!   id sequence, and the sorting/filter criteria
//! - View: the filter and sort pipeline that derives the visible sequence
//! - AppStore: owns the stores and applies `Action`s, recomputing the view
//!   after every change that can affect it
//!
//! Invalid operations (unknown ids, no selection, out of range note
//! indices) are silent no-ops. Mutators report whether anything changed.

pub mod action;
pub mod app;
pub mod clock;
pub mod store;
pub mod text;
pub mod view;

pub use action::Action;
pub use app::AppStore;
pub use clock::{Clock, StepClock, SystemClock};
pub use store::{ClientStore, JobStore, SortingStore};
