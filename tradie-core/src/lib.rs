//! Tradie Core
//!
//! Core types for the Tradie Jobs tracker.
//!
//! This crate contains:
//! - Domain types: Client, Job, Note, Status and the sorting/filter criteria
//! - DTOs: Input shapes used when creating records

pub mod domain;
pub mod dto;
