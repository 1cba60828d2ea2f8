//! Data Transfer Objects
//!
//! Shapes handed to the stores when creating records. They carry
//! everything except the fields the store assigns itself.

pub mod job;
