//! Integration test utilities for the survey import service
//!
//! This crate provides in-memory ports and helpers for running end-to-end
//! tests against the REST API.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
