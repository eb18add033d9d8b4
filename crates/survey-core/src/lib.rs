//! # survey-core
//!
//! Domain layer containing entities, job payloads, port traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, queue, web framework).

pub mod entities;
pub mod error;
pub mod jobs;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Member, NewSurveyResponse, SurveyResponse};
pub use error::DomainError;
pub use jobs::{GamificationActivity, Job, JobEnvelope};
pub use traits::{JobDispatcher, MemberRepository, RepoResult, SurveyResponseRepository};
