//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Member, NewSurveyResponse, SurveyResponse};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find the member owning the given email, if any
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>>;
}

// ============================================================================
// Survey Response Repository
// ============================================================================

#[async_trait]
pub trait SurveyResponseRepository: Send + Sync {
    /// Insert responses, silently skipping any that conflict with an
    /// existing row for the same survey and email.
    ///
    /// Returns the number of rows actually inserted.
    async fn insert_many(&self, responses: &[NewSurveyResponse]) -> RepoResult<u64>;

    /// Find all responses recorded for a survey, oldest response first
    async fn find_by_survey(&self, survey_id: Uuid) -> RepoResult<Vec<SurveyResponse>>;
}
