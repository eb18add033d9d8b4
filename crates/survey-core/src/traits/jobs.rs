//! Background job dispatch port

use async_trait::async_trait;

use crate::jobs::Job;

use super::RepoResult;

/// Hands jobs to a background worker
///
/// Callers that treat jobs as fire-and-forget spawn the dispatch and drop
/// its result; implementations report their own failures.
#[async_trait]
pub trait JobDispatcher: Send + Sync {
    /// Enqueue a job
    async fn dispatch(&self, job: &Job) -> RepoResult<()>;
}
