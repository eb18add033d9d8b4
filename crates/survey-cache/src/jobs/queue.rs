//! Redis list based job queue.
//!
//! Jobs are pushed as JSON envelopes onto `jobs:<queue>` where the queue is
//! the first segment of the job name.

use async_trait::async_trait;
use redis::AsyncCommands;

use survey_core::{DomainError, Job, JobDispatcher, JobEnvelope, RepoResult};

use crate::pool::{RedisPool, RedisResult};

/// Prefix for all job queue keys
pub const JOB_QUEUE_PREFIX: &str = "jobs";

/// Redis key of the list backing a job's queue
#[must_use]
pub fn queue_key(job: &Job) -> String {
    format!("{JOB_QUEUE_PREFIX}:{}", job.queue())
}

/// Job dispatcher pushing onto Redis lists
#[derive(Clone)]
pub struct RedisJobQueue {
    pool: RedisPool,
}

impl RedisJobQueue {
    /// Create a new job queue
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Push a job, returning the queue length afterwards
    pub async fn push(&self, job: &Job) -> RedisResult<u64> {
        let key = queue_key(job);
        let payload = serde_json::to_string(&JobEnvelope::new(job)?)?;

        let mut conn = self.pool.get().await?;
        let length: u64 = conn.rpush(&key, &payload).await?;

        tracing::debug!(
            queue = %key,
            job = job.name(),
            length = length,
            "Job enqueued"
        );

        Ok(length)
    }
}

#[async_trait]
impl JobDispatcher for RedisJobQueue {
    async fn dispatch(&self, job: &Job) -> RepoResult<()> {
        self.push(job).await.map(|_| ()).map_err(|e| {
            tracing::warn!(job = job.name(), error = %e, "Failed to enqueue job");
            DomainError::QueueError(e.to_string())
        })
    }
}
