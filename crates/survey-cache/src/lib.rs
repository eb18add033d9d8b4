//! # survey-cache
//!
//! Redis layer backing the background job queue.
//!
//! ## Example
//!
//! ```ignore
//! use survey_cache::{RedisJobQueue, RedisPool};
//! use survey_core::{Job, JobDispatcher};
//!
//! let pool = RedisPool::connect(&config.redis)?;
//! let queue = RedisJobQueue::new(pool);
//!
//! queue.dispatch(&Job::survey_responded(student_id, survey_id)).await?;
//! ```

pub mod jobs;
pub mod pool;

pub use jobs::{queue_key, RedisJobQueue, JOB_QUEUE_PREFIX};
pub use pool::{RedisPool, RedisPoolError, RedisResult, SharedRedisPool};
