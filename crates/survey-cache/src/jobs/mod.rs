//! Background job queue backed by Redis lists.

mod queue;

pub use queue::{queue_key, RedisJobQueue, JOB_QUEUE_PREFIX};
