//! Service context - dependency container for services
//!
//! Holds the ports the import use case talks to, plus the connection pools
//! backing them when running against real infrastructure.

use std::sync::Arc;

use survey_cache::SharedRedisPool;
use survey_core::traits::{JobDispatcher, MemberRepository, SurveyResponseRepository};
use survey_db::PgPool;

/// Service context containing all dependencies
///
/// Pools are optional so the context can be assembled from in-memory ports.
#[derive(Clone)]
pub struct ServiceContext {
    // Connection pools
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,

    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    survey_response_repo: Arc<dyn SurveyResponseRepository>,

    // Jobs
    job_dispatcher: Arc<dyn JobDispatcher>,
}

impl ServiceContext {
    /// Create a new service context from its ports
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        survey_response_repo: Arc<dyn SurveyResponseRepository>,
        job_dispatcher: Arc<dyn JobDispatcher>,
    ) -> Self {
        Self {
            pool: None,
            redis_pool: None,
            member_repo,
            survey_response_repo,
            job_dispatcher,
        }
    }

    /// Create a builder
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Health ===

    /// Check that a database connection can be acquired
    pub async fn database_healthy(&self) -> bool {
        match &self.pool {
            Some(pool) => pool.acquire().await.is_ok(),
            None => false,
        }
    }

    /// Check that Redis answers a PING
    pub async fn redis_healthy(&self) -> bool {
        match &self.redis_pool {
            Some(pool) => pool.health_check().await.is_ok(),
            None => false,
        }
    }

    // === Repositories ===

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the survey response repository
    pub fn survey_response_repo(&self) -> &dyn SurveyResponseRepository {
        self.survey_response_repo.as_ref()
    }

    // === Jobs ===

    /// Get a shared handle to the job dispatcher, for use in spawned tasks
    pub fn job_dispatcher(&self) -> Arc<dyn JobDispatcher> {
        Arc::clone(&self.job_dispatcher)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.is_some())
            .field("redis_pool", &self.redis_pool.is_some())
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    survey_response_repo: Option<Arc<dyn SurveyResponseRepository>>,
    job_dispatcher: Option<Arc<dyn JobDispatcher>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn survey_response_repo(mut self, repo: Arc<dyn SurveyResponseRepository>) -> Self {
        self.survey_response_repo = Some(repo);
        self
    }

    pub fn job_dispatcher(mut self, dispatcher: Arc<dyn JobDispatcher>) -> Self {
        self.job_dispatcher = Some(dispatcher);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required port is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        let mut ctx = ServiceContext::new(
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.survey_response_repo
                .ok_or_else(|| ServiceError::validation("survey_response_repo is required"))?,
            self.job_dispatcher
                .ok_or_else(|| ServiceError::validation("job_dispatcher is required"))?,
        );
        ctx.pool = self.pool;
        ctx.redis_pool = self.redis_pool;

        Ok(ctx)
    }
}
