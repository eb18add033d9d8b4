//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use survey_cache::{RedisJobQueue, RedisPool};
use survey_common::{AppConfig, AppError, AppResult};
use survey_db::{create_pool, run_migrations, PgMemberRepository, PgSurveyResponseRepository};
use survey_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router(state.config().import.max_file_size_bytes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = survey_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_pool = RedisPool::connect(&config.redis)
        .map_err(|e| AppError::Queue(e.to_string()))?;
    let shared_redis = Arc::new(redis_pool.clone());

    // Create ports
    let member_repo = Arc::new(PgMemberRepository::new(pool.clone()));
    let survey_response_repo = Arc::new(PgSurveyResponseRepository::new(pool.clone()));
    let job_queue = Arc::new(RedisJobQueue::new(redis_pool));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .redis_pool(shared_redis)
        .member_repo(member_repo)
        .survey_response_repo(survey_response_repo)
        .job_dispatcher(job_queue)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
