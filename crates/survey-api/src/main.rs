//! Survey import API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p survey-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` if present).

use survey_common::{try_init_tracing, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    // Initialize tracing
    let env = config.as_ref().map_or(Environment::default(), |c| c.app.env);
    if let Err(e) = try_init_tracing(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Configuration loaded"
    );

    // Run the server
    if let Err(e) = survey_api::run(config).await {
        error!(error = %e, code = e.error_code(), "Server stopped");
        std::process::exit(1);
    }
}
