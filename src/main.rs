//! Prboard server entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use prboard::{
    AppState, DashboardError, OctocrabSearchGateway, PersonalAccessToken, PrboardConfig, router,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), DashboardError> {
    init_tracing();
    let config = load_config()?;

    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let gateway = OctocrabSearchGateway::for_token(&token, config.api_base())?;
    let app = router(AppState::new(Arc::new(gateway)));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|error| DashboardError::Io {
            message: format!("bind {bind_addr} failed: {error}"),
        })?;

    tracing::info!(%bind_addr, "serving pull request dashboard");

    axum::serve(listener, app)
        .await
        .map_err(|error| DashboardError::Io {
            message: error.to_string(),
        })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`DashboardError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<PrboardConfig, DashboardError> {
    PrboardConfig::load().map_err(|error| DashboardError::Configuration {
        message: error.to_string(),
    })
}
