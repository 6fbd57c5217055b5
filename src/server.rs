//! HTTP surface serving the dashboard page.
//!
//! One route matters: `GET /{owner}/{name}` renders the grouped pull
//! request page for that repository. A `/healthz` probe rounds out the
//! serving surface. Errors surface as plain-text responses with a status
//! that distinguishes caller mistakes from upstream failures.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use crate::github::{DashboardError, PullRequestDashboard, RepositoryLocator, SearchGateway};
use crate::render;

#[cfg(test)]
mod tests;

/// Shared application state: the search gateway built once at startup.
#[derive(Clone)]
pub struct AppState {
    gateway: Arc<dyn SearchGateway>,
}

impl AppState {
    /// Creates state around a shared search gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn SearchGateway>) -> Self {
        Self { gateway }
    }
}

/// Builds the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/{owner}/{name}", get(dashboard_page))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Error wrapper mapping dashboard failures onto HTTP statuses.
struct PageError(DashboardError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DashboardError::InvalidRepository { .. } => StatusCode::BAD_REQUEST,
            DashboardError::MissingToken
            | DashboardError::Configuration { .. }
            | DashboardError::InvalidUrl(_)
            | DashboardError::Template { .. }
            | DashboardError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            DashboardError::Authentication { .. }
            | DashboardError::Api { .. }
            | DashboardError::Network { .. } => StatusCode::BAD_GATEWAY,
        };
        (status, self.0.to_string()).into_response()
    }
}

async fn dashboard_page(
    State(state): State<AppState>,
    Path((owner, name)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    tracing::info!(%owner, %name, "loading pull request dashboard");

    let locator = RepositoryLocator::from_owner_repo(&owner, &name).map_err(PageError)?;
    let dashboard = PullRequestDashboard::new(state.gateway.as_ref());
    let view = dashboard.load(&locator).await.map_err(|error| {
        tracing::error!(repository = %locator.full_name(), %error, "dashboard load failed");
        PageError(error)
    })?;

    let page = render::dashboard_page(&view).map_err(PageError)?;
    Ok(Html(page))
}
