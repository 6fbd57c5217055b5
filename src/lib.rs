//! Prboard library crate serving a grouped pull request dashboard.
//!
//! The library wraps Octocrab to fan a fixed catalog of GitHub search
//! queries out over the GraphQL API, assemble the grouped results into a
//! page view, and render that view as an HTML page behind an axum route.

pub mod config;
pub mod github;
pub mod render;
pub mod server;

pub use config::PrboardConfig;
pub use github::{
    CATALOG, DashboardError, DashboardView, GroupSpec, OctocrabSearchGateway,
    PersonalAccessToken, PullRequestDashboard, PullRequestGroup, PullRequestSummary,
    RepositoryLocator, SearchGateway,
};
pub use server::{AppState, router};
