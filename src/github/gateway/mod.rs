//! Gateways for searching pull requests through Octocrab.
//!
//! The trait-based design enables mocking in the orchestrator tests while
//! the Octocrab implementation handles real HTTP requests.

mod client;
mod error_mapping;
mod search;

pub use search::OctocrabSearchGateway;

use async_trait::async_trait;

use crate::github::error::DashboardError;
use crate::github::models::PullRequestSummary;

/// Gateway that can run a pull request search against GitHub.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Runs one search string and returns matched pull requests in API
    /// response order.
    async fn search_pull_requests(
        &self,
        query: &str,
    ) -> Result<Vec<PullRequestSummary>, DashboardError>;
}
