//! The grouped-search orchestrator behind the dashboard page.

use futures::future;

use super::catalog::CATALOG;
use super::error::DashboardError;
use super::gateway::SearchGateway;
use super::locator::RepositoryLocator;
use super::models::{DashboardView, PullRequestGroup};


/// Fans one search per catalog group out to a gateway and assembles the
/// page view.
pub struct PullRequestDashboard<'client, Gateway>
where
    Gateway: SearchGateway + ?Sized,
{
    client: &'client Gateway,
}

impl<'client, Gateway> PullRequestDashboard<'client, Gateway>
where
    Gateway: SearchGateway + ?Sized,
{
    /// Create a new dashboard facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Loads grouped open pull requests for the target repository.
    ///
    /// All catalog searches run concurrently; the first failure aborts the
    /// whole load, so the view is always complete or absent. On success the
    /// group list mirrors the catalog in length and order, including groups
    /// that matched nothing.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway, including GitHub
    /// authentication errors and network problems.
    pub async fn load(&self, locator: &RepositoryLocator) -> Result<DashboardView, DashboardError> {
        let groups = future::try_join_all(CATALOG.iter().map(|spec| async move {
            let results = self
                .client
                .search_pull_requests(&spec.search_query(locator))
                .await?;
            Ok::<PullRequestGroup, DashboardError>(PullRequestGroup {
                label: spec.label.to_owned(),
                filter: spec.filter.to_owned(),
                results,
            })
        }))
        .await?;

        Ok(DashboardView {
            repository: locator.full_name(),
            groups,
        })
    }
}
