//! Octocrab implementation of the pull request search gateway.
//!
//! This module contains the GraphQL-backed search gateway and its tests.

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::error::DashboardError;
use crate::github::locator::PersonalAccessToken;
use crate::github::models::{ApiGraphQlEnvelope, ApiSearchNode, PullRequestSummary};

use super::SearchGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;


/// GraphQL document for the grouped search.
///
/// The search string travels as a variable, never interpolated into the
/// document, so filter fragments cannot break the query syntax.
const SEARCH_DOCUMENT: &str = "\
query ($query: String!) {
  search(first: 50, type: ISSUE, query: $query) {
    nodes {
      ... on PullRequest {
        title
        url
        author {
          login
        }
      }
    }
  }
}";

/// Octocrab-backed search gateway posting to `<api_base>/graphql`.
pub struct OctocrabSearchGateway {
    client: Octocrab,
}

impl OctocrabSearchGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and API base URL.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidUrl` when the base URI cannot be
    /// parsed or `DashboardError::Api` when Octocrab fails to construct a
    /// client.
    pub fn for_token(
        token: &PersonalAccessToken,
        api_base: &str,
    ) -> Result<Self, DashboardError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl SearchGateway for OctocrabSearchGateway {
    async fn search_pull_requests(
        &self,
        query: &str,
    ) -> Result<Vec<PullRequestSummary>, DashboardError> {
        tracing::debug!(search = query, "running pull request search");

        let payload = serde_json::json!({
            "query": SEARCH_DOCUMENT,
            "variables": { "query": query },
        });

        let envelope: ApiGraphQlEnvelope = self
            .client
            .graphql(&payload)
            .await
            .map_err(|error| map_octocrab_error("search", &error))?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let detail = errors
                    .into_iter()
                    .map(|error| error.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(DashboardError::Api {
                    message: format!("search failed: {detail}"),
                });
            }
        }

        let data = envelope.data.ok_or_else(|| DashboardError::Api {
            message: "search response is missing the data payload".to_owned(),
        })?;

        Ok(data
            .search
            .nodes
            .into_iter()
            .filter_map(ApiSearchNode::into_summary)
            .collect())
    }
}
