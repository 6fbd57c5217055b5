//! Data models for grouped pull request search results.
//!
//! Types prefixed with `Api` are internal deserialisation targets for the
//! GraphQL search response that convert into public domain types.

use serde::{Deserialize, Serialize};

/// One pull request matched by a group's search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestSummary {
    /// Pull request title.
    pub title: String,
    /// HTML URL for linking to the pull request.
    pub url: String,
    /// Author login; `None` when the account has been deleted.
    pub author: Option<String>,
}

/// One dashboard section: a catalog entry plus its search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestGroup {
    /// Section heading from the catalog.
    pub label: String,
    /// Search filter fragment the results were matched with.
    pub filter: String,
    /// Matched pull requests in API response order.
    pub results: Vec<PullRequestSummary>,
}

/// The full page view: a repository and its groups in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// Repository identifier in `owner/name` form.
    pub repository: String,
    /// One entry per catalog group, in catalog order.
    pub groups: Vec<PullRequestGroup>,
}

/// Top-level GraphQL response envelope.
///
/// GitHub reports query-level failures with a 200 status and an `errors`
/// array, so both halves must be inspected before trusting `data`.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiGraphQlEnvelope {
    pub(super) data: Option<ApiSearchData>,
    pub(super) errors: Option<Vec<ApiGraphQlError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiGraphQlError {
    pub(super) message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiSearchData {
    pub(super) search: ApiSearchConnection,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiSearchConnection {
    pub(super) nodes: Vec<ApiSearchNode>,
}

/// A search node under the `... on PullRequest` inline fragment.
///
/// `type: ISSUE` searches can also match issues, which deserialise as empty
/// objects here; those are filtered out during conversion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSearchNode {
    pub(super) title: Option<String>,
    pub(super) url: Option<String>,
    pub(super) author: Option<ApiAuthor>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiAuthor {
    pub(super) login: Option<String>,
}

impl ApiSearchNode {
    /// Converts a node into a summary, returning `None` for non-PR nodes.
    pub(super) fn into_summary(self) -> Option<PullRequestSummary> {
        let title = self.title?;
        let url = self.url?;
        Some(PullRequestSummary {
            title,
            url,
            author: self.author.and_then(|author| author.login),
        })
    }
}
