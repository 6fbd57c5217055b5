//! Octocrab client construction for the search gateway.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::DashboardError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given token and API base URL.
///
/// # Errors
///
/// Returns `DashboardError::InvalidUrl` when the base URI cannot be parsed
/// or `DashboardError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, DashboardError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| DashboardError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| DashboardError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
