//! Identity wrappers for repository coordinates and credentials.

use super::error::DashboardError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, DashboardError> {
        if value.is_empty() {
            return Err(DashboardError::InvalidRepository { segment: "owner" });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, DashboardError> {
        if value.is_empty() {
            return Err(DashboardError::InvalidRepository { segment: "name" });
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::MissingToken` when the supplied string is
    /// blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, DashboardError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DashboardError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Validated repository coordinates taken from the page route.
///
/// The locator names the repository to search; the API host queried is a
/// deployment-wide setting carried by the gateway, not per repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a repository locator from owner and repository name strings.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidRepository` when owner or name is
    /// empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, DashboardError> {
        let validated_owner = RepositoryOwner::new(owner)?;
        let repository = RepositoryName::new(repo)?;

        Ok(Self {
            owner: validated_owner,
            repository,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// The `owner/name` identifier used in search scopes and page copy.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.as_str(), self.repository.as_str())
    }
}
