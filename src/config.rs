//! Application configuration loaded from CLI, environment, and files.
//!
//! Values merge from command-line arguments, environment variables, and
//! configuration files using ortho-config's layered approach, with the
//! following precedence (lowest to highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.prboard.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `PRBOARD_TOKEN`, or legacy `GITHUB_PAT` /
//!    `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--token`/`-t`, `--bind-addr`,
//!    `--api-base`

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::DashboardError;

#[cfg(test)]
mod tests;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Dashboard configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `PRBOARD_TOKEN`, `GITHUB_PAT`, `GITHUB_TOKEN`, or `--token`: GitHub
///   access token used for the GraphQL search
/// - `PRBOARD_BIND_ADDR` or `--bind-addr`: listen address for the server
/// - `PRBOARD_API_BASE` or `--api-base`: GitHub API base URL (Enterprise
///   hosts, mock servers)
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PRBOARD",
    discovery(
        dotfile_name = ".prboard.toml",
        config_file_name = "prboard.toml",
        app_name = "prboard"
    )
)]
pub struct PrboardConfig {
    /// GitHub access token for the search API.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `PRBOARD_TOKEN`, or legacy `GITHUB_PAT` /
    ///   `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Socket address the server listens on (defaults to `127.0.0.1:8080`).
    pub bind_addr: Option<String>,

    /// GitHub API base URL (defaults to `https://api.github.com`).
    pub api_base: Option<String>,
}

impl PrboardConfig {
    /// Resolves the token from configuration or the legacy environment
    /// variables.
    ///
    /// For backward compatibility with deployments of the original
    /// dashboard, if no token is provided via `PRBOARD_TOKEN`, the CLI, or a
    /// configuration file, this method falls back to reading `GITHUB_PAT`
    /// and then `GITHUB_TOKEN` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingToken`] when no token source
    /// provides a value.
    pub fn resolve_token(&self) -> Result<String, DashboardError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_PAT").ok())
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(DashboardError::MissingToken)
    }

    /// Returns the configured bind address or the default.
    #[must_use]
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Returns the configured API base URL or the public GitHub API.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }
}
