//! Grouped pull request search against the GitHub GraphQL API.
//!
//! This module wraps Octocrab to run one search per catalog group, validate
//! repository coordinates and tokens, and map failures into user-friendly
//! variants so that callers can surface precise errors without exposing
//! Octocrab internals.

pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use catalog::{CATALOG, GroupSpec};
pub use dashboard::PullRequestDashboard;
pub use error::DashboardError;
pub use gateway::{OctocrabSearchGateway, SearchGateway};
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::{DashboardView, PullRequestGroup, PullRequestSummary};
