//! The fixed catalog of pull request groupings shown on the dashboard.
//!
//! Each entry pairs a display label with a GitHub search filter fragment.
//! The catalog is compile-time constant; the dashboard always renders one
//! section per entry, in this order, even when a group matches nothing.

use super::locator::RepositoryLocator;

/// A named search filter defining one display category of pull requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpec {
    /// Section heading shown on the page.
    pub label: &'static str,
    /// Search filter fragment appended to the repository scope.
    pub filter: &'static str,
}

impl GroupSpec {
    /// Builds the full search string for this group scoped to a repository.
    ///
    /// The clause order is fixed: repository scope, the open pull request
    /// constraint, then this group's filter fragment.
    #[must_use]
    pub fn search_query(&self, locator: &RepositoryLocator) -> String {
        format!(
            "repo:{} is:pr is:open {}",
            locator.full_name(),
            self.filter
        )
    }
}

/// The ordered groupings rendered on the dashboard page.
pub const CATALOG: [GroupSpec; 7] = [
    GroupSpec {
        label: "\u{1f916} Dependabot",
        filter: "label:dependencies",
    },
    GroupSpec {
        label: "\u{1f4dd} Drafts",
        filter: "draft:true",
    },
    GroupSpec {
        label: "\u{274c} Failing checks",
        filter: "draft:false status:failure -label:dependencies",
    },
    GroupSpec {
        label: "\u{1f6a7} Awaiting changes",
        filter: "draft:false review:changes_requested",
    },
    GroupSpec {
        label: "\u{1f440} Ready for review",
        filter: "draft:false -status:failure review:none -head:changeset-release/main -label:dependencies",
    },
    GroupSpec {
        label: "\u{1f680} Ready to merge",
        filter: "draft:false -status:failure review:approved",
    },
    GroupSpec {
        label: "\u{1f51c} Next release",
        filter: "head:changeset-release/main",
    },
];
