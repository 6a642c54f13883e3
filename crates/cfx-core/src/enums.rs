//! Status enums and page states for CrowdFix.
//!
//! `IssueStatus` serializes in kebab-case (`"in-progress"`) to match the
//! backend wire format. `Page` is the view router's state machine and exposes
//! `allowed_next_states()` to enforce valid transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories offered to reporters. Not enforced: any non-blank string is a
/// valid category and its casing is kept as typed.
pub const SUGGESTED_CATEGORIES: [&str; 4] = ["Pothole", "Garbage", "Streetlight Outage", "Other"];

// ---------------------------------------------------------------------------
// IssueStatus
// ---------------------------------------------------------------------------

/// Status of a reported issue.
///
/// ```text
/// submitted → in-progress → resolved
/// ```
///
/// Only `submitted` is produced locally. The other values arrive from the
/// backend or from seed data; no transition is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    #[default]
    Submitted,
    InProgress,
    Resolved,
}

impl IssueStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// The screen currently shown by the view router.
///
/// ```text
/// auth → view ⇄ report
/// view → auth
/// report → auth
/// ```
///
/// `auth → view` is only taken through login or signup; the router rejects a
/// plain navigation out of `auth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Auth,
    Report,
    View,
}

impl Page {
    /// Valid next states from the current state. Staying on the same page is
    /// always allowed and not listed.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Auth => &[Self::View],
            Self::View => &[Self::Report, Self::Auth],
            Self::Report => &[Self::View, Self::Auth],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self == next || self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Report => "report",
            Self::View => "view",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
