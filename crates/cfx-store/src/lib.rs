//! # cfx-store
//!
//! The in-memory issue store.
//!
//! Issues are kept in a single `Vec` ordered by upvote count, highest first.
//! Every mutation re-sorts the whole collection with a stable sort, so issues
//! with equal counts keep their previous relative order. New issues go in at
//! the head before the re-sort, which places them first among their peers.
//!
//! The full re-sort is `O(n log n)` per write. The collection holds at most a
//! few hundred issues for the lifetime of one shell session, so an
//! incrementally maintained order (max-heap, indexed skip list) is not needed.

mod seed;

pub use seed::demo_issues;

use cfx_core::entities::Issue;
use cfx_core::errors::CoreError;
use cfx_core::ids::{PREFIX_ISSUE, generate_id};

/// Ordered, in-memory collection of issues.
#[derive(Debug, Clone, Default)]
pub struct IssueStore {
    issues: Vec<Issue>,
}

impl IssueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed data, applying the store ordering.
    #[must_use]
    pub fn with_issues(issues: impl IntoIterator<Item = Issue>) -> Self {
        let mut store = Self {
            issues: issues.into_iter().collect(),
        };
        store.resort();
        store
    }

    /// Insert at the head, then re-sort. No duplicate-id check is made.
    pub fn add(&mut self, issue: Issue) {
        tracing::debug!(id = %issue.id, upvotes = issue.upvotes, "adding issue");
        self.issues.insert(0, issue);
        self.resort();
    }

    /// Increment the matching issue's upvote count by one and re-sort.
    ///
    /// Returns the new count, or `None` when no issue has this id (the store
    /// is left untouched).
    pub fn upvote(&mut self, id: &str) -> Option<u32> {
        let Some(issue) = self.issues.iter_mut().find(|issue| issue.id == id) else {
            tracing::debug!(id, "upvote ignored: no such issue");
            return None;
        };
        issue.upvotes = issue.upvotes.saturating_add(1);
        let upvotes = issue.upvotes;
        self.resort();
        Some(upvotes)
    }

    /// Owned snapshot of the current ordering. Later mutations do not show up
    /// in a snapshot already taken.
    #[must_use]
    pub fn list(&self) -> Vec<Issue> {
        self.issues.clone()
    }

    /// Borrowed view of the current ordering.
    #[must_use]
    pub fn as_slice(&self) -> &[Issue] {
        &self.issues
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Allocate an issue id not held by any stored issue.
    ///
    /// Issues are never removed, so an id unused now is never reused later.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Other` if the random source fails.
    pub fn next_id(&self) -> Result<String, CoreError> {
        loop {
            let id = generate_id(PREFIX_ISSUE)?;
            if !self.contains(&id) {
                return Ok(id);
            }
            tracing::debug!(%id, "issue id collision, drawing again");
        }
    }

    fn resort(&mut self) {
        // `sort_by` is stable: ties keep their prior relative order.
        self.issues.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
    }
}
