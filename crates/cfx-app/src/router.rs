//! Session state and the page router.
//!
//! The router owns both the current [`Page`] and the [`Session`], and keeps
//! them in lockstep: a session exists exactly when the page is not
//! [`Page::Auth`].

use cfx_core::enums::Page;
use cfx_core::errors::CoreError;
use cfx_core::identity::Session;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Router {
    page: Page,
    session: Option<Session>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Take `auth → view`, establishing `session`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if a user is already logged in.
    pub fn login(&mut self, session: Session) -> Result<(), CoreError> {
        if let Some(current) = &self.session {
            return Err(CoreError::Validation(format!(
                "Already logged in as {}. Log out first.",
                current.label()
            )));
        }
        tracing::debug!(email = %session.email, "logged in");
        self.session = Some(session);
        self.page = Page::View;
        Ok(())
    }

    /// Move to `to`. Returns `false` when already there.
    ///
    /// Navigating to [`Page::Auth`] logs out.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` when leaving [`Page::Auth`]
    /// (only [`Self::login`] may do that) or when the page graph has no such
    /// edge.
    pub fn navigate(&mut self, to: Page) -> Result<bool, CoreError> {
        let from = self.page;
        if from == to {
            return Ok(false);
        }
        if from == Page::Auth || !from.can_transition_to(to) {
            return Err(CoreError::InvalidTransition {
                entity_type: "page".to_string(),
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if to == Page::Auth {
            self.session = None;
        }
        tracing::debug!(%from, %to, "navigated");
        self.page = to;
        Ok(true)
    }

    /// Clear the session and return to [`Page::Auth`]. Idempotent.
    pub fn logout(&mut self) {
        self.session = None;
        self.page = Page::Auth;
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` when nobody is logged in.
    pub fn require_session(&self) -> Result<&Session, CoreError> {
        self.session
            .as_ref()
            .ok_or_else(|| CoreError::Validation("Please log in first.".to_string()))
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the page to switch to when the
    /// router is elsewhere.
    pub fn require_page(&self, expected: Page) -> Result<(), CoreError> {
        if self.page == expected {
            return Ok(());
        }
        let hint = match expected {
            Page::Auth => "log out",
            Page::Report => "run `report`",
            Page::View => "run `view`",
        };
        Err(CoreError::Validation(format!(
            "Only available on the {expected} page ({hint} first)."
        )))
    }
}
