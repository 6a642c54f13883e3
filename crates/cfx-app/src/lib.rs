//! # cfx-app
//!
//! Application state for CrowdFix: the page router and session, the report
//! draft and its submission, and list/map/AI views over the issue store.
//!
//! [`App`] is a plain value owned by the caller (the `cfx` shell loop). Every
//! operation borrows it; nothing here is global. Network collaborators are
//! passed per call through the [`TextGenerator`], [`AccountService`] and
//! [`IssueSink`] seams, so each flow runs the same with or without a
//! backend.

pub mod auth;
pub mod presentation;
pub mod report;
pub mod router;

mod error;

pub use error::AppError;
pub use presentation::Overlay;
pub use report::{DraftField, ReportDraft};
pub use router::Router;

use chrono::Utc;

use cfx_ai::TextGenerator;
use cfx_backend::{AccountService, IssueSink, RemoteIssue, SUBMIT_SUCCESS};
use cfx_config::CfxConfig;
use cfx_core::entities::{Geotag, Issue};
use cfx_core::enums::Page;
use cfx_core::errors::CoreError;
use cfx_core::identity::Session;
use cfx_core::responses::{MapViewResponse, StatusResponse, SubmitResponse, UpvoteResponse};
use cfx_store::IssueStore;

use crate::auth::{LoginForm, SignupForm};

/// Behavior switches taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppSettings {
    pub require_address: bool,
    pub map_center: Geotag,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            require_address: false,
            map_center: Geotag {
                latitude: 28.6139,
                longitude: 77.2090,
            },
        }
    }
}

impl AppSettings {
    /// # Errors
    ///
    /// Returns [`AppError::Core`] if the configured map centre is out of range.
    pub fn from_config(config: &CfxConfig) -> Result<Self, AppError> {
        Ok(Self {
            require_address: config.report.require_address,
            map_center: Geotag::new(config.map.center_latitude, config.map.center_longitude)?,
        })
    }
}

/// The whole application state.
#[derive(Debug, Clone, Default)]
pub struct App {
    router: Router,
    store: IssueStore,
    draft: ReportDraft,
    settings: AppSettings,
    overlay: Option<Overlay>,
}

impl App {
    #[must_use]
    pub fn new(store: IssueStore, settings: AppSettings) -> Self {
        Self {
            router: Router::new(),
            store,
            draft: ReportDraft::default(),
            settings,
            overlay: None,
        }
    }

    /// Build from configuration, seeding the demo issues when enabled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Core`] if the configured map centre is invalid.
    pub fn from_config(config: &CfxConfig) -> Result<Self, AppError> {
        let settings = AppSettings::from_config(config)?;
        let store = if config.general.seed_demo_issues {
            IssueStore::with_issues(cfx_store::demo_issues())
        } else {
            IssueStore::new()
        };
        Ok(Self::new(store, settings))
    }

    #[must_use]
    pub const fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub const fn store(&self) -> &IssueStore {
        &self.store
    }

    #[must_use]
    pub const fn draft(&self) -> &ReportDraft {
        &self.draft
    }

    #[must_use]
    pub const fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// The most recent AI overlay, if any.
    #[must_use]
    pub const fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    // ── Session ────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`AppError`] if someone is already logged in or the form is
    /// incomplete.
    pub fn login(&mut self, form: &LoginForm) -> Result<&Session, AppError> {
        self.router.require_page(Page::Auth)?;
        let session = form.validate()?;
        self.router.login(session)?;
        Ok(self.router.require_session()?)
    }

    /// Sign up (through `service` when present) and log in as the new user.
    /// Returns the confirmation message.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] if someone is already logged in, the form is
    /// invalid, or the backend rejects the signup.
    pub async fn signup<S: AccountService>(
        &mut self,
        form: &SignupForm,
        service: Option<&S>,
    ) -> Result<String, AppError> {
        self.router.require_page(Page::Auth)?;
        let outcome = form.submit(service).await?;
        self.router.login(outcome.session)?;
        Ok(outcome.message)
    }

    pub fn logout(&mut self) {
        self.router.logout();
        self.draft.clear();
        self.overlay = None;
    }

    /// # Errors
    ///
    /// Returns [`AppError::Core`] for a transition the router rejects.
    pub fn navigate(&mut self, to: Page) -> Result<bool, AppError> {
        if to == Page::Auth {
            let changed = self.router.page() != Page::Auth;
            self.logout();
            return Ok(changed);
        }
        Ok(self.router.navigate(to)?)
    }

    // ── Report page ────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`AppError`] when not on the report page.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> Result<(), AppError> {
        self.router.require_page(Page::Report)?;
        self.draft.set(field, value);
        Ok(())
    }

    /// Attach a geotag to the draft.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when not on the report page or the coordinates are
    /// out of range.
    pub fn locate(&mut self, latitude: f64, longitude: f64) -> Result<Geotag, AppError> {
        self.router.require_page(Page::Report)?;
        let geotag = Geotag::new(latitude, longitude)?;
        self.draft.locate(geotag);
        Ok(geotag)
    }

    /// Rewrite the draft description with AI. Returns the new description.
    ///
    /// # Errors
    ///
    /// See [`ReportDraft::enhance`]; also fails when not on the report page.
    pub async fn enhance<G: TextGenerator>(&mut self, generator: &G) -> Result<&str, AppError> {
        self.router.require_page(Page::Report)?;
        self.draft.enhance(generator).await?;
        Ok(&self.draft.description)
    }

    /// Validate the draft, mirror it to `sink` when present, then add it to
    /// the store and switch to the view page.
    ///
    /// If validation or the sink fails, the store, draft and page are left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an incomplete draft (the sink is
    /// not called) and [`AppError::Backend`] when the sink rejects it.
    pub async fn submit<S: IssueSink>(
        &mut self,
        sink: Option<&S>,
    ) -> Result<SubmitResponse, AppError> {
        self.router.require_page(Page::Report)?;
        let reporter = self.router.require_session()?.email.clone();
        self.draft.validate(self.settings.require_address)?;

        let issue = self
            .draft
            .to_issue(self.store.next_id()?, &reporter, Utc::now());
        let message = match sink {
            Some(sink) => sink.create_issue(&issue).await?,
            None => SUBMIT_SUCCESS.to_string(),
        };

        tracing::info!(id = %issue.id, category = %issue.category, "issue reported");
        self.store.add(issue.clone());
        self.draft.clear();
        self.router.navigate(Page::View)?;
        Ok(SubmitResponse { issue, message })
    }

    // ── View page ──────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`AppError`] when not on the view page.
    pub fn list(&self, limit: Option<usize>) -> Result<Vec<Issue>, AppError> {
        self.router.require_page(Page::View)?;
        Ok(presentation::list(self.store.as_slice(), limit))
    }

    /// # Errors
    ///
    /// Returns [`AppError`] when not on the view page.
    pub fn map_view(&self) -> Result<MapViewResponse, AppError> {
        self.router.require_page(Page::View)?;
        Ok(presentation::map_view(
            self.store.as_slice(),
            self.settings.map_center,
        ))
    }

    /// Upvote `id`. An unknown id is reported with `applied: false`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when not on the view page.
    pub fn upvote(&mut self, id: &str) -> Result<UpvoteResponse, AppError> {
        self.router.require_page(Page::View)?;
        let upvotes = self.store.upvote(id);
        Ok(UpvoteResponse {
            id: id.to_string(),
            applied: upvotes.is_some(),
            upvotes,
        })
    }

    /// Summarize every issue and keep the result as the current overlay.
    ///
    /// # Errors
    ///
    /// See [`presentation::summarize`]; also fails when not on the view page.
    pub async fn summarize<G: TextGenerator>(
        &mut self,
        generator: &G,
    ) -> Result<&Overlay, AppError> {
        self.router.require_page(Page::View)?;
        let overlay = presentation::summarize(self.store.as_slice(), generator).await?;
        Ok(&*self.overlay.insert(overlay))
    }

    /// Draft a complaint for issue `id` and keep it as the current overlay.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id, and fails when not on
    /// the view page or when cancelled.
    pub async fn draft_complaint<G: TextGenerator>(
        &mut self,
        id: &str,
        generator: &G,
    ) -> Result<&Overlay, AppError> {
        self.router.require_page(Page::View)?;
        let issue = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "issue".to_string(),
                id: id.to_string(),
            })?;
        let overlay = presentation::draft_complaint(&issue, generator).await?;
        Ok(&*self.overlay.insert(overlay))
    }

    // ── Maintenance ────────────────────────────────────────────────

    /// Add backend issues to the store under fresh local ids. Returns how many
    /// were added.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Core`] if id allocation fails.
    pub fn import(&mut self, remote: Vec<RemoteIssue>) -> Result<usize, AppError> {
        let now = Utc::now();
        let count = remote.len();
        for issue in remote {
            let id = self.store.next_id()?;
            self.store.add(issue.into_issue(id, now));
        }
        tracing::debug!(count, "imported backend issues");
        Ok(count)
    }

    #[must_use]
    pub fn status(&self, ai_configured: bool, backend_configured: bool) -> StatusResponse {
        StatusResponse {
            page: self.router.page(),
            user: self.router.session().map(|s| s.label().to_string()),
            issues: self.store.len(),
            ai_configured,
            backend_configured,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn on_view() -> App {
        let mut app = App::default();
        app.login(&LoginForm::new("user@example.com", "pw")).unwrap();
        app
    }

    #[test]
    fn default_settings_center_on_delhi() {
        let settings = AppSettings::default();
        assert_eq!(settings.map_center, Geotag::new(28.6139, 77.2090).unwrap());
        assert!(!settings.require_address);
    }

    #[test]
    fn from_config_seeds_demo_issues_when_enabled() {
        let mut config = CfxConfig::default();
        assert!(App::from_config(&config).unwrap().store().is_empty());
        config.general.seed_demo_issues = true;
        assert_eq!(App::from_config(&config).unwrap().store().len(), 2);
    }

    #[test]
    fn from_config_rejects_bad_center() {
        let mut config = CfxConfig::default();
        config.map.center_latitude = 123.0;
        assert!(App::from_config(&config).is_err());
    }

    #[test]
    fn draft_commands_need_report_page() {
        let mut app = on_view();
        assert!(app.set_field(DraftField::Category, "Pothole").is_err());
        app.navigate(Page::Report).unwrap();
        app.set_field(DraftField::Category, "Pothole").unwrap();
        assert_eq!(app.draft().category, "Pothole");
    }

    #[test]
    fn view_commands_need_view_page() {
        let mut app = on_view();
        app.navigate(Page::Report).unwrap();
        assert!(app.list(None).is_err());
        assert!(app.upvote("iss-00000001").is_err());
    }

    #[test]
    fn upvote_unknown_id_is_not_applied() {
        let mut app = on_view();
        let response = app.upvote("iss-ffffffff").unwrap();
        assert!(!response.applied);
        assert_eq!(response.upvotes, None);
    }

    #[test]
    fn logout_clears_draft_and_overlay() {
        let mut app = on_view();
        app.navigate(Page::Report).unwrap();
        app.set_field(DraftField::Description, "something").unwrap();
        app.navigate(Page::Auth).unwrap();
        assert_eq!(app.router().page(), Page::Auth);
        assert_eq!(app.draft(), &ReportDraft::default());
        assert!(app.overlay().is_none());
    }

    #[test]
    fn locate_validates_coordinates() {
        let mut app = on_view();
        app.navigate(Page::Report).unwrap();
        assert!(app.locate(95.0, 0.0).is_err());
        let tag = app.locate(28.6, 77.2).unwrap();
        assert_eq!(app.draft().geotag, Some(tag));
    }

    #[test]
    fn status_reports_page_and_user() {
        let app = on_view();
        let status = app.status(true, false);
        assert_eq!(status.page, Page::View);
        assert_eq!(status.user.as_deref(), Some("user@example.com"));
        assert!(status.ai_configured);
        assert!(!status.backend_configured);
    }
}
