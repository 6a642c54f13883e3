//! Full user flows through `App` with in-process fakes for the AI gateway
//! and the backend.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use cfx_ai::{FAILURE_SENTINEL, TextGenerator};
use cfx_app::auth::LoginForm;
use cfx_app::report::FIELDS_REQUIRED;
use cfx_app::{App, AppError, AppSettings, DraftField};
use cfx_backend::{BackendError, IssueSink, RemoteId, RemoteIssue};
use cfx_core::entities::Issue;
use cfx_core::enums::{IssueStatus, Page};
use cfx_store::{IssueStore, demo_issues};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct FakeSink {
    received: Mutex<Vec<Issue>>,
    fail: bool,
}

impl IssueSink for FakeSink {
    async fn create_issue(&self, issue: &Issue) -> Result<String, BackendError> {
        self.received.lock().unwrap().push(issue.clone());
        if self.fail {
            Err(BackendError::Api {
                status: 500,
                message: "Failed to submit the issue.".into(),
            })
        } else {
            Ok("Issue created".into())
        }
    }
}

impl FakeSink {
    fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

struct FakeGenerator {
    reply: &'static str,
    calls: AtomicUsize,
}

impl FakeGenerator {
    const fn new(reply: &'static str) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }
}

impl TextGenerator for FakeGenerator {
    async fn complete(&self, _prompt: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Some(self.reply.to_string())
    }
}

fn seeded_app() -> App {
    App::new(
        IssueStore::with_issues(demo_issues()),
        AppSettings::default(),
    )
}

fn login_and_open_report(app: &mut App) {
    app.login(&LoginForm::new("user@example.com", "secret"))
        .unwrap();
    assert_eq!(app.router().page(), Page::View);
    app.navigate(Page::Report).unwrap();
}

#[tokio::test]
async fn report_pothole_then_view_it() {
    let mut app = seeded_app();
    let sink = FakeSink::default();
    login_and_open_report(&mut app);

    app.set_field(DraftField::Category, "Pothole").unwrap();
    app.set_field(DraftField::Description, "road damage").unwrap();
    app.set_field(DraftField::Address, "Main St").unwrap();
    let response = app.submit(Some(&sink)).await.unwrap();

    assert_eq!(response.message, "Issue created");
    assert_eq!(sink.calls(), 1);
    assert_eq!(app.router().page(), Page::View);
    assert_eq!(app.store().len(), 3);

    let issue = app.store().get(&response.issue.id).unwrap();
    assert_eq!(issue.upvotes, 0);
    assert_eq!(issue.status, IssueStatus::Submitted);
    assert_eq!(issue.reporter, "user@example.com");
    assert_eq!(issue.address.as_deref(), Some("Main St"));

    let listed = app.list(None).unwrap();
    let upvotes: Vec<u32> = listed.iter().map(|i| i.upvotes).collect();
    assert_eq!(upvotes, [15, 8, 0]);
    assert_eq!(listed[2].id, response.issue.id);
    assert_eq!(app.draft().description, "");
}

#[tokio::test]
async fn empty_description_never_reaches_backend() {
    let mut app = seeded_app();
    let sink = FakeSink::default();
    login_and_open_report(&mut app);

    app.set_field(DraftField::Category, "Pothole").unwrap();
    let err = app.submit(Some(&sink)).await.unwrap_err();

    assert_eq!(err.to_string(), FIELDS_REQUIRED);
    assert_eq!(sink.calls(), 0);
    assert_eq!(app.store().len(), 2);
    assert_eq!(app.router().page(), Page::Report);
}

#[tokio::test]
async fn backend_failure_leaves_state_untouched() {
    let mut app = seeded_app();
    let sink = FakeSink {
        fail: true,
        ..Default::default()
    };
    login_and_open_report(&mut app);
    app.set_field(DraftField::Category, "Garbage").unwrap();
    app.set_field(DraftField::Description, "bins overflowing").unwrap();

    let err = app.submit(Some(&sink)).await.unwrap_err();

    assert!(matches!(err, AppError::Backend(_)));
    assert_eq!(err.to_string(), "Failed to submit the issue.");
    assert_eq!(app.store().len(), 2);
    assert_eq!(app.router().page(), Page::Report);
    assert_eq!(app.draft().description, "bins overflowing");
}

#[tokio::test]
async fn local_only_submit_without_backend() {
    let mut app = App::default();
    login_and_open_report(&mut app);
    app.set_field(DraftField::Category, "Other").unwrap();
    app.set_field(DraftField::Description, "fallen tree").unwrap();

    let response = app.submit(None::<&FakeSink>).await.unwrap();
    assert_eq!(response.message, "Issue reported successfully!");
    assert_eq!(app.store().len(), 1);
}

#[tokio::test]
async fn upvote_reorders_new_issue_to_top() {
    let mut app = seeded_app();
    login_and_open_report(&mut app);
    app.set_field(DraftField::Category, "Pothole").unwrap();
    app.set_field(DraftField::Description, "road damage").unwrap();
    let id = app.submit(None::<&FakeSink>).await.unwrap().issue.id;

    for _ in 0..16 {
        assert!(app.upvote(&id).unwrap().applied);
    }
    let listed = app.list(Some(1)).unwrap();
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].upvotes, 16);
}

#[tokio::test]
async fn summary_and_complaint_overlays() {
    let mut app = seeded_app();
    app.login(&LoginForm::new("user@example.com", "secret"))
        .unwrap();

    let generator = FakeGenerator::new("Two issues need attention.");
    let overlay = app.summarize(&generator).await.unwrap();
    assert_eq!(overlay.title, "AI Summary of Issues");
    assert_eq!(overlay.content, "Two issues need attention.");

    let failing = FakeGenerator::new(FAILURE_SENTINEL);
    let overlay = app
        .draft_complaint("iss-00000002", &failing)
        .await
        .unwrap();
    assert_eq!(overlay.title, "Draft Complaint: Garbage");
    assert!(overlay.is_failure());
    assert_eq!(app.overlay().unwrap().title, "Draft Complaint: Garbage");

    let err = app
        .draft_complaint("iss-deadbeef", &generator)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Core(_)));
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn enhance_then_submit_uses_rewritten_text() {
    let mut app = App::default();
    login_and_open_report(&mut app);
    app.set_field(DraftField::Category, "Streetlight Outage").unwrap();
    app.set_field(DraftField::Description, "light broke").unwrap();

    let generator = FakeGenerator::new("The streetlight is not functioning.");
    app.enhance(&generator).await.unwrap();
    let response = app.submit(None::<&FakeSink>).await.unwrap();
    assert_eq!(
        response.issue.description,
        "The streetlight is not functioning."
    );
}

#[test]
fn map_view_lists_only_geotagged() {
    let mut app = seeded_app();
    app.login(&LoginForm::new("user@example.com", "secret"))
        .unwrap();
    let map = app.map_view().unwrap();
    assert_eq!(map.markers.len() + map.omitted, 2);
}

#[test]
fn import_assigns_fresh_ids() {
    let mut app = seeded_app();
    let remote = vec![RemoteIssue {
        id: RemoteId::Number(1),
        category: "Pothole".into(),
        title: Some("Large pothole".into()),
        description: "Near the market".into(),
        address: None,
        reporter: "Ravi".into(),
        date: Some("9/10/2025".into()),
        upvotes: 20,
        status: IssueStatus::Submitted,
    }];
    assert_eq!(app.import(remote).unwrap(), 1);
    assert_eq!(app.store().len(), 3);
    let top = &app.store().as_slice()[0];
    assert_eq!(top.upvotes, 20);
    assert!(top.id.starts_with("iss-"));
    assert_ne!(top.id, "1");
}
