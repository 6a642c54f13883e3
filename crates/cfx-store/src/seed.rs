use chrono::Utc;
use cfx_core::entities::{Geotag, Issue};
use cfx_core::enums::IssueStatus;

/// The two demo issues shown on a fresh install when
/// `general.seed_demo_issues` is enabled.
#[must_use]
pub fn demo_issues() -> Vec<Issue> {
    let now = Utc::now();
    vec![
        Issue {
            id: "iss-00000001".into(),
            reporter: "test1@example.com".into(),
            category: "Pothole".into(),
            description: "Large pothole on Elm Street.".into(),
            address: Some("Near the park".into()),
            geotag: Some(Geotag {
                latitude: 28.6139,
                longitude: 77.2090,
            }),
            upvotes: 15,
            status: IssueStatus::Submitted,
            created_at: now,
        },
        Issue {
            id: "iss-00000002".into(),
            reporter: "test2@example.com".into(),
            category: "Garbage".into(),
            description: "Overflowing trash can.".into(),
            address: Some("Main St corner".into()),
            geotag: Some(Geotag {
                latitude: 28.6562,
                longitude: 77.2410,
            }),
            upvotes: 8,
            status: IssueStatus::InProgress,
            created_at: now,
        },
    ]
}
