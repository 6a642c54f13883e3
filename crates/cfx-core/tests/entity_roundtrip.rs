//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use chrono::Utc;
use schemars::schema_for;
use cfx_core::entities::*;
use cfx_core::enums::*;
use cfx_core::identity::Session;
use cfx_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn pothole() -> Issue {
    Issue {
        id: "iss-a3f8b2c1".into(),
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
        created_at: Utc::now(),
    }
}

roundtrip_and_validate!(issue_roundtrip, Issue, pothole());

roundtrip_and_validate!(
    issue_without_location_roundtrip,
    Issue,
    Issue {
        address: None,
        geotag: None,
        status: IssueStatus::InProgress,
        ..pothole()
    }
);

roundtrip_and_validate!(
    session_roundtrip,
    Session,
    Session::new("user@example.com").with_display_name("jane")
);

roundtrip_and_validate!(
    submit_response_roundtrip,
    SubmitResponse,
    SubmitResponse {
        issue: pothole(),
        message: "Issue reported successfully!".into(),
    }
);

roundtrip_and_validate!(
    upvote_response_roundtrip,
    UpvoteResponse,
    UpvoteResponse {
        id: "iss-00000001".into(),
        applied: false,
        upvotes: None,
    }
);

roundtrip_and_validate!(
    map_view_roundtrip,
    MapViewResponse,
    MapViewResponse {
        center: Geotag {
            latitude: 28.6139,
            longitude: 77.2090,
        },
        markers: vec![MapMarker {
            id: "iss-a3f8b2c1".into(),
            category: "Pothole".into(),
            upvotes: 15,
            position: Geotag {
                latitude: 28.6139,
                longitude: 77.2090,
            },
        }],
        omitted: 1,
    }
);

roundtrip_and_validate!(
    status_response_roundtrip,
    StatusResponse,
    StatusResponse {
        page: Page::View,
        user: Some("user@example.com".into()),
        issues: 2,
        ai_configured: true,
        backend_configured: false,
    }
);

#[test]
fn issue_status_wire_value_in_issue_json() {
    let issue = Issue {
        status: IssueStatus::InProgress,
        ..pothole()
    };
    let value = serde_json::to_value(&issue).unwrap();
    assert_eq!(value["status"], "in-progress");
}
