//! Response types rendered by `cfx` shell commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Geotag, Issue};
use crate::enums::Page;

/// Result of `submit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SubmitResponse {
    pub issue: Issue,
    /// Message from the backend, or the local success message.
    pub message: String,
}

/// Result of `upvote`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UpvoteResponse {
    pub id: String,
    /// `false` when no issue matched; the store is left untouched.
    pub applied: bool,
    pub upvotes: Option<u32>,
}

/// A map marker for an issue carrying a geotag.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MapMarker {
    pub id: String,
    pub category: String,
    pub upvotes: u32,
    pub position: Geotag,
}

/// Result of `map`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MapViewResponse {
    pub center: Geotag,
    pub markers: Vec<MapMarker>,
    /// Issues left off the map because they have no geotag.
    pub omitted: usize,
}

/// Result of `status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusResponse {
    pub page: Page,
    pub user: Option<String>,
    pub issues: usize,
    pub ai_configured: bool,
    pub backend_configured: bool,
}
