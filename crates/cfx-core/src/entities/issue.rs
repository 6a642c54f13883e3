use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Geotag;
use crate::enums::IssueStatus;

/// A reported civic problem.
///
/// `upvotes` only ever grows; the issue store is the only writer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Issue {
    pub id: String,
    /// Reporter identity (the session email).
    pub reporter: String,
    /// Free-form category, e.g. `Pothole`. Casing is preserved.
    pub category: String,
    pub description: String,
    pub address: Option<String>,
    pub geotag: Option<Geotag>,
    pub upvotes: u32,
    pub status: IssueStatus,
    pub created_at: DateTime<Utc>,
}

impl Issue {
    /// Address for display and prompts; empty string when none was given.
    #[must_use]
    pub fn address_or_empty(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }
}
