//! Report form settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Reject reports without an address.
    #[serde(default)]
    pub require_address: bool,
}
