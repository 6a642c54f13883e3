//! Issue ID formatting.
//!
//! IDs look like `iss-a3f8b2c1`: a fixed prefix followed by 8 lower hex chars
//! drawn from the OS random source.

use crate::errors::CoreError;

/// Prefix for issue identifiers.
pub const PREFIX_ISSUE: &str = "iss";

/// Generate a random prefixed ID, e.g. `"iss-a3f8b2c1"`.
///
/// Uniqueness against existing records is the caller's concern (see
/// `IssueStore::next_id` in `cfx-store`).
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|error| CoreError::Other(anyhow::anyhow!("random source unavailable: {error}")))?;
    Ok(format_id(prefix, bytes))
}

/// Format raw bytes as a prefixed lower-hex ID.
#[must_use]
pub fn format_id(prefix: &str, bytes: [u8; 4]) -> String {
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("{prefix}-{hex}")
}
