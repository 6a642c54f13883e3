//! The report draft: field editing, validation, AI enhancement and issue
//! construction.
//!
//! Submission itself lives on [`crate::App::submit`] because it touches the
//! store and the router as well as the draft.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use cfx_ai::{TextGenerator, is_failure_sentinel, prompts};
use cfx_core::entities::{Geotag, Issue};
use cfx_core::enums::IssueStatus;

use crate::error::AppError;

pub const FIELDS_REQUIRED: &str = "Category and description are required.";
pub const ADDRESS_REQUIRED: &str = "An address is required for this report.";
pub const DESCRIPTION_FIRST: &str = "Please enter a description first.";
pub const ENHANCE_FAILED: &str = "Failed to enhance description with AI.";

/// Editable draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Category,
    Description,
    Address,
}

impl DraftField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Description => "description",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "category" => Ok(Self::Category),
            "description" | "desc" => Ok(Self::Description),
            "address" | "addr" => Ok(Self::Address),
            other => Err(AppError::validation(format!(
                "Unknown field `{other}` (expected category, description or address)."
            ))),
        }
    }
}

/// A report being composed on the report page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportDraft {
    pub category: String,
    pub description: String,
    pub address: String,
    pub geotag: Option<Geotag>,
}

impl ReportDraft {
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Category => self.category = value,
            DraftField::Description => self.description = value,
            DraftField::Address => self.address = value,
        }
    }

    pub fn locate(&mut self, geotag: Geotag) {
        self.geotag = Some(geotag);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when category or description is blank,
    /// or when `require_address` is set and the address is blank.
    pub fn validate(&self, require_address: bool) -> Result<(), AppError> {
        if self.category.trim().is_empty() || self.description.trim().is_empty() {
            return Err(AppError::validation(FIELDS_REQUIRED));
        }
        if require_address && self.address.trim().is_empty() {
            return Err(AppError::validation(ADDRESS_REQUIRED));
        }
        Ok(())
    }

    /// Build the issue this draft describes. Does not validate.
    #[must_use]
    pub fn to_issue(&self, id: String, reporter: &str, now: DateTime<Utc>) -> Issue {
        let address = self.address.trim();
        Issue {
            id,
            reporter: reporter.to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            address: (!address.is_empty()).then(|| address.to_string()),
            geotag: self.geotag,
            upvotes: 0,
            status: IssueStatus::Submitted,
            created_at: now,
        }
    }

    /// Rewrite the description with the AI gateway.
    ///
    /// The description is replaced only by real generated text; on failure or
    /// cancellation the draft is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the description is blank (no request is
    ///   made)
    /// - [`AppError::Ai`] if the gateway returned its failure sentinel
    /// - [`AppError::Cancelled`] if the request was cancelled
    pub async fn enhance<G: TextGenerator>(&mut self, generator: &G) -> Result<(), AppError> {
        if self.description.trim().is_empty() {
            return Err(AppError::validation(DESCRIPTION_FIRST));
        }
        let prompt = prompts::enhance_description(&self.description);
        match generator.complete(&prompt).await {
            None => Err(AppError::Cancelled),
            Some(text) if is_failure_sentinel(&text) => Err(AppError::Ai(ENHANCE_FAILED.into())),
            Some(text) => {
                self.description = text;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use cfx_ai::FAILURE_SENTINEL;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    /// Replies with a fixed outcome and records prompts.
    struct Canned {
        reply: Option<&'static str>,
        prompts: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(reply: Option<&'static str>) -> Self {
            Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for Canned {
        async fn complete(&self, prompt: &str) -> Option<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.map(str::to_string)
        }
    }

    fn draft(category: &str, description: &str, address: &str) -> ReportDraft {
        ReportDraft {
            category: category.into(),
            description: description.into(),
            address: address.into(),
            geotag: None,
        }
    }

    #[rstest]
    #[case(draft("", "road damage", ""))]
    #[case(draft("Pothole", "", ""))]
    #[case(draft("Pothole", "   \n", "Main St"))]
    fn blank_required_fields_rejected(#[case] draft: ReportDraft) {
        let err = draft.validate(false).unwrap_err();
        assert_eq!(err.to_string(), FIELDS_REQUIRED);
    }

    #[test]
    fn address_required_only_when_configured() {
        let d = draft("Pothole", "road damage", "");
        assert!(d.validate(false).is_ok());
        assert_eq!(d.validate(true).unwrap_err().to_string(), ADDRESS_REQUIRED);
    }

    #[test]
    fn to_issue_fills_defaults() {
        let now = Utc::now();
        let issue = draft(" Pothole ", "road damage", "  ").to_issue(
            "iss-00000001".into(),
            "user@example.com",
            now,
        );
        assert_eq!(issue.category, "Pothole");
        assert_eq!(issue.address, None);
        assert_eq!(issue.upvotes, 0);
        assert_eq!(issue.status, IssueStatus::Submitted);
        assert_eq!(issue.reporter, "user@example.com");
        assert_eq!(issue.created_at, now);
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("Category".parse::<DraftField>().unwrap(), DraftField::Category);
        assert_eq!("desc".parse::<DraftField>().unwrap(), DraftField::Description);
        assert!("colour".parse::<DraftField>().is_err());
    }

    #[tokio::test]
    async fn enhance_replaces_description() {
        let generator = Canned::new(Some("A formal description."));
        let mut d = draft("Pothole", "big hole", "");
        d.enhance(&generator).await.unwrap();
        assert_eq!(d.description, "A formal description.");
        assert!(generator.prompts.lock().unwrap()[0].contains("\"big hole\""));
    }

    #[tokio::test]
    async fn enhance_requires_description_and_skips_request() {
        let generator = Canned::new(Some("unused"));
        let mut d = draft("Pothole", " ", "");
        let err = d.enhance(&generator).await.unwrap_err();
        assert_eq!(err.to_string(), DESCRIPTION_FIRST);
        assert!(generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn enhance_failure_leaves_draft_untouched() {
        let generator = Canned::new(Some(FAILURE_SENTINEL));
        let mut d = draft("Pothole", "big hole", "");
        let before = d.clone();
        let err = d.enhance(&generator).await.unwrap_err();
        assert_eq!(err.to_string(), ENHANCE_FAILED);
        assert_eq!(d, before);
    }

    #[tokio::test]
    async fn cancelled_enhance_is_not_applied() {
        let generator = Canned::new(None);
        let mut d = draft("Pothole", "big hole", "");
        let err = d.enhance(&generator).await.unwrap_err();
        assert!(matches!(err, AppError::Cancelled));
        assert_eq!(d.description, "big hole");
    }
}
