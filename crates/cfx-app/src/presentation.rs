//! List and map views of the store, and AI overlays.

use serde::Serialize;

use cfx_ai::{TextGenerator, is_failure_sentinel, prompts};
use cfx_core::entities::{Geotag, Issue};
use cfx_core::responses::{MapMarker, MapViewResponse};

use crate::error::AppError;

pub const SUMMARY_TITLE: &str = "AI Summary of Issues";
pub const NOTHING_TO_SUMMARIZE: &str = "There are no issues to summarize yet.";

/// Generated text shown over the current page until replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlay {
    pub title: String,
    pub content: String,
}

impl Overlay {
    /// `true` when the content is the gateway failure sentinel.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        is_failure_sentinel(&self.content)
    }
}

/// The first `limit` issues in store order, or all of them.
#[must_use]
pub fn list(issues: &[Issue], limit: Option<usize>) -> Vec<Issue> {
    let take = limit.unwrap_or(issues.len());
    issues.iter().take(take).cloned().collect()
}

/// Markers for geotagged issues, in store order. Issues without a geotag are
/// counted in `omitted`.
#[must_use]
pub fn map_view(issues: &[Issue], center: Geotag) -> MapViewResponse {
    let markers: Vec<MapMarker> = issues
        .iter()
        .filter_map(|issue| {
            issue.geotag.map(|position| MapMarker {
                id: issue.id.clone(),
                category: issue.category.clone(),
                upvotes: issue.upvotes,
                position,
            })
        })
        .collect();
    let omitted = issues.len() - markers.len();
    MapViewResponse {
        center,
        markers,
        omitted,
    }
}

/// Summarize every issue in one paragraph.
///
/// A failed generation still yields an overlay, carrying the sentinel text.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when `issues` is empty (no request is
/// made) or [`AppError::Cancelled`] when the request was cancelled.
pub async fn summarize<G: TextGenerator>(
    issues: &[Issue],
    generator: &G,
) -> Result<Overlay, AppError> {
    if issues.is_empty() {
        return Err(AppError::validation(NOTHING_TO_SUMMARIZE));
    }
    let content = generator
        .complete(&prompts::summarize_issues(issues))
        .await
        .ok_or(AppError::Cancelled)?;
    Ok(Overlay {
        title: SUMMARY_TITLE.to_string(),
        content,
    })
}

/// Draft a complaint email about `issue`.
///
/// # Errors
///
/// Returns [`AppError::Cancelled`] when the request was cancelled.
pub async fn draft_complaint<G: TextGenerator>(
    issue: &Issue,
    generator: &G,
) -> Result<Overlay, AppError> {
    let content = generator
        .complete(&prompts::draft_complaint(issue))
        .await
        .ok_or(AppError::Cancelled)?;
    Ok(Overlay {
        title: format!("Draft Complaint: {}", issue.category),
        content,
    })
}
