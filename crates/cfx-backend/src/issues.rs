//! `POST /api/issues` and `GET /api/issues`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use cfx_core::entities::Issue;
use cfx_core::enums::IssueStatus;

use crate::http::{check_response, success_message};
use crate::{BackendClient, BackendError, SUBMIT_FALLBACK, SUBMIT_SUCCESS};

/// Wire shape of a newly reported issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewIssueRequest {
    pub category: String,
    pub description: String,
    pub address: String,
    pub reporter: String,
    pub upvotes: u32,
    pub status: IssueStatus,
    pub timestamp: DateTime<Utc>,
}

impl From<&Issue> for NewIssueRequest {
    fn from(issue: &Issue) -> Self {
        Self {
            category: issue.category.clone(),
            description: issue.description.clone(),
            address: issue.address_or_empty().to_string(),
            reporter: issue.reporter.clone(),
            upvotes: issue.upvotes,
            status: issue.status,
            timestamp: issue.created_at,
        }
    }
}

/// Backend identifiers are integers in some deployments and strings in others.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RemoteId {
    Number(i64),
    Text(String),
}

/// An issue as listed by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteIssue {
    pub id: RemoteId,
    pub category: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub reporter: String,
    /// `M/D/YYYY`.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub status: IssueStatus,
}

impl RemoteIssue {
    /// Convert to a local record under a freshly allocated `id`.
    ///
    /// A title is folded into the description as `"{title}: {description}"`.
    /// An unparseable or missing date falls back to `now`.
    #[must_use]
    pub fn into_issue(self, id: String, now: DateTime<Utc>) -> Issue {
        let description = match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() && !self.description.is_empty() => {
                format!("{title}: {}", self.description)
            }
            Some(title) if !title.is_empty() => title.to_string(),
            _ => self.description,
        };
        let created_at = self
            .date
            .as_deref()
            .and_then(parse_backend_date)
            .unwrap_or(now);

        Issue {
            id,
            reporter: self.reporter,
            category: self.category,
            description,
            address: self.address.filter(|a| !a.trim().is_empty()),
            geotag: None,
            upvotes: self.upvotes,
            status: self.status,
            created_at,
        }
    }
}

fn parse_backend_date(raw: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%m/%d/%Y").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

impl BackendClient {
    /// Mirror a newly reported issue to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Http`] if the backend is unreachable, or
    /// [`BackendError::Api`] carrying `detail`, the raw body, or
    /// `"Failed to submit the issue."` on a non-success status.
    pub async fn post_issue(&self, request: &NewIssueRequest) -> Result<String, BackendError> {
        let url = self.endpoint("/api/issues");
        let resp = self.http.post(&url).json(request).send().await?;
        let resp = check_response(resp, SUBMIT_FALLBACK).await?;
        let body = resp.text().await?;
        tracing::info!(category = %request.category, "issue submitted to backend");
        Ok(success_message(&body, SUBMIT_SUCCESS))
    }

    /// List issues stored on the backend.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] if the request fails, the backend returns a
    /// non-success status, or the body is not a list of issues.
    pub async fn list_issues(&self) -> Result<Vec<RemoteIssue>, BackendError> {
        let url = self.endpoint("/api/issues");
        let resp = check_response(self.http.get(&url).send().await?, SUBMIT_FALLBACK).await?;
        let body = resp.text().await?;
        parse_issue_list(&body)
    }
}

fn parse_issue_list(body: &str) -> Result<Vec<RemoteIssue>, BackendError> {
    serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))
}
