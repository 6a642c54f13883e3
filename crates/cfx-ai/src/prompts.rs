//! Prompt templates.

use std::fmt::Write;

use cfx_core::entities::Issue;

/// Rewrite a report description in formal language without adding facts.
#[must_use]
pub fn enhance_description(description: &str) -> String {
    format!(
        "Rewrite and enhance the following civic issue description to be more clear, formal, \
         and detailed for an official government report. Do not add any new facts, just improve \
         the language and structure. Original description: \"{description}\""
    )
}

/// One-paragraph summary of every listed issue.
#[must_use]
pub fn summarize_issues(issues: &[Issue]) -> String {
    let mut bullets = String::new();
    for (index, issue) in issues.iter().enumerate() {
        if index > 0 {
            bullets.push('\n');
        }
        let _ = write!(
            bullets,
            "- {} at {} ({})",
            issue.description,
            issue.address_or_empty(),
            issue.category
        );
    }
    format!(
        "Provide a concise, one-paragraph summary of the following civic issues reported in the \
         community:\n\n{bullets}"
    )
}

/// A ready-to-send complaint email for one issue.
#[must_use]
pub fn draft_complaint(issue: &Issue) -> String {
    format!(
        "Draft a formal but polite complaint email to the local municipal corporation regarding \
         the following civic issue. The email should be ready to be copied and sent.\n\n\
         Issue Category: {}\nDescription: {}\nLocation: {}",
        issue.category,
        issue.description,
        issue.address_or_empty()
    )
}
