use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The authenticated identity held while a user is logged in.
///
/// Produced by the login/signup forms in `cfx-app`, cleared on logout.
/// Never persisted across runs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    /// Login email. Also used as the reporter identity on submitted issues.
    pub email: String,
    /// Username chosen at signup. `None` for plain logins.
    pub display_name: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: None,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Name shown in the shell prompt: display name if set, else the email.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_display_name() {
        let session = Session::new("user@example.com").with_display_name("jane");
        assert_eq!(session.label(), "jane");
        assert_eq!(Session::new("user@example.com").label(), "user@example.com");
    }
}
