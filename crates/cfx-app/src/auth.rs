//! Login and signup forms.

use cfx_backend::{AccountService, SIGNUP_SUCCESS, SignupRequest};
use cfx_core::identity::Session;

use crate::error::AppError;

pub const LOGIN_REQUIRED: &str = "Please enter email and password.";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match.";
pub const SIGNUP_REQUIRED: &str = "Please fill out all fields.";

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Credentials are not checked against any service; non-empty is enough.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when email or password is empty.
    pub fn validate(&self) -> Result<Session, AppError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(AppError::validation(LOGIN_REQUIRED));
        }
        Ok(Session::new(email))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// A completed signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutcome {
    pub session: Session,
    pub message: String,
}

impl SignupForm {
    /// Password confirmation is checked before completeness.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with [`PASSWORDS_DIFFER`] or
    /// [`SIGNUP_REQUIRED`].
    pub fn validate(&self) -> Result<(), AppError> {
        if self.password != self.confirm_password {
            return Err(AppError::validation(PASSWORDS_DIFFER));
        }
        if self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
        {
            return Err(AppError::validation(SIGNUP_REQUIRED));
        }
        Ok(())
    }

    #[must_use]
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    /// Validate, then register with `service` when one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for bad input (no call is made) or
    /// [`AppError::Backend`] carrying the server's message.
    pub async fn submit<S: AccountService>(
        &self,
        service: Option<&S>,
    ) -> Result<SignupOutcome, AppError> {
        self.validate()?;
        let request = self.to_request();
        let message = match service {
            Some(service) => service.signup(&request).await?,
            None => SIGNUP_SUCCESS.to_string(),
        };
        Ok(SignupOutcome {
            session: Session::new(request.email).with_display_name(request.username),
            message,
        })
    }
}
