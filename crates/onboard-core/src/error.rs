//! Error types for the sign-up flow

use thiserror::Error;

/// Toast text used when a failed signup carries no server-provided reason.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during signup";

/// Main error type for sign-up operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    /// Email does not have the `local@domain.tld` shape
    #[error("Invalid email address")]
    InvalidEmail,

    /// Password fails the length/character-class policy
    #[error(
        "Password must be at least 8 characters long and contain at least one uppercase letter, one lowercase letter, and one digit."
    )]
    InvalidPassword,

    /// Password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// The accounts API answered with a non-200 status
    #[error("Signup rejected with status {status}")]
    Rejected {
        status: u16,
        /// Human-readable reason from the response body's `message` field
        reason: Option<String>,
    },

    /// No response was received (connection refused, timeout, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The configured API base URL could not be used
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl SignupError {
    /// Whether this error was raised by client-side validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SignupError::InvalidEmail | SignupError::InvalidPassword | SignupError::PasswordMismatch
        )
    }

    /// Inline error text shown under the form.
    ///
    /// Only validation errors produce inline text; server and network
    /// failures are reported through notifications alone.
    pub fn inline_message(&self) -> Option<String> {
        self.is_validation().then(|| self.to_string())
    }

    /// Text of the transient notification raised for this error.
    pub fn notification_text(&self) -> String {
        match self {
            SignupError::InvalidEmail => "Invalid email address".to_string(),
            SignupError::InvalidPassword => "Invalid password".to_string(),
            SignupError::PasswordMismatch => "Passwords do not match".to_string(),
            SignupError::Rejected {
                reason: Some(reason),
                ..
            } => reason.clone(),
            SignupError::Rejected { reason: None, .. }
            | SignupError::Network(_)
            | SignupError::InvalidBaseUrl(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Result type alias using SignupError
pub type SignupResult<T> = Result<T, SignupError>;
