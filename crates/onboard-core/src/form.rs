//! Sign-up form model and outbound payload.

use serde::{Deserialize, Serialize};

/// Current values of the four sign-up inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Identifies one input of the form, used by `oninput` handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl SignupForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Replace the value of a single field.
    pub fn set(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::Username => self.username = value,
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = value,
            SignupField::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Build the request body. Values are sent exactly as typed.
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            email: self.email.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            confirm: self.confirm_password.clone(),
        }
    }
}

/// JSON body of `POST /api/users/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm: String,
}
