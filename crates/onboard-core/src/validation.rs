//! Client-side validation of the sign-up form.
//!
//! Checks run in a fixed order (email, password policy, confirmation) and the
//! first failure wins. Nothing here touches the network.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{SignupError, SignupResult};
use crate::form::SignupForm;

/// Minimum password length in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Whitespace as browsers define it for form input: the ECMAScript `\s`
/// set. Unlike Unicode White_Space it includes U+FEFF and excludes U+0085.
const WHITESPACE_CLASS: &str = r"\t\n\x{0B}\x{0C}\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        // `local@domain.tld`, no whitespace and no extra `@` in any part
        let part = format!("[^@{WHITESPACE_CLASS}]+");
        Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
    })
}

/// Validates the email shape.
pub fn validate_email(email: &str) -> SignupResult<()> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(SignupError::InvalidEmail)
    }
}

/// Validates the password policy: at least 8 UTF-16 code units with one
/// ASCII lowercase letter, one ASCII uppercase letter and one ASCII digit.
/// Any other characters are allowed except line breaks.
///
/// Length is measured the way a browser measures a form value, so a
/// character outside the Basic Multilingual Plane counts twice.
pub fn validate_password(password: &str) -> SignupResult<()> {
    if password.chars().any(is_line_terminator) {
        return Err(SignupError::InvalidPassword);
    }

    let long_enough = password.encode_utf16().count() >= MIN_PASSWORD_LENGTH;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_lower && has_upper && has_digit {
        Ok(())
    } else {
        Err(SignupError::InvalidPassword)
    }
}

/// Password and confirmation must be byte-for-byte equal.
pub fn validate_confirmation(password: &str, confirm: &str) -> SignupResult<()> {
    if password == confirm {
        Ok(())
    } else {
        Err(SignupError::PasswordMismatch)
    }
}

/// Runs every check against the form, stopping at the first failure.
///
/// The username is not validated.
pub fn validate_form(form: &SignupForm) -> SignupResult<()> {
    validate_email(&form.email)?;
    validate_password(&form.password)?;
    validate_confirmation(&form.password, &form.confirm_password)?;
    Ok(())
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
