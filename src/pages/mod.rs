//! Page components for Onboard.

mod login;
mod signup;

pub use login::Login;
pub use signup::Signup;
