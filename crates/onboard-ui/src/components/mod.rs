//! Reusable UI components for the account screens.

mod button;
mod icons;
mod input;
mod password_input;
mod toast_stack;

pub use button::*;
pub use icons::*;
pub use input::*;
pub use password_input::*;
pub use toast_stack::*;
