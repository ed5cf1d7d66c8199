//! Theme for Onboard.

mod styles;

pub use styles::GLOBAL_STYLES;
