//! Helper Utilities
//!
//! Common utilities used across the crate.

mod action;
mod color;
mod fs;

pub use action::*;
pub use color::*;
pub use fs::*;
