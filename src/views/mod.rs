//! View Components
//!
//! Windows of the gallery binary.

mod gallery;

pub use gallery::*;
