//! Primitive Components
//!
//! The styled button and the spinner it shows while loading.

pub mod button;
pub mod spinner;
