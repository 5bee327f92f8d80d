//! Domain Models
//!
//! Plain data read from the config file.

pub mod button_spec;

pub use button_spec::{ButtonSpec, SpecIcon};
