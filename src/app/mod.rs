//! Application Layer
//!
//! App initialization, logging setup and window management.

pub mod application;
pub mod logging;
