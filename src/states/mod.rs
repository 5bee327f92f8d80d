//! States
//!
//! Settings loaded at startup and reloaded on demand.

mod settings;

pub use settings::{ClassRuleSettings, PaletteSettings, Settings};
