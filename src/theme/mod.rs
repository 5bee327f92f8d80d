//! Theme - Palette, typography and the button stylesheet

pub mod colors;
pub mod stylesheet;
pub mod typography;

pub use stylesheet::{ButtonStyle, ClassRule, Palette, Stylesheet};
