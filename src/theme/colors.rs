//! Colors - Button Palette Defaults

use gpui::{rgb, Hsla, Rgba};

/// Default button colors - All colors are accessed via associated functions
pub struct ButtonColors;

impl ButtonColors {
    // Accents
    /// Primary accent - Yellow
    pub fn primary() -> Rgba { rgb(0xf5c518) }
    /// Text on the primary accent
    pub fn primary_text() -> Rgba { rgb(0x1f2937) }
    /// Secondary accent - Cyan/Teal
    pub fn secondary() -> Rgba { rgb(0x2cb3b8) }
    /// Text on the secondary accent
    pub fn secondary_text() -> Rgba { rgb(0xffffff) }

    // Surfaces
    /// Gallery background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Gallery card background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Card border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Text
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
}

/// Hsla accessors for the values the stylesheet stores
impl ButtonColors {
    pub fn primary_hsla() -> Hsla {
        Hsla::from(Self::primary())
    }

    pub fn secondary_hsla() -> Hsla {
        Hsla::from(Self::secondary())
    }
}
