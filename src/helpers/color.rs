//! Color parsing for config files

use crate::error::{Error, Result};
use gpui::{Hsla, Rgba};
use serde::Deserialize;

/// Parse `#rrggbb` / `#rrggbbaa` (leading `#` optional) into a color
pub fn parse_color(value: &str) -> Result<Hsla> {
    let trimmed = value.trim();
    let hex = if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    };

    Rgba::try_from(hex.as_str())
        .map(Hsla::from)
        .map_err(|e| Error::Invalid {
            message: format!("Invalid color {trimmed:?}: {e}"),
        })
}

/// A color written as a hex string in TOML
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(pub Hsla);

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        parse_color(&value).map(HexColor)
    }
}

impl From<HexColor> for Hsla {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::rgb;

    #[test]
    fn parses_six_digit_hex() {
        let color = parse_color("#ef4444").expect("valid color");
        assert_eq!(color, Hsla::from(rgb(0xef4444)));
    }

    #[test]
    fn hash_is_optional() {
        assert_eq!(
            parse_color("2cb3b8").expect("valid color"),
            parse_color("#2cb3b8").expect("valid color")
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_color("not-a-color").is_err());
        assert!(parse_color("").is_err());
    }
}
