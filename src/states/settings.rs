//! Settings
//!
//! Palette overrides, custom class rules and gallery buttons read from
//! `common-button.toml` in the platform config directory.

use std::collections::BTreeMap;
use std::path::PathBuf;

use gpui::Hsla;
use serde::Deserialize;
use tracing::{error, info};

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::ButtonSpec;
use crate::error::Result;
use crate::helpers::{HexColor, get_or_create_config_dir};
use crate::theme::{ClassRule, Palette, Stylesheet};

/// Palette overrides; unset entries keep the built-in colors
///
/// `on_accent` sets the text color on both accents. `primary_text` and
/// `secondary_text` win over it when given.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteSettings {
    pub primary: Option<HexColor>,
    pub primary_text: Option<HexColor>,
    pub secondary: Option<HexColor>,
    pub secondary_text: Option<HexColor>,
    pub on_accent: Option<HexColor>,
}

/// Rule for one custom class token
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassRuleSettings {
    pub background: Option<HexColor>,
    pub foreground: Option<HexColor>,
    pub border: Option<HexColor>,
    pub opacity: Option<f32>,
}

impl From<&ClassRuleSettings> for ClassRule {
    fn from(value: &ClassRuleSettings) -> Self {
        ClassRule {
            background: value.background.map(Hsla::from),
            foreground: value.foreground.map(Hsla::from),
            border: value.border.map(Hsla::from),
            opacity: value.opacity,
        }
    }
}

/// Persisted settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    palette: PaletteSettings,
    classes: BTreeMap<String, ClassRuleSettings>,
    buttons: Vec<ButtonSpec>,
}

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

impl Settings {
    /// Load settings from the config file, creating an empty one if missing
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        Self::from_toml_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })
    }

    /// Parse settings from TOML text; blank text means defaults
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    pub fn palette(&self) -> Palette {
        let defaults = Palette::default();
        let pick = |color: Option<HexColor>, fallback: Hsla| color.map_or(fallback, Hsla::from);
        let on_accent = self.palette.on_accent;

        Palette {
            primary: pick(self.palette.primary, defaults.primary),
            primary_text: pick(
                self.palette.primary_text.or(on_accent),
                defaults.primary_text,
            ),
            secondary: pick(self.palette.secondary, defaults.secondary),
            secondary_text: pick(
                self.palette.secondary_text.or(on_accent),
                defaults.secondary_text,
            ),
        }
    }

    /// Build the stylesheet described by these settings
    pub fn stylesheet(&self) -> Stylesheet {
        self.classes
            .iter()
            .fold(Stylesheet::new(self.palette()), |sheet, (class, rule)| {
                sheet.with_rule(class.clone(), ClassRule::from(rule))
            })
    }

    /// Buttons declared for the gallery
    pub fn buttons(&self) -> &[ButtonSpec] {
        &self.buttons
    }
}
