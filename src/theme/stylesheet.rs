//! Stylesheet - Resolves button class tokens into concrete styles
//!
//! Rules are applied in class-list order. Built-in tokens come first in every
//! class list, so rules registered for custom tokens override them.

use std::collections::BTreeMap;

use gpui::{Global, Hsla, Pixels, px, transparent_black};
use tracing::trace;

use crate::components::primitives::button::ClassList;
use crate::constants::{
    BASE_CLASS, BUTTON_GAP, BUTTON_LOADING_OPACITY, BUTTON_RADIUS, FULL_WIDTH_CLASS, LOADING_CLASS,
};
use crate::theme::colors::ButtonColors;

/// Hover tint applied over a filled background
const CONTAINED_HOVER_OPACITY: f32 = 0.85;
/// Hover wash applied behind an outlined button
const OUTLINED_HOVER_OPACITY: f32 = 0.12;

/// Accent colors and the text color that sits on each
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Hsla,
    pub primary_text: Hsla,
    pub secondary: Hsla,
    pub secondary_text: Hsla,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: ButtonColors::primary_hsla(),
            primary_text: ButtonColors::primary_text().into(),
            secondary: ButtonColors::secondary_hsla(),
            secondary_text: ButtonColors::secondary_text().into(),
        }
    }
}

/// Overrides attached to a custom class token
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassRule {
    pub background: Option<Hsla>,
    pub foreground: Option<Hsla>,
    pub border: Option<Hsla>,
    pub opacity: Option<f32>,
}

/// Fully resolved look of one button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub background: Hsla,
    pub foreground: Hsla,
    /// `None` means no border is drawn
    pub border: Option<Hsla>,
    /// `None` disables the hover treatment
    pub hover_background: Option<Hsla>,
    pub opacity: f32,
    pub radius: Pixels,
    /// Space between the icon container and the label
    pub icon_gap: Pixels,
    pub full_width: bool,
}

#[derive(Clone, Copy)]
enum Fill {
    Contained,
    Outlined,
}

/// Button stylesheet, installed as a GPUI global
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    palette: Palette,
    rules: BTreeMap<String, ClassRule>,
}

impl Global for Stylesheet {}

impl Stylesheet {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            rules: BTreeMap::new(),
        }
    }

    /// Register (or replace) the rule for a custom class token
    pub fn with_rule(mut self, class: impl Into<String>, rule: ClassRule) -> Self {
        self.rules.insert(class.into(), rule);
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn rule(&self, class: &str) -> Option<&ClassRule> {
        self.rules.get(class)
    }

    /// Resolve a class list into a style
    pub fn resolve(&self, classes: &ClassList) -> ButtonStyle {
        let mut accent = (self.palette.primary, self.palette.primary_text);
        let mut fill = Fill::Contained;
        let mut full_width = false;
        let mut loading = false;
        let mut custom = Vec::new();

        for token in classes.iter() {
            match token {
                BASE_CLASS => {}
                "primary" => accent = (self.palette.primary, self.palette.primary_text),
                "secondary" => accent = (self.palette.secondary, self.palette.secondary_text),
                "contained" => fill = Fill::Contained,
                "outlined" => fill = Fill::Outlined,
                FULL_WIDTH_CLASS => full_width = true,
                LOADING_CLASS => loading = true,
                other => match self.rules.get(other) {
                    Some(rule) => custom.push(rule),
                    None => trace!(class = other, "No stylesheet rule for class"),
                },
            }
        }

        let (accent_color, accent_text) = accent;
        let mut style = match fill {
            Fill::Contained => ButtonStyle {
                background: accent_color,
                foreground: accent_text,
                border: None,
                hover_background: Some(accent_color.opacity(CONTAINED_HOVER_OPACITY)),
                opacity: 1.0,
                radius: px(BUTTON_RADIUS),
                icon_gap: px(BUTTON_GAP),
                full_width,
            },
            Fill::Outlined => ButtonStyle {
                background: transparent_black(),
                foreground: accent_color,
                border: Some(accent_color),
                hover_background: Some(accent_color.opacity(OUTLINED_HOVER_OPACITY)),
                opacity: 1.0,
                radius: px(BUTTON_RADIUS),
                icon_gap: px(BUTTON_GAP),
                full_width,
            },
        };

        for rule in custom {
            if let Some(background) = rule.background {
                style.background = background;
                style.hover_background = Some(background.opacity(CONTAINED_HOVER_OPACITY));
            }
            if let Some(foreground) = rule.foreground {
                style.foreground = foreground;
            }
            if let Some(border) = rule.border {
                style.border = Some(border);
            }
            if let Some(opacity) = rule.opacity {
                style.opacity = opacity.clamp(0.0, 1.0);
            }
        }

        if loading {
            style.opacity = style.opacity.min(BUTTON_LOADING_OPACITY);
            style.hover_background = None;
        }

        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::primitives::button::{FillMode, ThemeColor};
    use gpui::rgb;

    fn classes(
        theme_color: ThemeColor,
        fill_mode: FillMode,
        full_width: bool,
        loading: bool,
        custom: Option<&str>,
    ) -> ClassList {
        ClassList::for_button(theme_color, fill_mode, full_width, loading, custom)
    }

    #[test]
    fn contained_primary_fills_with_accent() {
        let sheet = Stylesheet::default();
        let style = sheet.resolve(&classes(
            ThemeColor::Primary,
            FillMode::Contained,
            false,
            false,
            None,
        ));
        assert_eq!(style.background, sheet.palette().primary);
        assert_eq!(style.foreground, sheet.palette().primary_text);
        assert_eq!(style.border, None);
        assert_eq!(style.opacity, 1.0);
        assert!(!style.full_width);
    }

    #[test]
    fn outlined_secondary_draws_border_without_fill() {
        let sheet = Stylesheet::default();
        let style = sheet.resolve(&classes(
            ThemeColor::Secondary,
            FillMode::Outlined,
            true,
            false,
            None,
        ));
        assert_eq!(style.background, transparent_black());
        assert_eq!(style.border, Some(sheet.palette().secondary));
        assert_eq!(style.foreground, sheet.palette().secondary);
        assert!(style.full_width);
    }

    #[test]
    fn loading_dims_and_drops_hover() {
        let sheet = Stylesheet::default();
        let style = sheet.resolve(&classes(
            ThemeColor::Primary,
            FillMode::Contained,
            false,
            true,
            None,
        ));
        assert_eq!(style.opacity, BUTTON_LOADING_OPACITY);
        assert_eq!(style.hover_background, None);
    }

    #[test]
    fn custom_rule_overrides_builtin() {
        let danger: Hsla = rgb(0xef4444).into();
        let white: Hsla = rgb(0xffffff).into();
        let sheet = Stylesheet::default().with_rule(
            "danger",
            ClassRule {
                background: Some(danger),
                foreground: Some(white),
                ..Default::default()
            },
        );
        let style = sheet.resolve(&classes(
            ThemeColor::Primary,
            FillMode::Contained,
            false,
            false,
            Some("danger"),
        ));
        assert_eq!(style.background, danger);
        assert_eq!(style.foreground, white);
    }

    #[test]
    fn unknown_custom_class_is_ignored() {
        let sheet = Stylesheet::default();
        let plain = sheet.resolve(&classes(
            ThemeColor::Primary,
            FillMode::Contained,
            false,
            false,
            None,
        ));
        let tagged = sheet.resolve(&classes(
            ThemeColor::Primary,
            FillMode::Contained,
            false,
            false,
            Some("analytics-hook"),
        ));
        assert_eq!(plain, tagged);
    }

    #[test]
    fn later_custom_rule_wins() {
        let sheet = Stylesheet::default()
            .with_rule("faint", ClassRule { opacity: Some(0.4), ..Default::default() })
            .with_rule("solid", ClassRule { opacity: Some(0.9), ..Default::default() });
        let style = sheet.resolve(&classes(
            ThemeColor::Primary,
            FillMode::Contained,
            false,
            false,
            Some("faint solid"),
        ));
        assert_eq!(style.opacity, 0.9);
    }
}
