//! Button Spec - A button declared in the config file

use gpui::ElementId;
use gpui_component::{Icon, IconName};
use serde::Deserialize;

use crate::assets::CustomIconName;
use crate::components::{ButtonSize, CommonButton, FillMode, ThemeColor};

/// Icons a config file may refer to by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecIcon {
    Check,
    Plus,
    ArrowLeft,
    ArrowRight,
    Search,
    Settings,
    Info,
    ExternalLink,
    Save,
}

impl From<SpecIcon> for Icon {
    fn from(icon: SpecIcon) -> Self {
        match icon {
            SpecIcon::Check => IconName::Check.into(),
            SpecIcon::Plus => IconName::Plus.into(),
            SpecIcon::ArrowLeft => IconName::ArrowLeft.into(),
            SpecIcon::ArrowRight => IconName::ArrowRight.into(),
            SpecIcon::Search => IconName::Search.into(),
            SpecIcon::Settings => IconName::Settings.into(),
            SpecIcon::Info => IconName::Info.into(),
            SpecIcon::ExternalLink => CustomIconName::ExternalLink.into(),
            SpecIcon::Save => CustomIconName::Save.into(),
        }
    }
}

/// Declarative form of a `CommonButton`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonSpec {
    pub label: String,
    pub href: Option<String>,
    pub disabled: bool,
    pub loading: bool,
    pub fill_mode: FillMode,
    pub theme_color: ThemeColor,
    pub custom_class: Option<String>,
    pub full_width: bool,
    pub icon: Option<SpecIcon>,
    pub tooltip: Option<String>,
    pub size: ButtonSize,
}

impl ButtonSpec {
    /// Build the button this spec describes
    pub fn build(&self, id: impl Into<ElementId>) -> CommonButton {
        let mut button = CommonButton::new(id, self.label.clone())
            .disabled(self.disabled)
            .loading(self.loading)
            .fill_mode(self.fill_mode)
            .theme_color(self.theme_color)
            .full_width(self.full_width)
            .size(self.size);

        if let Some(href) = &self.href {
            button = button.href(href.clone());
        }
        if let Some(class) = &self.custom_class {
            button = button.custom_class(class.clone());
        }
        if let Some(icon) = self.icon {
            button = button.start_icon(icon);
        }
        if let Some(tooltip) = &self.tooltip {
            button = button.tooltip(tooltip.clone());
        }

        button
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_spec_uses_component_defaults() {
        let spec: ButtonSpec = toml::from_str(r#"label = "Go""#).expect("valid spec");
        assert_eq!(spec.fill_mode, FillMode::Contained);
        assert_eq!(spec.theme_color, ThemeColor::Primary);
        assert_eq!(spec.size, ButtonSize::Medium);

        let tree = spec.build("go").into_tree();
        assert!(tree.as_widget().is_some());
        assert_eq!(tree.class().to_string(), "common-button primary contained");
    }

    #[test]
    fn full_spec_builds_link() {
        let spec: ButtonSpec = toml::from_str(
            r#"
            label = "Docs"
            href = "https://example.com"
            fill_mode = "outlined"
            theme_color = "secondary"
            custom_class = "hero"
            icon = "external-link"
            tooltip = "Open the docs"
            size = "large"
            "#,
        )
        .expect("valid spec");

        let tree = spec.build("docs").into_tree();
        let anchor = tree.as_anchor().expect("expected anchor");
        assert_eq!(anchor.href.as_ref(), "https://example.com");
        assert_eq!(anchor.attributes.size, ButtonSize::Large);
        assert_eq!(anchor.attributes.tooltip.as_ref().map(|t| t.as_ref()), Some("Open the docs"));
        assert!(tree.content().has_icon());
        assert_eq!(
            tree.class().to_string(),
            "common-button secondary outlined hero"
        );
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result: Result<ButtonSpec, _> = toml::from_str(
            r#"
            label = "Go"
            colour = "red"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fill_mode_is_rejected() {
        let result: Result<ButtonSpec, _> = toml::from_str(
            r#"
            label = "Go"
            fill_mode = "dashed"
            "#,
        );
        assert!(result.is_err());
    }
}
