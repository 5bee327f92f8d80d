//! Button Component
//!
//! `CommonButton` wraps the gpui-component `Button` with project styling and a
//! few conveniences: a loading spinner, a start icon slot, and link rendering
//! when an `href` is given.
//!
//! Rendering happens in two stages. [`CommonButton::into_tree`] turns the
//! props into a [`ButtonTree`] without touching a window, then
//! `RenderOnce::render` maps that tree onto GPUI elements.
//!
//! ```ignore
//! CommonButton::new("save", "Save")
//!     .start_icon(IconName::Check)
//!     .loading(is_saving)
//!     .on_click(cx.listener(|this, _, _, cx| this.save(cx)))
//!
//! CommonButton::new("docs", "Read the docs")
//!     .href("https://example.com/docs")
//!     .fill_mode(FillMode::Outlined)
//! ```

mod class_list;
mod render;
mod tree;

use std::rc::Rc;

use gpui::{App, ClickEvent, ElementId, IntoElement, SharedString, Window, px};
use gpui_component::Icon;
use serde::Deserialize;

pub use class_list::ClassList;
pub use tree::{AnchorNode, ButtonContent, ButtonTree, ClickBehavior, Leading, SpinnerSlot, WidgetNode};

/// Click handler shared between the props and the rendered element
pub type ClickHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Fill mode - filled vs. outlined treatment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Solid accent background
    #[default]
    Contained,
    /// Transparent background with an accent border
    Outlined,
}

impl FillMode {
    pub fn class_name(self) -> &'static str {
        match self {
            FillMode::Contained => "contained",
            FillMode::Outlined => "outlined",
        }
    }
}

/// Theme color - which accent the button uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Primary,
    Secondary,
}

impl ThemeColor {
    pub fn class_name(self) -> &'static str {
        match self {
            ThemeColor::Primary => "primary",
            ThemeColor::Secondary => "secondary",
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Padding and font size for one size step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    pub padding_x: gpui::Pixels,
    pub padding_y: gpui::Pixels,
    pub font_size: gpui::Pixels,
}

impl ButtonSize {
    pub fn metrics(self) -> SizeMetrics {
        let (padding_x, padding_y, font_size) = match self {
            ButtonSize::Small => (px(8.0), px(4.0), px(12.0)),
            ButtonSize::Medium => (px(16.0), px(8.0), px(14.0)),
            ButtonSize::Large => (px(24.0), px(12.0), px(16.0)),
        };
        SizeMetrics {
            padding_x,
            padding_y,
            font_size,
        }
    }
}

/// Attributes forwarded verbatim to whichever element gets rendered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonAttributes {
    /// Hover tooltip
    pub tooltip: Option<SharedString>,
    /// Size step
    pub size: ButtonSize,
}

/// A styled button that renders as a link when given an `href`
#[derive(IntoElement)]
pub struct CommonButton {
    id: ElementId,
    label: SharedString,
    start_icon: Option<Icon>,
    disabled: bool,
    loading: bool,
    on_click: Option<ClickHandler>,
    href: Option<SharedString>,
    fill_mode: FillMode,
    theme_color: ThemeColor,
    custom_class: Option<SharedString>,
    full_width: bool,
    attributes: ButtonAttributes,
}

impl CommonButton {
    /// Create a new button with its label
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            start_icon: None,
            disabled: false,
            loading: false,
            on_click: None,
            href: None,
            fill_mode: FillMode::default(),
            theme_color: ThemeColor::default(),
            custom_class: None,
            full_width: false,
            attributes: ButtonAttributes::default(),
        }
    }

    /// Set the icon shown before the label
    pub fn start_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Render as a link to `href`
    pub fn href(mut self, href: impl Into<SharedString>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    pub fn theme_color(mut self, theme_color: ThemeColor) -> Self {
        self.theme_color = theme_color;
        self
    }

    /// Append extra class tokens
    pub fn custom_class(mut self, class: impl Into<SharedString>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    /// Stretch to the width of the parent
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<SharedString>) -> Self {
        self.attributes.tooltip = Some(tooltip.into());
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.attributes.size = size;
        self
    }

    /// Replace all forwarded attributes at once
    pub fn attributes(mut self, attributes: ButtonAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Create an outlined button
    pub fn outlined(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).fill_mode(FillMode::Outlined)
    }

    /// Create a link-styled button pointing at `href`
    pub fn link(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        href: impl Into<SharedString>,
    ) -> Self {
        Self::new(id, label).href(href)
    }

    /// `disabled OR loading`
    pub fn is_interactive_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// The class list this button renders with
    pub fn class_list(&self) -> ClassList {
        ClassList::for_button(
            self.theme_color,
            self.fill_mode,
            self.full_width,
            self.loading,
            self.custom_class.as_ref().map(|c| c.as_ref()),
        )
    }
}
