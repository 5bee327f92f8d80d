//! Button Tree - What one render of a `CommonButton` produces
//!
//! The tree is built without a window so the branch selection, class list,
//! content and click gating can be checked directly.

use gpui::{ElementId, Pixels, SharedString, px};
use gpui_component::Icon;

use super::{ButtonAttributes, ClassList, ClickHandler, CommonButton};
use crate::constants::SPINNER_ICON_GAP;

/// Either a link or the delegated widget, never both
pub enum ButtonTree {
    Anchor(AnchorNode),
    Widget(WidgetNode),
}

/// Link element styled as a button
pub struct AnchorNode {
    pub id: ElementId,
    pub class: ClassList,
    pub href: SharedString,
    /// Mirrors `disabled OR loading`
    pub aria_disabled: bool,
    pub click: ClickBehavior,
    pub attributes: ButtonAttributes,
    pub content: ButtonContent,
}

/// The gpui-component `Button`
pub struct WidgetNode {
    pub id: ElementId,
    pub class: ClassList,
    /// `disabled OR loading`
    pub disabled: bool,
    /// Forwarded as given; the widget itself ignores clicks while disabled
    pub on_click: Option<ClickHandler>,
    pub attributes: ButtonAttributes,
    pub content: ButtonContent,
}

/// What a click on a link does
pub enum ClickBehavior {
    /// Swallow the click; no navigation, caller handler not invoked
    PreventDefault,
    /// Run the caller handler (if any), then open the href
    Navigate(Option<ClickHandler>),
}

impl ClickBehavior {
    pub fn prevents_default(&self) -> bool {
        matches!(self, ClickBehavior::PreventDefault)
    }

    /// Caller handler to run for a click, if any
    pub fn handler(&self) -> Option<&ClickHandler> {
        match self {
            ClickBehavior::PreventDefault => None,
            ClickBehavior::Navigate(handler) => handler.as_ref(),
        }
    }

    /// Whether a click opens the href once the handler has run
    pub fn opens_link(&self) -> bool {
        !self.prevents_default()
    }
}

/// Inner content: optional leading decoration, then the label
pub struct ButtonContent {
    pub leading: Option<Leading>,
    pub label: SharedString,
}

/// Decoration rendered before the label
pub enum Leading {
    Spinner(SpinnerSlot),
    Icon(Icon),
}

/// Placement of the loading spinner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerSlot {
    pub margin_right: Pixels,
}

impl ButtonContent {
    fn new(label: SharedString, start_icon: Option<Icon>, loading: bool) -> Self {
        let leading = if loading {
            // The icon is dropped while loading; it only widens the spinner gap.
            let margin_right = if start_icon.is_some() {
                px(SPINNER_ICON_GAP)
            } else {
                px(0.0)
            };
            Some(Leading::Spinner(SpinnerSlot { margin_right }))
        } else {
            start_icon.map(Leading::Icon)
        };
        Self { leading, label }
    }

    pub fn spinner(&self) -> Option<&SpinnerSlot> {
        match &self.leading {
            Some(Leading::Spinner(slot)) => Some(slot),
            _ => None,
        }
    }

    pub fn has_icon(&self) -> bool {
        matches!(self.leading, Some(Leading::Icon(_)))
    }
}

impl ButtonTree {
    pub fn class(&self) -> &ClassList {
        match self {
            ButtonTree::Anchor(anchor) => &anchor.class,
            ButtonTree::Widget(widget) => &widget.class,
        }
    }

    pub fn content(&self) -> &ButtonContent {
        match self {
            ButtonTree::Anchor(anchor) => &anchor.content,
            ButtonTree::Widget(widget) => &widget.content,
        }
    }

    /// `aria_disabled` for links, `disabled` for the widget
    pub fn is_interactive_disabled(&self) -> bool {
        match self {
            ButtonTree::Anchor(anchor) => anchor.aria_disabled,
            ButtonTree::Widget(widget) => widget.disabled,
        }
    }

    pub fn as_anchor(&self) -> Option<&AnchorNode> {
        match self {
            ButtonTree::Anchor(anchor) => Some(anchor),
            ButtonTree::Widget(_) => None,
        }
    }

    pub fn as_widget(&self) -> Option<&WidgetNode> {
        match self {
            ButtonTree::Widget(widget) => Some(widget),
            ButtonTree::Anchor(_) => None,
        }
    }
}

impl CommonButton {
    /// Resolve props into the element tree for one render
    pub fn into_tree(self) -> ButtonTree {
        let class = self.class_list();
        let interactive_disabled = self.is_interactive_disabled();
        let content = ButtonContent::new(self.label, self.start_icon, self.loading);

        match self.href.filter(|href| !href.is_empty()) {
            Some(href) => {
                let click = if interactive_disabled {
                    ClickBehavior::PreventDefault
                } else {
                    ClickBehavior::Navigate(self.on_click)
                };
                ButtonTree::Anchor(AnchorNode {
                    id: self.id,
                    class,
                    href,
                    aria_disabled: interactive_disabled,
                    click,
                    attributes: self.attributes,
                    content,
                })
            }
            None => ButtonTree::Widget(WidgetNode {
                id: self.id,
                class,
                disabled: interactive_disabled,
                on_click: self.on_click,
                attributes: self.attributes,
                content,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::primitives::button::{ButtonSize, FillMode, ThemeColor};
    use gpui_component::IconName;

    fn noop() -> impl Fn(&gpui::ClickEvent, &mut gpui::Window, &mut gpui::App) + 'static {
        |_, _, _| {}
    }

    #[test]
    fn href_selects_anchor() {
        let tree = CommonButton::new("docs", "Docs").href("/docs").into_tree();
        let anchor = tree.as_anchor().expect("expected anchor");
        assert_eq!(anchor.href.as_ref(), "/docs");
        assert!(tree.as_widget().is_none());
    }

    #[test]
    fn missing_href_selects_widget() {
        let tree = CommonButton::new("save", "Save").into_tree();
        assert!(tree.as_widget().is_some());
        assert!(tree.as_anchor().is_none());
    }

    #[test]
    fn empty_href_selects_widget() {
        let tree = CommonButton::new("save", "Save").href("").into_tree();
        assert!(tree.as_widget().is_some());
    }

    #[test]
    fn branch_ignores_every_other_prop() {
        let build = |href: Option<&'static str>| {
            let mut button = CommonButton::new("b", "B")
                .disabled(true)
                .loading(true)
                .full_width(true)
                .fill_mode(FillMode::Outlined)
                .theme_color(ThemeColor::Secondary)
                .custom_class("x")
                .start_icon(IconName::Check)
                .on_click(noop());
            if let Some(href) = href {
                button = button.href(href);
            }
            button.into_tree()
        };
        assert!(build(Some("/x")).as_anchor().is_some());
        assert!(build(None).as_widget().is_some());
    }

    #[test]
    fn loading_link_prevents_default_even_with_handler() {
        let tree = CommonButton::new("x", "X")
            .href("/x")
            .loading(true)
            .on_click(noop())
            .into_tree();
        let anchor = tree.as_anchor().expect("expected anchor");
        assert!(anchor.aria_disabled);
        assert!(anchor.click.prevents_default());
    }

    #[test]
    fn disabled_link_click_runs_nothing() {
        let tree = CommonButton::new("x", "X")
            .href("/x")
            .disabled(true)
            .on_click(noop())
            .into_tree();
        let anchor = tree.as_anchor().expect("expected anchor");
        assert!(anchor.click.handler().is_none());
        assert!(!anchor.click.opens_link());
    }

    #[test]
    fn enabled_link_click_runs_given_handler_then_opens() {
        let handler: ClickHandler = std::rc::Rc::new(noop());
        let click = ClickBehavior::Navigate(Some(handler.clone()));
        let run = click.handler().expect("handler runs");
        assert!(std::rc::Rc::ptr_eq(run, &handler));
        assert!(click.opens_link());

        let bare = ClickBehavior::Navigate(None);
        assert!(bare.handler().is_none());
        assert!(bare.opens_link());
    }

    #[test]
    fn disabled_link_prevents_default() {
        let tree = CommonButton::new("x", "X").href("/x").disabled(true).into_tree();
        let anchor = tree.as_anchor().expect("expected anchor");
        assert!(anchor.aria_disabled);
        assert!(anchor.click.prevents_default());
    }

    #[test]
    fn enabled_link_forwards_handler() {
        let tree = CommonButton::new("x", "X")
            .href("/x")
            .on_click(noop())
            .into_tree();
        let anchor = tree.as_anchor().expect("expected anchor");
        assert!(!anchor.aria_disabled);
        match &anchor.click {
            ClickBehavior::Navigate(handler) => assert!(handler.is_some()),
            ClickBehavior::PreventDefault => panic!("enabled link must navigate"),
        }
    }

    #[test]
    fn enabled_link_without_handler_still_navigates() {
        let tree = CommonButton::new("x", "X").href("/x").into_tree();
        let anchor = tree.as_anchor().expect("expected anchor");
        assert!(matches!(anchor.click, ClickBehavior::Navigate(None)));
    }

    #[test]
    fn widget_disabled_mirrors_disabled_or_loading() {
        let cases = [(false, false, false), (true, false, true), (false, true, true), (true, true, true)];
        for (disabled, loading, expected) in cases {
            let tree = CommonButton::new("w", "W")
                .disabled(disabled)
                .loading(loading)
                .into_tree();
            let widget = tree.as_widget().expect("expected widget");
            assert_eq!(widget.disabled, expected, "disabled={disabled} loading={loading}");
            assert_eq!(tree.is_interactive_disabled(), expected);
        }
    }

    #[test]
    fn widget_forwards_handler_even_when_disabled() {
        let tree = CommonButton::new("w", "W")
            .disabled(true)
            .on_click(noop())
            .into_tree();
        let widget = tree.as_widget().expect("expected widget");
        assert!(widget.disabled);
        assert!(widget.on_click.is_some());
    }

    #[test]
    fn loading_shows_spinner_and_hides_icon() {
        let tree = CommonButton::new("w", "W")
            .loading(true)
            .start_icon(IconName::Check)
            .into_tree();
        let content = tree.content();
        assert!(content.spinner().is_some());
        assert!(!content.has_icon());
    }

    #[test]
    fn spinner_gap_only_with_start_icon() {
        let with_icon = CommonButton::new("a", "A")
            .loading(true)
            .start_icon(IconName::Check)
            .into_tree();
        let without_icon = CommonButton::new("b", "B").loading(true).into_tree();

        assert_eq!(
            with_icon.content().spinner().map(|s| s.margin_right),
            Some(px(SPINNER_ICON_GAP))
        );
        assert_eq!(
            without_icon.content().spinner().map(|s| s.margin_right),
            Some(px(0.0))
        );
    }

    #[test]
    fn icon_container_follows_start_icon_when_idle() {
        let with_icon = CommonButton::new("a", "A")
            .start_icon(IconName::Check)
            .into_tree();
        let without_icon = CommonButton::new("b", "B").into_tree();

        assert!(with_icon.content().has_icon());
        assert!(with_icon.content().spinner().is_none());
        assert!(!without_icon.content().has_icon());
        assert!(without_icon.content().leading.is_none());
    }

    #[test]
    fn label_always_present() {
        let tree = CommonButton::new("a", "Submit").loading(true).into_tree();
        assert_eq!(tree.content().label.as_ref(), "Submit");
    }

    #[test]
    fn class_string_for_outlined_secondary_full_width() {
        let tree = CommonButton::new("a", "A")
            .fill_mode(FillMode::Outlined)
            .theme_color(ThemeColor::Secondary)
            .full_width(true)
            .into_tree();
        assert_eq!(
            tree.class().to_string(),
            "common-button secondary outlined full-width"
        );
    }

    #[test]
    fn loading_link_carries_loading_class() {
        let tree = CommonButton::new("x", "X").href("/x").loading(true).into_tree();
        assert!(tree.class().contains("loading"));
        assert!(!tree.class().contains("full-width"));
    }

    #[test]
    fn attributes_reach_both_branches() {
        let attributes = ButtonAttributes {
            tooltip: Some("Help".into()),
            size: ButtonSize::Small,
        };
        let anchor_tree = CommonButton::new("a", "A")
            .href("/a")
            .attributes(attributes.clone())
            .into_tree();
        let widget_tree = CommonButton::new("w", "W")
            .attributes(attributes.clone())
            .into_tree();

        assert_eq!(
            anchor_tree.as_anchor().map(|a| a.attributes.clone()),
            Some(attributes.clone())
        );
        assert_eq!(
            widget_tree.as_widget().map(|w| w.attributes.clone()),
            Some(attributes)
        );
    }
}
