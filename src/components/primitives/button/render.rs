//! Render stage - maps a `ButtonTree` onto GPUI elements

use gpui::{
    App, Div, InteractiveElement, IntoElement, ParentElement, Pixels, RenderOnce, Stateful,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder,
};
use gpui_component::{
    Disableable, Sizable,
    button::{Button, ButtonCustomVariant, ButtonVariants},
    h_flex,
    tooltip::Tooltip,
};
use tracing::{debug, trace};

use super::{
    AnchorNode, ButtonContent, ButtonSize, ButtonTree, CommonButton, Leading, WidgetNode,
};
use crate::components::primitives::spinner::Spinner;
use crate::constants::BUTTON_DISABLED_OPACITY;
use crate::theme::{ButtonStyle, Stylesheet};

impl RenderOnce for CommonButton {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let tree = self.into_tree();
        let style = match cx.try_global::<Stylesheet>() {
            Some(sheet) => sheet.resolve(tree.class()),
            None => Stylesheet::default().resolve(tree.class()),
        };

        match tree {
            ButtonTree::Anchor(anchor) => render_anchor(anchor, &style).into_any_element(),
            ButtonTree::Widget(widget) => render_widget(widget, &style, cx).into_any_element(),
        }
    }
}

fn render_content(content: ButtonContent, style: &ButtonStyle, font_size: Pixels) -> Div {
    let foreground = style.foreground;
    let icon_gap = style.icon_gap;

    h_flex()
        .items_center()
        .justify_center()
        .when_some(content.leading, move |this, leading| match leading {
            Leading::Spinner(slot) => {
                this.child(Spinner::new(foreground).margin_right(slot.margin_right))
            }
            Leading::Icon(icon) => this.child(div().flex().items_center().mr(icon_gap).child(icon)),
        })
        .child(div().text_size(font_size).child(content.label))
}

fn render_anchor(anchor: AnchorNode, style: &ButtonStyle) -> Stateful<Div> {
    let AnchorNode {
        id,
        href,
        aria_disabled,
        click,
        attributes,
        content,
        ..
    } = anchor;
    let metrics = attributes.size.metrics();
    let hover = if aria_disabled {
        None
    } else {
        style.hover_background
    };
    let disabled_opacity = style.opacity.min(BUTTON_DISABLED_OPACITY);

    div()
        .id(id)
        .flex()
        .items_center()
        .justify_center()
        .px(metrics.padding_x)
        .py(metrics.padding_y)
        .bg(style.background)
        .text_color(style.foreground)
        .rounded(style.radius)
        .opacity(style.opacity)
        .when_some(style.border, |this, border| this.border_1().border_color(border))
        .when(style.full_width, |this| this.w_full())
        .when(aria_disabled, |this| this.opacity(disabled_opacity).cursor_not_allowed())
        .when(!aria_disabled, |this| this.cursor_pointer())
        .when_some(hover, |this, hover| this.hover(move |s| s.bg(hover)))
        .when_some(attributes.tooltip, |this, tooltip| {
            this.tooltip(move |window, cx| Tooltip::new(tooltip.clone()).build(window, cx))
        })
        .child(render_content(content, style, metrics.font_size))
        .on_click(move |event, window, cx| {
            if let Some(handler) = click.handler() {
                handler(event, window, cx);
            }
            if click.opens_link() {
                debug!(href = %href, "Opening link");
                cx.open_url(&href);
            } else {
                trace!(href = %href, "Click suppressed on disabled link");
            }
        })
}

fn render_widget(widget: WidgetNode, style: &ButtonStyle, cx: &App) -> Button {
    let WidgetNode {
        id,
        disabled,
        on_click,
        attributes,
        content,
        ..
    } = widget;
    let metrics = attributes.size.metrics();
    let hover = style.hover_background.unwrap_or(style.background);

    let variant = ButtonCustomVariant::new(cx)
        .color(style.background)
        .foreground(style.foreground)
        .border(style.border.unwrap_or(style.background))
        .hover(hover)
        .active(hover);

    let button = Button::new(id)
        .custom(variant)
        .disabled(disabled)
        .opacity(style.opacity)
        .when(style.full_width, |this| this.w_full())
        .child(render_content(content, style, metrics.font_size))
        .when_some(attributes.tooltip, |this, tooltip| this.tooltip(tooltip))
        .when_some(on_click, |this, handler| {
            this.on_click(move |event, window, cx| handler(event, window, cx))
        });

    match attributes.size {
        ButtonSize::Small => button.small(),
        ButtonSize::Medium => button,
        ButtonSize::Large => button.large(),
    }
}
