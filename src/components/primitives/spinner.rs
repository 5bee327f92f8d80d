//! Spinner Component
//!
//! A ring that turns once per period, forever.

use std::time::Duration;

use gpui::{
    Animation, AnimationExt, App, Hsla, IntoElement, ParentElement, Pixels, RenderOnce, Styled,
    Transformation, Window, div, percentage, px, svg,
};

use crate::assets::CustomIconName;
use crate::constants::{SPINNER_PERIOD_MS, SPINNER_SIZE};

/// Loading spinner
#[derive(IntoElement)]
pub struct Spinner {
    color: Hsla,
    size: Pixels,
    margin_right: Pixels,
    period: Duration,
}

impl Spinner {
    pub fn new(color: Hsla) -> Self {
        Self {
            color,
            size: px(SPINNER_SIZE),
            margin_right: px(0.0),
            period: Duration::from_millis(SPINNER_PERIOD_MS),
        }
    }

    pub fn margin_right(mut self, margin_right: Pixels) -> Self {
        self.margin_right = margin_right;
        self
    }
}

impl RenderOnce for Spinner {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div().flex_none().mr(self.margin_right).child(
            svg()
                .path(CustomIconName::Spinner.path())
                .size(self.size)
                .text_color(self.color)
                .with_animation(
                    "spinner-turn",
                    Animation::new(self.period).repeat(),
                    |ring, delta| ring.with_transformation(Transformation::rotate(percentage(delta))),
                ),
        )
    }
}
