//! Gallery View
//!
//! Shows `CommonButton` in every fill mode, theme color and state, followed by
//! the buttons declared in the config file.

use gpui::{
    ClickEvent, Context, Div, FocusHandle, Focusable, SharedString, Window, div, prelude::*, px,
};
use gpui_component::{IconName, h_flex, label::Label, v_flex};
use tracing::{error, info};

use crate::assets::CustomIconName;
use crate::components::{ButtonSize, CommonButton, FillMode, ThemeColor};
use crate::helpers::{GALLERY_SHORTCUTS, GalleryAction, humanize_keystroke};
use crate::states::Settings;
use crate::theme::colors::ButtonColors;
use crate::theme::typography::Typography;

const FILL_MODES: [FillMode; 2] = [FillMode::Contained, FillMode::Outlined];
const THEME_COLORS: [ThemeColor; 2] = [ThemeColor::Primary, ThemeColor::Secondary];
const SIZES: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

/// Gallery window root
pub struct Gallery {
    focus_handle: FocusHandle,
    settings: Settings,
    /// Forces every showcase button into loading
    loading: bool,
    /// Forces every showcase button into disabled
    disabled: bool,
    /// Save demo in progress
    saving: bool,
    clicks: usize,
}

impl Gallery {
    pub fn new(settings: Settings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        Self {
            focus_handle,
            settings,
            loading: false,
            disabled: false,
            saving: false,
            clicks: 0,
        }
    }

    fn on_action(&mut self, action: &GalleryAction, _window: &mut Window, cx: &mut Context<Self>) {
        match action {
            GalleryAction::Quit => cx.quit(),
            GalleryAction::Reload => self.reload(cx),
            GalleryAction::ToggleLoading => {
                self.loading = !self.loading;
                info!(loading = self.loading, "Toggled showcase loading");
            }
            GalleryAction::ToggleDisabled => {
                self.disabled = !self.disabled;
                info!(disabled = self.disabled, "Toggled showcase disabled");
            }
        }
        cx.notify();
    }

    fn reload(&mut self, cx: &mut Context<Self>) {
        match Settings::try_load() {
            Ok(settings) => {
                cx.set_global(settings.stylesheet());
                info!(buttons = settings.buttons().len(), "Reloaded settings");
                self.settings = settings;
            }
            Err(e) => error!(error = %e, "Keeping previous settings"),
        }
    }

    fn count_click(&mut self, _: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.clicks += 1;
        cx.notify();
    }

    fn section(title: impl Into<SharedString>, body: impl IntoElement) -> Div {
        v_flex()
            .gap_2()
            .p_4()
            .bg(ButtonColors::content_bg())
            .border_1()
            .border_color(ButtonColors::border())
            .rounded_md()
            .child(
                Label::new(title)
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(ButtonColors::text_primary()),
            )
            .child(body)
    }

    fn render_variants(&self, cx: &mut Context<Self>) -> Div {
        let mut row = h_flex().gap_3().flex_wrap();
        for (i, fill_mode) in FILL_MODES.into_iter().enumerate() {
            for (j, theme_color) in THEME_COLORS.into_iter().enumerate() {
                let label = format!("{} {}", theme_color.class_name(), fill_mode.class_name());
                row = row.child(
                    CommonButton::new(("variant", i * THEME_COLORS.len() + j), label)
                        .fill_mode(fill_mode)
                        .theme_color(theme_color)
                        .disabled(self.disabled)
                        .loading(self.loading)
                        .on_click(cx.listener(Self::count_click)),
                );
            }
        }
        row
    }

    fn render_states(&self, cx: &mut Context<Self>) -> Div {
        let saving = self.saving;

        h_flex()
            .gap_3()
            .flex_wrap()
            .child(CommonButton::new("state-disabled", "Disabled").disabled(true))
            .child(CommonButton::new("state-loading", "Loading").loading(true))
            .child(
                CommonButton::new("state-loading-icon", "Loading with icon")
                    .loading(true)
                    .start_icon(IconName::Check),
            )
            .child(
                CommonButton::new("state-icon", "With icon")
                    .start_icon(IconName::Plus)
                    .on_click(cx.listener(Self::count_click)),
            )
            .child(
                CommonButton::new("state-save", if saving { "Saving" } else { "Save" })
                    .start_icon(CustomIconName::Save)
                    .loading(saving)
                    .tooltip("Starts the save demo")
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.saving = true;
                        info!("Save demo started");
                        cx.notify();
                    })),
            )
            .child(
                CommonButton::outlined("state-finish", "Finish save")
                    .disabled(!saving)
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.saving = false;
                        info!("Save demo finished");
                        cx.notify();
                    })),
            )
    }

    fn render_sizes(&self) -> Div {
        let mut row = h_flex().gap_3().items_center();
        for (i, size) in SIZES.into_iter().enumerate() {
            row = row.child(CommonButton::new(("size", i), format!("{size:?}")).size(size));
        }
        row
    }

    fn render_links(&self, cx: &mut Context<Self>) -> Div {
        h_flex()
            .gap_3()
            .flex_wrap()
            .child(
                CommonButton::link("link-enabled", "gpui-component", "https://github.com/longbridge/gpui-component")
                    .start_icon(CustomIconName::ExternalLink)
                    .fill_mode(FillMode::Outlined)
                    .disabled(self.disabled)
                    .loading(self.loading)
                    .on_click(cx.listener(Self::count_click)),
            )
            .child(
                CommonButton::link("link-disabled", "Disabled link", "https://example.com")
                    .disabled(true)
                    .tooltip("Clicks are swallowed"),
            )
            .child(
                CommonButton::link("link-loading", "Loading link", "https://example.com")
                    .theme_color(ThemeColor::Secondary)
                    .loading(true),
            )
    }

    fn render_configured(&self) -> Div {
        let buttons = self.settings.buttons();
        if buttons.is_empty() {
            return div().child(
                Label::new("No buttons declared in common-button.toml")
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(ButtonColors::text_muted()),
            );
        }

        buttons
            .iter()
            .enumerate()
            .fold(v_flex().gap_2(), |list, (i, spec)| {
                list.child(spec.build(("configured", i)))
            })
    }

    fn render_footer(&self) -> Div {
        let hints = GALLERY_SHORTCUTS
            .iter()
            .map(|(keystroke, action)| format!("{} {:?}", humanize_keystroke(keystroke), action))
            .collect::<Vec<_>>()
            .join("  ·  ");

        h_flex()
            .justify_between()
            .child(
                Label::new(hints)
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(ButtonColors::text_muted()),
            )
            .child(
                Label::new(format!("clicks: {}", self.clicks))
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(ButtonColors::text_muted()),
            )
    }
}

impl Focusable for Gallery {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("gallery")
            .key_context("Gallery")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_action))
            .size_full()
            .overflow_y_scroll()
            .bg(ButtonColors::background())
            .child(
                v_flex()
                    .p_6()
                    .gap_4()
                    .child(
                        Label::new("CommonButton")
                            .text_size(px(Typography::TEXT_XL))
                            .text_color(ButtonColors::text_primary()),
                    )
                    .child(Self::section("Fill mode × theme color", self.render_variants(cx)))
                    .child(Self::section("States", self.render_states(cx)))
                    .child(Self::section("Sizes", self.render_sizes()))
                    .child(Self::section("Links", self.render_links(cx)))
                    .child(Self::section(
                        "Full width",
                        CommonButton::new("full-width", "Full width")
                            .full_width(true)
                            .theme_color(ThemeColor::Secondary),
                    ))
                    .child(Self::section("From config", self.render_configured()))
                    .child(self.render_footer()),
            )
    }
}
