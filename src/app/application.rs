//! Application - App Initialization and Window Management
//!
//! Main entry point for the gallery application.

use gpui::{
    px, AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::error;

use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::helpers::new_key_bindings;
use crate::states::Settings;
use crate::views::Gallery;

/// Run the gallery application
pub fn run_app(settings: Settings) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());

        // Buttons read the stylesheet from this global at render time
        cx.set_global(settings.stylesheet());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("CommonButton Gallery")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let gallery = cx.new(|cx| Gallery::new(settings, window, cx));
            cx.new(|cx| Root::new(AnyView::from(gallery), window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open gallery window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
