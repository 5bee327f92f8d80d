//! CommonButton Gallery - Main Entry Point
//!
//! Desktop showcase for the `CommonButton` component.

use common_button::app::{application::run_app, logging::init_logging};
use common_button::states::Settings;

fn main() {
    let _log_guard = init_logging();

    tracing::info!("Starting CommonButton gallery...");

    let settings = Settings::try_load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default settings");
        Settings::default()
    });

    run_app(settings);
}
