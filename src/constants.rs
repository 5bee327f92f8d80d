//! UI Constants
//!
//! Fixed tokens and metrics shared by the button, its stylesheet and the gallery.

/// Base class carried by every rendered button
pub const BASE_CLASS: &str = "common-button";

/// Class tokens emitted for boolean flags
pub const FULL_WIDTH_CLASS: &str = "full-width";
pub const LOADING_CLASS: &str = "loading";

/// Spinner geometry
pub const SPINNER_SIZE: f32 = 16.0;
/// Right margin of the spinner when a start icon was supplied
pub const SPINNER_ICON_GAP: f32 = 4.0;
/// One full turn of the spinner
pub const SPINNER_PERIOD_MS: u64 = 600;

/// Button metrics
pub const BUTTON_RADIUS: f32 = 6.0;
pub const BUTTON_GAP: f32 = 6.0;
pub const BUTTON_DISABLED_OPACITY: f32 = 0.5;
pub const BUTTON_LOADING_OPACITY: f32 = 0.7;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "common-button.toml";

/// Default gallery window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;
