//! Keyboard Actions and Shortcuts
//!
//! Defines the gallery's keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Gallery actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum GalleryAction {
    /// Quit the application
    Quit,
    /// Re-read the config file and rebuild the stylesheet
    Reload,
    /// Flip every showcase button into or out of loading
    ToggleLoading,
    /// Flip every showcase button into or out of disabled
    ToggleDisabled,
}

/// Keystrokes bound to each gallery action, in display order
pub const GALLERY_SHORTCUTS: &[(&str, GalleryAction)] = &[
    ("secondary-q", GalleryAction::Quit),
    ("secondary-r", GalleryAction::Reload),
    ("secondary-l", GalleryAction::ToggleLoading),
    ("secondary-d", GalleryAction::ToggleDisabled),
];

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⌃ for ctrl, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    let parts = keystroke.split('-');
    let mut display_text = String::new();

    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    for (i, part) in parts.enumerate() {
        if i > 0 {
            display_text.push_str(separator);
        }

        let symbol = match part {
            "secondary" | "cmd" => {
                #[cfg(target_os = "macos")]
                { "⌘" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "ctrl" => {
                #[cfg(target_os = "macos")]
                { "⌃" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "alt" => {
                #[cfg(target_os = "macos")]
                { "⌥" }
                #[cfg(not(target_os = "macos"))]
                { "Alt" }
            }
            "shift" => {
                #[cfg(target_os = "macos")]
                { "⇧" }
                #[cfg(not(target_os = "macos"))]
                { "Shift" }
            }
            "escape" => "Esc",
            c => {
                display_text.push_str(&c.to_uppercase());
                continue;
            }
        };
        display_text.push_str(symbol);
    }

    display_text
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    GALLERY_SHORTCUTS
        .iter()
        .map(|(keystroke, action)| KeyBinding::new(keystroke, *action, None))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_os = "macos"))]
    fn humanize_uses_ctrl_plus() {
        assert_eq!(humanize_keystroke("secondary-r"), "Ctrl+R");
        assert_eq!(humanize_keystroke("ctrl-shift-l"), "Ctrl+Shift+L");
    }

    #[test]
    #[cfg(target_os = "macos")]
    fn humanize_uses_symbols() {
        assert_eq!(humanize_keystroke("secondary-r"), "⌘R");
    }

    #[test]
    fn every_action_has_a_shortcut() {
        for action in [
            GalleryAction::Quit,
            GalleryAction::Reload,
            GalleryAction::ToggleLoading,
            GalleryAction::ToggleDisabled,
        ] {
            assert!(GALLERY_SHORTCUTS.iter().any(|(_, a)| *a == action));
        }
    }
}
