//! Embedded assets for common-button
//!
//! Uses rust-embed to bundle the spinner ring and custom icons at compile time,
//! layered over the gpui-component icon set.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Our own assets first so they can shadow stock icons
        if let Some(f) = Self::get(path) {
            return Ok(Some(f.data));
        }
        ComponentAssets::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            ComponentAssets::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Custom icon names for common-button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomIconName {
    /// Loading ring, rotated by the spinner
    Spinner,
    /// Outbound link marker
    ExternalLink,
    /// Floppy disk
    Save,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::Spinner => "icons/spinner.svg",
            CustomIconName::ExternalLink => "icons/external-link.svg",
            CustomIconName::Save => "icons/save.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_icons_are_embedded() {
        for icon in [
            CustomIconName::Spinner,
            CustomIconName::ExternalLink,
            CustomIconName::Save,
        ] {
            let path = icon.path();
            assert!(Assets::get(&path).is_some(), "missing asset {path}");
        }
    }
}
