//! Class List - Ordered style tokens for a button

use std::fmt;

use gpui::SharedString;

use super::{FillMode, ThemeColor};
use crate::constants::{BASE_CLASS, FULL_WIDTH_CLASS, LOADING_CLASS};

/// Ordered, space-joined list of class tokens.
///
/// Order is fixed: base class, theme color, fill mode, `full-width`,
/// `loading`, then any custom tokens. Empty tokens never appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<SharedString>,
}

impl ClassList {
    /// Build the class list for a button
    pub fn for_button(
        theme_color: ThemeColor,
        fill_mode: FillMode,
        full_width: bool,
        loading: bool,
        custom_class: Option<&str>,
    ) -> Self {
        let mut list = Self::default();
        list.push(BASE_CLASS);
        list.push(theme_color.class_name());
        list.push(fill_mode.class_name());
        if full_width {
            list.push(FULL_WIDTH_CLASS);
        }
        if loading {
            list.push(LOADING_CLASS);
        }
        if let Some(custom) = custom_class {
            for token in custom.split_whitespace() {
                list.push(token.to_string());
            }
        }
        list
    }

    fn push(&mut self, token: impl Into<SharedString>) {
        let token = token.into();
        if !token.is_empty() {
            self.tokens.push(token);
        }
    }

    /// Whether the list carries `token`
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t.as_ref() == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}
