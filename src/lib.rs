//! CommonButton Library
//!
//! A styled GPUI button that wraps the gpui-component `Button`, adds a loading
//! spinner and a start icon slot, and renders as a link when given an `href`.
//! Also ships the stylesheet that turns its class tokens into colors, and the
//! gallery application that showcases it.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod states;
pub mod theme;
pub mod views;

pub use components::{ButtonAttributes, ButtonSize, ButtonTree, CommonButton, FillMode, ThemeColor};
pub use theme::{ButtonStyle, Stylesheet};
