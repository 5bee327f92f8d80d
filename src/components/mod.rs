//! Components - Reusable UI Components
//!
//! Pure UI components. Nothing here does I/O.

pub mod primitives;

pub use primitives::button::{
    ButtonAttributes, ButtonSize, ButtonTree, ClassList, CommonButton, FillMode, ThemeColor,
};
pub use primitives::spinner::Spinner;
