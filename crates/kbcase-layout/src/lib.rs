//! Keyboard layout: KLE parsing, switch holes and panel outlines.

mod context;
mod error;
pub mod holes;
pub mod kle;
mod layout;
pub mod split;

pub use context::LayoutContext;
pub use error::LayoutError;
pub use holes::HoleTemplates;
pub use kle::{from_file, parse_str, parse_value, Cell, KeyModifier};
pub use layout::{Key, Layout, LayoutMeta};
