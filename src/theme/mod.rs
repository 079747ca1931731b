//! Theme module - applying design tokens to a style root
//!
//! # Module Structure
//!
//! - `port` - the `ThemePort` trait and the in-memory `StyleRoot`
//! - `apply` - `apply_design_tokens`, the variable naming rules

mod apply;
mod port;

pub use apply::apply_design_tokens;
pub use port::{StyleRoot, ThemePort};

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
