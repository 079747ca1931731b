//! Design Studio - design-token systems applied, checked, animated and exported
//!
//! This library loads design systems from JSON, writes their tokens to a style
//! root as CSS custom properties, answers allow-list questions and resolves
//! per-component animations.

pub mod config;
pub mod designs;
pub mod error;
pub mod export;
pub mod gallery;
pub mod logging;
pub mod studio;
pub mod theme;
pub mod utils;

pub use error::{DesignStudioError, Result};
pub use studio::DesignStudio;
