//! Centralized theme system.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `swatch` - Terminal colors for variant color names

pub mod palette;
pub mod styles;
pub mod swatch;
