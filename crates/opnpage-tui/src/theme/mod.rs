//! Centralized theme system for the dashboard.
//!
//! This module provides:
//! - `palette` - Light and dark color sets
//! - `styles` - Semantic style builder functions over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
