//! Theme styling module for the TUI UI layer.
//!
//! This module defines the two sidebar palettes (light and dark), the named
//! color tokens they are built from, the semantic roles the renderer reads, and
//! helper builders for Ratatui styles. Prefer these helpers over hard-coding
//! colors so a palette switch re-colors every element.

pub mod palettes;
pub mod roles;
pub mod theme_helpers;
pub mod tokens;

pub use palettes::{DarkTheme, LightTheme, palette};
pub use roles::{SidebarRoles, Theme};
