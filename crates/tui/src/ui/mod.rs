//! UI rendering module for the sidebar TUI.
//!
//! This module provides the component tree, palettes, icon sets, transitions
//! and the runtime that drives them.

pub mod components;
pub mod icons;
pub mod main_component;
pub mod navigation;
pub mod runtime;
pub mod theme;
pub mod transition;
