//! # Sidebar TUI Library
//!
//! A collapsible, themeable navigation sidebar for the terminal, built on
//! Ratatui.
//!
//! ## Key Features
//!
//! - Expanded and collapsed widths with animated transitions
//! - Light and dark palettes, with the choice persisted across sessions
//! - Hover, press and click feedback driven by the mouse
//! - Tooltips for collapsed rows
//!
//! ## Architecture
//!
//! `App` holds all state; components render from it and return `Effect`s
//! that `cmd` executes against the preference store.

pub mod app;
pub mod cmd;
pub mod ui;

use std::sync::Arc;

use anyhow::Result;
use sidebar_util::PreferenceStore;

pub use app::{App, Branding, SharedCtx, SidebarOptions};

/// Runs the sidebar until the user quits.
///
/// The theme preference is read from `store` once, before the first frame,
/// and every theme change is written back to it.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up, drawn to, or
/// restored.
pub async fn run(store: Arc<dyn PreferenceStore>, options: SidebarOptions) -> Result<()> {
    let app = App::new(store, options);
    ui::runtime::run_app(app).await
}
