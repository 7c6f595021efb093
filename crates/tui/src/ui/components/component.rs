//! Component system for the sidebar TUI.
//!
//! This module defines the Component trait. Components are self-contained UI
//! elements that handle their own events and rendering while integrating with
//! the application through a consistent interface.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};
use sidebar_types::Effect;

use crate::app::App;

/// A trait representing a UI component with its own behavior.
///
/// Components handle localized events, update the state they own inside
/// [`App`], and render themselves into a provided `Rect`, reporting any side
/// effects back to the runtime as [`Effect`]s.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: components receive input through `handle_key_events()`
///    and `handle_mouse_events()`
/// 2. **Rendering**: `render()` draws the component into the provided frame area
pub trait Component {
    /// Handle key events routed to this component.
    ///
    /// # Returns
    ///
    /// Vector of effects that the runtime should process
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    ///
    /// Components should handle clicks, moves, and other pointer interactions
    /// that are relevant to their functionality.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should not change user-facing state here; recording
    /// the rendered geometry for later hit testing is fine.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints describing what this component responds to.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}
