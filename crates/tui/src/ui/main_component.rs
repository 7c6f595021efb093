use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};
use sidebar_types::Effect;

use super::components::{Component, SidebarComponent};
use super::theme::theme_helpers as th;
use super::theme::tokens::PAGE_BACKGROUND;
use crate::app::App;

/// Root view: the page backdrop, the sidebar pinned to the left edge and a
/// single hint line along the bottom.
#[derive(Debug, Default)]
pub struct MainView {
    pub sidebar_view: SidebarComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Area for the hint line: the bottom row, right of the sidebar panel.
    fn hint_area(app: &App, area: Rect) -> Rect {
        let panel = app.sidebar.last_area;
        let x = (panel.right() + 1).max(area.x);
        if area.height == 0 || x >= area.right() {
            return Rect::new(x, area.y, 0, 0);
        }
        Rect::new(x, area.bottom() - 1, area.right() - x, 1)
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![Effect::Quit],
            _ => self.sidebar_view.handle_key_events(app, key),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        self.sidebar_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        frame.render_widget(Block::default().style(Style::default().bg(PAGE_BACKGROUND)), area);

        self.sidebar_view.render(frame, area, app);

        let hint_area = Self::hint_area(app, area);
        if !hint_area.is_empty() {
            let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(th::hint_style());
            frame.render_widget(hints, hint_area);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let mut hint_spans = vec![Span::styled("Hints: ", th::hint_style())];
        hint_spans.extend(self.sidebar_view.get_hint_spans(app));
        hint_spans.extend(th::build_hint_spans(&[(" q", " Quit ")]));
        hint_spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SidebarOptions;
    use crossterm::event::KeyModifiers;
    use sidebar_util::UserPreferences;
    use std::sync::Arc;

    #[test]
    fn quit_keys_request_quit() {
        let mut app = App::new(Arc::new(UserPreferences::ephemeral()), SidebarOptions::default());
        let mut view = MainView::new();
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let effects = view.handle_key_events(&mut app, KeyEvent::new(code, KeyModifiers::NONE));
            assert_eq!(effects, vec![Effect::Quit]);
        }
    }

    #[test]
    fn hint_line_sits_right_of_the_panel() {
        let mut app = App::new(Arc::new(UserPreferences::ephemeral()), SidebarOptions::default());
        app.sidebar.last_area = Rect::new(0, 0, 24, 24);
        assert_eq!(MainView::hint_area(&app, Rect::new(0, 0, 80, 24)), Rect::new(25, 23, 55, 1));
    }
}
