use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
};
use sidebar_types::Effect;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use super::layout::{SidebarLayout, label_area};
use super::model::{self, RowModel};
use super::state::SidebarTarget;
use super::style::{self, RowStyle};
use crate::app::{App, DEFAULT_LOGO_GLYPH, fits_badge};
use crate::ui::components::Component;
use crate::ui::icons::IconSet;
use crate::ui::navigation::{BOTTOM_ROUTES, PRIMARY_ROUTES};
use crate::ui::theme::theme_helpers::{self as th, faded_style, fill};
use crate::ui::theme::tokens::PAGE_BACKGROUND;
use crate::ui::theme::{SidebarRoles, Theme};

/// The collapsible, themeable navigation sidebar.
///
/// Renders the header (logo, wordmark and collapse control), the primary and
/// bottom navigation rows, and the theme toggle. Reacts to the pointer (hover,
/// press, click) and to a small set of keys. All state lives in
/// [`App::sidebar`](crate::app::App::sidebar).
#[derive(Debug, Default)]
pub struct SidebarComponent;

impl SidebarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Performs the click action of `target`.
    fn activate(app: &mut App, target: SidebarTarget) -> Vec<Effect> {
        match target {
            SidebarTarget::CollapseControl => {
                app.sidebar.toggle_expanded();
                Vec::new()
            }
            SidebarTarget::ThemeToggle => app.sidebar.toggle_theme(),
            SidebarTarget::Primary(_) | SidebarTarget::Bottom(_) => {
                if let Some(row) = model::row_for(target, app.sidebar.theme()) {
                    debug!(label = row.label, path = row.path.unwrap_or_default(), "navigation entry activated");
                }
                Vec::new()
            }
        }
    }

    fn render_header(buffer: &mut Buffer, layout: &SidebarLayout, app: &App, theme: &dyn Theme) {
        let branding = &app.ctx.branding;
        if layout.logo.width >= 3 {
            let (x, y) = (layout.logo.x, layout.logo.y);
            buffer.set_string(x, y, "▐", theme.logo_cap_style());
            let glyph = if fits_badge(&branding.logo_glyph) {
                branding.logo_glyph.as_str()
            } else {
                DEFAULT_LOGO_GLYPH
            };
            buffer.set_string(x + 1, y, glyph, theme.logo_badge_style());
            buffer.set_string(x + 2, y, "▌", theme.logo_cap_style());
        }

        let header_style = style::header_style(theme.roles(), app.sidebar.expanded());
        let wordmark_style = faded_style(header_style.background, header_style.wordmark, app.sidebar.label_opacity())
            .add_modifier(Modifier::BOLD);
        if !layout.wordmark.is_empty() {
            buffer.set_stringn(
                layout.wordmark.x,
                layout.wordmark.y,
                &branding.wordmark,
                layout.wordmark.width as usize,
                wordmark_style,
            );
        }
    }

    fn render_row(buffer: &mut Buffer, area: Rect, row: &RowModel, row_style: &RowStyle, opacity: f32, icons: &dyn IconSet) {
        if area.is_empty() {
            return;
        }
        let base = Style::default().bg(row_style.background).fg(row_style.foreground);
        fill(buffer, area, base);
        if area.width >= 2 {
            buffer.set_stringn(area.x + 1, area.y, icons.resolve(row.icon), 1, base);
        }
        let label = label_area(area);
        if !label.is_empty() {
            let label_style = faded_style(row_style.background, row_style.foreground, opacity);
            buffer.set_stringn(label.x, label.y, row.label, label.width as usize, label_style);
        }
    }

    fn render_collapse_control(buffer: &mut Buffer, area: Rect, app: &App, roles: &SidebarRoles) {
        if area.is_empty() {
            return;
        }
        let control = style::collapse_control_style(
            roles,
            app.sidebar.expanded(),
            app.sidebar.interaction(SidebarTarget::CollapseControl),
        );
        let control_style = Style::default().bg(control.background).fg(control.foreground);
        fill(buffer, area, control_style);
        let glyph = app.ctx.icons.resolve(control.icon);
        buffer.set_stringn(area.x + area.width / 2, area.y, glyph, 1, control_style);
    }

    /// Floating label to the right of a hovered row while collapsed.
    fn render_tooltip(buffer: &mut Buffer, panel: Rect, row_area: Rect, row: &RowModel, row_style: &RowStyle, app: &App) {
        let Some(tooltip) = row_style.tooltip else {
            return;
        };
        let x = panel.right() + 1;
        let y = row_area.y;
        let bounds = buffer.area;
        if x >= bounds.right() || y >= bounds.bottom() {
            return;
        }
        let pointer = app.ctx.icons.resolve("caret-left");
        buffer.set_string(x, y, pointer, Style::default().bg(PAGE_BACKGROUND).fg(tooltip.pointer));

        let text = format!(" {} ", row.label);
        let available = bounds.right().saturating_sub(x + 1);
        let tooltip_area = Rect::new(x + 1, y, (text.width() as u16).min(available), 1);
        let tooltip_style = Style::default().bg(tooltip.background).fg(tooltip.foreground);
        fill(buffer, tooltip_area, tooltip_style);
        buffer.set_stringn(tooltip_area.x, y, &text, tooltip_area.width as usize, tooltip_style);
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.sidebar.toggle_expanded();
                Vec::new()
            }
            KeyCode::Char('[') => {
                app.sidebar.toggle_expanded();
                Vec::new()
            }
            KeyCode::Char('t') if key.modifiers.is_empty() => app.sidebar.toggle_theme(),
            _ => Vec::new(),
        }
    }

    /// Tracks hover and press, and activates an element when the left button
    /// is released over the same element it went down on.
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let target = app.sidebar.target_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                app.sidebar.hovered = target;
                Vec::new()
            }
            MouseEventKind::Down(MouseButton::Left) => {
                app.sidebar.hovered = target;
                app.sidebar.pressed = target;
                Vec::new()
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed = app.sidebar.pressed.take();
                app.sidebar.hovered = target;
                match (pressed, target) {
                    (Some(pressed), Some(released)) if pressed == released => Self::activate(app, released),
                    _ => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme();
        let roles = *theme.roles();
        let layout = SidebarLayout::compute(
            area,
            app.sidebar.width_units(),
            app.sidebar.control_offset_units(),
            (PRIMARY_ROUTES.len(), BOTTOM_ROUTES.len()),
        );
        let expanded = app.sidebar.expanded();
        let opacity = app.sidebar.label_opacity();
        let buffer = frame.buffer_mut();

        let container = style::container_style(&roles, expanded);
        fill(buffer, layout.panel, Style::default().bg(container.background).fg(container.foreground));
        for y in layout.border.top()..layout.border.bottom() {
            buffer.set_string(
                layout.border.x,
                y,
                "│",
                Style::default().bg(container.background).fg(container.border),
            );
        }

        Self::render_header(buffer, &layout, app, theme);

        let mut target_areas = Vec::with_capacity(PRIMARY_ROUTES.len() + BOTTOM_ROUTES.len() + 2);
        target_areas.push((SidebarTarget::CollapseControl, layout.collapse_control));

        let row_areas = layout
            .primary_rows
            .iter()
            .chain(layout.bottom_rows.iter())
            .chain(std::iter::once(&layout.theme_row));
        let rows: Vec<(RowModel, Rect)> = model::all_rows(app.sidebar.theme()).into_iter().zip(row_areas.copied()).collect();

        let mut tooltip = None;
        for (row, row_area) in &rows {
            let interaction = app.sidebar.interaction(row.target);
            let row_style = match row.target {
                SidebarTarget::ThemeToggle => style::theme_toggle_style(&roles, expanded, interaction),
                _ => style::nav_row_style(&roles, expanded, interaction),
            };
            Self::render_row(buffer, *row_area, row, &row_style, opacity, &*app.ctx.icons);
            if row_style.tooltip.is_some() {
                tooltip = Some((*row, *row_area, row_style));
            }
            target_areas.push((row.target, *row_area));
        }

        Self::render_collapse_control(buffer, layout.collapse_control, app, &roles);
        if let Some((row, row_area, row_style)) = tooltip {
            Self::render_tooltip(buffer, layout.panel, row_area, &row, &row_style, app);
        }

        app.sidebar.last_area = layout.panel;
        app.sidebar.target_areas = target_areas;
    }

    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&[(" Ctrl+B", " Collapse "), (" t", " Theme ")])
    }
}
