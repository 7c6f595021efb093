use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
};

use super::tokens::PAGE_BACKGROUND;

/// Mix `foreground` over `background` with the given opacity (0.0..=1.0).
///
/// Only RGB colors are interpolated; for anything else the nearer endpoint is
/// returned.
pub fn blend_rgb(background: Color, foreground: Color, opacity: f32) -> Color {
    let alpha = opacity.clamp(0.0, 1.0);
    match (background, foreground) {
        (Color::Rgb(br, bg, bb), Color::Rgb(fr, fg, fb)) => {
            let mix = |b: u8, f: u8| (b as f32 + (f as f32 - b as f32) * alpha).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(mix(br, fr), mix(bg, fg), mix(bb, fb))
        }
        _ if alpha >= 0.5 => foreground,
        _ => background,
    }
}

/// Style for a text label whose visibility follows `opacity`.
pub fn faded_style(background: Color, foreground: Color, opacity: f32) -> Style {
    Style::default().bg(background).fg(blend_rgb(background, foreground, opacity))
}

/// Paints `area` with `style`, clearing any previous symbols.
pub fn fill(buffer: &mut Buffer, area: Rect, style: Style) {
    let area = area.intersection(buffer.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buffer[(x, y)].reset();
            buffer[(x, y)].set_style(style);
        }
    }
}

/// Muted text on the page backdrop, used for hints.
pub fn hint_style() -> Style {
    Style::default().bg(PAGE_BACKGROUND).fg(Color::Rgb(0x64, 0x74, 0x8B))
}

/// Emphasised key names inside the hint bar.
pub fn hint_key_style() -> Style {
    hint_style().fg(Color::Rgb(0x09, 0x1B, 0x31))
}

/// Builds `key description` span pairs for the hint bar.
pub fn build_hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, hint_key_style()));
        spans.push(Span::styled(*description, hint_style()));
    }
    spans
}
