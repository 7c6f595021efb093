//! Geometry of the sidebar in terminal cells.
//!
//! Widths and offsets are computed in layout units (pixels of the web
//! palette's style sheet) and converted at [`UNITS_PER_COLUMN`].

use ratatui::layout::Rect;

/// Layout units covered by one terminal column.
pub const UNITS_PER_COLUMN: f32 = 10.0;

const HEADER_HEIGHT: u16 = 3;
const SECTION_PADDING: u16 = 1;
const ROW_MARGIN: u16 = 1;
const CONTROL_WIDTH: u16 = 3;
/// Columns before the label: left padding, icon, gap.
pub const ROW_LABEL_INSET: u16 = 3;
/// Columns before the wordmark: left padding, three-column logo badge, gap.
pub const WORDMARK_INSET: u16 = 5;

pub fn units_to_columns(units: f32) -> u16 {
    (units.max(0.0) / UNITS_PER_COLUMN).round() as u16
}

/// Cell rectangles for every part of the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarLayout {
    /// Whole sidebar panel including the border column.
    pub panel: Rect,
    /// The one-column right border.
    pub border: Rect,
    pub header: Rect,
    pub logo: Rect,
    pub wordmark: Rect,
    /// The circular collapse control; may extend past the panel.
    pub collapse_control: Rect,
    pub primary_rows: Vec<Rect>,
    pub bottom_rows: Vec<Rect>,
    pub theme_row: Rect,
}

impl SidebarLayout {
    /// Lays the sidebar out against the left edge of `area`.
    ///
    /// `row_counts` is `(primary, bottom)`. Rows that do not fit in `area`
    /// collapse to zero-height rectangles rather than disappearing, so the row
    /// vectors always match the navigation tables.
    pub fn compute(area: Rect, width_units: f32, control_offset_units: f32, row_counts: (usize, usize)) -> Self {
        let width = units_to_columns(width_units).clamp(2, area.width.max(2)).min(area.width);
        let panel = Rect::new(area.x, area.y, width, area.height);
        let inner_width = width.saturating_sub(1);
        let border = Rect::new(panel.right().saturating_sub(1), panel.y, width.min(1), panel.height);

        let header = Rect::new(panel.x, panel.y, inner_width, HEADER_HEIGHT.min(panel.height));
        let header_row = header.y + header.height / 2;
        let logo = clip(Rect::new(panel.x + 1, header_row, 3, 1), header);
        let wordmark = clip(
            Rect::new(
                panel.x + WORDMARK_INSET,
                header_row,
                inner_width.saturating_sub(WORDMARK_INSET),
                1,
            ),
            header,
        );

        let control_right = panel.right() + units_to_columns(control_offset_units);
        let control_x = control_right.saturating_sub(CONTROL_WIDTH).max(area.x);
        let collapse_control = clip(Rect::new(control_x, header_row, CONTROL_WIDTH, 1), area);

        let row_width = inner_width.saturating_sub(ROW_MARGIN * 2);
        let row_at = |y: u16| clip(Rect::new(panel.x + ROW_MARGIN, y, row_width, 1), panel);

        let (primary_count, bottom_count) = row_counts;
        let primary_top = header.bottom() + SECTION_PADDING;
        let primary_rows: Vec<Rect> = (0..primary_count).map(|index| row_at(primary_top + index as u16)).collect();
        let primary_bottom = primary_top + primary_count as u16 + SECTION_PADDING;

        // Bottom section: its rows, the theme toggle and padding, pushed to the panel's end.
        let bottom_height = bottom_count as u16 + 1 + SECTION_PADDING * 2;
        let bottom_top = panel.bottom().saturating_sub(bottom_height).max(primary_bottom) + SECTION_PADDING;
        let bottom_rows: Vec<Rect> = (0..bottom_count).map(|index| row_at(bottom_top + index as u16)).collect();
        let theme_row = row_at(bottom_top + bottom_count as u16);

        Self {
            panel,
            border,
            header,
            logo,
            wordmark,
            collapse_control,
            primary_rows,
            bottom_rows,
            theme_row,
        }
    }
}

/// Intersection that keeps the position of an empty result.
fn clip(rect: Rect, bounds: Rect) -> Rect {
    let clipped = rect.intersection(bounds);
    if clipped.is_empty() { Rect::new(rect.x, rect.y, 0, 0) } else { clipped }
}

/// Area right of `row` where the label is drawn.
pub fn label_area(row: Rect) -> Rect {
    Rect::new(
        row.x + ROW_LABEL_INSET.min(row.width),
        row.y,
        row.width.saturating_sub(ROW_LABEL_INSET),
        row.height,
    )
}
