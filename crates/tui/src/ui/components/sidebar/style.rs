//! Pure style resolution for the sidebar.
//!
//! Every function here maps `(palette roles, sidebar state, interaction)` to
//! plain color/size attributes. Nothing in this module touches a terminal, so
//! the palette and state logic is testable without rendering.

use ratatui::style::Color;

use crate::ui::theme::SidebarRoles;
use crate::ui::theme::tokens::SIDEBAR_BORDER;

/// Sidebar width while expanded, in layout units.
pub const EXPANDED_WIDTH_UNITS: f32 = 240.0;
/// Sidebar width while collapsed, in layout units.
pub const COLLAPSED_WIDTH_UNITS: f32 = 60.0;
/// How far the collapse control's right edge sits past the sidebar edge.
pub const EXPANDED_CONTROL_OFFSET_UNITS: f32 = 16.0;
pub const COLLAPSED_CONTROL_OFFSET_UNITS: f32 = 48.0;

pub fn width_units(expanded: bool) -> f32 {
    if expanded { EXPANDED_WIDTH_UNITS } else { COLLAPSED_WIDTH_UNITS }
}

/// Text labels are fully opaque while expanded and invisible while collapsed.
pub fn label_opacity(expanded: bool) -> f32 {
    if expanded { 1.0 } else { 0.0 }
}

pub fn control_offset_units(expanded: bool) -> f32 {
    if expanded {
        EXPANDED_CONTROL_OFFSET_UNITS
    } else {
        COLLAPSED_CONTROL_OFFSET_UNITS
    }
}

/// Pointer state of a single interactive element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    pub hovered: bool,
    pub pressed: bool,
}

impl Interaction {
    pub const IDLE: Self = Self {
        hovered: false,
        pressed: false,
    };
    pub const HOVERED: Self = Self {
        hovered: true,
        pressed: false,
    };
    pub const PRESSED: Self = Self {
        hovered: true,
        pressed: true,
    };
}

/// Colors of the floating label shown beside a row while collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipStyle {
    pub background: Color,
    pub foreground: Color,
    pub pointer: Color,
}

/// Resolved attributes of a sidebar row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStyle {
    pub background: Color,
    pub foreground: Color,
    pub label_opacity: f32,
    pub tooltip: Option<TooltipStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerStyle {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub width_units: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    pub background: Color,
    pub wordmark: Color,
    pub wordmark_opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlStyle {
    pub background: Color,
    pub foreground: Color,
    pub offset_units: f32,
    /// Icon identifier; points the way the sidebar will move.
    pub icon: &'static str,
}

pub fn container_style(roles: &SidebarRoles, expanded: bool) -> ContainerStyle {
    ContainerStyle {
        background: roles.sidebar_bg,
        foreground: roles.text_default,
        border: SIDEBAR_BORDER,
        width_units: width_units(expanded),
    }
}

pub fn header_style(roles: &SidebarRoles, expanded: bool) -> HeaderStyle {
    HeaderStyle {
        background: roles.sidebar_bg,
        wordmark: roles.text_logo,
        wordmark_opacity: label_opacity(expanded),
    }
}

pub fn collapse_control_style(roles: &SidebarRoles, expanded: bool, interaction: Interaction) -> ControlStyle {
    let (background, foreground) = if interaction.pressed {
        (roles.button_active, roles.text_active)
    } else if interaction.hovered {
        (roles.sidebar_hover, roles.text_active)
    } else {
        (roles.button_bg, roles.text_hover)
    };
    ControlStyle {
        background,
        foreground,
        offset_units: control_offset_units(expanded),
        icon: if expanded { "angle-left" } else { "angle-right" },
    }
}

/// Tooltip colors escalate from the hover roles to the active roles while the
/// element is pressed.
fn tooltip_style(roles: &SidebarRoles, expanded: bool, interaction: Interaction) -> Option<TooltipStyle> {
    if expanded || !interaction.hovered {
        return None;
    }
    let (background, foreground) = if interaction.pressed {
        (roles.sidebar_active, roles.text_active)
    } else {
        (roles.sidebar_hover, roles.text_hover)
    };
    Some(TooltipStyle {
        background,
        foreground,
        pointer: background,
    })
}

/// Style of a primary or bottom navigation row.
pub fn nav_row_style(roles: &SidebarRoles, expanded: bool, interaction: Interaction) -> RowStyle {
    let (background, foreground) = if interaction.pressed {
        (roles.sidebar_active, roles.text_active)
    } else if interaction.hovered {
        (roles.sidebar_hover, roles.text_hover)
    } else {
        (roles.sidebar_bg, roles.text_default)
    };
    RowStyle {
        background,
        foreground,
        label_opacity: label_opacity(expanded),
        tooltip: tooltip_style(roles, expanded, interaction),
    }
}

/// Style of the theme toggle row. It sits on a filled background even at rest.
pub fn theme_toggle_style(roles: &SidebarRoles, expanded: bool, interaction: Interaction) -> RowStyle {
    let (background, foreground) = match (interaction.hovered || interaction.pressed, expanded) {
        (false, _) => (roles.sidebar_hover, roles.text_default),
        (true, true) if !interaction.pressed => (roles.sidebar_active, roles.text_hover),
        (true, _) => (roles.sidebar_active, roles.text_active),
    };
    RowStyle {
        background,
        foreground,
        label_opacity: label_opacity(expanded),
        tooltip: tooltip_style(roles, expanded, interaction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::palette;
    use sidebar_types::ThemeMode;

    fn light() -> SidebarRoles {
        *palette(ThemeMode::Light).roles()
    }

    fn dark() -> SidebarRoles {
        *palette(ThemeMode::Dark).roles()
    }

    #[test]
    fn geometry_follows_expanded_flag() {
        assert_eq!(container_style(&light(), true).width_units, 240.0);
        assert_eq!(container_style(&light(), false).width_units, 60.0);
        assert_eq!(header_style(&light(), true).wordmark_opacity, 1.0);
        assert_eq!(header_style(&light(), false).wordmark_opacity, 0.0);
        assert_eq!(collapse_control_style(&light(), true, Interaction::IDLE).offset_units, 16.0);
        assert_eq!(collapse_control_style(&light(), false, Interaction::IDLE).offset_units, 48.0);
    }

    #[test]
    fn control_icon_points_toward_the_next_state() {
        assert_eq!(collapse_control_style(&dark(), true, Interaction::IDLE).icon, "angle-left");
        assert_eq!(collapse_control_style(&dark(), false, Interaction::IDLE).icon, "angle-right");
    }

    #[test]
    fn nav_row_colors_track_interaction() {
        let roles = dark();
        let idle = nav_row_style(&roles, true, Interaction::IDLE);
        assert_eq!((idle.background, idle.foreground), (roles.sidebar_bg, roles.text_default));

        let hovered = nav_row_style(&roles, true, Interaction::HOVERED);
        assert_eq!((hovered.background, hovered.foreground), (roles.sidebar_hover, roles.text_hover));

        let pressed = nav_row_style(&roles, true, Interaction::PRESSED);
        assert_eq!((pressed.background, pressed.foreground), (roles.sidebar_active, roles.text_active));
    }

    #[test]
    fn tooltips_only_appear_when_collapsed_and_hovered() {
        let roles = light();
        assert!(nav_row_style(&roles, true, Interaction::HOVERED).tooltip.is_none());
        assert!(nav_row_style(&roles, false, Interaction::IDLE).tooltip.is_none());

        let hovered = nav_row_style(&roles, false, Interaction::HOVERED).tooltip.unwrap();
        assert_eq!(hovered.background, roles.sidebar_hover);
        assert_eq!(hovered.foreground, roles.text_hover);
        assert_eq!(hovered.pointer, roles.sidebar_hover);

        let pressed = nav_row_style(&roles, false, Interaction::PRESSED).tooltip.unwrap();
        assert_eq!(pressed.background, roles.sidebar_active);
        assert_eq!(pressed.foreground, roles.text_active);
        assert_eq!(pressed.pointer, roles.sidebar_active);
    }

    #[test]
    fn theme_toggle_rests_on_hover_background() {
        let roles = light();
        let idle = theme_toggle_style(&roles, true, Interaction::IDLE);
        assert_eq!((idle.background, idle.foreground), (roles.sidebar_hover, roles.text_default));

        let hovered = theme_toggle_style(&roles, true, Interaction::HOVERED);
        assert_eq!((hovered.background, hovered.foreground), (roles.sidebar_active, roles.text_hover));

        let collapsed_hover = theme_toggle_style(&roles, false, Interaction::HOVERED);
        assert_eq!(
            (collapsed_hover.background, collapsed_hover.foreground),
            (roles.sidebar_active, roles.text_active)
        );
        assert!(collapsed_hover.tooltip.is_some());
    }

    #[test]
    fn collapse_control_uses_button_roles() {
        let roles = dark();
        let idle = collapse_control_style(&roles, true, Interaction::IDLE);
        assert_eq!((idle.background, idle.foreground), (roles.button_bg, roles.text_hover));
        let pressed = collapse_control_style(&roles, true, Interaction::PRESSED);
        assert_eq!(pressed.background, roles.button_active);
    }

    #[test]
    fn label_opacity_is_shared_by_every_row_kind() {
        let roles = light();
        for expanded in [true, false] {
            let expected = label_opacity(expanded);
            assert_eq!(nav_row_style(&roles, expanded, Interaction::IDLE).label_opacity, expected);
            assert_eq!(theme_toggle_style(&roles, expanded, Interaction::IDLE).label_opacity, expected);
        }
    }
}
