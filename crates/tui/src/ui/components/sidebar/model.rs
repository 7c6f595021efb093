use sidebar_types::{NavigationEntry, ThemeMode};

use super::state::SidebarTarget;
use crate::ui::navigation::{BOTTOM_ROUTES, PRIMARY_ROUTES};

/// Content of one sidebar row, independent of how it is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowModel {
    pub target: SidebarTarget,
    /// Icon identifier, resolved through the active icon set.
    pub icon: &'static str,
    pub label: &'static str,
    /// Route path for navigation rows; `None` for the theme toggle.
    pub path: Option<&'static str>,
}

impl RowModel {
    fn navigation(target: SidebarTarget, entry: &NavigationEntry) -> Self {
        Self {
            target,
            icon: entry.icon,
            label: entry.label,
            path: Some(entry.path),
        }
    }
}

/// The theme toggle names the mode it switches *to*.
pub fn theme_toggle_row(current: ThemeMode) -> RowModel {
    let (icon, label) = match current {
        ThemeMode::Dark => ("sun", "Light Mode"),
        ThemeMode::Light => ("moon", "Dark Mode"),
    };
    RowModel {
        target: SidebarTarget::ThemeToggle,
        icon,
        label,
        path: None,
    }
}

pub fn primary_rows() -> impl Iterator<Item = RowModel> {
    PRIMARY_ROUTES
        .iter()
        .enumerate()
        .map(|(index, entry)| RowModel::navigation(SidebarTarget::Primary(index), entry))
}

pub fn bottom_rows() -> impl Iterator<Item = RowModel> {
    BOTTOM_ROUTES
        .iter()
        .enumerate()
        .map(|(index, entry)| RowModel::navigation(SidebarTarget::Bottom(index), entry))
}

/// Every row in render order: primary, bottom, then the theme toggle.
pub fn all_rows(theme: ThemeMode) -> Vec<RowModel> {
    primary_rows().chain(bottom_rows()).chain(std::iter::once(theme_toggle_row(theme))).collect()
}

/// Looks up the row behind an interactive target.
pub fn row_for(target: SidebarTarget, theme: ThemeMode) -> Option<RowModel> {
    match target {
        SidebarTarget::CollapseControl => None,
        SidebarTarget::Primary(index) => PRIMARY_ROUTES
            .get(index)
            .map(|entry| RowModel::navigation(target, entry)),
        SidebarTarget::Bottom(index) => BOTTOM_ROUTES
            .get(index)
            .map(|entry| RowModel::navigation(target, entry)),
        SidebarTarget::ThemeToggle => Some(theme_toggle_row(theme)),
    }
}
