use std::fmt::Debug;

use ratatui::style::{Color, Style};
use sidebar_types::ThemeMode;

/// Semantic color roles used by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarRoles {
    pub sidebar_bg: Color,
    pub sidebar_hover: Color,
    pub sidebar_active: Color,

    pub text_default: Color,
    pub text_hover: Color,
    pub text_active: Color,
    pub text_logo: Color,

    pub button_bg: Color,
    pub button_active: Color,
}

impl SidebarRoles {
    /// All nine roles in declaration order, paired with their names.
    pub fn entries(&self) -> [(&'static str, Color); 9] {
        [
            ("sidebar_bg", self.sidebar_bg),
            ("sidebar_hover", self.sidebar_hover),
            ("sidebar_active", self.sidebar_active),
            ("text_default", self.text_default),
            ("text_hover", self.text_hover),
            ("text_active", self.text_active),
            ("text_logo", self.text_logo),
            ("button_bg", self.button_bg),
            ("button_active", self.button_active),
        ]
    }
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn mode(&self) -> ThemeMode;

    fn roles(&self) -> &SidebarRoles;

    /// Filled badge standing in for the logo image.
    fn logo_badge_style(&self) -> Style {
        Style::default().bg(self.roles().text_logo).fg(self.roles().sidebar_bg)
    }

    /// Half-block caps that round off the logo badge.
    fn logo_cap_style(&self) -> Style {
        Style::default().bg(self.roles().sidebar_bg).fg(self.roles().text_logo)
    }
}
