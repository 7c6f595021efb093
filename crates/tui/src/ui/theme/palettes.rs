use sidebar_types::ThemeMode;

use super::roles::{SidebarRoles, Theme};
use super::tokens::*;

/// Light palette: white panel, slate text, deep blue accents.
#[derive(Debug, Clone)]
pub struct LightTheme {
    roles: SidebarRoles,
}

impl LightTheme {
    pub const fn new() -> Self {
        Self {
            roles: SidebarRoles {
                sidebar_bg: SIDEBAR_BACKGROUND_LIGHT_DEFAULT,
                sidebar_hover: SIDEBAR_BACKGROUND_LIGHT_HOVER,
                sidebar_active: SIDEBAR_BACKGROUND_LIGHT_ACTIVE,

                text_default: TEXT_LIGHT_DEFAULT,
                text_hover: TEXT_LIGHT_HOVER,
                text_active: TEXT_LIGHT_ACTIVE,
                text_logo: TEXT_LOGO_LIGHT_DEFAULT,

                button_bg: BUTTON_BACKGROUND_LIGHT_DEFAULT,
                button_active: BUTTON_BACKGROUND_LIGHT_ACTIVE,
            },
        }
    }
}

impl Default for LightTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for LightTheme {
    fn mode(&self) -> ThemeMode {
        ThemeMode::Light
    }

    fn roles(&self) -> &SidebarRoles {
        &self.roles
    }
}

/// Dark palette: charcoal panel with near-white text and a blue wordmark.
#[derive(Debug, Clone)]
pub struct DarkTheme {
    roles: SidebarRoles,
}

impl DarkTheme {
    pub const fn new() -> Self {
        Self {
            roles: SidebarRoles {
                sidebar_bg: SIDEBAR_BACKGROUND_DARK_DEFAULT,
                sidebar_hover: SIDEBAR_BACKGROUND_DARK_HOVER,
                sidebar_active: SIDEBAR_BACKGROUND_DARK_ACTIVE,

                text_default: TEXT_DARK_DEFAULT,
                text_hover: TEXT_DARK_HOVER,
                text_active: TEXT_DARK_ACTIVE,
                text_logo: TEXT_LOGO_DARK_DEFAULT,

                button_bg: BUTTON_BACKGROUND_DARK_DEFAULT,
                button_active: BUTTON_BACKGROUND_DARK_ACTIVE,
            },
        }
    }
}

impl Default for DarkTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DarkTheme {
    fn mode(&self) -> ThemeMode {
        ThemeMode::Dark
    }

    fn roles(&self) -> &SidebarRoles {
        &self.roles
    }
}

static LIGHT: LightTheme = LightTheme::new();
static DARK: DarkTheme = DarkTheme::new();

/// Returns the palette for `mode`.
pub fn palette(mode: ThemeMode) -> &'static dyn Theme {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}
