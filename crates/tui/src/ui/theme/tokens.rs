use ratatui::style::Color;

// Sidebar color tokens, one set per palette. Names follow the custom
// properties of the web style sheet the palettes were designed against.

// Dark
pub const SIDEBAR_BACKGROUND_DARK_DEFAULT: Color = Color::Rgb(0x20, 0x21, 0x27); // #202127
pub const SIDEBAR_BACKGROUND_DARK_HOVER: Color = Color::Rgb(0x2D, 0x2E, 0x34); // #2D2E34
pub const SIDEBAR_BACKGROUND_DARK_ACTIVE: Color = Color::Rgb(0x39, 0x3A, 0x3F); // #393A3F
pub const TEXT_DARK_DEFAULT: Color = Color::Rgb(0xF0, 0xF2, 0xFF); // #f0f2ff
pub const TEXT_DARK_HOVER: Color = Color::Rgb(0xF0, 0xF2, 0xFF); // #f0f2ff
pub const TEXT_DARK_ACTIVE: Color = Color::Rgb(0xF0, 0xF2, 0xFF); // #f0f2ff
pub const TEXT_LOGO_DARK_DEFAULT: Color = Color::Rgb(0x3B, 0x82, 0xF6); // #3B82F6
pub const BUTTON_BACKGROUND_DARK_DEFAULT: Color = Color::Rgb(0x20, 0x21, 0x27); // #202127
pub const BUTTON_BACKGROUND_DARK_ACTIVE: Color = Color::Rgb(0x4B, 0x59, 0x66); // #4B5966

// Light
pub const SIDEBAR_BACKGROUND_LIGHT_DEFAULT: Color = Color::Rgb(0xFF, 0xFF, 0xFF); // #fff
pub const SIDEBAR_BACKGROUND_LIGHT_HOVER: Color = Color::Rgb(0xF0, 0xF2, 0xFF); // #f0f2ff
pub const SIDEBAR_BACKGROUND_LIGHT_ACTIVE: Color = Color::Rgb(0xF0, 0xF2, 0xFF); // #f0f2ff
pub const TEXT_LIGHT_DEFAULT: Color = Color::Rgb(0x97, 0xA5, 0xB9); // #97a5b9
pub const TEXT_LIGHT_HOVER: Color = Color::Rgb(0x09, 0x1B, 0x31); // #091b31
pub const TEXT_LIGHT_ACTIVE: Color = Color::Rgb(0x00, 0x00, 0xB5); // #0000b5
pub const TEXT_LOGO_LIGHT_DEFAULT: Color = Color::Rgb(0x00, 0x00, 0xB5); // #0000b5
pub const BUTTON_BACKGROUND_LIGHT_DEFAULT: Color = Color::Rgb(0xFF, 0xFF, 0xFF); // #fff
pub const BUTTON_BACKGROUND_LIGHT_ACTIVE: Color = Color::Rgb(0xE2, 0xE8, 0xF0); // #e2e8f0

// Outside the palettes: page backdrop and the sidebar's right border.
pub const PAGE_BACKGROUND: Color = Color::Rgb(0xE2, 0xE8, 0xF0); // #e2e8f0
pub const SIDEBAR_BORDER: Color = Color::Rgb(0xDD, 0xDD, 0xDD); // #ddd

/// A named color constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken {
    pub name: &'static str,
    pub color: Color,
}

const fn token(name: &'static str, color: Color) -> ColorToken {
    ColorToken { name, color }
}

/// Every palette token, dark first then light.
pub const TOKENS: [ColorToken; 18] = [
    token("color-sidebar-background-dark-default", SIDEBAR_BACKGROUND_DARK_DEFAULT),
    token("color-sidebar-background-dark-hover", SIDEBAR_BACKGROUND_DARK_HOVER),
    token("color-sidebar-background-dark-active", SIDEBAR_BACKGROUND_DARK_ACTIVE),
    token("color-text-dark-default", TEXT_DARK_DEFAULT),
    token("color-text-dark-hover", TEXT_DARK_HOVER),
    token("color-text-dark-active", TEXT_DARK_ACTIVE),
    token("color-text-logo-dark-default", TEXT_LOGO_DARK_DEFAULT),
    token("color-button-background-dark-default", BUTTON_BACKGROUND_DARK_DEFAULT),
    token("color-button-background-dark-active", BUTTON_BACKGROUND_DARK_ACTIVE),
    token("color-sidebar-background-light-default", SIDEBAR_BACKGROUND_LIGHT_DEFAULT),
    token("color-sidebar-background-light-hover", SIDEBAR_BACKGROUND_LIGHT_HOVER),
    token("color-sidebar-background-light-active", SIDEBAR_BACKGROUND_LIGHT_ACTIVE),
    token("color-text-light-default", TEXT_LIGHT_DEFAULT),
    token("color-text-light-hover", TEXT_LIGHT_HOVER),
    token("color-text-light-active", TEXT_LIGHT_ACTIVE),
    token("color-text-logo-light-default", TEXT_LOGO_LIGHT_DEFAULT),
    token("color-button-background-light-default", BUTTON_BACKGROUND_LIGHT_DEFAULT),
    token("color-button-background-light-active", BUTTON_BACKGROUND_LIGHT_ACTIVE),
];

/// Looks a token up by name, with or without the leading `--`.
pub fn lookup(name: &str) -> Option<Color> {
    let name = name.trim().trim_start_matches("--");
    TOKENS.iter().find(|token| token.name == name).map(|token| token.color)
}
