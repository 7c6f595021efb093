use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

/// Preference key under which the active theme is persisted.
pub const THEME_PREFERENCE_KEY: &str = "sidebar-theme";

/// The two visual variants the sidebar can render in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Literal written to and read from the preference store.
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The mode a theme toggle switches to.
    pub const fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Parses a stored value. Only the exact literals `light` and `dark` are
    /// accepted; anything else is treated as absent.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a recognised theme literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme mode: {:?}", self.0)
    }
}

impl std::error::Error for UnknownThemeMode {}

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_stored(s).ok_or_else(|| UnknownThemeMode(s.to_string()))
    }
}

/// A single static row of the sidebar: label, icon identifier and path.
///
/// The path is informational only; activating an entry does not navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
}

impl NavigationEntry {
    pub const fn new(label: &'static str, icon: &'static str, path: &'static str) -> Self {
        Self { label, icon, path }
    }
}

/// Messages that can be sent to update the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Flip between the expanded and collapsed widths
    ToggleExpanded,
    /// Flip between the light and dark palettes
    ToggleTheme,
    /// Periodic UI tick carrying the time elapsed since the previous one
    Tick(Duration),
    /// Terminal resized
    Resize(u16, u16),
    /// Leave the application
    Quit,
}

/// Side effects that can be triggered by state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the theme to the preference store
    PersistTheme(ThemeMode),
    /// Stop the event loop
    Quit,
}
