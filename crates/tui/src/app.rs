//! Application state for the sidebar TUI.
//!
//! This module holds the top-level `App`, the shared context it carries
//! (preference store, branding, icon set) and the start-up options supplied by
//! the binary.

use std::sync::Arc;

use sidebar_types::{Effect, Msg};
use sidebar_util::PreferenceStore;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::ui::components::sidebar::SidebarState;
use crate::ui::icons::{AsciiIcons, IconSet, UnicodeIcons};
use crate::ui::theme::{Theme, palette};

/// Product naming shown in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    /// Text beside the logo.
    pub wordmark: String,
    /// Accessible name of the logo; used as the terminal title.
    pub logo_label: String,
    /// Glyph drawn inside the logo badge.
    pub logo_glyph: String,
}

impl Branding {
    pub fn new(wordmark: impl Into<String>) -> Self {
        let wordmark = wordmark.into();
        Self {
            logo_label: format!("{wordmark} logo"),
            logo_glyph: DEFAULT_LOGO_GLYPH.to_string(),
            wordmark,
        }
    }

    /// Replaces the badge glyph. The badge is one cell wide, so anything that
    /// does not occupy exactly one column is refused and the current glyph is
    /// kept.
    pub fn set_logo_glyph(&mut self, glyph: &str) -> bool {
        if !fits_badge(glyph) {
            return false;
        }
        self.logo_glyph = glyph.to_string();
        true
    }
}

pub const DEFAULT_LOGO_GLYPH: &str = "◆";

/// True when `glyph` occupies exactly one terminal column.
pub fn fits_badge(glyph: &str) -> bool {
    glyph.width() == 1
}

impl Default for Branding {
    fn default() -> Self {
        Self::new("TensorFlow")
    }
}

/// Start-up options for the sidebar.
#[derive(Debug, Clone, Default)]
pub struct SidebarOptions {
    pub branding: Branding,
    /// Start collapsed for this session. Not persisted.
    pub start_collapsed: bool,
    /// Resolve icons through the ASCII set instead of Unicode symbols.
    pub ascii_icons: bool,
}

/// Cross-cutting shared context owned by the App.
#[derive(Debug)]
pub struct SharedCtx {
    /// Durable key-value store holding the theme preference
    pub store: Arc<dyn PreferenceStore>,
    pub branding: Branding,
    pub icons: Box<dyn IconSet>,
}

impl SharedCtx {
    pub fn new(store: Arc<dyn PreferenceStore>, options: &SidebarOptions) -> Self {
        let icons: Box<dyn IconSet> = if options.ascii_icons {
            Box::new(AsciiIcons)
        } else {
            Box::new(UnicodeIcons)
        };
        Self {
            store,
            branding: options.branding.clone(),
            icons,
        }
    }
}

/// The main application state.
#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub sidebar: SidebarState,
    /// Last known terminal size
    pub terminal_size: (u16, u16),
    /// Set once a quit has been requested
    pub should_quit: bool,
}

impl App {
    pub fn new(store: Arc<dyn PreferenceStore>, options: SidebarOptions) -> Self {
        Self {
            ctx: SharedCtx::new(store, &options),
            sidebar: SidebarState::with_expanded(!options.start_collapsed),
            terminal_size: (0, 0),
            should_quit: false,
        }
    }

    /// Palette for the current theme.
    pub fn theme(&self) -> &'static dyn Theme {
        palette(self.sidebar.theme())
    }

    /// Runs the one-time mount effect: restore the persisted theme and report
    /// it back for persistence.
    pub fn mount(&mut self) -> Vec<Effect> {
        self.sidebar.mount(self.ctx.store.as_ref())
    }

    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::ToggleExpanded => {
                self.sidebar.toggle_expanded();
                Vec::new()
            }
            Msg::ToggleTheme => self.sidebar.toggle_theme(),
            Msg::Tick(elapsed) => {
                self.sidebar.advance(*elapsed);
                Vec::new()
            }
            Msg::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.terminal_size = (*width, *height);
                Vec::new()
            }
            Msg::Quit => vec![Effect::Quit],
        }
    }

    pub fn is_animating(&self) -> bool {
        self.sidebar.is_animating()
    }
}
