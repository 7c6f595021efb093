//! Icon lookup by identifier.
//!
//! The sidebar refers to icons by the identifiers of a web icon font
//! (`house`, `chart-line`, ...). An [`IconSet`] turns an identifier into a
//! single-column glyph the terminal can draw.

use std::fmt::Debug;

/// Resolves icon identifiers to glyphs.
pub trait IconSet: Send + Sync + Debug {
    /// Glyph for `name`, if this set knows it.
    fn glyph(&self, name: &str) -> Option<&'static str>;

    /// Glyph drawn for identifiers the set does not know.
    fn placeholder(&self) -> &'static str {
        "?"
    }

    fn resolve(&self, name: &str) -> &'static str {
        self.glyph(name).unwrap_or_else(|| self.placeholder())
    }
}

/// Unicode symbols; needs a font with the Miscellaneous Symbols block.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeIcons;

impl IconSet for UnicodeIcons {
    fn glyph(&self, name: &str) -> Option<&'static str> {
        let glyph = match name {
            "house" => "⌂",
            "chart-line" => "∿",
            "chart-column" => "▥",
            "wallet" => "◫",
            "chart-pie" => "◔",
            "envelope" => "✉",
            "sliders" => "☰",
            "phone-volume" => "☏",
            "sun" => "☀",
            "moon" => "☾",
            "angle-left" => "‹",
            "angle-right" => "›",
            "caret-left" => "◀",
            _ => return None,
        };
        Some(glyph)
    }

    fn placeholder(&self) -> &'static str {
        "·"
    }
}

/// Plain ASCII stand-ins for terminals without symbol fonts.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiIcons;

impl IconSet for AsciiIcons {
    fn glyph(&self, name: &str) -> Option<&'static str> {
        let glyph = match name {
            "house" => "H",
            "chart-line" => "~",
            "chart-column" => "#",
            "wallet" => "$",
            "chart-pie" => "%",
            "envelope" => "@",
            "sliders" => "=",
            "phone-volume" => "&",
            "sun" => "*",
            "moon" => "C",
            "angle-left" => "<",
            "angle-right" => ">",
            "caret-left" => "<",
            _ => return None,
        };
        Some(glyph)
    }
}
