//! Shared helpers for the sidebar workspace: the preference store that
//! remembers the theme between sessions and small path utilities.

pub mod path_processing;
pub mod preferences;

pub use path_processing::*;
pub use preferences::*;
