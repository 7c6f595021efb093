use std::path::PathBuf;

use dirs_next::home_dir;

/// Expands a leading `~` (alone, or followed by `/` or `\`) to the user's home
/// directory. Surrounding whitespace is dropped.
///
/// When no home directory is known the path is returned with `~` intact.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let Some(home) = home_dir() else {
        return PathBuf::from(trimmed);
    };
    match trimmed.strip_prefix('~') {
        Some("") => home,
        Some(rest) => match rest.strip_prefix(['/', '\\']) {
            Some(relative) => home.join(relative),
            None => PathBuf::from(trimmed),
        },
        None => PathBuf::from(trimmed),
    }
}
