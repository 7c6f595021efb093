//! Effect execution.
//!
//! Components and `App::update` describe side effects as [`Effect`] values;
//! this module carries them out against the shared context.

use sidebar_types::{Effect, Msg, THEME_PREFERENCE_KEY};
use tracing::{debug, warn};

use crate::app::App;

/// Carries out `effects` in order.
///
/// Failed preference writes are logged and otherwise ignored; the in-memory
/// theme stays authoritative for the session.
pub fn run_from_effects(app: &mut App, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::PersistTheme(mode) => match app.ctx.store.set(THEME_PREFERENCE_KEY, mode.as_str()) {
                Ok(()) => debug!(theme = %mode, "persisted theme"),
                Err(error) => warn!(theme = %mode, error = %error, "failed to persist theme"),
            },
            Effect::Quit => app.should_quit = true,
        }
    }
}

/// Applies `msg` to the app and runs whatever effects it produces.
pub fn dispatch(app: &mut App, msg: &Msg) {
    let effects = app.update(msg);
    run_from_effects(app, effects);
}
