use std::time::Duration;

use ratatui::layout::Rect;
use sidebar_types::{Effect, THEME_PREFERENCE_KEY, ThemeMode};
use sidebar_util::PreferenceStore;
use tracing::{debug, warn};

use super::style::{self, Interaction};
use crate::ui::transition::Transition;

const WIDTH_TRANSITION: Duration = Duration::from_millis(300);
const LABEL_TRANSITION: Duration = Duration::from_millis(300);
const CONTROL_TRANSITION: Duration = Duration::from_millis(200);

/// Interactive elements of the sidebar that react to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SidebarTarget {
    CollapseControl,
    Primary(usize),
    Bottom(usize),
    ThemeToggle,
}

/// State for the sidebar.
///
/// Owns the two user-facing flags (`expanded` and the theme), the transitions
/// that animate between their visual states, and the pointer bookkeeping used
/// for hover, press and hit testing. The flags only change through
/// [`toggle_expanded`](Self::toggle_expanded), [`toggle_theme`](Self::toggle_theme)
/// and the one-time [`mount`](Self::mount).
#[derive(Debug, Clone)]
pub struct SidebarState {
    expanded: bool,
    theme: ThemeMode,
    mounted: bool,
    width: Transition,
    label_opacity: Transition,
    control_offset: Transition,
    /// Element under the mouse pointer, if any.
    pub hovered: Option<SidebarTarget>,
    /// Element the left button went down on, until it is released.
    pub pressed: Option<SidebarTarget>,
    /// Last rendered panel area; used for hit testing.
    pub last_area: Rect,
    /// Last rendered area of each interactive element, topmost first.
    pub target_areas: Vec<(SidebarTarget, Rect)>,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarState {
    /// Expanded, light, not yet mounted.
    pub fn new() -> Self {
        Self::with_expanded(true)
    }

    /// Starts in the given width state with the default light theme.
    pub fn with_expanded(expanded: bool) -> Self {
        Self {
            expanded,
            theme: ThemeMode::default(),
            mounted: false,
            width: Transition::settled(style::width_units(expanded), WIDTH_TRANSITION),
            label_opacity: Transition::settled(style::label_opacity(expanded), LABEL_TRANSITION),
            control_offset: Transition::settled(style::control_offset_units(expanded), CONTROL_TRANSITION),
            hovered: None,
            pressed: None,
            last_area: Rect::default(),
            target_areas: Vec::new(),
        }
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Reads the persisted theme once and reports the resulting theme for
    /// persistence.
    ///
    /// Only the exact literals `light` and `dark` are honoured; anything else
    /// keeps the current theme. Calling this again is a no-op.
    pub fn mount(&mut self, store: &dyn PreferenceStore) -> Vec<Effect> {
        if self.mounted {
            debug!("sidebar already mounted; skipping preference read");
            return Vec::new();
        }
        self.mounted = true;

        match store.get(THEME_PREFERENCE_KEY) {
            Some(value) => match ThemeMode::from_stored(&value) {
                Some(mode) => {
                    debug!(theme = %mode, "restored persisted theme");
                    self.theme = mode;
                }
                None => warn!(value = %value, "ignoring unrecognised persisted theme"),
            },
            None => debug!("no persisted theme; keeping default"),
        }
        vec![Effect::PersistTheme(self.theme)]
    }

    /// Flips between the expanded and collapsed widths. Never persisted.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
        self.width.retarget(style::width_units(self.expanded));
        self.label_opacity.retarget(style::label_opacity(self.expanded));
        self.control_offset.retarget(style::control_offset_units(self.expanded));
        debug!(expanded = self.expanded, "sidebar width toggled");
    }

    /// Flips the palette and asks for the new value to be persisted.
    pub fn toggle_theme(&mut self) -> Vec<Effect> {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "sidebar theme toggled");
        vec![Effect::PersistTheme(self.theme)]
    }

    /// Advances every running transition.
    pub fn advance(&mut self, delta: Duration) {
        self.width.advance(delta);
        self.label_opacity.advance(delta);
        self.control_offset.advance(delta);
    }

    /// Skips every running transition to its end.
    pub fn settle(&mut self) {
        self.width.finish();
        self.label_opacity.finish();
        self.control_offset.finish();
    }

    pub fn is_animating(&self) -> bool {
        self.width.is_running() || self.label_opacity.is_running() || self.control_offset.is_running()
    }

    /// Current (possibly mid-transition) width in layout units.
    pub fn width_units(&self) -> f32 {
        self.width.value()
    }

    /// Current (possibly mid-transition) opacity of every text label.
    pub fn label_opacity(&self) -> f32 {
        self.label_opacity.value()
    }

    pub fn control_offset_units(&self) -> f32 {
        self.control_offset.value()
    }

    /// Hover/press state of `target`.
    ///
    /// An element only counts as pressed while the pointer is still over it.
    pub fn interaction(&self, target: SidebarTarget) -> Interaction {
        let hovered = self.hovered == Some(target);
        Interaction {
            hovered,
            pressed: hovered && self.pressed == Some(target),
        }
    }

    /// Topmost interactive element under `(column, row)`.
    pub fn target_at(&self, column: u16, row: u16) -> Option<SidebarTarget> {
        self.target_areas
            .iter()
            .find(|(_, area)| contains(*area, column, row))
            .map(|(target, _)| *target)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.left() && column < area.right() && row >= area.top() && row < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidebar_util::UserPreferences;

    fn store_with(value: Option<&str>) -> UserPreferences {
        let store = UserPreferences::ephemeral();
        if let Some(value) = value {
            store.set(THEME_PREFERENCE_KEY, value).unwrap();
        }
        store
    }

    #[test]
    fn fresh_mount_uses_defaults_and_persists_them() {
        let mut state = SidebarState::new();
        let effects = state.mount(&store_with(None));
        assert!(state.expanded());
        assert_eq!(state.theme(), ThemeMode::Light);
        assert_eq!(effects, vec![Effect::PersistTheme(ThemeMode::Light)]);
    }

    #[test]
    fn mount_restores_recognised_values() {
        for (stored, expected) in [("dark", ThemeMode::Dark), ("light", ThemeMode::Light)] {
            let mut state = SidebarState::new();
            let effects = state.mount(&store_with(Some(stored)));
            assert_eq!(state.theme(), expected);
            assert_eq!(effects, vec![Effect::PersistTheme(expected)]);
        }
    }

    #[test]
    fn mount_ignores_unrecognised_values() {
        for stored in ["blue", "", "LIGHT", "Dark"] {
            let mut state = SidebarState::new();
            state.mount(&store_with(Some(stored)));
            assert_eq!(state.theme(), ThemeMode::Light, "{stored:?} should be ignored");
        }
    }

    #[test]
    fn mount_reads_only_once() {
        let store = store_with(Some("dark"));
        let mut state = SidebarState::new();
        state.mount(&store);
        state.toggle_theme();
        store.set(THEME_PREFERENCE_KEY, "dark").unwrap();

        assert!(state.mount(&store).is_empty());
        assert_eq!(state.theme(), ThemeMode::Light);
    }

    #[test]
    fn toggles_are_involutions() {
        let mut state = SidebarState::new();
        state.toggle_expanded();
        assert!(!state.expanded());
        state.toggle_expanded();
        assert!(state.expanded());

        let original = state.theme();
        state.toggle_theme();
        assert_ne!(state.theme(), original);
        state.toggle_theme();
        assert_eq!(state.theme(), original);
    }

    #[test]
    fn toggling_the_theme_requests_persistence_of_the_new_value() {
        let mut state = SidebarState::new();
        assert_eq!(state.toggle_theme(), vec![Effect::PersistTheme(ThemeMode::Dark)]);
        assert_eq!(state.toggle_theme(), vec![Effect::PersistTheme(ThemeMode::Light)]);
    }

    #[test]
    fn collapsing_animates_width_and_opacity() {
        let mut state = SidebarState::new();
        state.toggle_expanded();
        assert!(state.is_animating());
        assert_eq!(state.width_units(), 240.0);

        state.advance(Duration::from_millis(150));
        assert!(state.width_units() < 240.0 && state.width_units() > 60.0);
        assert!(state.label_opacity() < 1.0);

        state.advance(Duration::from_millis(200));
        assert!(!state.is_animating());
        assert_eq!(state.width_units(), 60.0);
        assert_eq!(state.label_opacity(), 0.0);
        assert_eq!(state.control_offset_units(), 48.0);
    }

    #[test]
    fn pressed_requires_hover() {
        let mut state = SidebarState::new();
        state.pressed = Some(SidebarTarget::ThemeToggle);
        assert_eq!(state.interaction(SidebarTarget::ThemeToggle), Interaction::IDLE);

        state.hovered = Some(SidebarTarget::ThemeToggle);
        assert_eq!(state.interaction(SidebarTarget::ThemeToggle), Interaction::PRESSED);
        assert_eq!(state.interaction(SidebarTarget::Primary(0)), Interaction::IDLE);
    }

    #[test]
    fn hit_testing_prefers_the_first_listed_area() {
        let mut state = SidebarState::new();
        state.target_areas = vec![
            (SidebarTarget::CollapseControl, Rect::new(23, 1, 3, 1)),
            (SidebarTarget::Primary(0), Rect::new(1, 1, 30, 1)),
        ];
        assert_eq!(state.target_at(24, 1), Some(SidebarTarget::CollapseControl));
        assert_eq!(state.target_at(2, 1), Some(SidebarTarget::Primary(0)));
        assert_eq!(state.target_at(2, 2), None);
    }
}
