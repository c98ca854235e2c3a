//! Presentation state of the page: theme, mobile menu and the scroll-derived
//! navbar style. Nothing here is persisted; a reload starts from the defaults.

use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::SCROLL_THRESHOLD_PX;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub is_dark_mode: bool,
    pub is_menu_open: bool,
    /// Derived from the last scroll offset, never set directly.
    pub is_scrolled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    ToggleTheme,
    ToggleMenu,
    CloseMenu,
    Scrolled(f64),
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_theme(&mut self) {
        self.is_dark_mode = !self.is_dark_mode;
    }

    pub fn toggle_menu(&mut self) {
        self.is_menu_open = !self.is_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.is_menu_open = false;
    }

    /// NaN and negative offsets compare false, so they count as not scrolled.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.is_scrolled = scroll_y > SCROLL_THRESHOLD_PX;
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::ToggleTheme => self.toggle_theme(),
            ViewAction::ToggleMenu => self.toggle_menu(),
            ViewAction::CloseMenu => self.close_menu(),
            ViewAction::Scrolled(y) => self.on_scroll(y),
        }
    }

    /// Class put on the page root; the stylesheet switches its palette on it.
    pub fn theme_class(&self) -> Option<&'static str> {
        self.is_dark_mode.then_some("dark")
    }

    pub fn nav_class(&self) -> Option<&'static str> {
        self.is_scrolled.then_some("scrolled")
    }

    pub fn theme_glyph(&self) -> &'static str {
        if self.is_dark_mode { "☾" } else { "☀" }
    }

    pub fn menu_glyph(&self) -> &'static str {
        if self.is_menu_open { "✕" } else { "☰" }
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);

        if next == *self {
            // Scroll events mostly land here; keep the same snapshot
            return self;
        }
        debug!("view state {:?} -> {:?}", action, next);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light_closed_and_unscrolled() {
        let state = ViewState::new();
        assert_eq!(
            state,
            ViewState { is_dark_mode: false, is_menu_open: false, is_scrolled: false }
        );
        assert_eq!(state.theme_class(), None);
        assert_eq!(state.nav_class(), None);
    }

    #[test]
    fn theme_is_dark_after_odd_number_of_toggles() {
        let mut state = ViewState::new();
        for n in 1..=9 {
            state.toggle_theme();
            assert_eq!(state.is_dark_mode, n % 2 == 1, "after {} toggles", n);
        }
    }

    #[test]
    fn toggling_theme_twice_restores_light() {
        let mut state = ViewState::new();
        state.toggle_theme();
        assert_eq!(state.theme_class(), Some("dark"));
        state.toggle_theme();
        assert!(!state.is_dark_mode);
        assert_eq!(state.theme_class(), None);
    }

    #[test]
    fn menu_is_open_after_odd_number_of_toggles() {
        let mut state = ViewState::new();
        for n in 1..=9 {
            state.toggle_menu();
            assert_eq!(state.is_menu_open, n % 2 == 1, "after {} toggles", n);
        }
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut state = ViewState::new();
        state.close_menu();
        assert!(!state.is_menu_open);

        state.toggle_menu();
        for _ in 0..3 {
            state.close_menu();
            assert!(!state.is_menu_open);
        }
    }

    #[test]
    fn scrolled_only_past_threshold() {
        let mut state = ViewState::new();
        state.on_scroll(0.0);
        assert!(!state.is_scrolled);
        state.on_scroll(20.0);
        assert!(!state.is_scrolled);
        state.on_scroll(21.0);
        assert!(state.is_scrolled);
        assert_eq!(state.nav_class(), Some("scrolled"));
        state.on_scroll(20.5);
        assert!(state.is_scrolled);
        state.on_scroll(3.0);
        assert!(!state.is_scrolled);
    }

    #[test]
    fn malformed_offsets_count_as_not_scrolled() {
        let mut state = ViewState::new();
        for y in [f64::NAN, -1.0, f64::NEG_INFINITY] {
            state.on_scroll(100.0);
            state.on_scroll(y);
            assert!(!state.is_scrolled, "offset {}", y);
        }
        state.on_scroll(f64::INFINITY);
        assert!(state.is_scrolled);
    }

    #[test]
    fn menu_closes_after_navigation_while_scrolled() {
        let mut state = ViewState::new();
        state.toggle_menu();
        state.on_scroll(100.0);
        state.close_menu();
        assert_eq!(
            state,
            ViewState { is_dark_mode: false, is_menu_open: false, is_scrolled: true }
        );
    }

    #[test]
    fn reducer_keeps_snapshot_for_repeated_scroll() {
        let state = Rc::new(ViewState::new()).reduce(ViewAction::Scrolled(50.0));
        assert!(state.is_scrolled);

        let again = Rc::clone(&state).reduce(ViewAction::Scrolled(75.0));
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn each_action_changes_at_most_one_flag() {
        let actions = [
            ViewAction::ToggleTheme,
            ViewAction::ToggleMenu,
            ViewAction::Scrolled(40.0),
            ViewAction::CloseMenu,
            ViewAction::Scrolled(0.0),
            ViewAction::ToggleTheme,
        ];
        let mut state = Rc::new(ViewState::new());
        for action in actions {
            let next = Rc::clone(&state).reduce(action);
            let changed = [
                state.is_dark_mode != next.is_dark_mode,
                state.is_menu_open != next.is_menu_open,
                state.is_scrolled != next.is_scrolled,
            ]
            .iter()
            .filter(|c| **c)
            .count();
            assert!(changed <= 1, "{:?} changed {} flags", action, changed);
            state = next;
        }
        assert_eq!(*state, ViewState::new());
    }

    #[test]
    fn glyphs_follow_flags() {
        let mut state = ViewState::new();
        assert_eq!(state.theme_glyph(), "☀");
        assert_eq!(state.menu_glyph(), "☰");
        state.apply(ViewAction::ToggleTheme);
        state.apply(ViewAction::ToggleMenu);
        assert_eq!(state.theme_glyph(), "☾");
        assert_eq!(state.menu_glyph(), "✕");
    }
}
