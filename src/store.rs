//! Navigation State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::routes::Section;

/// Open/closed state of the navigation bar
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct NavState {
    /// Mobile menu expanded
    pub menu_open: bool,
    /// The one dropdown currently expanded, if any
    pub open_submenu: Option<Section>,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu and every dropdown
    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.open_submenu = None;
    }

    /// Open `section`, or close it when it is already open
    pub fn toggle_submenu(&mut self, section: Section) {
        self.open_submenu = if self.open_submenu == Some(section) {
            None
        } else {
            Some(section)
        };
    }

    pub fn is_submenu_open(&self, section: Section) -> bool {
        self.open_submenu == Some(section)
    }
}

/// Type alias for the store
pub type NavStore = Store<NavState>;

/// Get the navigation store from context
pub fn use_nav_store() -> NavStore {
    expect_context::<NavStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_toggle_menu(store: &NavStore) {
    store.update(NavState::toggle_menu);
}

pub fn store_close_menu(store: &NavStore) {
    store.update(NavState::close_menu);
}

pub fn store_toggle_submenu(store: &NavStore, section: Section) {
    store.update(|state| state.toggle_submenu(section));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        let state = NavState::default();
        assert!(!state.menu_open);
        assert_eq!(state.open_submenu, None);
    }

    #[test]
    fn test_toggle_menu_flips() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_toggle_submenu_opens_and_closes() {
        let mut state = NavState::default();
        state.toggle_submenu(Section::Vite);
        assert!(state.is_submenu_open(Section::Vite));
        state.toggle_submenu(Section::Vite);
        assert_eq!(state.open_submenu, None);
    }

    #[test]
    fn test_at_most_one_submenu_open() {
        let mut state = NavState::default();
        state.toggle_submenu(Section::React);
        state.toggle_submenu(Section::Css);
        assert!(state.is_submenu_open(Section::Css));
        for section in [Section::React, Section::Vite, Section::TypeScript] {
            assert!(!state.is_submenu_open(section));
        }
    }

    #[test]
    fn test_close_menu_resets_everything() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.toggle_submenu(Section::TypeScript);
        state.close_menu();
        assert_eq!(state, NavState::default());
    }

    #[test]
    fn test_submenu_does_not_touch_menu_flag() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.toggle_submenu(Section::React);
        assert!(state.menu_open);
    }
}
