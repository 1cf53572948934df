use yew::prelude::*;

use crate::models::{AppError, ThemeState};
use crate::store::ThemeStore;

/// Value published by `ThemeProvider`: the current flag plus the only way to change it
#[derive(Clone, PartialEq, Debug)]
pub struct ThemeContext {
    pub is_dark_mode: bool,
    pub toggle_theme: Callback<()>,
}

impl ThemeContext {
    pub const fn new(state: ThemeState, toggle_theme: Callback<()>) -> Self {
        Self {
            is_dark_mode: state.is_dark_mode,
            toggle_theme,
        }
    }

    /// Snapshot `store` and route toggles back into it
    pub fn from_store(store: &ThemeStore) -> Self {
        Self::new(store.get_theme(), toggle_callback(store))
    }

    pub const fn state(&self) -> ThemeState {
        ThemeState::new(self.is_dark_mode)
    }
}

/// Callback that flips `store` each time it is emitted
pub fn toggle_callback(store: &ThemeStore) -> Callback<()> {
    let store = store.clone();
    Callback::from(move |()| store.toggle_theme())
}

/// Custom hook for reading the shared theme.
///
/// Panics when no `ThemeProvider` is above the calling component: that is a
/// wiring mistake, not a runtime condition to recover from.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| panic!("{}", AppError::MissingThemeProvider))
}
