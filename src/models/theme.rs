use crate::config::Config;

/// Which glyph the toggle button shows
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

impl ToggleIcon {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
        }
    }
}

/// The shared light/dark theme flag.
///
/// There is no "unset" value: a state is created with a concrete flag and
/// only ever replaced by [`ThemeState::toggled`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ThemeState {
    pub is_dark_mode: bool,
}

impl ThemeState {
    pub const fn new(is_dark_mode: bool) -> Self {
        Self { is_dark_mode }
    }

    pub const fn light() -> Self {
        Self::new(false)
    }

    pub const fn dark() -> Self {
        Self::new(true)
    }

    /// The state after one toggle
    pub const fn toggled(self) -> Self {
        Self::new(!self.is_dark_mode)
    }

    /// Value written to the document's `data-theme` attribute
    pub const fn name(self) -> &'static str {
        if self.is_dark_mode { "dark" } else { "light" }
    }

    /// Dark shows the moon, light shows the sun
    pub const fn icon(self) -> ToggleIcon {
        if self.is_dark_mode {
            ToggleIcon::Moon
        } else {
            ToggleIcon::Sun
        }
    }

    /// Accessible label for the toggle. Names the state a click leads to.
    pub const fn toggle_label(self) -> &'static str {
        if self.is_dark_mode {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(Config::DEFAULT_DARK_MODE)
    }
}

impl From<bool> for ThemeState {
    fn from(is_dark_mode: bool) -> Self {
        Self::new(is_dark_mode)
    }
}
