pub mod icons;
pub mod theme_provider;
pub mod theme_toggle;

pub use icons::{MoonIcon, SunIcon, ThemeIcon};
pub use theme_provider::ThemeProvider;
pub use theme_toggle::{ThemeToggle, ThemeToggleView};
