pub mod use_theme;

pub use use_theme::{ThemeContext, toggle_callback, use_theme};
