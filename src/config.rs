/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Theme used when no explicit initial value is given and the system
    /// preference is unavailable or ignored
    pub const DEFAULT_DARK_MODE: bool = false;

    /// Seed the initial theme from the browser's colour-scheme preference
    pub const FOLLOW_SYSTEM_PREFERENCE: bool = true;

    /// Media query matching a dark system preference
    pub const COLOR_SCHEME_QUERY: &'static str = "(prefers-color-scheme: dark)";

    /// Attribute set on `<html>` with the current theme name
    pub const THEME_ATTRIBUTE: &'static str = "data-theme";
}
