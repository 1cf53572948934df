use crate::config::Config;
use crate::models::{AppError, ThemeState};

/// Detect the browser's preferred colour scheme, `None` if it can't be queried
#[cfg(target_arch = "wasm32")]
pub fn detect_system_preference() -> Option<ThemeState> {
    web_sys::window()
        .and_then(|w| w.match_media(Config::COLOR_SCHEME_QUERY).ok().flatten())
        .map(|mq| ThemeState::new(mq.matches()))
}

/// No browser to ask outside wasm (server-side rendering, native tests)
#[cfg(not(target_arch = "wasm32"))]
pub const fn detect_system_preference() -> Option<ThemeState> {
    None
}

/// Starting theme for a provider that wasn't given one explicitly
pub fn resolve_initial_theme() -> ThemeState {
    if Config::FOLLOW_SYSTEM_PREFERENCE {
        detect_system_preference().unwrap_or_default()
    } else {
        ThemeState::default()
    }
}

/// Apply theme to DOM by setting the theme attribute on <html>
pub fn apply_theme_to_dom(theme: ThemeState) -> Result<(), AppError> {
    let html = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| AppError::Dom("document element unavailable".to_string()))?;

    html.set_attribute(Config::THEME_ATTRIBUTE, theme.name())?;
    Ok(())
}
