use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Theme context not found: render this component inside a ThemeProvider")]
    MissingThemeProvider,

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
