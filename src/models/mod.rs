pub mod error;
pub mod theme;

pub use error::AppError;
pub use theme::{ThemeState, ToggleIcon};
