//! Light/dark theme toggle for Yew front-ends.
//!
//! Wrap a subtree in [`components::ThemeProvider`] and drop a
//! [`components::ThemeToggle`] anywhere inside it.

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod store;
pub mod utils;
