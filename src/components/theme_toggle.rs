use yew::prelude::*;

use crate::components::icons::ThemeIcon;
use crate::hooks::use_theme::use_theme;
use crate::models::ThemeState;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleViewProps {
    pub is_dark_mode: bool,
    pub on_toggle: Callback<()>,
}

/// Theme toggle button with its state passed in explicitly
#[function_component(ThemeToggleView)]
pub fn theme_toggle_view(props: &ThemeToggleViewProps) -> Html {
    let state = ThemeState::new(props.is_dark_mode);
    let label = state.toggle_label();

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <button
            type="button"
            class={classes!("theme-toggle", format!("theme-toggle--{}", state.name()))}
            {onclick}
            aria-label={label}
            title={label}
        >
            <ThemeIcon icon={state.icon()} />
        </button>
    }
}

/// Theme toggle button wired to the nearest `ThemeProvider`
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();

    html! {
        <ThemeToggleView is_dark_mode={theme.is_dark_mode} on_toggle={theme.toggle_theme} />
    }
}
