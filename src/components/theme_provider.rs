use yew::prelude::*;

use crate::hooks::use_theme::{ThemeContext, toggle_callback};
use crate::models::ThemeState;
use crate::store::ThemeStore;
use crate::utils::dom::{apply_theme_to_dom, resolve_initial_theme};

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Html,
    /// Starting theme; when unset the system preference decides
    #[prop_or_default]
    pub initial_dark_mode: Option<bool>,
}

/// Owns the theme store for its subtree and republishes the context on every flip
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let store = {
        let initial = props.initial_dark_mode;
        use_memo((), move |_| {
            ThemeStore::new(initial.map_or_else(resolve_initial_theme, ThemeState::new))
        })
    };

    let theme = {
        let store = store.clone();
        use_state_eq(move || store.get_theme())
    };

    // Effect: Re-render whenever the store flips
    {
        let store = store.clone();
        let setter = theme.setter();
        use_effect_with((), move |_| {
            let subscription = store.subscribe(move |state| setter.set(state));
            move || drop(subscription)
        });
    }

    // Effect: Apply theme to DOM
    use_effect_with(*theme, move |theme| {
        if let Err(e) = apply_theme_to_dom(*theme) {
            gloo::console::warn!(format!("Failed to apply theme: {e}"));
        }
        || ()
    });

    let toggle_theme = {
        let store = store.clone();
        use_memo((), move |_| toggle_callback(&store))
    };

    let context = {
        let toggle_theme = (*toggle_theme).clone();
        use_memo(*theme, move |theme| ThemeContext::new(*theme, toggle_theme))
    };

    html! {
        <ContextProvider<ThemeContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}
