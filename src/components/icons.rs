use yew::prelude::*;

use crate::models::ToggleIcon;

#[function_component(SunIcon)]
pub fn sun_icon() -> Html {
    html! {
        <svg
            class="theme-icon"
            data-icon="sun"
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <circle cx="12" cy="12" r="5" />
            <path d="M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42" />
        </svg>
    }
}

#[function_component(MoonIcon)]
pub fn moon_icon() -> Html {
    html! {
        <svg
            class="theme-icon"
            data-icon="moon"
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeIconProps {
    pub icon: ToggleIcon,
}

#[function_component(ThemeIcon)]
pub fn theme_icon(props: &ThemeIconProps) -> Html {
    match props.icon {
        ToggleIcon::Sun => html! { <SunIcon /> },
        ToggleIcon::Moon => html! { <MoonIcon /> },
    }
}
