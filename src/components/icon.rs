use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: &'static str,
    #[prop_or(20)]
    pub size: u32,
}

fn paths(name: &str) -> Html {
    match name {
        "sun" => html! {
            <>
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M4.93 19.07l1.41-1.41M17.66 6.34l1.41-1.41" />
            </>
        },
        "moon" => html! { <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" /> },
        "arrow-right" => html! { <path d="M5 12h14M12 5l7 7-7 7" /> },
        "arrow-left" => html! { <path d="M19 12H5M12 19l-7-7 7-7" /> },
        "close" => html! { <path d="M18 6L6 18M6 6l12 12" /> },
        "instagram" => html! {
            <>
                <rect x="2" y="2" width="20" height="20" rx="5" />
                <circle cx="12" cy="12" r="4" />
                <path d="M17.5 6.5h.01" />
            </>
        },
        "facebook" => html! { <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" /> },
        "youtube" => html! {
            <>
                <path d="M22.54 6.42a2.78 2.78 0 0 0-1.94-2C18.88 4 12 4 12 4s-6.88 0-8.6.46a2.78 2.78 0 0 0-1.94 2A29 29 0 0 0 1 11.75a29 29 0 0 0 .46 5.33A2.78 2.78 0 0 0 3.4 19c1.72.46 8.6.46 8.6.46s6.88 0 8.6-.46a2.78 2.78 0 0 0 1.94-2 29 29 0 0 0 .46-5.25 29 29 0 0 0-.46-5.33z" />
                <path d="M9.75 15.02l5.75-3.27-5.75-3.27v6.54z" />
            </>
        },
        "paw" => html! {
            <>
                <circle cx="5.5" cy="10" r="2" />
                <circle cx="9" cy="5.5" r="2" />
                <circle cx="15" cy="5.5" r="2" />
                <circle cx="18.5" cy="10" r="2" />
                <path d="M12 11c-3 0-6 3.5-6 6.5 0 1.5 1 2.5 2.5 2.5 1.3 0 2.2-.8 3.5-.8s2.2.8 3.5.8c1.5 0 2.5-1 2.5-2.5 0-3-3-6.5-6-6.5z" />
            </>
        },
        _ => html! {},
    }
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={classes!("icon", format!("icon-{}", props.name))}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { paths(props.name) }
        </svg>
    }
}
