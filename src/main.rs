use yew::prelude::*;
use yew_router::prelude::*;
use log::{debug, info, Level};

mod config;
mod contact;
mod content;
mod head;
mod i18n;
mod motion;
mod scroll;
mod settings;
mod ui;
mod components {
    pub mod arrow_link;
    pub mod contact_modal;
    pub mod dual_card_section;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icon;
    pub mod intro_loader;
    pub mod scatter_text;
    pub mod semicircle_slider;
    pub mod split_section;
    pub mod stats_section;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod magazine;
    pub mod magazine_list;
    pub mod not_found;
}

use components::{
    contact_modal::ContactModal,
    footer::Footer,
    header::Header,
    intro_loader::IntroLoader,
};
use config::{INTRO_LOADER_MS, ROUTE_LOADER_MS};
use i18n::use_dictionary;
use pages::{
    about::About,
    home::Home,
    magazine::Magazine,
    magazine_list::MagazineList,
    not_found::NotFound,
};
use settings::browser::SettingsProvider;
use ui::UiProvider;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/magazines")]
    MagazineList,
    #[at("/magazine/:slug")]
    Magazine { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::MagazineList => {
            info!("Rendering Magazine list");
            html! { <MagazineList /> }
        },
        Route::Magazine { slug } => {
            info!("Rendering Magazine {}", slug);
            html! { <Magazine {slug} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

const GLOBAL_STYLE: &str = r#"
:root {
    --color-bg: #ffffff;
    --color-surface: #f4f2ee;
    --color-text: #161616;
    --color-muted: #6b6b6b;
    --color-border: rgba(0, 0, 0, 0.12);
}
:root[data-theme="dark"] {
    --color-bg: #111111;
    --color-surface: #1b1b1b;
    --color-text: #f2f2f2;
    --color-muted: #a0a0a0;
    --color-border: rgba(255, 255, 255, 0.14);
}
html, body {
    margin: 0;
    background: var(--color-bg);
    color: var(--color-text);
    font-family: "Pretendard", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    transition: background-color 0.3s ease, color 0.3s ease;
}
.skip-link {
    position: absolute;
    left: 1rem;
    top: -100px;
    z-index: 3000;
    padding: 0.75rem 1.25rem;
    background: var(--color-text);
    color: var(--color-bg);
    border-radius: 8px;
}
.skip-link:focus {
    top: 1rem;
}
@keyframes fadeInUp {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: none; }
}
@media (prefers-reduced-motion: reduce) {
    *, *::before, *::after {
        animation-duration: 0.01ms !important;
        transition-duration: 0.01ms !important;
    }
}
"#;

/// Everything under the router: chrome, the routed page and the loader.
#[function_component(Shell)]
fn shell() -> Html {
    let dict = use_dictionary();
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    // Some(duration) while the loader is up.
    let loader = use_state(|| Some(INTRO_LOADER_MS));
    let first_render = use_mut_ref(|| true);

    {
        let loader = loader.clone();
        use_effect_with_deps(
            move |path| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                if std::mem::replace(&mut *first_render.borrow_mut(), false) {
                    debug!("initial route {}", path);
                } else if loader.is_none() {
                    loader.set(Some(ROUTE_LOADER_MS));
                }
                || ()
            },
            path,
        );
    }

    let on_loaded = {
        let loader = loader.clone();
        Callback::from(move |_| loader.set(None))
    };

    html! {
        <>
            <style>{ GLOBAL_STYLE }</style>
            <a class="skip-link" href="#main-content">{ dict.t("a11y.skipToContent") }</a>
            <Header />
            <main id="main-content">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <ContactModal />
            if let Some(duration) = *loader {
                <IntroLoader key={duration} {duration} on_complete={on_loaded} />
            }
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <SettingsProvider>
            <UiProvider>
                <BrowserRouter>
                    <Shell />
                </BrowserRouter>
            </UiProvider>
        </SettingsProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
