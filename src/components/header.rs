use log::debug;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

use crate::components::icon::Icon;
use crate::config::{HEADER_SCROLLED_OFFSET, SITE_NAME};
use crate::i18n::use_dictionary;
use crate::settings::browser::use_settings;
use crate::settings::{Locale, Theme};
use crate::ui::use_ui;
use crate::Route;

/// Entries of the sidebar menu. The last one opens the contact modal.
enum MenuTarget {
    Page(Route),
    Contact,
}

fn menu_items() -> [(&'static str, MenuTarget); 4] {
    [
        ("nav.home", MenuTarget::Page(Route::Home)),
        ("nav.magazine", MenuTarget::Page(Route::MagazineList)),
        ("nav.about", MenuTarget::Page(Route::About)),
        ("nav.contact", MenuTarget::Contact),
    ]
}

#[function_component(Header)]
pub fn header() -> Html {
    let dict = use_dictionary();
    let settings = use_settings();
    let ui = use_ui();
    let is_scrolled = use_state_eq(|| false);
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            is_scrolled.set(scroll_y > HEADER_SCROLLED_OFFSET);
        });
    }

    // Any navigation closes the sidebar.
    {
        let set_menu_open = ui.set_menu_open.clone();
        use_effect_with_deps(
            move |path| {
                debug!("route changed to {}, closing menu", path);
                set_menu_open.emit(false);
                || ()
            },
            path,
        );
    }

    let toggle_menu = {
        let set_menu_open = ui.set_menu_open.clone();
        let menu_open = ui.menu_open;
        Callback::from(move |_: MouseEvent| set_menu_open.emit(!menu_open))
    };
    let close_menu = {
        let set_menu_open = ui.set_menu_open.clone();
        Callback::from(move |_: MouseEvent| set_menu_open.emit(false))
    };
    let toggle_locale = {
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| settings.toggle_locale())
    };
    let toggle_theme = {
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| settings.toggle_theme())
    };

    let locale_label = match settings.settings.locale {
        Locale::Ko => "EN",
        Locale::En => "KO",
    };
    let theme_icon = match settings.settings.theme {
        Theme::Dark => "sun",
        Theme::Light => "moon",
    };
    let menu_label = if ui.menu_open {
        dict.t("a11y.menuClose")
    } else {
        dict.t("a11y.menuOpen")
    };

    html! {
        <>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    padding: 1.5rem 0;
                    color: #fff;
                    transition: background-color 0.3s ease, padding 0.3s ease, color 0.3s ease;
                }
                .site-header.scrolled {
                    padding: 0.9rem 0;
                    background-color: var(--color-bg);
                    color: var(--color-text);
                    box-shadow: 0 1px 0 var(--color-border);
                }
                .site-nav {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .site-logo {
                    color: inherit;
                    text-decoration: none;
                    font-weight: 700;
                    font-size: 1.3rem;
                    letter-spacing: -0.02em;
                }
                .hamburger {
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                    z-index: 1101;
                }
                .hamburger span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background-color: currentColor;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .hamburger.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .hamburger.active span:nth-child(2) { opacity: 0; }
                .hamburger.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                .header-actions {
                    display: flex;
                    gap: 0.5rem;
                }
                .icon-button {
                    background: none;
                    border: 1px solid currentColor;
                    border-radius: 999px;
                    color: inherit;
                    width: 40px;
                    height: 40px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    font-size: 0.8rem;
                    font-weight: 600;
                }
                .menu-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                    z-index: 1050;
                    animation: fadeIn 0.25s ease;
                }
                .sidebar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    bottom: 0;
                    width: min(420px, 90vw);
                    background: var(--color-bg);
                    color: var(--color-text);
                    z-index: 1100;
                    padding: 6rem 2.5rem 2.5rem;
                    animation: sidebarIn 0.35s cubic-bezier(0, 0, 0.2, 1);
                }
                .sidebar-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .sidebar-list li {
                    opacity: 0;
                    animation: menuItemIn 0.5s cubic-bezier(0.4, 0, 0.2, 1) forwards;
                }
                .sidebar-link {
                    display: flex;
                    align-items: baseline;
                    gap: 1rem;
                    color: inherit;
                    text-decoration: none;
                    background: none;
                    border: none;
                    padding: 0;
                    font: inherit;
                    font-size: 2rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .sidebar-number {
                    font-size: 0.85rem;
                    color: var(--color-muted);
                }
                @keyframes sidebarIn {
                    from { opacity: 0; transform: translateX(-20px) scale(0.95); }
                    to { opacity: 1; transform: none; }
                }
                @keyframes menuItemIn {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: none; }
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
            <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
                <nav class="site-nav" aria-label="Main navigation">
                    <button
                        class={classes!("hamburger", ui.menu_open.then(|| "active"))}
                        onclick={toggle_menu}
                        aria-label={menu_label}
                        aria-expanded={ui.menu_open.to_string()}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <Link<Route> to={Route::Home} classes="site-logo">
                        { SITE_NAME }
                    </Link<Route>>
                    <div class="header-actions">
                        <button class="icon-button" onclick={toggle_locale} aria-label={dict.t("a11y.toggleLanguage")}>
                            { locale_label }
                        </button>
                        <button class="icon-button" onclick={toggle_theme} aria-label={dict.t("a11y.toggleTheme")}>
                            <Icon name={theme_icon} />
                        </button>
                    </div>
                </nav>
            </header>
            if ui.menu_open {
                <>
                <div class="menu-overlay" onclick={close_menu.clone()} />
                <aside class="sidebar">
                    <nav>
                        <ul class="sidebar-list">
                            { for menu_items().into_iter().enumerate().map(|(index, (key, target))| {
                                let number = format!("{:02}", index + 1);
                                let delay = format!("animation-delay: {:.2}s", 0.2 + index as f64 * 0.08);
                                let label = dict.t(key);
                                let entry = match target {
                                    MenuTarget::Page(route) => html! {
                                        <div onclick={close_menu.clone()}>
                                            <Link<Route> to={route} classes="sidebar-link">
                                                <span class="sidebar-number">{ number }</span>
                                                <span>{ label }</span>
                                            </Link<Route>>
                                        </div>
                                    },
                                    MenuTarget::Contact => {
                                        let ui = ui.clone();
                                        html! {
                                            <button class="sidebar-link" onclick={Callback::from(move |_: MouseEvent| ui.open_contact())}>
                                                <span class="sidebar-number">{ number }</span>
                                                <span>{ label }</span>
                                            </button>
                                        }
                                    }
                                };
                                html! { <li key={key} style={delay}>{ entry }</li> }
                            }) }
                        </ul>
                    </nav>
                </aside>
                </>
            }
        </>
    }
}
