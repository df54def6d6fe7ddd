use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::Icon;
use crate::config::SITE_NAME;
use crate::content::SOCIAL_LINKS;
use crate::i18n::use_dictionary;
use crate::ui::use_ui;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let dict = use_dictionary();
    let ui = use_ui();

    let open_contact = Callback::from(move |_: MouseEvent| ui.open_contact());
    let external = dict.t("a11y.externalLink");

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: var(--color-surface);
                    color: var(--color-text);
                    padding: 5rem 2rem 2rem;
                }
                .footer-content {
                    max-width: 1400px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 3rem;
                }
                .footer-brand {
                    max-width: 360px;
                }
                .footer-logo {
                    color: inherit;
                    text-decoration: none;
                    font-weight: 700;
                    font-size: 1.3rem;
                }
                .footer-description {
                    color: var(--color-muted);
                    line-height: 1.6;
                }
                .footer-social {
                    display: flex;
                    gap: 0.75rem;
                }
                .footer-social a {
                    color: inherit;
                }
                .footer-group-title {
                    text-transform: uppercase;
                    font-size: 0.75rem;
                    letter-spacing: 0.12em;
                    color: var(--color-muted);
                }
                .footer-links {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }
                .footer-link {
                    color: inherit;
                    text-decoration: none;
                    background: none;
                    border: none;
                    padding: 0;
                    font: inherit;
                    cursor: pointer;
                }
                .footer-link:hover {
                    text-decoration: underline;
                }
                .footer-bottom {
                    max-width: 1400px;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--color-border);
                    font-size: 0.8rem;
                    color: var(--color-muted);
                }
                "#}
            </style>
            <div class="footer-content">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">{ SITE_NAME }</Link<Route>>
                    <p class="footer-description">{ dict.t("footer.description") }</p>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a
                                key={*name}
                                href={*href}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={format!("{} {}", name, external)}
                            >
                                <Icon name={*name} />
                            </a>
                        }) }
                    </div>
                </div>
                <div>
                    <p class="footer-group-title">{ dict.t("footer.sections.company") }</p>
                    <ul class="footer-links">
                        <li>
                            <Link<Route> to={Route::About} classes="footer-link">{ dict.t("nav.about") }</Link<Route>>
                        </li>
                        <li>
                            <Link<Route> to={Route::MagazineList} classes="footer-link">{ dict.t("nav.magazine") }</Link<Route>>
                        </li>
                        <li>
                            <button type="button" class="footer-link" onclick={open_contact}>
                                { dict.t("nav.contact") }
                            </button>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                { dict.t("footer.copyright") }
            </div>
        </footer>
    }
}
