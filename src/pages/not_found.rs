use yew::prelude::*;

use crate::components::arrow_link::ArrowLink;
use crate::head::{use_page_meta, PageMeta};
use crate::i18n::use_dictionary;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let dict = use_dictionary();

    use_page_meta(PageMeta {
        robots: Some("noindex, nofollow"),
        ..PageMeta::new(dict.t("notFound.title"), dict.t("notFound.description"))
    });

    html! {
        <div class="not-found">
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    gap: 1rem;
                    padding: 2rem;
                }
                .not-found-code {
                    font-size: clamp(5rem, 18vw, 12rem);
                    font-weight: 700;
                    line-height: 1;
                    color: var(--color-muted);
                }
                "#}
            </style>
            <span class="not-found-code">{ dict.t("notFound.errorCode") }</span>
            <h1>{ dict.t("notFound.heading") }</h1>
            <p>{ dict.t("notFound.description") }</p>
            <ArrowLink to={Route::Home}>{ dict.t("nav.home") }</ArrowLink>
        </div>
    }
}
