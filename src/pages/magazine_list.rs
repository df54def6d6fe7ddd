use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::Icon;
use crate::content::{iso_date, magazine_cover, MAGAZINE_SLUGS};
use crate::head::{use_page_meta, PageMeta};
use crate::i18n::use_dictionary;
use crate::scroll::use_horizontal_wheel;
use crate::Route;

#[function_component(MagazineList)]
pub fn magazine_list() -> Html {
    let dict = use_dictionary();
    let rail = use_node_ref();

    use_page_meta(PageMeta::new(
        dict.t("magazine.metaTitle"),
        dict.t("magazine.metaDescription"),
    ));
    use_horizontal_wheel(rail.clone());

    html! {
        <div class="magazine-list">
            <style>
                {r#"
                .magazine-list {
                    min-height: 100vh;
                    padding-top: 8rem;
                    background: var(--color-bg);
                    color: var(--color-text);
                }
                .magazine-list-header {
                    max-width: 1400px;
                    margin: 0 auto 3rem;
                    padding: 0 2rem;
                }
                .magazine-list-header h1 {
                    font-size: clamp(2.4rem, 6vw, 4.5rem);
                    margin: 0 0 0.75rem;
                }
                .magazine-list-header p { color: var(--color-muted); }
                .magazine-rail {
                    overflow-x: auto;
                    scrollbar-width: none;
                    padding: 0 2rem 4rem;
                }
                .magazine-rail::-webkit-scrollbar { display: none; }
                .magazine-cards {
                    display: flex;
                    gap: 1.5rem;
                    width: max-content;
                }
                .magazine-card-wrap {
                    opacity: 0;
                    animation: fadeInUp 0.6s ease forwards;
                }
                .magazine-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    width: 360px;
                    color: inherit;
                    text-decoration: none;
                }
                .magazine-card-image {
                    width: 100%;
                    aspect-ratio: 3 / 4;
                    object-fit: cover;
                    border-radius: 20px;
                    transition: transform 0.5s ease;
                }
                .magazine-card:hover .magazine-card-image { transform: scale(1.03); }
                .magazine-card-meta {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1.2rem;
                    font-size: 0.8rem;
                    color: var(--color-muted);
                }
                .magazine-card-title { font-size: 1.4rem; margin: 0.5rem 0; }
                .magazine-card-subtitle { margin: 0; color: var(--color-muted); line-height: 1.5; }
                .magazine-card-arrow { position: absolute; top: 1.2rem; right: 1.2rem; color: #fff; }
                @media (max-width: 768px) {
                    .magazine-card { width: 78vw; }
                }
                "#}
            </style>
            <header class="magazine-list-header">
                <h1>{ dict.t("magazine.pageTitle") }</h1>
                <p>{ dict.t("magazine.pageSubtitle") }</p>
            </header>
            <div class="magazine-rail" ref={rail}>
                <div class="magazine-cards">
                    { for MAGAZINE_SLUGS.iter().enumerate().filter_map(|(index, slug)| {
                        let item = dict.magazine(slug)?;
                        let delay = format!("animation-delay: {:.1}s", index as f64 * 0.1);
                        Some(html! {
                            <div class="magazine-card-wrap" key={*slug} style={delay}>
                                <Link<Route> to={Route::Magazine { slug: slug.to_string() }} classes="magazine-card">
                                    <img class="magazine-card-image" src={magazine_cover(slug).unwrap_or_default()} alt="" loading="lazy" />
                                    <div class="magazine-card-meta">
                                        <span>{ item.category }</span>
                                        <time datetime={iso_date(&item.date)}>{ &item.date }</time>
                                    </div>
                                    <h2 class="magazine-card-title">{ item.title }</h2>
                                    <p class="magazine-card-subtitle">{ item.subtitle }</p>
                                    <span class="magazine-card-arrow" aria-hidden="true">
                                        <Icon name="arrow-right" size={24} />
                                    </span>
                                </Link<Route>>
                            </div>
                        })
                    }) }
                </div>
            </div>
        </div>
    }
}
