use yew::prelude::*;

use crate::components::arrow_link::ArrowLink;
use crate::config::SITE_NAME;
use crate::content::{iso_date, magazine_cover, magazine_images, with_images};
use crate::head::{use_page_meta, PageMeta};
use crate::i18n::{use_dictionary, ContentBlock};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MagazineProps {
    pub slug: String,
}

fn render_block(block: &ContentBlock, image: Option<&'static str>) -> Html {
    match block {
        ContentBlock::Text { content } => html! { <p class="article-paragraph">{ content }</p> },
        ContentBlock::Quote { content } => html! {
            <blockquote class="article-quote"><p>{ content }</p></blockquote>
        },
        ContentBlock::Image { caption } => html! {
            <figure class="article-figure">
                <img
                    src={image.unwrap_or_default()}
                    alt={caption.clone().unwrap_or_default()}
                    loading="lazy"
                />
                if let Some(caption) = caption {
                    <figcaption>{ caption }</figcaption>
                }
            </figure>
        },
    }
}

#[function_component(Magazine)]
pub fn magazine(props: &MagazineProps) -> Html {
    let dict = use_dictionary();
    let item = dict.magazine(&props.slug);

    let meta = match &item {
        Some(item) => PageMeta::new(
            format!("{} | {}", item.title, SITE_NAME),
            item.subtitle.clone(),
        ),
        None => PageMeta {
            robots: Some("noindex, nofollow"),
            ..PageMeta::new(dict.t("magazine.notFound"), dict.t("magazine.metaDescription"))
        },
    };
    use_page_meta(meta);

    let style = html! {
        <style>
            {r#"
            .article-hero {
                position: relative;
                height: 80vh;
                min-height: 480px;
                display: flex;
                align-items: flex-end;
                color: #fff;
                overflow: hidden;
            }
            .article-hero img {
                position: absolute;
                inset: 0;
                width: 100%;
                height: 100%;
                object-fit: cover;
            }
            .article-hero-overlay {
                position: absolute;
                inset: 0;
                background: linear-gradient(180deg, rgba(0,0,0,0.1), rgba(0,0,0,0.65));
            }
            .article-hero-content {
                position: relative;
                max-width: 900px;
                width: 100%;
                margin: 0 auto;
                padding: 0 2rem 4rem;
                animation: fadeInUp 0.8s ease 0.2s both;
            }
            .article-hero-content h1 { font-size: clamp(2.2rem, 5vw, 4rem); margin: 0.5rem 0; }
            .article-body, .article-back, .magazine-missing {
                max-width: 760px;
                margin: 0 auto;
                padding: 4rem 2rem;
                color: var(--color-text);
            }
            .article-paragraph { font-size: 1.1rem; line-height: 1.9; }
            .article-figure { margin: 3rem 0; }
            .article-figure img { width: 100%; border-radius: 16px; }
            .article-figure figcaption {
                margin-top: 0.75rem;
                font-size: 0.85rem;
                color: var(--color-muted);
                text-align: center;
            }
            .article-quote {
                margin: 3rem 0;
                padding-left: 1.5rem;
                border-left: 3px solid var(--color-text);
                font-size: 1.4rem;
                font-style: italic;
            }
            .magazine-missing { min-height: 60vh; padding-top: 10rem; }
            "#}
        </style>
    };

    let Some(item) = item else {
        return html! {
            <div class="magazine-missing">
                { style }
                <h2>{ dict.t("magazine.notFound") }</h2>
                <ArrowLink to={Route::MagazineList}>{ dict.t("magazine.backToList") }</ArrowLink>
            </div>
        };
    };

    html! {
        <article class="article">
            { style }
            <header class="article-hero">
                <img src={magazine_cover(&props.slug).unwrap_or_default()} alt="" aria-hidden="true" />
                <div class="article-hero-overlay"></div>
                <div class="article-hero-content">
                    <time datetime={iso_date(&item.date)}>{ &item.date }</time>
                    <h1>{ &item.title }</h1>
                    <p>{ &item.subtitle }</p>
                </div>
            </header>
            <div class="article-body">
                { for with_images(&item.content, magazine_images(&props.slug))
                    .into_iter()
                    .enumerate()
                    .map(|(index, (block, image))| html! {
                        <div key={index}>{ render_block(block, image) }</div>
                    }) }
            </div>
            <div class="article-back">
                <ArrowLink to={Route::MagazineList}>{ dict.t("magazine.backToList") }</ArrowLink>
            </div>
        </article>
    }
}
