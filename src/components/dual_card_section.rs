use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::Icon;
use crate::content::iso_date;
use crate::Route;

#[derive(Clone, PartialEq)]
pub struct CardData {
    pub image: &'static str,
    pub image_alt: String,
    pub date: String,
    pub title: String,
    pub description: String,
    pub href: Option<Route>,
}

#[derive(Properties, PartialEq)]
struct ArticleCardProps {
    card: CardData,
}

#[function_component(ArticleCard)]
fn article_card(props: &ArticleCardProps) -> Html {
    let card = &props.card;
    let content = html! {
        <>
            <img class="card-image" src={card.image} alt={card.image_alt.clone()} loading="lazy" />
            <div class="card-overlay" aria-hidden="true"></div>
            <div class="card-content">
                <time class="card-date" datetime={iso_date(&card.date)}>{ &card.date }</time>
                <div>
                    <h3 class="card-title">{ &card.title }</h3>
                    <p class="card-description">{ &card.description }</p>
                </div>
            </div>
            <div class="card-arrow" aria-hidden="true">
                <Icon name="arrow-right" size={24} />
            </div>
        </>
    };

    match &card.href {
        Some(route) => html! {
            <Link<Route> to={route.clone()} classes="article-card">{ content }</Link<Route>>
        },
        None => html! { <article class="article-card">{ content }</article> },
    }
}

#[derive(Properties, PartialEq)]
pub struct DualCardSectionProps {
    pub left: CardData,
    pub right: CardData,
}

#[function_component(DualCardSection)]
pub fn dual_card_section(props: &DualCardSectionProps) -> Html {
    html! {
        <section class="dual-card-section">
            <style>
                {r#"
                .dual-card-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    background: var(--color-bg);
                }
                .dual-card-container {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    width: 100%;
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }
                .article-card {
                    position: relative;
                    display: block;
                    aspect-ratio: 3 / 4;
                    border-radius: 24px;
                    overflow: hidden;
                    color: #fff;
                    text-decoration: none;
                }
                .card-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.6s ease;
                }
                .article-card:hover .card-image { transform: scale(1.05); }
                .card-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(180deg, rgba(0,0,0,0.1), rgba(0,0,0,0.6));
                }
                .card-content {
                    position: absolute;
                    inset: 0;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                }
                .card-date { font-size: 0.85rem; opacity: 0.85; }
                .card-title { font-size: 1.8rem; margin: 0 0 0.6rem; }
                .card-description { margin: 0; line-height: 1.6; opacity: 0.9; }
                .card-arrow {
                    position: absolute;
                    top: 2rem;
                    right: 2rem;
                    transition: transform 0.3s ease;
                }
                .article-card:hover .card-arrow { transform: translateX(6px); }
                @media (max-width: 768px) {
                    .dual-card-container { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="dual-card-container">
                <ArticleCard card={props.left.clone()} />
                <ArticleCard card={props.right.clone()} />
            </div>
        </section>
    }
}
