use yew::prelude::*;

use crate::components::arrow_link::ArrowLink;
use crate::components::scatter_text::ScatterText;
use crate::content::HERO_FALLBACK_IMAGE;
use crate::i18n::use_dictionary;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_default]
    pub background_video: Option<&'static str>,
    #[prop_or(HERO_FALLBACK_IMAGE)]
    pub background_image: &'static str,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let dict = use_dictionary();

    let background = match props.background_video {
        Some(video) => html! {
            <video class="hero-media" autoplay=true muted=true loop=true playsinline=true aria-hidden="true">
                <source src={video} type="video/mp4" />
            </video>
        },
        None => html! {
            <img class="hero-media" src={props.background_image} alt="" aria-hidden="true" />
        },
    };

    html! {
        <div class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    min-height: 560px;
                    overflow: hidden;
                    color: #fff;
                    display: flex;
                    align-items: center;
                }
                .hero-media {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(180deg, rgba(0,0,0,0.25), rgba(0,0,0,0.55));
                }
                .hero-content {
                    position: relative;
                    max-width: 1400px;
                    width: 100%;
                    margin: 0 auto;
                    padding: 0 2rem;
                }
                .hero-title {
                    font-size: clamp(2.4rem, 6vw, 5rem);
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }
                .hero-subtitle {
                    font-size: clamp(1rem, 2vw, 1.4rem);
                    margin: 0 0 2.5rem;
                    opacity: 0.9;
                }
                .hero-cta {
                    opacity: 0;
                    animation: heroCtaIn 0.8s ease-out 3s forwards;
                }
                .hero-scroll {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.6rem;
                }
                .hero-scroll::after {
                    content: "";
                    width: 1px;
                    height: 40px;
                    background: currentColor;
                    animation: scrollHint 1.8s ease-in-out infinite;
                    transform-origin: top;
                }
                @keyframes heroCtaIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: none; }
                }
                @keyframes scrollHint {
                    0% { transform: scaleY(0); }
                    50% { transform: scaleY(1); }
                    100% { transform: scaleY(0); transform-origin: bottom; }
                }
                "#}
            </style>
            { background }
            <div class="hero-overlay" aria-hidden="true"></div>
            <div class="hero-content">
                <h1 class="hero-title">
                    <ScatterText text={dict.t("hero.title")} delay={0.3} duration={1.8} stagger={0.05} />
                </h1>
                <p class="hero-subtitle">
                    <ScatterText text={dict.t("hero.subtitle")} delay={1.5} duration={1.5} stagger={0.03} />
                </p>
                <div class="hero-cta">
                    <ArrowLink to={Route::About}>{ dict.t("hero.linkText") }</ArrowLink>
                </div>
            </div>
            <div class="hero-scroll">{ dict.t("hero.scrollDown") }</div>
        </div>
    }
}
