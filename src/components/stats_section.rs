use yew::prelude::*;

use crate::components::arrow_link::ArrowLink;
use crate::i18n::Stat;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct StatsSectionProps {
    pub stats: Vec<Stat>,
    pub images: &'static [&'static str],
    pub link_text: String,
}

#[function_component(StatsSection)]
pub fn stats_section(props: &StatsSectionProps) -> Html {
    // The track holds two copies so the -50% keyframe loops without a seam.
    let track = props.images.iter().chain(props.images.iter());

    html! {
        <section class="stats-section">
            <style>
                {r#"
                .stats-section {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    gap: 4rem;
                    overflow: hidden;
                    background: var(--color-bg);
                    color: var(--color-text);
                    padding: 6rem 0 3rem;
                }
                .stats-container {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 4rem;
                    padding: 0 2rem;
                }
                .stat-item {
                    text-align: center;
                    animation: fadeInUp 0.6s ease both;
                }
                .stat-number {
                    display: block;
                    font-size: clamp(2.4rem, 5vw, 4rem);
                    font-weight: 700;
                }
                .stat-label { color: var(--color-muted); }
                .marquee {
                    overflow: hidden;
                }
                .marquee-track {
                    display: flex;
                    gap: 1.5rem;
                    width: max-content;
                    animation: marquee 40s linear infinite;
                }
                .marquee-item img {
                    width: 320px;
                    height: 220px;
                    object-fit: cover;
                    border-radius: 16px;
                }
                .stats-cta {
                    display: flex;
                    justify-content: flex-end;
                    max-width: 1400px;
                    width: 100%;
                    margin: 0 auto;
                    padding: 0 2rem;
                    box-sizing: border-box;
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .marquee-track { animation: none; }
                }
                "#}
            </style>
            <div class="stats-container">
                { for props.stats.iter().enumerate().map(|(index, stat)| {
                    let delay = format!("animation-delay: {:.1}s", index as f64 * 0.2);
                    html! {
                        <div class="stat-item" key={index} style={delay}>
                            <span class="stat-number">{ &stat.number }</span>
                            <span class="stat-label">{ &stat.label }</span>
                        </div>
                    }
                }) }
            </div>
            <div class="marquee" aria-hidden="true">
                <div class="marquee-track">
                    { for track.enumerate().map(|(index, image)| html! {
                        <div class="marquee-item" key={index}>
                            <img src={*image} alt="" loading="lazy" />
                        </div>
                    }) }
                </div>
            </div>
            <div class="stats-cta">
                <ArrowLink to={Route::About}>{ &props.link_text }</ArrowLink>
            </div>
        </section>
    }
}
