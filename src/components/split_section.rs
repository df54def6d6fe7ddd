use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SplitSectionProps {
    pub image: &'static str,
    pub image_alt: String,
    pub title: String,
}

#[function_component(SplitSection)]
pub fn split_section(props: &SplitSectionProps) -> Html {
    html! {
        <section class="split-section">
            <style>
                {r#"
                .split-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    background: var(--color-bg);
                    color: var(--color-text);
                }
                .split-container {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    align-items: center;
                    gap: 4rem;
                    width: 100%;
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .split-image img {
                    width: 100%;
                    aspect-ratio: 4 / 5;
                    object-fit: cover;
                    border-radius: 24px;
                    animation: splitImageIn 0.8s ease both;
                }
                .split-title {
                    font-size: clamp(1.8rem, 4vw, 3.2rem);
                    line-height: 1.25;
                    animation: fadeInUp 0.8s ease 0.2s both;
                }
                @keyframes splitImageIn {
                    from { opacity: 0; transform: translateX(-40px); }
                    to { opacity: 1; transform: none; }
                }
                @keyframes fadeInUp {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: none; }
                }
                @media (max-width: 768px) {
                    .split-container { grid-template-columns: 1fr; gap: 2rem; }
                }
                "#}
            </style>
            <div class="split-container">
                <div class="split-image">
                    <img src={props.image} alt={props.image_alt.clone()} loading="lazy" />
                </div>
                <div class="split-content">
                    <h2 class="split-title">{ &props.title }</h2>
                </div>
            </div>
        </section>
    }
}
