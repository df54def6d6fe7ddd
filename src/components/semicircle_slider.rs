use yew::prelude::*;

use crate::components::icon::Icon;
use crate::i18n::use_dictionary;

/// Degrees between neighbouring dots on the arc.
pub const DOT_ANGLE_STEP: i32 = 35;

pub fn previous_index(current: usize, len: usize) -> usize {
    if current == 0 {
        len.saturating_sub(1)
    } else {
        current - 1
    }
}

pub fn next_index(current: usize, len: usize) -> usize {
    if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// Slide number as shown, 1-based and zero-padded to two digits.
pub fn display_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub angle: i32,
    pub active: bool,
}

/// The previous, current and next slides as dots on the arc.
pub fn visible_dots(current: usize, len: usize) -> [Dot; 3] {
    [
        Dot {
            index: previous_index(current, len),
            angle: -DOT_ANGLE_STEP,
            active: false,
        },
        Dot {
            index: current,
            angle: 0,
            active: true,
        },
        Dot {
            index: next_index(current, len),
            angle: DOT_ANGLE_STEP,
            active: false,
        },
    ]
}

#[derive(Clone, PartialEq)]
pub struct SlideData {
    pub image: &'static str,
    pub image_alt: String,
    pub title: String,
    pub description: String,
}

#[derive(Properties, PartialEq)]
pub struct SemicircleSliderProps {
    pub slides: Vec<SlideData>,
}

#[function_component(SemicircleSlider)]
pub fn semicircle_slider(props: &SemicircleSliderProps) -> Html {
    let dict = use_dictionary();
    let current = use_state(|| 0usize);
    let len = props.slides.len();

    let Some(slide) = props.slides.get(*current).or_else(|| props.slides.first()) else {
        return html! {};
    };

    let on_prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(previous_index(*current, len)))
    };
    let on_next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(next_index(*current, len)))
    };

    html! {
        <section class="semicircle-section">
            <style>
                {r#"
                .semicircle-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    background: var(--color-surface);
                    color: var(--color-text);
                }
                .semicircle-container {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    align-items: center;
                    gap: 3rem;
                    width: 100%;
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .slide-number {
                    display: block;
                    font-size: clamp(4rem, 10vw, 8rem);
                    font-weight: 700;
                    line-height: 1;
                    animation: fadeInUp 0.4s ease both;
                }
                .slide-text { animation: fadeInUp 0.4s ease both; }
                .slide-title { font-size: clamp(1.6rem, 3vw, 2.6rem); margin: 1rem 0; }
                .slide-description { line-height: 1.7; color: var(--color-muted); }
                .slide-controls { display: flex; gap: 0.75rem; margin-top: 2rem; }
                .slide-arrow {
                    width: 52px;
                    height: 52px;
                    border-radius: 999px;
                    border: 1px solid currentColor;
                    background: none;
                    color: inherit;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .semicircle-wrapper {
                    position: relative;
                    aspect-ratio: 1;
                    width: 100%;
                }
                .semicircle-outline {
                    position: absolute;
                    inset: 0;
                    border: 1px solid var(--color-border);
                    border-radius: 50%;
                    clip-path: inset(0 0 0 50%);
                }
                .dot-wrapper {
                    position: absolute;
                    inset: 0;
                    transition: transform 0.6s cubic-bezier(0.4, 0, 0.2, 1);
                }
                .dot {
                    position: absolute;
                    top: 50%;
                    right: 0;
                    width: 60%;
                    aspect-ratio: 1;
                    border-radius: 50%;
                    overflow: hidden;
                    transform: translate(50%, -50%) scale(0.06);
                    transition: transform 0.6s cubic-bezier(0.4, 0, 0.2, 1);
                    background: var(--color-text);
                }
                .dot.active { transform: translate(50%, -50%) scale(1); }
                .dot img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    animation: fadeIn 0.3s ease 0.2s both;
                }
                @media (max-width: 768px) {
                    .semicircle-container { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="semicircle-container">
                <div>
                    <span class="slide-number" key={format!("number-{}", *current)}>
                        { display_number(*current) }
                    </span>
                    <div class="slide-text" key={format!("text-{}", *current)}>
                        <h2 class="slide-title">{ &slide.title }</h2>
                        <p class="slide-description">{ &slide.description }</p>
                    </div>
                    <div class="slide-controls">
                        <button class="slide-arrow" onclick={on_prev} aria-label={dict.t("a11y.previousSlide")}>
                            <Icon name="arrow-left" />
                        </button>
                        <button class="slide-arrow" onclick={on_next} aria-label={dict.t("a11y.nextSlide")}>
                            <Icon name="arrow-right" />
                        </button>
                    </div>
                </div>
                <div class="semicircle-wrapper">
                    <div class="semicircle-outline" aria-hidden="true"></div>
                    { for visible_dots(*current, len).into_iter().map(|dot| {
                        let style = format!("transform: rotate({}deg)", dot.angle);
                        let body = match (dot.active, props.slides.get(dot.index)) {
                            (true, Some(slide)) => html! {
                                <img src={slide.image} alt={slide.image_alt.clone()} />
                            },
                            _ => html! {},
                        };
                        html! {
                            <div class="dot-wrapper" key={dot.angle} {style}>
                                <div class={classes!("dot", dot.active.then(|| "active"))}>{ body }</div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_around() {
        assert_eq!(previous_index(0, 5), 4);
        assert_eq!(previous_index(3, 5), 2);
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(next_index(1, 5), 2);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(previous_index(0, 1), 0);
    }

    #[test]
    fn numbers_are_zero_padded() {
        assert_eq!(display_number(0), "01");
        assert_eq!(display_number(8), "09");
        assert_eq!(display_number(11), "12");
    }

    #[test]
    fn dots_straddle_the_current_slide() {
        let dots = visible_dots(0, 5);
        assert_eq!(
            dots.map(|dot| (dot.index, dot.angle, dot.active)),
            [(4, -35, false), (0, 0, true), (1, 35, false)]
        );
        let dots = visible_dots(4, 5);
        assert_eq!(dots.map(|dot| dot.index), [3, 4, 0]);
    }
}
