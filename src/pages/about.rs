use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, Window};
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::ABOUT_HERO_IMAGE;
use crate::head::{use_page_meta, PageMeta};
use crate::i18n::{use_dictionary, ProcessStep, TeamMember};
use crate::motion::{interpolate, is_visible, scroll_progress};
use crate::ui::use_ui;

const NARROW_VIEWPORT: f64 = 768.0;
const CTA_VISIBLE_THRESHOLD: f64 = 0.3;
const TRAIN_DELAY_MS: u32 = 100;
const TRAIN_DURATION_MS: u32 = 3200;

/// Styles of the hero layers at a given hero scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
    /// Vertical offset of the title block, in percent of its height.
    pub text_offset: f64,
    pub text_opacity: f64,
    pub badge_opacity: f64,
    pub background_opacity: f64,
}

pub fn hero_frame(progress: f64) -> HeroFrame {
    HeroFrame {
        text_offset: interpolate(progress, &[0.0, 0.15], &[100.0, 0.0]),
        text_opacity: interpolate(progress, &[0.0, 0.15, 0.8, 0.95], &[0.0, 1.0, 1.0, 0.0]),
        badge_opacity: interpolate(progress, &[0.0, 0.8, 0.95], &[1.0, 1.0, 0.0]),
        background_opacity: interpolate(progress, &[0.0, 0.9, 1.0], &[1.0, 1.0, 0.0]),
    }
}

/// Horizontal shift of the process cards. The first and last tenth of the
/// section scroll hold the track still.
pub fn track_offset(progress: f64, overflow: f64) -> f64 {
    interpolate(progress, &[0.1, 0.9], &[0.0, -overflow.max(0.0)])
}

fn viewport(window: &Window) -> (f64, f64) {
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|value| value.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

fn multiline(text: &str) -> Html {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len().saturating_sub(1);
    html! {
        <>
            { for lines.into_iter().enumerate().map(|(i, line)| html! {
                <span>
                    { line }
                    if i < last {
                        <br />
                    }
                </span>
            }) }
        </>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let dict = use_dictionary();
    let ui = use_ui();

    let hero_ref = use_node_ref();
    let process_ref = use_node_ref();
    let track_container_ref = use_node_ref();
    let track_ref = use_node_ref();
    let cta_ref = use_node_ref();

    let hero_progress = use_state_eq(|| 0.0f64);
    let process_progress = use_state_eq(|| 0.0f64);
    let overflow = use_state_eq(|| 0.0f64);
    let narrow = use_state_eq(|| false);
    let show_train = use_state_eq(|| false);
    let show_contact = use_state_eq(|| false);
    let train_run = use_state_eq(|| 0u32);
    let cta_was_visible = use_mut_ref(|| false);
    let train_timers = use_mut_ref(Vec::<Timeout>::new);

    use_page_meta(PageMeta::new(
        dict.t("about.metaTitle"),
        dict.t("about.metaDescription"),
    ));

    {
        let hero_ref = hero_ref.clone();
        let process_ref = process_ref.clone();
        let track_container_ref = track_container_ref.clone();
        let track_ref = track_ref.clone();
        let cta_ref = cta_ref.clone();
        let hero_progress = hero_progress.clone();
        let process_progress = process_progress.clone();
        let overflow = overflow.clone();
        let narrow = narrow.clone();
        let show_train = show_train.clone();
        let show_contact = show_contact.clone();
        let train_run = train_run.clone();
        let train_timers = train_timers.clone();

        use_effect_with_deps(
            move |_| {
                let runs = Rc::new(RefCell::new(0u32));
                let start_train = {
                    let train_timers = train_timers.clone();
                    move || {
                        show_contact.set(false);
                        show_train.set(false);
                        *runs.borrow_mut() += 1;
                        train_run.set(*runs.borrow());

                        let enter = {
                            let show_train = show_train.clone();
                            Timeout::new(TRAIN_DELAY_MS, move || show_train.set(true))
                        };
                        let arrive = {
                            let show_train = show_train.clone();
                            let show_contact = show_contact.clone();
                            Timeout::new(TRAIN_DURATION_MS, move || {
                                show_train.set(false);
                                show_contact.set(true);
                            })
                        };
                        // Replacing the pair cancels a run still in flight.
                        *train_timers.borrow_mut() = vec![enter, arrive];
                    }
                };

                let measure: Rc<dyn Fn()> = Rc::new(move || {
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    let (width, height) = viewport(&window);
                    narrow.set(width < NARROW_VIEWPORT);

                    if let Some(hero) = hero_ref.cast::<Element>() {
                        let rect = hero.get_bounding_client_rect();
                        hero_progress.set(scroll_progress(rect.top(), rect.height(), height));
                    }
                    if let Some(process) = process_ref.cast::<Element>() {
                        let rect = process.get_bounding_client_rect();
                        process_progress.set(scroll_progress(rect.top(), rect.height(), height));
                    }
                    if let (Some(track), Some(container)) =
                        (track_ref.cast::<Element>(), track_container_ref.cast::<Element>())
                    {
                        overflow.set(f64::from((track.scroll_width() - container.client_width()).max(0)));
                    }
                    if let Some(cta) = cta_ref.cast::<Element>() {
                        let rect = cta.get_bounding_client_rect();
                        let visible =
                            is_visible(rect.top(), rect.height(), height, CTA_VISIBLE_THRESHOLD);
                        let was_visible = std::mem::replace(&mut *cta_was_visible.borrow_mut(), visible);
                        if visible && !was_visible {
                            start_train();
                        }
                    }
                });

                let window = web_sys::window();
                let mut listeners = Vec::new();
                if let Some(window) = &window {
                    for event in ["scroll", "resize"] {
                        let measure = measure.clone();
                        let listener =
                            Closure::wrap(Box::new(move |_: Event| measure()) as Box<dyn FnMut(Event)>);
                        let options = AddEventListenerOptions::new();
                        options.set_passive(true);
                        if window
                            .add_event_listener_with_callback_and_add_event_listener_options(
                                event,
                                listener.as_ref().unchecked_ref(),
                                &options,
                            )
                            .is_ok()
                        {
                            listeners.push((event, listener));
                        }
                    }
                }
                // Layout settles a tick after mount.
                let first_measure = {
                    let measure = measure.clone();
                    Timeout::new(100, move || measure())
                };

                move || {
                    drop(first_measure);
                    train_timers.borrow_mut().clear();
                    if let Some(window) = window {
                        for (event, listener) in listeners {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                listener.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            (),
        );
    }

    let frame = hero_frame(*hero_progress);
    let track_style = if *narrow {
        String::new()
    } else {
        format!("transform: translateX({:.1}px)", track_offset(*process_progress, *overflow))
    };

    let team: Vec<TeamMember> = dict.get_or_default("about.company.team");
    let steps: Vec<ProcessStep> = dict.get_or_default("about.process.steps");
    let open_contact = Callback::from(move |_: MouseEvent| ui.open_contact());

    html! {
        <div class="about-page">
            <style>
                {r#"
                .about-page { color: var(--color-text); background: var(--color-bg); }
                .about-hero-bg {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                }
                .about-hero-bg img { width: 100%; height: 100%; object-fit: cover; }
                .about-hero {
                    position: relative;
                    z-index: 1;
                    height: 300vh;
                }
                .about-hero-sticky {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    color: #fff;
                    overflow: hidden;
                }
                .about-circle {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at center, transparent 28vmin, rgba(0,0,0,0.6) 28.2vmin);
                }
                .about-badge {
                    position: relative;
                    font-size: clamp(2.4rem, 8vw, 6rem);
                    margin: 0;
                }
                .about-hero-text {
                    position: relative;
                    max-width: 900px;
                    padding: 0 2rem;
                }
                .about-hero-text h1 { font-size: clamp(2rem, 5vw, 3.6rem); }
                .about-hero-text p { line-height: 1.8; }
                .about-company, .about-cta {
                    position: relative;
                    z-index: 1;
                    background: var(--color-bg);
                    padding: 8rem 2rem;
                }
                .about-inner { max-width: 1400px; margin: 0 auto; }
                .about-year { font-size: clamp(4rem, 12vw, 10rem); font-weight: 700; line-height: 1; }
                .about-team {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                    margin-top: 4rem;
                }
                .about-team-card {
                    padding: 2rem;
                    border: 1px solid var(--color-border);
                    border-radius: 20px;
                    animation: fadeInUp 0.5s ease both;
                }
                .about-team-role { font-size: 0.8rem; color: var(--color-muted); text-transform: uppercase; }
                .about-process {
                    position: relative;
                    z-index: 1;
                    height: 400vh;
                    background: var(--color-surface);
                }
                .about-process.narrow { height: auto; padding: 6rem 0; }
                .about-process-sticky {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    overflow: hidden;
                }
                .about-process.narrow .about-process-sticky { position: static; height: auto; }
                .about-process-number {
                    font-size: clamp(4rem, 12vw, 10rem);
                    font-weight: 700;
                    padding: 0 2rem;
                    line-height: 1;
                }
                .about-track-wrap { overflow: hidden; padding: 2rem; }
                .about-process.narrow .about-track-wrap { overflow-x: auto; }
                .about-track {
                    display: flex;
                    gap: 1.5rem;
                    width: max-content;
                    will-change: transform;
                }
                .about-step, .about-title-card {
                    width: 340px;
                    min-height: 360px;
                    padding: 2.5rem;
                    border-radius: 24px;
                    background: var(--color-bg);
                    box-sizing: border-box;
                    display: flex;
                    flex-direction: column;
                }
                .about-title-card { background: transparent; justify-content: flex-end; }
                .about-step-number { font-size: 3rem; font-weight: 700; color: var(--color-muted); }
                .about-step-line { margin-top: auto; height: 1px; background: var(--color-border); }
                .about-cta { min-height: 100vh; text-align: center; overflow: hidden; }
                .about-cta h2 { font-size: clamp(2rem, 5vw, 3.6rem); }
                .about-rail {
                    position: relative;
                    height: 80px;
                    margin: 4rem 0;
                    border-bottom: 2px solid var(--color-border);
                }
                .about-train {
                    position: absolute;
                    bottom: 0;
                    left: -20%;
                    display: flex;
                    gap: 0.5rem;
                    animation: trainRide 3s cubic-bezier(0.4, 0, 0.2, 1) forwards;
                }
                .about-train span {
                    width: 90px;
                    height: 50px;
                    border-radius: 12px 12px 4px 4px;
                    background: var(--color-text);
                    color: var(--color-bg);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .about-cta-button {
                    padding: 1rem 2.5rem;
                    border: none;
                    border-radius: 999px;
                    background: var(--color-text);
                    color: var(--color-bg);
                    font-weight: 600;
                    cursor: pointer;
                    animation: fadeInUp 0.5s ease both;
                }
                @keyframes trainRide {
                    from { left: -20%; }
                    to { left: 110%; }
                }
                "#}
            </style>

            <div class="about-hero-bg" style={format!("opacity: {:.3}", frame.background_opacity)}>
                <img src={ABOUT_HERO_IMAGE} alt="" />
            </div>

            <section class="about-hero" ref={hero_ref}>
                <div class="about-hero-sticky">
                    <div class="about-circle" aria-hidden="true"></div>
                    <h2 class="about-badge" style={format!("opacity: {:.3}", frame.badge_opacity)}>
                        { dict.t("about.hero.badge") }
                    </h2>
                    <div
                        class="about-hero-text"
                        style={format!(
                            "opacity: {:.3}; transform: translateY({:.1}%)",
                            frame.text_opacity,
                            frame.text_offset
                        )}
                    >
                        <h1>{ multiline(&dict.t("about.hero.title")) }</h1>
                        <p>{ multiline(&dict.t("about.hero.description")) }</p>
                    </div>
                </div>
            </section>

            <section class="about-company">
                <div class="about-inner">
                    <span class="about-year">{ dict.t("about.company.year") }</span>
                    <h2>{ dict.t("about.company.title") }</h2>
                    <p>{ dict.t("about.company.description") }</p>
                    <div class="about-team">
                        { for team.iter().enumerate().map(|(index, member)| html! {
                            <div
                                class="about-team-card"
                                key={member.role.clone()}
                                style={format!("animation-delay: {:.1}s", index as f64 * 0.1)}
                            >
                                <span class="about-team-role">{ &member.role }</span>
                                <h3>{ &member.name }</h3>
                                <p>{ &member.description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class={classes!("about-process", (*narrow).then(|| "narrow"))} ref={process_ref}>
                <div class="about-process-sticky">
                    <span class="about-process-number">{ dict.t("about.process.number") }</span>
                    <div class="about-track-wrap" ref={track_container_ref}>
                        <div class="about-track" ref={track_ref} style={track_style}>
                            <div class="about-title-card">
                                <h2>{ dict.t("about.process.title") }</h2>
                                <p>{ dict.t("about.process.subtitle") }</p>
                            </div>
                            { for steps.iter().map(|step| html! {
                                <div class="about-step" key={step.number.clone()}>
                                    <span class="about-step-number">{ &step.number }</span>
                                    <h3>{ &step.title }</h3>
                                    <p>{ &step.description }</p>
                                    <div class="about-step-line"></div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section class="about-cta" ref={cta_ref}>
                <div class="about-inner">
                    <h2>{ dict.t("about.cta.title") }</h2>
                    <p>{ dict.t("about.cta.description") }</p>
                    <div class="about-rail" aria-hidden="true">
                        if *show_train {
                            <div class="about-train" key={*train_run}>
                                <span><Icon name="paw" /></span>
                                <span><Icon name="paw" /></span>
                                <span><Icon name="paw" /></span>
                            </div>
                        }
                    </div>
                    if *show_contact {
                        <button class="about-cta-button" onclick={open_contact}>
                            { dict.t("about.cta.button") }
                        </button>
                    }
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hero_text_rises_then_fades() {
        let start = hero_frame(0.0);
        assert_eq!(start.text_offset, 100.0);
        assert_eq!(start.text_opacity, 0.0);
        assert_eq!(start.badge_opacity, 1.0);

        let settled = hero_frame(0.5);
        assert_eq!(settled.text_offset, 0.0);
        assert_eq!(settled.text_opacity, 1.0);
        assert_eq!(settled.background_opacity, 1.0);

        let leaving = hero_frame(1.0);
        assert_eq!(leaving.text_opacity, 0.0);
        assert_eq!(leaving.badge_opacity, 0.0);
        assert_eq!(leaving.background_opacity, 0.0);
    }

    #[test]
    fn track_holds_at_both_ends() {
        assert_eq!(track_offset(0.05, 400.0), 0.0);
        assert!(close(track_offset(0.5, 400.0), -200.0));
        assert_eq!(track_offset(0.95, 400.0), -400.0);
        assert_eq!(track_offset(0.5, -30.0), 0.0);
    }
}
