use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::config::LOADER_EXIT_MS;
use crate::i18n::use_dictionary;

#[derive(Properties, PartialEq)]
pub struct IntroLoaderProps {
    /// How long the paws walk before the fade starts.
    pub duration: u32,
    pub on_complete: Callback<()>,
}

/// Full-screen paw-print loader. Holds for `duration`, fades out over
/// `LOADER_EXIT_MS`, then asks the parent to unmount it.
#[function_component(IntroLoader)]
pub fn intro_loader(props: &IntroLoaderProps) -> Html {
    let dict = use_dictionary();
    let exiting = use_state(|| false);

    {
        let exiting = exiting.clone();
        use_effect_with_deps(
            move |duration| {
                let hold = Timeout::new(*duration, move || exiting.set(true));
                move || drop(hold)
            },
            props.duration,
        );
    }

    {
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |exiting| {
                let fade = (*exiting).then(|| Timeout::new(LOADER_EXIT_MS, move || on_complete.emit(())));
                move || drop(fade)
            },
            *exiting,
        );
    }

    html! {
        <div
            class={classes!("intro-loader", (*exiting).then(|| "exiting"))}
            role="status"
            aria-live="polite"
            aria-label={dict.t("a11y.loading")}
        >
            <style>
                {r#"
                .intro-loader {
                    position: fixed;
                    inset: 0;
                    z-index: 2000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--color-bg);
                    color: var(--color-text);
                    transition: opacity 0.6s ease;
                }
                .intro-loader.exiting {
                    opacity: 0;
                    pointer-events: none;
                }
                .intro-paws {
                    display: flex;
                    gap: 1.2rem;
                }
                .intro-paws span {
                    opacity: 0;
                    animation: pawStep 1.4s ease-in-out infinite;
                }
                .intro-paws span:nth-child(2) { animation-delay: 0.2s; transform: translateY(-12px); }
                .intro-paws span:nth-child(3) { animation-delay: 0.4s; }
                .intro-paws span:nth-child(4) { animation-delay: 0.6s; transform: translateY(-12px); }
                @keyframes pawStep {
                    0%, 100% { opacity: 0; }
                    40%, 60% { opacity: 1; }
                }
                @media (prefers-reduced-motion: reduce) {
                    .intro-paws span { animation: none; opacity: 1; }
                }
                "#}
            </style>
            <div class="intro-paws" aria-hidden="true">
                { for (0..4).map(|_| html! { <span><Icon name="paw" size={28} /></span> }) }
            </div>
        </div>
    }
}
