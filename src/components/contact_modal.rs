use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, KeyboardEvent, Node};
use yew::prelude::*;

use crate::components::icon::Icon;
use crate::contact::{next_focus_index, ContactForm, Field, FieldError};
use crate::i18n::use_dictionary;
use crate::ui::use_ui;

const FOCUSABLE: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

fn focusable_within(modal: &Element) -> Vec<HtmlElement> {
    let Ok(list) = modal.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Moves focus for a Tab press, keeping it inside `modal`.
fn trap_focus(modal: &Element, event: &KeyboardEvent) {
    let items = focusable_within(modal);
    let active = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element());
    let current = active.and_then(|active| {
        let active: &Node = &active;
        items.iter().position(|item| item.is_same_node(Some(active)))
    });
    if let Some(next) = next_focus_index(current, items.len(), event.shift_key()) {
        event.prevent_default();
        let _ = items[next].focus();
    }
}

#[function_component(ContactModal)]
pub fn contact_modal() -> Html {
    let dict = use_dictionary();
    let ui = use_ui();
    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<FieldError>::new);
    let submitted = use_state(|| false);
    let modal_ref = use_node_ref();

    let close = {
        let form = form.clone();
        let errors = errors.clone();
        let submitted = submitted.clone();
        let set_contact_open = ui.set_contact_open.clone();
        Callback::from(move |_: ()| {
            form.set(ContactForm::default());
            errors.set(Vec::new());
            submitted.set(false);
            set_contact_open.emit(false);
        })
    };

    {
        let close = close.clone();
        let modal_ref = modal_ref.clone();
        use_effect_with_deps(
            move |open| {
                let document = web_sys::window().and_then(|window| window.document());
                let mut installed = None;
                if let (true, Some(document)) = (*open, document) {
                    if let Some(first) = modal_ref
                        .cast::<Element>()
                        .and_then(|modal| focusable_within(&modal).into_iter().nth(1))
                    {
                        // Index 0 is the close button; start on the first field.
                        let _ = first.focus();
                    }
                    let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                        match event.key().as_str() {
                            "Escape" => close.emit(()),
                            "Tab" => {
                                if let Some(modal) = modal_ref.cast::<Element>() {
                                    trap_focus(&modal, &event);
                                }
                            }
                            _ => {}
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);
                    if document
                        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
                        .is_ok()
                    {
                        installed = Some((document, on_keydown));
                    }
                }
                move || {
                    if let Some((document, on_keydown)) = installed {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            ui.contact_open,
        );
    }

    if !ui.contact_open {
        return html! {};
    }

    let text = match dict.contact_form() {
        Ok(text) => text,
        Err(err) => {
            warn!("contact form unavailable: {}", err);
            return html! {};
        }
    };

    let edit = {
        let form = form.clone();
        let errors = errors.clone();
        move |field: Field, value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
            if errors.iter().any(|error| error.field() == field) {
                errors.set(errors.iter().copied().filter(|error| error.field() != field).collect());
            }
        }
    };
    let on_input = |field: Field| {
        let edit = edit.clone();
        Callback::from(move |event: InputEvent| {
            edit(field, event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_concept = {
        let edit = edit.clone();
        Callback::from(move |event: Event| {
            edit(Field::Concept, event.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitted = submitted.clone();
        let options = text.concept_options.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match form.validate(&options) {
                Ok(()) => {
                    info!("contact request accepted for concept {}", form.concept);
                    errors.set(Vec::new());
                    submitted.set(true);
                }
                Err(found) => errors.set(found),
            }
        })
    };

    let error_for = |field: Field| -> Html {
        match errors.iter().find(|error| error.field() == field) {
            Some(error) => html! {
                <p class="field-error" role="alert">{ error.message(&text.errors) }</p>
            },
            None => html! {},
        }
    };
    let invalid = |field: Field| errors.iter().any(|error| error.field() == field).to_string();

    let on_backdrop = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_close = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    html! {
        <div class="contact-backdrop" onclick={on_backdrop}>
            <style>
                {r#"
                .contact-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 1500;
                    background: rgba(0, 0, 0, 0.55);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    animation: fadeIn 0.25s ease;
                }
                .contact-modal {
                    position: relative;
                    width: min(520px, 100%);
                    max-height: 90vh;
                    overflow-y: auto;
                    background: var(--color-bg);
                    color: var(--color-text);
                    border-radius: 20px;
                    padding: 2.5rem;
                    animation: modalIn 0.3s cubic-bezier(0.4, 0, 0.2, 1);
                }
                .contact-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.2rem;
                }
                .contact-field label {
                    display: block;
                    font-size: 0.85rem;
                    font-weight: 600;
                    margin-bottom: 0.4rem;
                }
                .contact-field input,
                .contact-field select {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.8rem 1rem;
                    border: 1px solid var(--color-border);
                    border-radius: 10px;
                    background: var(--color-surface);
                    color: inherit;
                    font: inherit;
                }
                .contact-field [aria-invalid="true"] {
                    border-color: #d9534f;
                }
                .field-error {
                    color: #d9534f;
                    font-size: 0.8rem;
                    margin: 0.35rem 0 0;
                }
                .contact-submit {
                    margin-top: 0.5rem;
                    padding: 0.9rem;
                    border: none;
                    border-radius: 999px;
                    background: var(--color-text);
                    color: var(--color-bg);
                    font-weight: 600;
                    cursor: pointer;
                }
                .contact-success {
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }
                @keyframes modalIn {
                    from { opacity: 0; transform: translateY(20px) scale(0.9); }
                    to { opacity: 1; transform: none; }
                }
                "#}
            </style>
            <div
                class="contact-modal"
                ref={modal_ref}
                role="dialog"
                aria-modal="true"
                aria-labelledby="contact-title"
                onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
            >
                <button class="contact-close" onclick={on_close.clone()} aria-label={text.close.clone()}>
                    <Icon name="close" size={24} />
                </button>
                if *submitted {
                    <div class="contact-success">
                        <Icon name="paw" size={56} />
                        <h2 id="contact-title">{ &text.success_title }</h2>
                        <p>{ &text.success_message }</p>
                        <button type="button" class="contact-submit" onclick={on_close}>
                            { &text.close }
                        </button>
                    </div>
                } else {
                    <form class="contact-form" onsubmit={on_submit} novalidate=true>
                        <h2 id="contact-title">{ &text.title }</h2>
                        <div class="contact-field">
                            <label for="contact-name">{ &text.name }</label>
                            <input
                                id="contact-name"
                                type="text"
                                placeholder={text.name_placeholder.clone()}
                                value={form.name.clone()}
                                oninput={on_input(Field::Name)}
                                aria-invalid={invalid(Field::Name)}
                            />
                            { error_for(Field::Name) }
                        </div>
                        <div class="contact-field">
                            <label for="contact-breed">{ &text.breed }</label>
                            <input
                                id="contact-breed"
                                type="text"
                                placeholder={text.breed_placeholder.clone()}
                                value={form.breed.clone()}
                                oninput={on_input(Field::Breed)}
                                aria-invalid={invalid(Field::Breed)}
                            />
                            { error_for(Field::Breed) }
                        </div>
                        <div class="contact-field">
                            <label for="contact-concept">{ &text.concept }</label>
                            <select
                                id="contact-concept"
                                onchange={on_concept}
                                aria-invalid={invalid(Field::Concept)}
                            >
                                <option value="" disabled=true selected={form.concept.is_empty()}>
                                    { &text.concept_placeholder }
                                </option>
                                { for text.concept_options.iter().map(|option| html! {
                                    <option
                                        key={option.value.clone()}
                                        value={option.value.clone()}
                                        selected={option.value == form.concept}
                                    >
                                        { &option.label }
                                    </option>
                                }) }
                            </select>
                            { error_for(Field::Concept) }
                        </div>
                        <div class="contact-field">
                            <label for="contact-email">{ &text.email }</label>
                            <input
                                id="contact-email"
                                type="email"
                                placeholder={text.email_placeholder.clone()}
                                value={form.email.clone()}
                                oninput={on_input(Field::Email)}
                                aria-invalid={invalid(Field::Email)}
                            />
                            { error_for(Field::Email) }
                        </div>
                        <button type="submit" class="contact-submit">{ &text.submit }</button>
                    </form>
                }
            </div>
        </div>
    }
}
