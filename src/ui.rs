use yew::prelude::*;

/// Overlay state shared by the header, footer, pages and the contact modal.
#[derive(Clone, PartialEq)]
pub struct UiContext {
    pub contact_open: bool,
    pub menu_open: bool,
    pub set_contact_open: Callback<bool>,
    pub set_menu_open: Callback<bool>,
}

impl UiContext {
    /// Something is covering the page and should own keyboard and wheel input.
    pub fn overlay_open(&self) -> bool {
        self.contact_open || self.menu_open
    }

    pub fn open_contact(&self) {
        self.set_menu_open.emit(false);
        self.set_contact_open.emit(true);
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

#[derive(Properties, PartialEq)]
pub struct UiProviderProps {
    pub children: Children,
}

#[function_component(UiProvider)]
pub fn ui_provider(props: &UiProviderProps) -> Html {
    let contact_open = use_state(|| false);
    let menu_open = use_state(|| false);

    // The page underneath stays put while the menu or the modal is up.
    use_effect_with_deps(
        |locked| {
            set_body_overflow(if *locked { "hidden" } else { "" });
            || set_body_overflow("")
        },
        *contact_open || *menu_open,
    );

    let context = UiContext {
        contact_open: *contact_open,
        menu_open: *menu_open,
        set_contact_open: {
            let contact_open = contact_open.clone();
            Callback::from(move |open: bool| contact_open.set(open))
        },
        set_menu_open: {
            let menu_open = menu_open.clone();
            Callback::from(move |open: bool| menu_open.set(open))
        },
    };

    html! {
        <ContextProvider<UiContext> context={context}>
            { props.children.clone() }
        </ContextProvider<UiContext>>
    }
}

#[hook]
pub fn use_ui() -> UiContext {
    use_context::<UiContext>().expect("use_ui called outside UiProvider")
}
