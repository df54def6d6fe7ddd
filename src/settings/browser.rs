use std::rc::Rc;

use log::warn;
use web_sys::Storage;
use yew::prelude::*;

use super::{Environment, KeyValueStore, Settings, SettingsError, SettingsStore};

/// `window.localStorage`, looked up on every access so private-mode
/// browsers without storage degrade to in-memory settings.
pub struct LocalStorage;

fn local_storage() -> Result<Storage, SettingsError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(SettingsError::Unavailable)
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &'static str) -> Result<Option<String>, SettingsError> {
        local_storage()?
            .get_item(key)
            .map_err(|err| SettingsError::Storage {
                key,
                message: format!("{:?}", err),
            })
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), SettingsError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| SettingsError::Storage {
                key,
                message: format!("{:?}", err),
            })
    }
}

pub fn probe_environment() -> Environment {
    let Some(window) = web_sys::window() else {
        return Environment::default();
    };
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    Environment {
        prefers_dark,
        language: window.navigator().language(),
    }
}

/// Mirrors the settings onto `<html data-theme lang>` for the stylesheets.
pub fn apply_to_document(settings: &Settings) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", settings.theme.as_str());
    let _ = root.set_attribute("lang", settings.locale.as_str());
}

#[derive(Clone)]
pub struct SettingsContext {
    store: Rc<SettingsStore<LocalStorage>>,
    pub settings: Settings,
}

impl PartialEq for SettingsContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.settings == other.settings
    }
}

impl SettingsContext {
    pub fn toggle_theme(&self) {
        if let Err(err) = self.store.toggle_theme() {
            warn!("theme not persisted: {}", err);
        }
    }

    pub fn toggle_locale(&self) {
        if let Err(err) = self.store.toggle_locale() {
            warn!("locale not persisted: {}", err);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsProviderProps {
    pub children: Children,
}

#[function_component(SettingsProvider)]
pub fn settings_provider(props: &SettingsProviderProps) -> Html {
    let store = use_memo(
        |_| {
            let store = SettingsStore::init(LocalStorage, &probe_environment());
            apply_to_document(&store.current());
            store.subscribe(apply_to_document);
            store
        },
        (),
    );
    let settings = use_state(|| store.current());

    {
        let store = store.clone();
        let settings = settings.clone();
        use_effect_with_deps(
            move |_| {
                let id = store.subscribe(move |next| settings.set(*next));
                move || {
                    store.unsubscribe(id);
                }
            },
            (),
        );
    }

    let context = SettingsContext {
        store,
        settings: *settings,
    };

    html! {
        <ContextProvider<SettingsContext> context={context}>
            { props.children.clone() }
        </ContextProvider<SettingsContext>>
    }
}

#[hook]
pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>().expect("use_settings called outside SettingsProvider")
}
