//! Visitor preferences shared by the whole site.
//!
//! One [`SettingsStore`] lives for the page lifetime. It is initialised from
//! persisted values (falling back to what the browser environment suggests)
//! and pushes every change to its subscribers.

pub mod browser;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{LOCALE_STORAGE_KEY, THEME_STORAGE_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ko,
    En,
}

impl Locale {
    pub fn toggled(self) -> Self {
        match self {
            Locale::Ko => Locale::En,
            Locale::En => Locale::Ko,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }

    /// Korean for any `ko*` language tag, English otherwise.
    pub fn from_language_tag(tag: &str) -> Self {
        if tag.to_lowercase().starts_with("ko") {
            Locale::Ko
        } else {
            Locale::En
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
    pub locale: Locale,
}

/// What the browser suggests when nothing is persisted yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    pub prefers_dark: bool,
    pub language: Option<String>,
}

impl Environment {
    pub fn default_settings(&self) -> Settings {
        Settings {
            theme: if self.prefers_dark { Theme::Dark } else { Theme::Light },
            locale: self
                .language
                .as_deref()
                .map(Locale::from_language_tag)
                .unwrap_or(Locale::Ko),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected {key}: {message}")]
    Storage { key: &'static str, message: String },
    #[error("corrupt value under {key}: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub trait KeyValueStore {
    fn get(&self, key: &'static str) -> Result<Option<String>, SettingsError>;
    fn set(&self, key: &'static str, value: &str) -> Result<(), SettingsError>;
}

#[derive(Serialize, Deserialize)]
struct Persisted<T> {
    state: T,
    #[serde(default)]
    version: u32,
}

#[derive(Serialize, Deserialize)]
struct ThemeState {
    theme: Theme,
}

#[derive(Serialize, Deserialize)]
struct LocaleState {
    locale: Locale,
}

fn read<S, T>(storage: &S, key: &'static str) -> Result<Option<T>, SettingsError>
where
    S: KeyValueStore,
    T: for<'de> Deserialize<'de>,
{
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str::<Persisted<T>>(&raw)
        .map(|persisted| Some(persisted.state))
        .map_err(|source| SettingsError::Corrupt { key, source })
}

fn write<S, T>(storage: &S, key: &'static str, state: T) -> Result<(), SettingsError>
where
    S: KeyValueStore,
    T: Serialize,
{
    let raw = serde_json::to_string(&Persisted { state, version: 0 })
        .map_err(|source| SettingsError::Corrupt { key, source })?;
    storage.set(key, &raw)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&Settings)>;

pub struct SettingsStore<S> {
    storage: S,
    current: Cell<Settings>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_id: Cell<u64>,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Persisted values win; anything missing or unreadable comes from `env`.
    pub fn init(storage: S, env: &Environment) -> Self {
        let defaults = env.default_settings();

        let theme = match read::<_, ThemeState>(&storage, THEME_STORAGE_KEY) {
            Ok(Some(state)) => state.theme,
            Ok(None) => defaults.theme,
            Err(err) => {
                warn!("falling back to default theme: {}", err);
                defaults.theme
            }
        };
        let locale = match read::<_, LocaleState>(&storage, LOCALE_STORAGE_KEY) {
            Ok(Some(state)) => state.locale,
            Ok(None) => defaults.locale,
            Err(err) => {
                warn!("falling back to default locale: {}", err);
                defaults.locale
            }
        };

        Self {
            storage,
            current: Cell::new(Settings { theme, locale }),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn current(&self) -> Settings {
        self.current.get()
    }

    /// Applies the theme and notifies subscribers. The in-memory value is
    /// updated even when persisting fails.
    pub fn set_theme(&self, theme: Theme) -> Result<(), SettingsError> {
        let mut next = self.current();
        if next.theme == theme {
            return Ok(());
        }
        next.theme = theme;
        self.replace(next);
        write(&self.storage, THEME_STORAGE_KEY, ThemeState { theme })
    }

    pub fn toggle_theme(&self) -> Result<(), SettingsError> {
        self.set_theme(self.current().theme.toggled())
    }

    pub fn set_locale(&self, locale: Locale) -> Result<(), SettingsError> {
        let mut next = self.current();
        if next.locale == locale {
            return Ok(());
        }
        next.locale = locale;
        self.replace(next);
        write(&self.storage, LOCALE_STORAGE_KEY, LocaleState { locale })
    }

    pub fn toggle_locale(&self) -> Result<(), SettingsError> {
        self.set_locale(self.current().locale.toggled())
    }

    pub fn subscribe(&self, subscriber: impl Fn(&Settings) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(subscriber)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    fn replace(&self, settings: Settings) {
        self.current.set(settings);
        self.notify();
    }

    fn notify(&self) {
        // Subscribers may (un)subscribe while being notified.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| subscriber.clone())
            .collect();
        let settings = self.current();
        for subscriber in subscribers {
            subscriber(&settings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<&'static str, String>>,
        read_only: bool,
    }

    impl MemoryStore {
        fn with(key: &'static str, value: &str) -> Self {
            let store = Self::default();
            store.values.borrow_mut().insert(key, value.to_string());
            store
        }
    }

    impl KeyValueStore for Rc<MemoryStore> {
        fn get(&self, key: &'static str) -> Result<Option<String>, SettingsError> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &'static str, value: &str) -> Result<(), SettingsError> {
            if self.read_only {
                return Err(SettingsError::Storage {
                    key,
                    message: "quota exceeded".to_string(),
                });
            }
            self.values.borrow_mut().insert(key, value.to_string());
            Ok(())
        }
    }

    fn korean_dark() -> Environment {
        Environment {
            prefers_dark: true,
            language: Some("ko-KR".to_string()),
        }
    }

    #[test]
    fn environment_defaults_apply_without_persisted_values() {
        let store = SettingsStore::init(Rc::new(MemoryStore::default()), &korean_dark());
        assert_eq!(
            store.current(),
            Settings {
                theme: Theme::Dark,
                locale: Locale::Ko
            }
        );

        let english = Environment {
            prefers_dark: false,
            language: Some("en-US".to_string()),
        };
        let store = SettingsStore::init(Rc::new(MemoryStore::default()), &english);
        assert_eq!(store.current().theme, Theme::Light);
        assert_eq!(store.current().locale, Locale::En);
    }

    #[test]
    fn persisted_values_win_over_environment() {
        let storage = Rc::new(MemoryStore::with(
            THEME_STORAGE_KEY,
            r#"{"state":{"theme":"light"},"version":0}"#,
        ));
        storage.values.borrow_mut().insert(
            LOCALE_STORAGE_KEY,
            r#"{"state":{"locale":"en"},"version":0}"#.to_string(),
        );
        let store = SettingsStore::init(storage, &korean_dark());
        assert_eq!(store.current().theme, Theme::Light);
        assert_eq!(store.current().locale, Locale::En);
    }

    #[test]
    fn corrupt_value_falls_back_to_environment() {
        let storage = Rc::new(MemoryStore::with(THEME_STORAGE_KEY, "{not json"));
        let store = SettingsStore::init(storage, &korean_dark());
        assert_eq!(store.current().theme, Theme::Dark);
    }

    #[test]
    fn toggles_persist_and_notify() {
        let storage = Rc::new(MemoryStore::default());
        let store = SettingsStore::init(storage.clone(), &korean_dark());
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            store.subscribe(move |settings| seen.borrow_mut().push(*settings));
        }

        store.toggle_theme().unwrap();
        store.toggle_locale().unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                Settings {
                    theme: Theme::Light,
                    locale: Locale::Ko
                },
                Settings {
                    theme: Theme::Light,
                    locale: Locale::En
                },
            ]
        );
        let reloaded = SettingsStore::init(storage, &Environment::default());
        assert_eq!(reloaded.current(), store.current());
    }

    #[test]
    fn setting_same_value_is_silent() {
        let store = SettingsStore::init(Rc::new(MemoryStore::default()), &korean_dark());
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            store.subscribe(move |_| calls.set(calls.get() + 1));
        }
        store.set_theme(Theme::Dark).unwrap();
        store.set_locale(Locale::Ko).unwrap();
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn unsubscribed_callbacks_are_not_called() {
        let store = SettingsStore::init(Rc::new(MemoryStore::default()), &korean_dark());
        let calls = Rc::new(Cell::new(0));
        let id = {
            let calls = calls.clone();
            store.subscribe(move |_| calls.set(calls.get() + 1))
        };
        store.toggle_theme().unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle_theme().unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn failed_persist_still_updates_memory() {
        let storage = Rc::new(MemoryStore {
            read_only: true,
            ..MemoryStore::default()
        });
        let store = SettingsStore::init(storage, &korean_dark());
        let err = store.toggle_theme().unwrap_err();
        assert!(matches!(err, SettingsError::Storage { .. }));
        assert_eq!(store.current().theme, Theme::Light);
    }

    #[test]
    fn language_tags() {
        assert_eq!(Locale::from_language_tag("KO"), Locale::Ko);
        assert_eq!(Locale::from_language_tag("ko-KR"), Locale::Ko);
        assert_eq!(Locale::from_language_tag("en-GB"), Locale::En);
        assert_eq!(Locale::from_language_tag("ja"), Locale::En);
        assert_eq!(Environment::default().default_settings().locale, Locale::Ko);
    }
}
