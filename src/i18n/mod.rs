//! Embedded ko/en dictionaries.
//!
//! Plain strings are read with [`Dictionary::t`] using dotted keys
//! (`"hero.title"`, `"sections.slides.0.title"`); structured entries are
//! deserialized into the typed views below.

use log::warn;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use yew::prelude::*;

use crate::settings::browser::use_settings;
use crate::settings::Locale;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("malformed dictionary: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("translation key not found: {0}")]
    Missing(String),
    #[error("unexpected shape under {key}: {source}")]
    Shape {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MagazineItem {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text {
        content: String,
    },
    Image {
        #[serde(default)]
        caption: Option<String>,
    },
    Quote {
        content: String,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub title: String,
    pub description: String,
    pub image_alt: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TeamMember {
    pub role: String,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProcessStep {
    pub number: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConceptOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FormErrorText {
    pub required: String,
    pub email: String,
    pub concept: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormText {
    pub title: String,
    pub name: String,
    pub name_placeholder: String,
    pub breed: String,
    pub breed_placeholder: String,
    pub concept: String,
    pub concept_placeholder: String,
    pub concept_options: Vec<ConceptOption>,
    pub email: String,
    pub email_placeholder: String,
    pub submit: String,
    pub success_title: String,
    pub success_message: String,
    pub close: String,
    pub errors: FormErrorText,
}

#[derive(Debug, PartialEq)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    pub fn from_json(source: &str) -> Result<Self, I18nError> {
        Ok(Self {
            root: serde_json::from_str(source)?,
        })
    }

    fn empty() -> Self {
        Self {
            root: Value::Object(Default::default()),
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.').try_fold(&self.root, |value, part| match value {
            Value::Object(map) => map.get(part),
            Value::Array(items) => part.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// The string under `key`, or the key itself when there is none.
    pub fn t(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(Value::String(text)) => text.clone(),
            _ => {
                warn!("translation key not found: {}", key);
                key.to_string()
            }
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, I18nError> {
        let value = self
            .lookup(key)
            .ok_or_else(|| I18nError::Missing(key.to_string()))?;
        T::deserialize(value).map_err(|source| I18nError::Shape {
            key: key.to_string(),
            source,
        })
    }

    /// Structured entry, logged and replaced by `T::default()` when absent.
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.get(key).unwrap_or_else(|err| {
            warn!("{}", err);
            T::default()
        })
    }

    pub fn magazine(&self, slug: &str) -> Option<MagazineItem> {
        // Slugs contain no dots, but guard anyway so "a.b" cannot walk the tree.
        if slug.is_empty() || slug.contains('.') {
            return None;
        }
        self.get(&format!("magazine.items.{}", slug)).ok()
    }

    pub fn contact_form(&self) -> Result<ContactFormText, I18nError> {
        self.get("about.contactForm")
    }
}

fn load(locale: Locale, source: &str) -> Dictionary {
    Dictionary::from_json(source).unwrap_or_else(|err| {
        warn!("{} dictionary unusable: {}", locale.as_str(), err);
        Dictionary::empty()
    })
}

static KO: Lazy<Dictionary> = Lazy::new(|| load(Locale::Ko, include_str!("locales/ko.json")));
static EN: Lazy<Dictionary> = Lazy::new(|| load(Locale::En, include_str!("locales/en.json")));

pub fn dictionary(locale: Locale) -> &'static Dictionary {
    match locale {
        Locale::Ko => &KO,
        Locale::En => &EN,
    }
}

#[hook]
pub fn use_dictionary() -> &'static Dictionary {
    dictionary(use_settings().settings.locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MAGAZINE_SLUGS;
    use std::collections::BTreeSet;

    fn leaf_keys(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    leaf_keys(child, &format!("{}.{}", prefix, key), out);
                }
            }
            Value::Array(items) => {
                for (i, child) in items.iter().enumerate() {
                    leaf_keys(child, &format!("{}.{}", prefix, i), out);
                }
            }
            _ => {
                out.insert(prefix.to_string());
            }
        }
    }

    #[test]
    fn embedded_dictionaries_parse() {
        Dictionary::from_json(include_str!("locales/ko.json")).unwrap();
        Dictionary::from_json(include_str!("locales/en.json")).unwrap();
        assert_ne!(dictionary(Locale::Ko), &Dictionary::empty());
    }

    #[test]
    fn locales_share_the_same_keys() {
        let mut ko = BTreeSet::new();
        let mut en = BTreeSet::new();
        leaf_keys(&dictionary(Locale::Ko).root, "", &mut ko);
        leaf_keys(&dictionary(Locale::En).root, "", &mut en);
        let diff: Vec<_> = ko.symmetric_difference(&en).collect();
        assert!(diff.is_empty(), "keys differ: {:?}", diff);
    }

    #[test]
    fn dotted_lookup_and_fallback() {
        let en = dictionary(Locale::En);
        assert_eq!(en.t("nav.magazine"), "Magazine");
        assert_eq!(en.t("sections.slides.1.title"), "Trails");
        assert_eq!(en.t("nav.nowhere"), "nav.nowhere");
        // Objects are not strings.
        assert_eq!(en.t("nav"), "nav");
        assert_eq!(dictionary(Locale::Ko).t("nav.magazine"), "매거진");
    }

    #[test]
    fn every_magazine_resolves_in_both_locales() {
        for locale in [Locale::Ko, Locale::En] {
            for slug in MAGAZINE_SLUGS {
                let item = dictionary(locale).magazine(slug);
                assert!(item.is_some(), "{} missing in {:?}", slug, locale);
                assert!(!item.unwrap().content.is_empty());
            }
        }
        assert_eq!(dictionary(Locale::En).magazine("unknown"), None);
        assert_eq!(dictionary(Locale::En).magazine("jeju-pet-tour.title"), None);
    }

    #[test]
    fn typed_views_deserialize() {
        let en = dictionary(Locale::En);
        let slides: Vec<Slide> = en.get("sections.slides").unwrap();
        assert_eq!(slides.len(), 5);
        let stats: Vec<Stat> = en.get("sections.stats").unwrap();
        assert!(!stats.is_empty());
        let form = en.contact_form().unwrap();
        assert_eq!(form.concept_options.len(), 4);

        let jeju = en.magazine("jeju-pet-tour").unwrap();
        assert_eq!(
            jeju.content[1],
            ContentBlock::Image {
                caption: Some("Morning walk along the olle trail".to_string())
            }
        );
    }

    #[test]
    fn wrong_shape_is_reported() {
        let en = dictionary(Locale::En);
        let err = en.get::<Vec<Stat>>("nav").unwrap_err();
        assert!(matches!(err, I18nError::Shape { .. }));
        let err = en.get::<Vec<Stat>>("missing.key").unwrap_err();
        assert!(matches!(err, I18nError::Missing(_)));
        let empty: Vec<Stat> = en.get_or_default("missing.key");
        assert!(empty.is_empty());
    }
}
