use serde_json::json;
use web_sys::{Document, Element};
use yew::prelude::*;

use crate::config::{get_site_url, SITE_NAME};
use crate::content::{LOGO_IMAGE, SHARE_IMAGE, SOCIAL_LINKS};

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Absolute URL of `path` on the deployed site.
pub fn site_url(path: &str) -> String {
    let base = get_site_url().trim_end_matches('/');
    match path.trim_start_matches('/') {
        "" => base.to_string(),
        rest => format!("{}/{}", base, rest),
    }
}

/// Finds the head element matching `selector`, creating it if needed.
fn head_element(document: &Document, selector: &str, tag: &str, key: (&str, &str)) -> Option<Element> {
    if let Some(existing) = document.query_selector(selector).ok().flatten() {
        return Some(existing);
    }
    let element = document.create_element(tag).ok()?;
    let _ = element.set_attribute(key.0, key.1);
    document.head()?.append_child(&element).ok()?;
    Some(element)
}

fn remove(document: &Document, selector: &str) {
    if let Some(element) = document.query_selector(selector).ok().flatten() {
        element.remove();
    }
}

/// Updates `<meta {attribute}="{key}" content=...>`. `None` drops the tag so a
/// page never inherits another page's value.
fn set_meta(document: &Document, attribute: &str, key: &str, content: Option<&str>) {
    let selector = format!("meta[{}=\"{}\"]", attribute, key);
    match content {
        Some(content) => {
            if let Some(meta) = head_element(document, &selector, "meta", (attribute, key)) {
                let _ = meta.set_attribute("content", content);
            }
        }
        None => remove(document, &selector),
    }
}

/// Open Graph and Twitter card of a shareable page.
#[derive(Clone, Debug, PartialEq)]
pub struct SocialCard {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
}

impl SocialCard {
    /// Card for `path`, previewed with the shared site image.
    pub fn for_path(title: impl Into<String>, description: impl Into<String>, path: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: site_url(path),
            image: site_url(SHARE_IMAGE),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub robots: Option<&'static str>,
    pub keywords: Option<String>,
    pub social: Option<SocialCard>,
    /// JSON-LD document.
    pub structured_data: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            robots: None,
            keywords: None,
            social: None,
            structured_data: None,
        }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn with_social(mut self, card: SocialCard) -> Self {
        self.social = Some(card);
        self
    }

    pub fn with_structured_data(mut self, json: String) -> Self {
        self.structured_data = Some(json);
        self
    }

    pub fn canonical(&self) -> Option<&str> {
        self.social.as_ref().map(|card| card.url.as_str())
    }

    /// `(attribute, key, content)` for every meta tag a page may own.
    /// Tags this page leaves unset carry `None`.
    pub fn tags(&self) -> Vec<(&'static str, &'static str, Option<String>)> {
        let card = self.social.as_ref();
        let og_title = card.map_or(&self.title, |card| &card.title).clone();
        let og_description = card.map_or(&self.description, |card| &card.description).clone();

        vec![
            ("name", "description", Some(self.description.clone())),
            ("name", "keywords", self.keywords.clone()),
            ("name", "robots", Some(self.robots.unwrap_or("index, follow").to_string())),
            ("property", "og:title", Some(og_title)),
            ("property", "og:description", Some(og_description)),
            ("property", "og:type", card.map(|_| "website".to_string())),
            ("property", "og:url", card.map(|card| card.url.clone())),
            ("property", "og:image", card.map(|card| card.image.clone())),
            ("name", "twitter:card", card.map(|_| "summary_large_image".to_string())),
            ("name", "twitter:title", card.map(|card| card.title.clone())),
            ("name", "twitter:description", card.map(|card| card.description.clone())),
            ("name", "twitter:image", card.map(|card| card.image.clone())),
        ]
    }
}

/// Schema.org Organization for the site, linked to its social profiles.
pub fn organization_schema(description: &str) -> String {
    let same_as: Vec<&str> = SOCIAL_LINKS.iter().map(|(_, url)| *url).collect();
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": SITE_NAME,
        "url": site_url("/"),
        "logo": site_url(LOGO_IMAGE),
        "description": description,
        "sameAs": same_as,
    })
    .to_string()
}

pub fn apply(meta: &PageMeta) {
    let Some(document) = document() else {
        return;
    };
    document.set_title(&meta.title);
    for (attribute, key, content) in meta.tags() {
        set_meta(&document, attribute, key, content.as_deref());
    }

    let canonical = "link[rel=\"canonical\"]";
    match meta.canonical() {
        Some(url) => {
            if let Some(link) = head_element(&document, canonical, "link", ("rel", "canonical")) {
                let _ = link.set_attribute("href", url);
            }
        }
        None => remove(&document, canonical),
    }

    let ld = "script[type=\"application/ld+json\"]";
    match &meta.structured_data {
        Some(json) => {
            if let Some(script) = head_element(&document, ld, "script", ("type", "application/ld+json")) {
                script.set_text_content(Some(json));
            }
        }
        None => remove(&document, ld),
    }
}

/// Keeps the document head in sync with the rendering page.
#[hook]
pub fn use_page_meta(meta: PageMeta) {
    use_effect_with_deps(
        |meta| {
            apply(meta);
            || ()
        },
        meta,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content<'a>(tags: &'a [(&str, &str, Option<String>)], key: &str) -> Option<&'a str> {
        tags.iter()
            .find(|(_, name, _)| *name == key)
            .and_then(|(_, _, content)| content.as_deref())
    }

    #[test]
    fn site_urls_join_cleanly() {
        let base = get_site_url();
        assert_eq!(site_url("/"), base);
        assert_eq!(site_url(""), base);
        assert_eq!(site_url("/share.jpg"), format!("{}/share.jpg", base));
        assert_eq!(site_url("about"), format!("{}/about", base));
    }

    #[test]
    fn plain_page_clears_sharing_tags() {
        let meta = PageMeta::new("About", "Who we are");
        let tags = meta.tags();
        assert_eq!(content(&tags, "description"), Some("Who we are"));
        assert_eq!(content(&tags, "og:title"), Some("About"));
        assert_eq!(content(&tags, "robots"), Some("index, follow"));
        for key in ["keywords", "og:url", "og:image", "og:type", "twitter:card", "twitter:image"] {
            assert_eq!(content(&tags, key), None, "{}", key);
        }
        assert_eq!(meta.canonical(), None);
    }

    #[test]
    fn shared_page_carries_card_and_canonical() {
        let meta = PageMeta::new("Home | TravelWithPets", "Trips for two")
            .with_keywords("pet travel")
            .with_social(SocialCard::for_path("TravelWithPets", "Paw prints", "/"));
        let tags = meta.tags();
        let image = site_url(SHARE_IMAGE);

        assert_eq!(meta.canonical(), Some(get_site_url()));
        assert_eq!(content(&tags, "keywords"), Some("pet travel"));
        assert_eq!(content(&tags, "og:title"), Some("TravelWithPets"));
        assert_eq!(content(&tags, "og:description"), Some("Paw prints"));
        assert_eq!(content(&tags, "og:type"), Some("website"));
        assert_eq!(content(&tags, "og:url"), Some(get_site_url()));
        assert_eq!(content(&tags, "og:image"), Some(image.as_str()));
        assert_eq!(content(&tags, "twitter:card"), Some("summary_large_image"));
        assert_eq!(content(&tags, "twitter:title"), Some("TravelWithPets"));
        assert_eq!(content(&tags, "twitter:image"), Some(image.as_str()));
    }

    #[test]
    fn organization_links_social_profiles() {
        let schema: serde_json::Value =
            serde_json::from_str(&organization_schema("Pet trips")).unwrap();
        assert_eq!(schema["@type"], "Organization");
        assert_eq!(schema["name"], SITE_NAME);
        assert_eq!(schema["description"], "Pet trips");
        assert_eq!(schema["logo"], site_url(LOGO_IMAGE));
        assert_eq!(schema["sameAs"].as_array().map(Vec::len), Some(SOCIAL_LINKS.len()));
    }
}
