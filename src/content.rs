//! Static imagery and the fixed order of magazine stories.

use chrono::NaiveDate;

use crate::i18n::ContentBlock;

pub const MAGAZINE_SLUGS: [&str; 6] = [
    "jeju-pet-tour",
    "gangwon-healing-camping",
    "seoul-pet-cafe",
    "busan-beach-walk",
    "pet-friendly-pension",
    "forest-trekking",
];

pub const HERO_VIDEO: &str = "/video/main.mp4";
pub const HERO_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1587300003388-59208cc962cb?q=80&w=2070&auto=format&fit=crop";
pub const FAMILY_IMAGE: &str =
    "https://images.unsplash.com/photo-1530281700549-e82e7bf110d6?q=80&w=1976&auto=format&fit=crop";
pub const ABOUT_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1587300003388-59208cc962cb?q=80&w=2070&auto=format&fit=crop";
pub const SHARE_IMAGE: &str = "/share.jpg";
pub const LOGO_IMAGE: &str = "/favicon.png";

pub const SLIDE_IMAGES: [&str; 5] = [
    "https://images.unsplash.com/photo-1601758228041-f3b2795255f1?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1551632811-561732d1e306?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1559925393-8be0ec4767c8?q=80&w=2071&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1507146426996-ef05306b995a?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1534361960057-19889db9621e?q=80&w=2070&auto=format&fit=crop",
];

pub const STATS_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1469474968028-56623f02e42e?q=80&w=2074&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1447752875215-b2761acb3c5d?q=80&w=2070&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1433086966358-54859d0ed716?q=80&w=2074&auto=format&fit=crop",
];

pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("instagram", "https://instagram.com"),
    ("facebook", "https://facebook.com"),
    ("youtube", "https://youtube.com"),
];

/// Cover image used on the list card, the detail hero and the home cards.
pub fn magazine_cover(slug: &str) -> Option<&'static str> {
    let url = match slug {
        "jeju-pet-tour" => "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?q=80&w=2073&auto=format&fit=crop",
        "gangwon-healing-camping" => "https://images.unsplash.com/photo-1504280390367-361c6d9f38f4?q=80&w=2070&auto=format&fit=crop",
        "seoul-pet-cafe" => "https://images.unsplash.com/photo-1559925393-8be0ec4767c8?q=80&w=2071&auto=format&fit=crop",
        "busan-beach-walk" => "https://images.unsplash.com/photo-1507146426996-ef05306b995a?q=80&w=2070&auto=format&fit=crop",
        "pet-friendly-pension" => "https://images.unsplash.com/photo-1587300003388-59208cc962cb?q=80&w=2070&auto=format&fit=crop",
        "forest-trekking" => "https://images.unsplash.com/photo-1551632811-561732d1e306?q=80&w=2070&auto=format&fit=crop",
        _ => return None,
    };
    Some(url)
}

/// In-article images, consumed in order by the story's image blocks.
pub fn magazine_images(slug: &str) -> &'static [&'static str] {
    match slug {
        "jeju-pet-tour" => &[
            "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?q=80&w=2069&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1587300003388-59208cc962cb?q=80&w=2070&auto=format&fit=crop",
        ],
        "gangwon-healing-camping" => &[
            "https://images.unsplash.com/photo-1523987355523-c7b5b0dd90a7?q=80&w=2070&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1551632811-561732d1e306?q=80&w=2070&auto=format&fit=crop",
        ],
        "seoul-pet-cafe" => &[
            "https://images.unsplash.com/photo-1601758228041-f3b2795255f1?q=80&w=2070&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1587300003388-59208cc962cb?q=80&w=2070&auto=format&fit=crop",
        ],
        "busan-beach-walk" => &[
            "https://images.unsplash.com/photo-1530281700549-e82e7bf110d6?q=80&w=2076&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?q=80&w=2073&auto=format&fit=crop",
        ],
        "pet-friendly-pension" => &[
            "https://images.unsplash.com/photo-1601758174114-e711c0cbaa69?q=80&w=2070&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1523987355523-c7b5b0dd90a7?q=80&w=2070&auto=format&fit=crop",
        ],
        "forest-trekking" => &[
            "https://images.unsplash.com/photo-1544568100-847a948585b9?q=80&w=2074&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1502086223501-7ea6ecd79368?q=80&w=2076&auto=format&fit=crop",
        ],
        _ => &[],
    }
}

/// Pairs each block with the image it shows. Image blocks take the next
/// unused image; text and quote blocks get `None`.
pub fn with_images<'a>(
    blocks: &'a [ContentBlock],
    images: &[&'static str],
) -> Vec<(&'a ContentBlock, Option<&'static str>)> {
    let mut remaining = images.iter().copied();
    blocks
        .iter()
        .map(|block| match block {
            ContentBlock::Image { .. } => (block, remaining.next()),
            _ => (block, None),
        })
        .collect()
}

/// `2025.03.14` as shown on cards, converted for `<time datetime>`.
pub fn iso_date(display: &str) -> Option<String> {
    NaiveDate::parse_from_str(display.trim(), "%Y.%m.%d")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_blocks_consume_images_in_order() {
        let blocks = vec![
            ContentBlock::Text {
                content: "a".into(),
            },
            ContentBlock::Image { caption: None },
            ContentBlock::Quote {
                content: "b".into(),
            },
            ContentBlock::Image {
                caption: Some("c".into()),
            },
            ContentBlock::Image { caption: None },
        ];
        let paired = with_images(&blocks, &["one", "two"]);
        let images: Vec<_> = paired.iter().map(|(_, image)| *image).collect();
        assert_eq!(images, vec![None, Some("one"), None, Some("two"), None]);
    }

    #[test]
    fn display_dates_convert_to_iso() {
        assert_eq!(iso_date("2025.03.14").as_deref(), Some("2025-03-14"));
        assert_eq!(iso_date(" 2024.12.19 ").as_deref(), Some("2024-12-19"));
        assert_eq!(iso_date("2025.02.30"), None);
        assert_eq!(iso_date("soon"), None);
    }

    #[test]
    fn every_slug_has_artwork() {
        for slug in MAGAZINE_SLUGS {
            assert!(magazine_cover(slug).is_some(), "{}", slug);
            assert_eq!(magazine_images(slug).len(), 2, "{}", slug);
        }
        assert_eq!(magazine_cover("nope"), None);
        assert!(magazine_images("nope").is_empty());
    }
}
