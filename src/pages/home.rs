use yew::prelude::*;

use crate::components::dual_card_section::{CardData, DualCardSection};
use crate::components::hero::Hero;
use crate::components::semicircle_slider::{SemicircleSlider, SlideData};
use crate::components::split_section::SplitSection;
use crate::components::stats_section::StatsSection;
use crate::config::SECTION_SELECTOR;
use crate::content::{magazine_cover, FAMILY_IMAGE, HERO_FALLBACK_IMAGE, HERO_VIDEO, SLIDE_IMAGES, STATS_IMAGES};
use crate::head::{organization_schema, use_page_meta, PageMeta, SocialCard};
use crate::i18n::{use_dictionary, Dictionary, Slide, Stat};
use crate::scroll::use_section_scroll;
use crate::settings::browser::use_settings;
use crate::ui::use_ui;
use crate::Route;

fn card(dict: &Dictionary, side: &str, slug: &str) -> CardData {
    let key = |field: &str| dict.t(&format!("sections.cards.{}.{}", side, field));
    CardData {
        image: magazine_cover(slug).unwrap_or(HERO_FALLBACK_IMAGE),
        image_alt: key("imageAlt"),
        date: key("date"),
        title: key("title"),
        description: key("description"),
        href: Some(Route::Magazine {
            slug: slug.to_string(),
        }),
    }
}

fn slides(dict: &Dictionary) -> Vec<SlideData> {
    dict.get_or_default::<Vec<Slide>>("sections.slides")
        .into_iter()
        .zip(SLIDE_IMAGES)
        .map(|(slide, image)| SlideData {
            image,
            image_alt: slide.image_alt,
            title: slide.title,
            description: slide.description,
        })
        .collect()
}

#[function_component(Home)]
pub fn home() -> Html {
    let dict = use_dictionary();
    let locale = use_settings().settings.locale;
    let ui = use_ui();

    use_page_meta(
        PageMeta::new(dict.t("meta.title"), dict.t("meta.description"))
            .with_keywords(dict.t("meta.keywords"))
            .with_social(SocialCard::for_path(
                dict.t("meta.ogTitle"),
                dict.t("meta.ogDescription"),
                "/",
            ))
            .with_structured_data(organization_schema(&dict.t("meta.description"))),
    );
    // Sections re-register when the locale swaps their content.
    use_section_scroll(SECTION_SELECTOR, ui.overlay_open(), locale.as_str());

    html! {
        <>
            <div data-section="hero">
                <Hero background_video={Some(HERO_VIDEO)} />
            </div>
            <div data-section="family">
                <SplitSection
                    image={FAMILY_IMAGE}
                    image_alt={dict.t("sections.family.imageAlt")}
                    title={dict.t("sections.family.title")}
                />
            </div>
            <div data-section="cards">
                <DualCardSection
                    left={card(dict, "left", "jeju-pet-tour")}
                    right={card(dict, "right", "gangwon-healing-camping")}
                />
            </div>
            <div data-section="slider">
                <SemicircleSlider slides={slides(dict)} />
            </div>
            <div data-section="stats">
                <StatsSection
                    stats={dict.get_or_default::<Vec<Stat>>("sections.stats")}
                    images={STATS_IMAGES}
                    link_text={dict.t("sections.statsLink")}
                />
            </div>
        </>
    }
}
