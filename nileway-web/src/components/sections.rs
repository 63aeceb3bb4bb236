//! Page sections the navigation targets.

use crate::i18n::t;
use nileway_core::Lang;
use yew::prelude::*;

pub struct SectionInfo {
    pub id: &'static str,
    pub title_key: &'static str,
}

/// Sections in document order; nav links and the scroll reactor both key
/// off the ids.
pub const SECTIONS: [SectionInfo; 5] = [
    SectionInfo { id: "home", title_key: "nav.home" },
    SectionInfo { id: "about", title_key: "nav.about" },
    SectionInfo { id: "gallery", title_key: "nav.gallery" },
    SectionInfo { id: "testimonials", title_key: "nav.testimonials" },
    SectionInfo { id: "contact", title_key: "nav.contact" },
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Re-renders the section copy when the language changes.
    pub lang: Lang,
}

#[function_component(Hero)]
pub fn hero(_p: &Props) -> Html {
    html! {
        <section id="home" class="hero-section">
            <h1 class="hero-title">{ t("hero.title") }</h1>
            <p class="hero-subtitle">{ t("hero.subtitle") }</p>
        </section>
    }
}

#[function_component(About)]
pub fn about(_p: &Props) -> Html {
    html! {
        <section id="about" class="about-section">
            <h2>{ t("about.title") }</h2>
            <p>{ t("about.body") }</p>
        </section>
    }
}
