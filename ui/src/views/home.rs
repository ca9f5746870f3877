use dioxus::prelude::*;

use crate::components::SiteHeader;
use crate::content::{SiteContent, HERO_SEQUENCES};
use crate::sections::{
    ActivitiesSection, ContactDirectorySection, FoundersSection, HeroSection, HistorySection,
    SiteFooter, ValuesSection,
};
use crate::widgets::{use_contact_dialog, CountryContactDialog};

/// The whole scrolling page. Owns the contact dialog so every trigger shares it.
#[component]
pub fn Home(content: SiteContent) -> Element {
    use_contact_dialog(content.directory().clone());

    let hero_carousels: Vec<_> = HERO_SEQUENCES
        .iter()
        .filter_map(|name| content.sequence(name).cloned())
        .collect();

    rsx! {
        div { class: "page",
            SiteHeader {
                brand: content.brand.clone(),
                nav: content.nav.clone(),
                join_label: content.hero.join_cta.clone(),
            }
            main {
                HeroSection { hero: content.hero.clone(), carousels: hero_carousels }
                ActivitiesSection { activities: content.activities.clone() }
                ValuesSection { values: content.values.clone() }
                FoundersSection { founders: content.founders.clone() }
                HistorySection { history: content.history.clone() }
                ContactDirectorySection { contact: content.contact.clone() }
            }
            SiteFooter {
                brand: content.brand.clone(),
                footer: content.footer.clone(),
                nav: content.nav.clone(),
            }
        }
        CountryContactDialog {}
    }
}
