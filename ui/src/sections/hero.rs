use dioxus::prelude::*;

use crate::components::Icon;
use crate::content::{Hero, IconKind, ImageSequence};
use crate::widgets::carousel::ZoomLevel;
use crate::widgets::{ContactDialog, ImageCarousel};

#[component]
pub fn HeroSection(hero: Hero, carousels: Vec<ImageSequence>) -> Element {
    let dialog = use_context::<ContactDialog>();

    rsx! {
        section { id: "inicio", class: "section hero",
            div { class: "container hero__inner",
                span { class: "badge", "{hero.badge}" }
                h1 { class: "hero__title",
                    "{hero.title_lead} "
                    span { class: "text-gradient", "{hero.title_highlight}" }
                }
                p { class: "hero__intro", "{hero.intro}" }
                div { class: "hero__actions",
                    a { class: "button button--primary button--large", href: "#actividades",
                        Icon { kind: IconKind::Heart }
                        "{hero.mission_cta}"
                    }
                    button {
                        r#type: "button",
                        class: "button button--outline button--large",
                        onclick: move |_| dialog.open(),
                        Icon { kind: IconKind::Users }
                        "{hero.community_cta}"
                    }
                }
            }
            div { class: "hero__carousels",
                for sequence in carousels {
                    div { key: "{sequence.name}", class: "hero__carousel",
                        ImageCarousel { slides: sequence.slides.clone(), zoom: ZoomLevel::Standard }
                    }
                }
            }
        }
    }
}
