use dioxus::prelude::*;

use crate::components::Icon;
use crate::content::Activities;

#[component]
pub fn ActivitiesSection(activities: Activities) -> Element {
    rsx! {
        section { id: "actividades", class: "section section--tinted",
            div { class: "container",
                div { class: "section__heading",
                    h2 { "{activities.title}" }
                    p { "{activities.intro}" }
                }
                div { class: "card-grid card-grid--three",
                    for card in activities.cards.iter() {
                        article { key: "{card.title}", class: "card card--lift",
                            div { class: "card__icon {card.tone.css_class()}",
                                Icon { kind: card.icon }
                            }
                            h3 { class: "card__title", "{card.title}" }
                            p { class: "card__body", "{card.body}" }
                            ul { class: "card__bullets",
                                for bullet in card.bullets.iter() {
                                    li { key: "{bullet}", "{bullet}" }
                                }
                            }
                        }
                    }
                }
                div { class: "card-grid card-grid--two",
                    article { class: "card card--highlight",
                        h3 { class: "card__title card__title--large", "{activities.mission.title}" }
                        p { class: "card__body", "{activities.mission.body}" }
                    }
                    article { class: "card",
                        h3 { class: "card__title card__title--large", "{activities.vision.title}" }
                        p { class: "card__body", "{activities.vision.body}" }
                    }
                }
            }
        }
    }
}
