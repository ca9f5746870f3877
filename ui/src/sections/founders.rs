use dioxus::prelude::*;

use crate::components::Icon;
use crate::content::{Founders, IconKind};

#[component]
pub fn FoundersSection(founders: Founders) -> Element {
    rsx! {
        section { id: "fundadores", class: "section section--gradient",
            div { class: "container",
                div { class: "section__heading",
                    h2 { "{founders.title}" }
                    p { "{founders.intro}" }
                }
                div { class: "founders",
                    div { class: "founders__column",
                        for person in founders.people.iter() {
                            article { key: "{person.name}", class: "card card--centered founder",
                                div { class: "founder__portrait",
                                    img {
                                        src: "{person.resolved_portrait()}",
                                        alt: "{person.name}",
                                        width: "128",
                                        height: "128",
                                    }
                                }
                                h3 { class: "card__title card__title--large", "{person.name}" }
                                p { class: "founder__role", "{person.role}" }
                                p { class: "card__body", "{person.bio}" }
                            }
                        }
                    }
                    div { class: "founders__column",
                        article { class: "card card--highlight teachings",
                            h3 { class: "card__title card__title--large teachings__title",
                                Icon { kind: IconKind::BookOpen }
                                "{founders.teachings.title}"
                            }
                            for item in founders.teachings.items.iter() {
                                div { key: "{item.title}", class: "teachings__item",
                                    h4 {
                                        Icon { kind: IconKind::Star, class: "icon--small" }
                                        "{item.title}"
                                    }
                                    p { "{item.body}" }
                                }
                            }
                        }
                        article { class: "card",
                            h3 { class: "card__title", "{founders.legacy.title}" }
                            p { class: "card__body", "{founders.legacy.body}" }
                        }
                    }
                }
            }
        }
    }
}
