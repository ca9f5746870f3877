use dioxus::prelude::*;

use crate::components::Icon;
use crate::content::Values;

#[component]
pub fn ValuesSection(values: Values) -> Element {
    rsx! {
        section { id: "valores", class: "section",
            div { class: "container",
                div { class: "section__heading",
                    h2 { "{values.title}" }
                    p { "{values.intro}" }
                }
                div { class: "card-grid card-grid--four",
                    for item in values.items.iter() {
                        article { key: "{item.title}", class: "card card--centered",
                            div { class: "card__icon card__icon--centered {item.tone.css_class()}",
                                Icon { kind: item.icon }
                            }
                            h3 { class: "card__title", "{item.title}" }
                            p { class: "card__body", "{item.body}" }
                        }
                    }
                }
            }
        }
    }
}
