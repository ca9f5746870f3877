use dioxus::prelude::*;

use crate::content::History;

#[component]
pub fn HistorySection(history: History) -> Element {
    rsx! {
        section { id: "historia", class: "section",
            div { class: "container container--narrow",
                div { class: "section__heading",
                    h2 { "{history.title}" }
                    p { "{history.intro}" }
                }
                ol { class: "history",
                    for milestone in history.milestones.iter() {
                        li { key: "{milestone.title}", class: "history__milestone {milestone.accent.css_class()}",
                            h3 { "{milestone.title}" }
                            p { "{milestone.body}" }
                        }
                    }
                }
            }
        }
    }
}
