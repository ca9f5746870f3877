use dioxus::prelude::*;

use crate::components::Icon;
use crate::content::{ContactSection, IconKind};
use crate::core::format;
use crate::widgets::ContactDialog;

#[component]
pub fn ContactDirectorySection(contact: ContactSection) -> Element {
    let dialog = use_context::<ContactDialog>();

    rsx! {
        section { id: "contacto", class: "section",
            div { class: "container",
                div { class: "section__heading",
                    h2 { "{contact.title}" }
                    p { "{contact.intro}" }
                }
                div { class: "card-grid card-grid--four",
                    for record in contact.directory.records().iter() {
                        article { key: "{record.name}", class: "card contact-card",
                            div { class: "card__icon card__icon--round tone--emerald-green",
                                Icon { kind: IconKind::MapPin }
                            }
                            h3 { class: "card__title", "{record.name}" }
                            ul { class: "contact-card__details",
                                li {
                                    Icon { kind: IconKind::Phone, class: "icon--small" }
                                    a { href: "{format::tel_href(&record.phone)}", "{record.phone}" }
                                }
                                li {
                                    Icon { kind: IconKind::Mail, class: "icon--small" }
                                    a { href: "{format::mailto_href(&record.email)}", "{record.email}" }
                                }
                                li {
                                    Icon { kind: IconKind::MapPin, class: "icon--small" }
                                    span { "{record.address}" }
                                }
                            }
                        }
                    }
                }
                article { class: "card card--highlight contact-cta",
                    h3 { class: "card__title card__title--large", "{contact.cta.title}" }
                    p { class: "contact-cta__body", "{contact.cta.body}" }
                    div { class: "contact-cta__actions",
                        button {
                            r#type: "button",
                            class: "button button--light button--large",
                            onclick: move |_| dialog.open(),
                            Icon { kind: IconKind::Heart }
                            "{contact.cta.learn_more}"
                        }
                        button {
                            r#type: "button",
                            class: "button button--light button--large",
                            onclick: move |_| dialog.open(),
                            Icon { kind: IconKind::Users }
                            "{contact.cta.join_now}"
                        }
                    }
                }
            }
        }
    }
}
