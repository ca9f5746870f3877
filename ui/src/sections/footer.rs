use dioxus::prelude::*;

use crate::components::Icon;
use crate::content::{resolve_image, Brand, Footer, IconKind, NavLink};
use crate::core::{format, timing};

#[component]
pub fn SiteFooter(brand: Brand, footer: Footer, nav: Vec<NavLink>) -> Element {
    let year = use_hook(timing::current_year);
    let copyright = format::copyright_line(year, &brand.full_name, &brand.region, &footer.rights);
    let logo = resolve_image(&brand.logo).to_string();

    rsx! {
        footer { class: "site-footer",
            div { class: "container site-footer__grid",
                div { class: "site-footer__brand",
                    div { class: "site-footer__brand-row",
                        img { class: "site-footer__logo", src: "{logo}", alt: "Logo {brand.name}", width: "40", height: "40" }
                        div {
                            h3 { "{brand.name}" }
                            p { class: "site-footer__muted", "{brand.region}" }
                        }
                    }
                    p { class: "site-footer__muted", "{footer.about}" }
                }
                div {
                    h4 { "{footer.affiliates_title}" }
                    ul { class: "site-footer__list",
                        for affiliate in footer.affiliates.iter() {
                            li { key: "{affiliate}", "{affiliate}" }
                        }
                    }
                }
                div {
                    h4 { "{footer.links_title}" }
                    ul { class: "site-footer__list",
                        for link in nav.iter() {
                            li { key: "{link.anchor}",
                                a { href: "{link.href()}", "{link.label}" }
                            }
                        }
                    }
                }
                div {
                    h4 { "{footer.contact_title}" }
                    ul { class: "site-footer__list",
                        li {
                            Icon { kind: IconKind::Mail, class: "icon--small" }
                            a { href: "{format::mailto_href(&footer.general_email)}", "{footer.general_email}" }
                        }
                        li {
                            Icon { kind: IconKind::Globe, class: "icon--small" }
                            span { "{footer.website}" }
                        }
                    }
                }
            }
            div { class: "container site-footer__legal",
                p { "{copyright}" }
            }
        }
    }
}
