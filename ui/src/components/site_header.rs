use dioxus::prelude::*;

use crate::content::{resolve_image, Brand, NavLink};
use crate::core::platform;
use crate::widgets::ContactDialog;

// Header stylesheet; linked through the asset pipeline and inlined on native release builds.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Sticky page header: brand, in-page anchor navigation and the join button.
///
/// Anchors are plain `#section` links; the page has no router. The join button
/// opens the contact dialog provided by [`crate::widgets::use_contact_dialog`].
#[component]
pub fn SiteHeader(brand: Brand, nav: Vec<NavLink>, join_label: String) -> Element {
    let dialog = use_context::<ContactDialog>();
    let logo = resolve_image(&brand.logo).to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if platform::needs_inline_styles() {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#inicio",
                    span { class: "navbar__logo",
                        img { src: "{logo}", alt: "Logo {brand.name}", width: "48", height: "48" }
                    }
                    span { class: "navbar__brand-text",
                        span { class: "navbar__brand-mark", "{brand.name}" }
                        span { class: "navbar__brand-subtitle", "{brand.subtitle}" }
                    }
                }

                nav { class: "navbar__links",
                    for link in nav.iter() {
                        a { key: "{link.anchor}", class: "navbar__link", href: "{link.href()}", "{link.label}" }
                    }
                }

                button {
                    r#type: "button",
                    class: "button button--primary navbar__join",
                    onclick: move |_| dialog.open(),
                    "{join_label}"
                }
            }
        }
    }
}
