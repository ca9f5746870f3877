use dioxus::prelude::*;

use crate::content::SiteContent;
use crate::core::platform::{self, Platform};

use super::Home;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Root shared by every platform: theme stylesheet, content loading, then the page.
#[component]
pub fn Site() -> Element {
    let content = use_hook(|| {
        tracing::info!(platform = Platform::current().as_str(), "mounting site");
        SiteContent::embedded().map_err(|err| {
            tracing::error!(%err, "embedded site content rejected");
            err.to_string()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if platform::needs_inline_styles() {
            document::Style { "{THEME_CSS_INLINE}" }
        }

        {match content {
            Ok(content) => rsx! { Home { content } },
            Err(message) => rsx! {
                div { class: "site-error",
                    h1 { "FFPUM" }
                    p { "No se pudo cargar el contenido del sitio." }
                    pre { class: "site-error__detail", "{message}" }
                }
            },
        }}
    }
}
