use dioxus::prelude::*;

use ui::views::Site;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    tracing::debug!("web shell rendering");

    rsx! {
        // Global app resources
        document::Title { "FFPUM - Federación de Familias para la Paz" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        Site {}
    }
}
