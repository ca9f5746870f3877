use dioxus::prelude::*;

use crate::content::{ImageEntry, PLACEHOLDER_IMAGE};
use crate::core::timing::sleep_ms;

use super::engine::{CarouselState, CarouselTiming, ZoomLevel};

/// Cycles through `slides` with a fade between images.
///
/// The rotation state is seeded from `slides` on mount and never re-seeded; callers
/// that swap the sequence must key the carousel so it remounts (see `HeroSection`).
#[component]
pub fn ImageCarousel(
    slides: Vec<ImageEntry>,
    #[props(default)] timing: CarouselTiming,
    #[props(default)] zoom: ZoomLevel,
    #[props(default = "center".to_string())] object_position: String,
) -> Element {
    let mut state = use_signal(|| CarouselState::for_slides(&slides));

    // One driver per mounted carousel; cancelled explicitly when the widget goes away.
    let driver = use_hook(|| {
        spawn(async move {
            loop {
                let Some(current) = *state.peek() else {
                    tracing::warn!("image carousel has no slides; rotation not started");
                    break;
                };
                let (delay_ms, event) = current.next_event(&timing);
                sleep_ms(delay_ms).await;
                let next = current.step(event);
                tracing::trace!(index = next.index(), phase = ?next.phase(), "carousel step");
                state.set(Some(next));
            }
        })
    });
    use_drop(move || driver.cancel());

    let Some(current) = state() else {
        return rsx! {
            div { class: "carousel carousel--empty",
                div { class: "carousel__frame",
                    img { class: "carousel__image carousel__image--visible", src: PLACEHOLDER_IMAGE, alt: "" }
                }
            }
        };
    };

    let Some(slide) = slides.get(current.index()).or_else(|| slides.first()) else {
        return rsx! {};
    };
    let image_class = if current.is_visible() {
        let zoom_class = ZoomLevel::for_slide(zoom, slide.wants_strong_zoom()).css_class();
        format!("carousel__image carousel__image--visible {zoom_class}")
    } else {
        "carousel__image carousel__image--hidden".to_string()
    };
    let source = slide.resolved_source().to_string();
    let alt = slide.alt_text.clone();
    let dots: Vec<bool> = current.indicators().collect();

    rsx! {
        div { class: "carousel",
            div { class: "carousel__frame",
                img {
                    class: "{image_class}",
                    src: "{source}",
                    alt: "{alt}",
                    width: "400",
                    height: "300",
                    style: "object-position: {object_position};",
                }
            }
            div { class: "carousel__indicators", aria_hidden: "true",
                for (idx, active) in dots.into_iter().enumerate() {
                    span {
                        key: "{idx}",
                        class: if active { "carousel__dot carousel__dot--active" } else { "carousel__dot" },
                    }
                }
            }
        }
    }
}
