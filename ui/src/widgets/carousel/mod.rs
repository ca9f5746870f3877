mod engine;
mod view;

pub use engine::{CarouselEvent, CarouselPhase, CarouselState, CarouselTiming, ZoomLevel};
pub use view::ImageCarousel;
