//! Rotation state for the hero image carousels.
//!
//! The engine is a plain value: the view owns a driver task that asks
//! [`CarouselState::next_event`] how long to wait, sleeps, then feeds the event
//! back through [`CarouselState::step`].

use std::num::NonZeroUsize;

/// How long a slide stays on screen and how long its fade-out lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    pub cycle_ms: u64,
    pub fade_ms: u64,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            cycle_ms: 8_000,
            fade_ms: 400,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    Showing,
    FadingOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The slide has been visible for a full cycle.
    CycleElapsed,
    /// The fade-out transition finished.
    FadeElapsed,
}

/// Zoom applied to the visible slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomLevel {
    #[default]
    Standard,
    Strong,
}

impl ZoomLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            ZoomLevel::Standard => "zoom-effect-10",
            ZoomLevel::Strong => "zoom-effect-20",
        }
    }

    /// Flagged slides always get the strong zoom; others keep the carousel's base level.
    pub fn for_slide(base: ZoomLevel, strong_requested: bool) -> ZoomLevel {
        if strong_requested {
            ZoomLevel::Strong
        } else {
            base
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: NonZeroUsize,
    index: usize,
    phase: CarouselPhase,
}

impl CarouselState {
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            index: 0,
            phase: CarouselPhase::Showing,
        }
    }

    /// `None` for an empty slide list.
    pub fn for_slides<T>(slides: &[T]) -> Option<Self> {
        NonZeroUsize::new(slides.len()).map(Self::new)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn is_visible(&self) -> bool {
        self.phase == CarouselPhase::Showing
    }

    /// Apply one timer event. Events that do not belong to the current phase are ignored.
    pub fn step(self, event: CarouselEvent) -> Self {
        match (self.phase, event) {
            (CarouselPhase::Showing, CarouselEvent::CycleElapsed) => Self {
                phase: CarouselPhase::FadingOut,
                ..self
            },
            (CarouselPhase::FadingOut, CarouselEvent::FadeElapsed) => Self {
                index: (self.index + 1) % self.len.get(),
                phase: CarouselPhase::Showing,
                ..self
            },
            _ => self,
        }
    }

    /// Delay the driver must wait before delivering the returned event.
    pub fn next_event(&self, timing: &CarouselTiming) -> (u64, CarouselEvent) {
        match self.phase {
            CarouselPhase::Showing => (timing.cycle_ms, CarouselEvent::CycleElapsed),
            CarouselPhase::FadingOut => (timing.fade_ms, CarouselEvent::FadeElapsed),
        }
    }

    /// Run a full show + fade cycle.
    pub fn advance(self) -> Self {
        self.step(CarouselEvent::CycleElapsed)
            .step(CarouselEvent::FadeElapsed)
    }

    /// One flag per slide, `true` for the active position.
    pub fn indicators(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len.get()).map(move |idx| idx == self.index)
    }
}
