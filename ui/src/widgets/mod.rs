//! Interactive widgets. Each keeps its logic in a pure `engine` and renders it from a `view`.

pub mod carousel;
pub mod contact_selector;

pub use carousel::ImageCarousel;
pub use contact_selector::{use_contact_dialog, ContactDialog, CountryContactDialog};
