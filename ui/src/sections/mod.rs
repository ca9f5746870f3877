//! One component per page section, in scroll order.

mod activities;
mod contact;
mod footer;
mod founders;
mod hero;
mod history;
mod values;

pub use activities::ActivitiesSection;
pub use contact::ContactDirectorySection;
pub use footer::SiteFooter;
pub use founders::FoundersSection;
pub use hero::HeroSection;
pub use history::HistorySection;
pub use values::ValuesSection;

/// Element ids of the anchor targets, in page order.
pub const SECTION_IDS: [&str; 6] = [
    "inicio",
    "actividades",
    "valores",
    "fundadores",
    "historia",
    "contacto",
];
