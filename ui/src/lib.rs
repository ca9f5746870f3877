//! Shared UI crate for the FFPUM Subregión 2 site. Content, widgets and page sections live here;
//! the `web` and `desktop` crates only launch [`views::Site`].

pub mod content;
pub mod core;
pub mod sections;
pub mod views;
pub mod widgets;

pub mod components {
    // Page header with anchor navigation (components/site_header.rs)
    pub mod site_header;
    pub use site_header::SiteHeader;

    mod icon;
    pub use icon::Icon;
}
