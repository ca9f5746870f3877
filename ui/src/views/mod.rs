mod home;
mod site;

pub use home::Home;
pub use site::Site;
