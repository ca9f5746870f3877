mod engine;
mod view;

pub use engine::{SelectorEvent, SelectorState, SelectorView};
pub use view::{use_contact_dialog, ContactDialog, CountryContactDialog};
