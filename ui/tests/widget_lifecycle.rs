//! Widgets mounted in a headless `VirtualDom`: signal wiring and timer teardown.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;

use ui::content::{ImageEntry, SiteContent};
use ui::widgets::contact_selector::SelectorState;
use ui::widgets::{use_contact_dialog, ContactDialog, CountryContactDialog, ImageCarousel};

type Slot<T> = Rc<RefCell<Option<T>>>;

fn dialog_host(slot: Slot<ContactDialog>) -> Element {
    let content = use_hook(|| SiteContent::embedded().expect("embedded content validates"));
    let dialog = use_contact_dialog(content.directory().clone());
    slot.borrow_mut().get_or_insert(dialog);

    rsx! { CountryContactDialog {} }
}

fn carousel_host(slot: Slot<Signal<bool>>) -> Element {
    let show = use_signal(|| true);
    slot.borrow_mut().get_or_insert(show);

    rsx! {
        if show() {
            ImageCarousel {
                slides: vec![
                    ImageEntry::new("images/family1.jpg", "familia"),
                    ImageEntry::new("images/family2.jpg", "encuentro"),
                ],
            }
        }
    }
}

#[test]
fn dialog_handle_drives_shared_state() {
    let slot: Slot<ContactDialog> = Slot::default();
    let mut dom = VirtualDom::new_with_props(dialog_host, slot.clone());
    dom.rebuild_in_place();

    let dialog = slot.borrow().expect("host stores its dialog handle");
    assert_eq!(dom.in_runtime(|| dialog.state()), SelectorState::Closed);

    dom.in_runtime(|| {
        dialog.open();
        dialog.select_country("Chile".to_string());
        dialog.reveal_information();
    });
    dom.render_immediate(&mut NoOpMutations);
    assert_eq!(
        dom.in_runtime(|| dialog.state()),
        SelectorState::Revealed {
            selected: "Chile".into()
        }
    );

    dom.in_runtime(|| dialog.choose_another());
    dom.render_immediate(&mut NoOpMutations);
    assert_eq!(
        dom.in_runtime(|| dialog.state()),
        SelectorState::Picking { selected: None }
    );

    dom.in_runtime(|| dialog.close());
    dom.render_immediate(&mut NoOpMutations);
    assert_eq!(dom.in_runtime(|| dialog.state()), SelectorState::Closed);
}

#[tokio::test(start_paused = true)]
async fn carousel_timer_stops_when_unmounted() {
    let slot: Slot<Signal<bool>> = Slot::default();
    let mut dom = VirtualDom::new_with_props(carousel_host, slot.clone());
    dom.rebuild_in_place();

    // The first cycle elapses after 8 s and schedules a re-render.
    let ticked = tokio::time::timeout(Duration::from_millis(8_100), dom.wait_for_work()).await;
    assert!(ticked.is_ok(), "carousel never advanced while mounted");
    dom.render_immediate(&mut NoOpMutations);

    let mut show = slot.borrow().expect("host stores its visibility signal");
    dom.in_runtime(|| show.set(false));
    dom.render_immediate(&mut NoOpMutations);

    let pending = tokio::time::timeout(Duration::from_secs(60), dom.wait_for_work()).await;
    assert!(pending.is_err(), "carousel timer kept running after unmount");
}
