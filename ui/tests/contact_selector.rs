//! Contact dialog behaviour against the real embedded directory.

use ui::content::{ContactDirectory, ContactRecord, SiteContent};
use ui::widgets::contact_selector::{SelectorEvent, SelectorState, SelectorView};

fn argentina() -> ContactRecord {
    ContactRecord {
        name: "Argentina".into(),
        office_name: None,
        phone: "+54 11 2345 6789".into(),
        email: "argentina@ffpum-subregion2.org".into(),
        address: "Av. Corrientes 1234, Buenos Aires, Argentina".into(),
        message: "¡Conéctate...!".into(),
    }
}

fn reveal(directory: &ContactDirectory, name: &str) -> SelectorState {
    [
        SelectorEvent::Open,
        SelectorEvent::SelectCountry(name.to_string()),
        SelectorEvent::RevealInformation,
    ]
    .iter()
    .fold(SelectorState::default(), |state, event| state.apply(event, directory))
}

#[test]
fn argentina_scenario_shows_exact_fields() {
    let directory = ContactDirectory::new(vec![argentina()]).unwrap();
    let state = reveal(&directory, "Argentina");

    match state.view(&directory) {
        SelectorView::Revealed(record) => {
            assert_eq!(record.phone, "+54 11 2345 6789");
            assert_eq!(record.email, "argentina@ffpum-subregion2.org");
            assert_eq!(record.address, "Av. Corrientes 1234, Buenos Aires, Argentina");
            assert_eq!(record.message, "¡Conéctate...!");
            assert_eq!(record.office_name, None);
        }
        other => panic!("expected revealed view, got {other:?}"),
    }
}

#[test]
fn every_embedded_country_reveals_its_own_record() {
    let content = SiteContent::embedded().unwrap();
    let directory = content.directory();

    for expected in directory.records() {
        let state = reveal(directory, &expected.name);
        assert_eq!(state.view(directory), SelectorView::Revealed(expected));
    }
}

#[test]
fn embedded_offices_are_present() {
    let content = SiteContent::embedded().unwrap();
    let chile = content.directory().find("Chile").expect("Chile listed");
    assert_eq!(chile.office_name.as_deref(), Some("FFPUM Chile"));
    assert_eq!(chile.address, "Alameda 345, Santiago, Chile");
}

#[test]
fn picker_offers_directory_order() {
    let content = SiteContent::embedded().unwrap();
    let directory = content.directory();
    let state = SelectorState::default().apply(&SelectorEvent::Open, directory);

    assert_eq!(
        state.view(directory),
        SelectorView::Picker {
            options: vec!["Argentina", "Paraguay", "Uruguay", "Chile"],
            selected: None,
            can_reveal: false,
        }
    );
}

#[test]
fn dialog_is_reusable_across_opens() {
    let content = SiteContent::embedded().unwrap();
    let directory = content.directory();

    let state = reveal(directory, "Uruguay").apply(&SelectorEvent::Close, directory);
    assert!(!state.is_open());
    assert_eq!(state.view(directory), SelectorView::Hidden);

    let state = state.apply(&SelectorEvent::Open, directory);
    assert_eq!(state.selected_name(), None);
    assert!(!state.info_revealed());
}
