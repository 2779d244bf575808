use zinc::{Dropdown, Error, Menu};
use zincdom::{Document, Element, FocusHost, FocusState, Handled, Key, ShadowMode};

fn actions(doc: &mut Document) -> Dropdown {
    Dropdown::mount(
        doc,
        Element::button().id("trigger"),
        [
            Element::span().id("caption"),
            Element::button().id("panel-ok"),
        ],
    )
    .unwrap()
}

fn edit_menu(doc: &mut Document) -> Dropdown {
    Dropdown::mount(
        doc,
        Element::button().id("trigger"),
        [Menu::element([
            Menu::item("Cut").id("cut"),
            Menu::item("Copy").id("copy"),
            Menu::item("Paste").id("paste"),
        ])],
    )
    .unwrap()
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_new_requires_trigger_slot() {
    let mut doc = Document::new();
    let host = doc.mount(Element::custom("zn-dropdown").shadow(ShadowMode::Open, [Element::slot()]));

    assert_eq!(
        Dropdown::new(&doc, host).unwrap_err(),
        Error::MissingSlot {
            host,
            name: "trigger".to_string()
        }
    );
}

#[test]
fn test_accessible_trigger_skips_untabbable_elements() {
    let mut doc = Document::new();
    let dropdown = Dropdown::mount(&mut doc, Element::span().id("icon"), []).unwrap();
    assert_eq!(dropdown.accessible_trigger(&doc), None);

    // A later trigger with something tabbable inside it is picked up
    let wrapper = doc
        .append(
            dropdown.host(),
            Element::div()
                .slot_name("trigger")
                .child(Element::button().id("real")),
        )
        .unwrap();
    assert_eq!(dropdown.accessible_trigger(&doc), Some(wrapper));

    dropdown.update_accessible_trigger(&mut doc).unwrap();
    assert_eq!(doc.attribute(wrapper, "aria-haspopup"), Some("true"));
    assert_eq!(doc.attribute(wrapper, "aria-expanded"), Some("false"));
}

// ============================================================================
// Open state
// ============================================================================

#[test]
fn test_show_and_hide() {
    let mut doc = Document::new();
    let dropdown = actions(&mut doc);
    let trigger = doc.find("trigger").unwrap();

    assert!(!dropdown.is_open(&doc));
    assert!(dropdown.show(&mut doc).unwrap());
    assert!(!dropdown.show(&mut doc).unwrap());
    assert!(dropdown.is_open(&doc));
    assert_eq!(doc.attribute(trigger, "aria-expanded"), Some("true"));

    assert!(dropdown.hide(&mut doc).unwrap());
    assert!(!dropdown.hide(&mut doc).unwrap());
    assert_eq!(doc.attribute(trigger, "aria-expanded"), Some("false"));
}

#[test]
fn test_disabled_dropdown_stays_closed() {
    let mut doc = Document::new();
    let dropdown = actions(&mut doc);
    doc.set_flag(dropdown.host(), "disabled", true).unwrap();

    assert!(!dropdown.show(&mut doc).unwrap());
    assert!(!dropdown.is_open(&doc));
}

#[test]
fn test_focus_panel_only_when_open() {
    let mut doc = Document::new();
    let dropdown = actions(&mut doc);
    let mut focus = FocusState::new();

    // Closed panels are not rendered, so nothing inside is tabbable
    assert_eq!(dropdown.focus_panel(&doc, &mut focus), None);
    assert_eq!(focus.focused(), None);

    dropdown.show(&mut doc).unwrap();
    let ok = doc.find("panel-ok");
    assert_eq!(dropdown.focus_panel(&doc, &mut focus), ok);
    assert_eq!(focus.focused(), ok);
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_trigger_enter_toggles() {
    let mut doc = Document::new();
    let dropdown = actions(&mut doc);
    let mut focus = FocusState::new();

    let handled = dropdown.on_trigger_key(&mut doc, Key::Enter, &mut focus).unwrap();
    assert_eq!(handled, Handled::Consumed);
    assert!(dropdown.is_open(&doc));
    assert_eq!(focus.focused(), doc.find("trigger"));

    dropdown.on_trigger_key(&mut doc, Key::Char(' '), &mut focus).unwrap();
    assert!(!dropdown.is_open(&doc));
}

#[test]
fn test_trigger_arrows_enter_the_menu() {
    let mut doc = Document::new();
    let dropdown = edit_menu(&mut doc);
    let mut focus = FocusState::new();

    dropdown.on_trigger_key(&mut doc, Key::Down, &mut focus).unwrap();
    assert!(dropdown.is_open(&doc));
    assert_eq!(focus.focused(), doc.find("cut"));
    assert_eq!(doc.attribute(doc.find("cut").unwrap(), "tabindex"), Some("0"));

    dropdown.on_trigger_key(&mut doc, Key::Up, &mut focus).unwrap();
    assert_eq!(focus.focused(), doc.find("paste"));
    assert_eq!(doc.attribute(doc.find("cut").unwrap(), "tabindex"), Some("-1"));
}

#[test]
fn test_trigger_arrows_without_menu_are_ignored() {
    let mut doc = Document::new();
    let dropdown = actions(&mut doc);
    let mut focus = FocusState::new();

    let handled = dropdown.on_trigger_key(&mut doc, Key::Down, &mut focus).unwrap();
    assert_eq!(handled, Handled::Ignored);
    assert!(!dropdown.is_open(&doc));
}

#[test]
fn test_escape_closes_and_returns_to_trigger() {
    let mut doc = Document::new();
    let dropdown = actions(&mut doc);
    let mut focus = FocusState::new();

    assert_eq!(
        dropdown.on_key(&mut doc, Key::Escape, &mut focus).unwrap(),
        Handled::Ignored
    );

    dropdown.show(&mut doc).unwrap();
    dropdown.focus_panel(&doc, &mut focus);
    assert_eq!(
        dropdown.on_key(&mut doc, Key::Escape, &mut focus).unwrap(),
        Handled::Consumed
    );
    assert!(!dropdown.is_open(&doc));
    assert_eq!(focus.focused(), doc.find("trigger"));
}

#[test]
fn test_tab_from_menu_item_closes_and_returns_to_trigger() {
    let mut doc = Document::new();
    let dropdown = edit_menu(&mut doc);
    let mut focus = FocusState::new();

    dropdown.on_trigger_key(&mut doc, Key::Down, &mut focus).unwrap();
    assert_eq!(focus.focused(), doc.find("cut"));

    assert_eq!(
        dropdown.on_key(&mut doc, Key::Tab, &mut focus).unwrap(),
        Handled::Consumed
    );
    assert!(!dropdown.is_open(&doc));
    assert_eq!(focus.focused(), doc.find("trigger"));
}

#[test]
fn test_tab_elsewhere_is_left_alone() {
    let mut doc = Document::new();
    let dropdown = edit_menu(&mut doc);
    let mut focus = FocusState::new();
    dropdown.show(&mut doc).unwrap();
    focus.focus(doc.find("trigger").unwrap());

    assert_eq!(
        dropdown.on_key(&mut doc, Key::Tab, &mut focus).unwrap(),
        Handled::Ignored
    );
    assert!(dropdown.is_open(&doc));
}
