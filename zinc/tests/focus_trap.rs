use zinc::FocusTrap;
use zincdom::{Document, Element, FocusHost, FocusState, Handled, Key, Modifiers, NodeId, ShadowMode};

fn dialog() -> (Document, FocusTrap) {
    let mut doc = Document::new();
    doc.mount(Element::button().id("outside"));
    let container = doc.mount(
        Element::custom("zn-dialog")
            .shadow(
                ShadowMode::Open,
                [
                    Element::button().id("close"),
                    Element::slot(),
                    Element::named_slot("footer"),
                ],
            )
            .child(Element::input("text").id("name"))
            .child(Element::button().slot_name("footer").id("save")),
    );
    (doc, FocusTrap::new(container))
}

fn id(doc: &Document, node: Option<NodeId>) -> Option<String> {
    node.and_then(|n| doc.element_id(n)).map(str::to_string)
}

#[test]
fn test_activate_focuses_first() {
    let (doc, trap) = dialog();
    let mut focus = FocusState::new();

    assert_eq!(id(&doc, trap.activate(&doc, &mut focus)), Some("close".into()));
    assert_eq!(id(&doc, focus.focused()), Some("close".into()));
}

#[test]
fn test_tab_cycles_and_wraps() {
    let (doc, trap) = dialog();
    let mut focus = FocusState::new();
    trap.activate(&doc, &mut focus);

    let mut visited = Vec::new();
    for _ in 0..3 {
        let handled = trap.handle_key(&doc, Key::Tab, Modifiers::new(), &mut focus);
        assert_eq!(handled, Handled::Consumed);
        visited.push(id(&doc, focus.focused()).unwrap());
    }
    assert_eq!(visited, vec!["name", "save", "close"]);
}

#[test]
fn test_shift_tab_wraps_to_last() {
    let (doc, trap) = dialog();
    let mut focus = FocusState::new();
    trap.activate(&doc, &mut focus);

    trap.handle_key(&doc, Key::Tab, Modifiers::shift(), &mut focus);
    assert_eq!(id(&doc, focus.focused()), Some("save".into()));

    trap.handle_key(&doc, Key::BackTab, Modifiers::shift(), &mut focus);
    assert_eq!(id(&doc, focus.focused()), Some("name".into()));
}

#[test]
fn test_focus_outside_is_pulled_in() {
    let (doc, trap) = dialog();
    let mut focus = FocusState::new();
    focus.focus(doc.find("outside").unwrap());

    trap.handle_key(&doc, Key::BackTab, Modifiers::new(), &mut focus);
    assert_eq!(id(&doc, focus.focused()), Some("close".into()));
}

#[test]
fn test_other_keys_pass_through() {
    let (doc, trap) = dialog();
    let mut focus = FocusState::new();

    for key in [Key::Enter, Key::Escape, Key::Down] {
        assert_eq!(
            trap.handle_key(&doc, key, Modifiers::new(), &mut focus),
            Handled::Ignored
        );
    }
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_empty_container_is_noop() {
    let mut doc = Document::new();
    let container = doc.mount(Element::div().child(Element::span()));
    let trap = FocusTrap::new(container);
    let mut focus = FocusState::new();

    assert_eq!(trap.activate(&doc, &mut focus), None);
    assert_eq!(
        trap.handle_key(&doc, Key::Tab, Modifiers::new(), &mut focus),
        Handled::Ignored
    );
    assert!(focus.take_events().is_empty());
}

#[test]
fn test_trap_follows_live_tree() {
    let (mut doc, trap) = dialog();
    let mut focus = FocusState::new();
    let save = doc.find("save").unwrap();
    focus.focus(save);

    // Disabling the last element moves the wrap point
    doc.set_flag(save, "disabled", true).unwrap();
    trap.handle_key(&doc, Key::Tab, Modifiers::shift(), &mut focus);
    assert_eq!(id(&doc, focus.focused()), Some("close".into()));
}
