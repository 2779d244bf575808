use zincdom::{Document, Element, Event, FocusHost, FocusState, Key, Modifiers, NodeId, ShadowMode};

fn form() -> (Document, NodeId) {
    let mut doc = Document::new();
    let root = doc.mount(
        Element::div()
            .id("form")
            .child(Element::input("text").id("input1"))
            .child(
                Element::custom("zn-select")
                    .shadow(ShadowMode::Open, [Element::button().id("input2")]),
            )
            .child(Element::input("text").id("input3")),
    );
    (doc, root)
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_focus_state_focus_blur() {
    let (doc, _) = form();
    let input1 = doc.find("input1").unwrap();
    let input3 = doc.find("input3").unwrap();
    let mut focus = FocusState::new();

    assert_eq!(focus.focused(), None);

    assert!(focus.focus(input1));
    assert_eq!(focus.focused(), Some(input1));

    // Focus same node - no change
    assert!(!focus.focus(input1));

    assert!(focus.focus(input3));
    assert!(focus.blur());
    assert_eq!(focus.focused(), None);

    // Blur when nothing focused
    assert!(!focus.blur());

    assert_eq!(
        focus.take_events(),
        vec![
            Event::Focus { target: input1 },
            Event::Blur {
                target: input1,
                new_target: Some(input3)
            },
            Event::Focus { target: input3 },
            Event::Blur {
                target: input3,
                new_target: None
            },
        ]
    );
    assert!(focus.take_events().is_empty());
}

#[test]
fn test_focus_next_crosses_shadow_boundary() {
    let (doc, root) = form();
    let expected: Vec<_> = ["input1", "input2", "input3", "input1"]
        .iter()
        .map(|id| doc.find(id))
        .collect();
    let mut focus = FocusState::new();

    let visited: Vec<_> = (0..4).map(|_| focus.focus_next(&doc, root)).collect();
    assert_eq!(visited, expected);
}

#[test]
fn test_focus_prev_wraps() {
    let (doc, root) = form();
    let mut focus = FocusState::new();

    // Focus last when nothing focused
    assert_eq!(focus.focus_prev(&doc, root), doc.find("input3"));
    assert_eq!(focus.focus_prev(&doc, root), doc.find("input2"));
    assert_eq!(focus.focus_prev(&doc, root), doc.find("input1"));
    assert_eq!(focus.focus_prev(&doc, root), doc.find("input3"));
}

#[test]
fn test_focus_no_tabbable_nodes() {
    let mut doc = Document::new();
    let root = doc.mount(Element::div().child(Element::span()));
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&doc, root), None);
    assert_eq!(focus.focus_prev(&doc, root), None);
}

#[test]
fn test_focus_single_node() {
    let mut doc = Document::new();
    let root = doc.mount(Element::div().child(Element::button().id("only")));
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&doc, root), doc.find("only"));

    // Already focused, nothing changes
    assert_eq!(focus.focus_next(&doc, root), None);
    assert_eq!(focus.focus_prev(&doc, root), None);
}

#[test]
fn test_process_key_tab_and_shift_tab() {
    let (doc, root) = form();
    let mut focus = FocusState::new();

    focus.process_key(&doc, root, Key::Tab, Modifiers::new());
    focus.process_key(&doc, root, Key::Tab, Modifiers::new());
    assert_eq!(focus.focused(), doc.find("input2"));

    focus.process_key(&doc, root, Key::Tab, Modifiers::shift());
    assert_eq!(focus.focused(), doc.find("input1"));

    focus.process_key(&doc, root, Key::BackTab, Modifiers::shift());
    assert_eq!(focus.focused(), doc.find("input3"));
}

#[test]
fn test_process_key_forwards_other_keys() {
    let (doc, root) = form();
    let mut focus = FocusState::new();
    let input1 = doc.find("input1").unwrap();
    focus.focus(input1);
    focus.take_events();

    focus.process_key(&doc, root, Key::Char('x'), Modifiers::ctrl());
    assert_eq!(
        focus.take_events(),
        vec![Event::Key {
            target: Some(input1),
            key: Key::Char('x'),
            modifiers: Modifiers::ctrl(),
        }]
    );
}

#[test]
fn test_crossterm_key_conversion() {
    use crossterm::event::{KeyCode, KeyModifiers};

    assert_eq!(Key::from(KeyCode::Down), Key::Down);
    assert_eq!(Key::from(KeyCode::Esc), Key::Escape);
    assert!(Key::from(KeyCode::Char(' ')).is_activation());
    assert!(Key::from(KeyCode::Enter).is_activation());

    let mods = Modifiers::from(KeyModifiers::SHIFT | KeyModifiers::ALT);
    assert!(mods.shift && mods.alt && !mods.ctrl);
}
