//! Roving tabindex over a small collection of items.
//!
//! Exactly one item of a collection carries `tabindex="0"` (the current item)
//! and every other item carries `tabindex="-1"`, so only the current item sits
//! in the ambient tab order. The marker lives on the items themselves; the
//! functions here hold no state and re-read the collection on every call.

use crate::document::{Document, NodeId};
use crate::element::attr;
use crate::event::Key;
use crate::focus::FocusHost;

const CURRENT: &str = "0";
const NOT_CURRENT: &str = "-1";

/// Whether a handler consumed its event (suppressing the default action).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Consumed,
    Ignored,
}

impl Handled {
    pub fn is_consumed(self) -> bool {
        self == Handled::Consumed
    }
}

/// Which arrow keys move the current item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Up/Down
    #[default]
    Vertical,
    /// Left/Right
    Horizontal,
    /// All four arrows
    Both,
}

/// Behavior of a roving navigator.
#[derive(Debug, Clone)]
pub struct RovingConfig {
    /// Moving past either end wraps to the other end.
    pub wrap: bool,

    /// Which arrow keys navigate.
    pub orientation: Orientation,

    /// Pointer enter moves input focus as well as the current marker.
    pub focus_on_hover: bool,
}

impl Default for RovingConfig {
    fn default() -> Self {
        Self {
            wrap: true,
            orientation: Orientation::Vertical,
            focus_on_hover: true,
        }
    }
}

impl RovingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn focus_on_hover(mut self, focus: bool) -> Self {
        self.focus_on_hover = focus;
        self
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Next,
    Prev,
    First,
    Last,
}

fn step_for(key: Key, orientation: Orientation) -> Option<Step> {
    let vertical = matches!(orientation, Orientation::Vertical | Orientation::Both);
    let horizontal = matches!(orientation, Orientation::Horizontal | Orientation::Both);
    match key {
        Key::Down if vertical => Some(Step::Next),
        Key::Up if vertical => Some(Step::Prev),
        Key::Right if horizontal => Some(Step::Next),
        Key::Left if horizontal => Some(Step::Prev),
        Key::Home => Some(Step::First),
        Key::End => Some(Step::Last),
        _ => None,
    }
}

/// The item flagged current, if any.
pub fn current(doc: &Document, items: &[NodeId]) -> Option<NodeId> {
    items
        .iter()
        .copied()
        .find(|&item| doc.attribute(item, attr::TABINDEX) == Some(CURRENT))
}

/// Mark `item` current and every other item not current.
///
/// An `item` outside `items` leaves every marker untouched.
pub fn set_current(doc: &mut Document, items: &[NodeId], item: NodeId) {
    if !items.contains(&item) || !doc.is_element(item) {
        log::warn!(
            "[roving] set_current({item}) ignored: not one of the {} items in the collection",
            items.len()
        );
        return;
    }

    for &other in items {
        let value = if other == item { CURRENT } else { NOT_CURRENT };
        if let Err(err) = doc.set_attribute(other, attr::TABINDEX, value) {
            log::warn!("[roving] could not update marker on {other}: {err}");
        }
    }
    log::trace!("[roving] current -> {item}");
}

/// Mark the first item current, e.g. after the collection was replaced.
pub fn reset(doc: &mut Document, items: &[NodeId]) {
    if let Some(&first) = items.first() {
        set_current(doc, items, first);
    }
}

/// Move the current item for an arrow, Home or End key and focus it.
///
/// Keys that do not navigate, and any key on an empty collection, pass through
/// as [`Handled::Ignored`].
pub fn handle_directional_key(
    doc: &mut Document,
    items: &[NodeId],
    key: Key,
    host: &mut impl FocusHost,
    config: &RovingConfig,
) -> Handled {
    let Some(step) = step_for(key, config.orientation) else {
        return Handled::Ignored;
    };
    if items.is_empty() {
        return Handled::Ignored;
    }

    let len = items.len() as isize;
    let mut index = current(doc, items)
        .and_then(|c| items.iter().position(|&i| i == c))
        .unwrap_or(0) as isize;

    match step {
        Step::Next => index += 1,
        Step::Prev => index -= 1,
        Step::First => index = 0,
        Step::Last => index = len - 1,
    }

    if index < 0 {
        index = if config.wrap { len - 1 } else { 0 };
    }
    if index >= len {
        index = if config.wrap { 0 } else { len - 1 };
    }

    let item = items[index as usize];
    log::debug!("[roving] {key:?} -> item {index} ({item})");
    set_current(doc, items, item);
    host.focus(item);
    Handled::Consumed
}

/// Activate the current item on Enter or Space.
///
/// The key is consumed even when nothing is current.
pub fn handle_activation_key(
    doc: &Document,
    items: &[NodeId],
    key: Key,
    host: &mut impl FocusHost,
) -> Handled {
    if !key.is_activation() {
        return Handled::Ignored;
    }
    if let Some(item) = current(doc, items) {
        log::debug!("[roving] activating {item}");
        host.click(item);
    }
    Handled::Consumed
}

/// Hovering an item makes it current, overriding keyboard state.
pub fn handle_pointer_enter(
    doc: &mut Document,
    items: &[NodeId],
    item: NodeId,
    host: &mut impl FocusHost,
    config: &RovingConfig,
) {
    set_current(doc, items, item);
    if config.focus_on_hover && items.contains(&item) {
        host.focus(item);
    }
}
