//! Keeps sequential keyboard focus inside one container, as modal dialogs and
//! drawers need.

use zincdom::roving::Handled;
use zincdom::{resolve_tabbable, tabbable_boundary, Document, FocusHost, Key, Modifiers, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTrap {
    container: NodeId,
}

impl FocusTrap {
    pub fn new(container: NodeId) -> Self {
        Self { container }
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Move focus to the first tabbable element of the container.
    pub fn activate(&self, doc: &Document, host: &mut impl FocusHost) -> Option<NodeId> {
        let first = tabbable_boundary(doc, self.container).first?;
        host.focus(first);
        Some(first)
    }

    /// Cycle Tab and Shift+Tab through the container's tabbable elements.
    ///
    /// Focus that sits outside the container's tab order is brought back to
    /// the first element in either direction. A container with nothing
    /// tabbable leaves the key to the host.
    pub fn handle_key(
        &self,
        doc: &Document,
        key: Key,
        modifiers: Modifiers,
        host: &mut impl FocusHost,
    ) -> Handled {
        let backwards = match key {
            Key::BackTab => true,
            Key::Tab => modifiers.shift,
            _ => return Handled::Ignored,
        };

        let tabbable = resolve_tabbable(doc, self.container);
        let (Some(&first), Some(&last)) = (tabbable.first(), tabbable.last()) else {
            return Handled::Ignored;
        };

        let position = host
            .focused()
            .and_then(|f| tabbable.iter().position(|&n| n == f));
        let target = match (position, backwards) {
            (None, _) => first,
            (Some(0), true) => last,
            (Some(i), true) => tabbable[i - 1],
            (Some(i), false) if i + 1 == tabbable.len() => first,
            (Some(i), false) => tabbable[i + 1],
        };

        log::trace!("[focus-trap] {key:?} -> {target}");
        host.focus(target);
        Handled::Consumed
    }
}
