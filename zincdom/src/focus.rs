use crate::document::{Document, NodeId};
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::tabbable::resolve_tabbable;

/// The environment's single input focus, consumed as an external service.
pub trait FocusHost {
    /// The node that currently has input focus.
    fn focused(&self) -> Option<NodeId>;

    /// Move input focus to `node`. Returns true if focus changed.
    fn focus(&mut self, node: NodeId) -> bool;

    /// Synthesize a primary activation on `node`.
    fn click(&mut self, node: NodeId);
}

/// Tracks which node is currently focused and records the resulting events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<NodeId>,
    events: Vec<Event>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        match self.focused.take() {
            Some(old) => {
                self.events.push(Event::Blur {
                    target: old,
                    new_target: None,
                });
                true
            }
            None => false,
        }
    }

    /// Drain the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Focus the next tabbable node under `root` (Tab navigation).
    /// Returns the newly focused node if focus changed.
    pub fn focus_next(&mut self, doc: &Document, root: NodeId) -> Option<NodeId> {
        let tabbable = resolve_tabbable(doc, root);
        if tabbable.is_empty() {
            return None;
        }

        let new_focus = match self.focused.and_then(|f| tabbable.iter().position(|&n| n == f)) {
            Some(i) => tabbable[(i + 1) % tabbable.len()],
            None => tabbable[0],
        };

        self.focus(new_focus).then_some(new_focus)
    }

    /// Focus the previous tabbable node under `root` (Shift+Tab navigation).
    /// Returns the newly focused node if focus changed.
    pub fn focus_prev(&mut self, doc: &Document, root: NodeId) -> Option<NodeId> {
        let tabbable = resolve_tabbable(doc, root);
        let last = *tabbable.last()?;

        let new_focus = match self.focused.and_then(|f| tabbable.iter().position(|&n| n == f)) {
            Some(0) | None => last,
            Some(i) => tabbable[i - 1],
        };

        self.focus(new_focus).then_some(new_focus)
    }

    /// Handle a key press against the tree under `root`.
    ///
    /// Tab and Shift+Tab move focus sequentially; any other key is recorded as
    /// an [`Event::Key`] targeted at the focused node.
    pub fn process_key(&mut self, doc: &Document, root: NodeId, key: Key, modifiers: Modifiers) {
        match key {
            Key::Tab if modifiers.shift => {
                self.focus_prev(doc, root);
            }
            Key::BackTab => {
                self.focus_prev(doc, root);
            }
            Key::Tab => {
                self.focus_next(doc, root);
            }
            _ => self.events.push(Event::Key {
                target: self.focused,
                key,
                modifiers,
            }),
        }
    }
}

impl FocusHost for FocusState {
    fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    fn focus(&mut self, node: NodeId) -> bool {
        if self.focused == Some(node) {
            return false;
        }
        log::debug!("[focus] Changing focus from {:?} to {}", self.focused, node);
        if let Some(old) = self.focused.replace(node) {
            self.events.push(Event::Blur {
                target: old,
                new_target: Some(node),
            });
        }
        self.events.push(Event::Focus { target: node });
        true
    }

    fn click(&mut self, node: NodeId) {
        self.events.push(Event::Click {
            target: node,
            button: MouseButton::Left,
        });
    }
}
