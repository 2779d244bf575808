//! Sequential focus order over the composed tree.
//!
//! [`resolve_tabbable`] walks ordinary children, content projected through
//! slots, and open shadow roots, then orders the result the way sequential
//! keyboard navigation visits it: positive tab indices first (ascending),
//! everything else in document order. Nothing is cached; every call reads the
//! live tree.

use std::collections::{HashMap, HashSet};

use crate::computed::{is_inert, is_not_rendered, is_scroll_tabbable, is_unslotted, is_visible};
use crate::document::{Document, ElementNode, NodeId};
use crate::element::{attr, TabIndex};
use crate::types::{Display, Tag, Visibility};

/// First and last tabbable nodes under a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Boundary {
    pub first: Option<NodeId>,
    pub last: Option<NodeId>,
}

impl Boundary {
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }
}

struct Candidate<'a> {
    doc: &'a Document,
    node: NodeId,
    el: &'a ElementNode,
    inert: bool,
    visible: bool,
}

impl Candidate<'_> {
    fn has(&self, name: &str) -> bool {
        self.el.attributes.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.el.attributes.get(name).map(String::as_str)
    }
}

/// One row of the tabbability decision table. `None` defers to the next row.
struct Rule {
    name: &'static str,
    decide: fn(&Candidate<'_>) -> Option<bool>,
}

static RULES: &[Rule] = &[
    Rule {
        name: "negative-or-invalid-tabindex",
        decide: |c| match c.get(attr::TABINDEX).map(TabIndex::parse) {
            Some(None) => Some(false),
            Some(Some(n)) if n <= -1 => Some(false),
            _ => None,
        },
    },
    Rule {
        name: "disabled",
        decide: |c| c.has(attr::DISABLED).then_some(false),
    },
    Rule {
        name: "inert",
        decide: |c| c.inert.then_some(false),
    },
    Rule {
        name: "unchecked-radio",
        decide: |c| {
            let radio = c.el.tag == Tag::Input && c.get(attr::TYPE) == Some("radio");
            (radio && !c.has(attr::CHECKED)).then_some(false)
        },
    },
    Rule {
        name: "not-visible",
        decide: |c| (!c.visible).then_some(false),
    },
    Rule {
        name: "media-controls",
        decide: |c| (c.el.tag.is_media() && c.has(attr::CONTROLS)).then_some(true),
    },
    Rule {
        name: "explicit-tabindex",
        decide: |c| c.has(attr::TABINDEX).then_some(true),
    },
    Rule {
        name: "contenteditable",
        decide: |c| match c.get(attr::CONTENT_EDITABLE) {
            Some(value) if value != "false" => Some(true),
            _ => None,
        },
    },
    Rule {
        name: "native-tag",
        decide: |c| c.el.tag.is_natively_tabbable().then_some(true),
    },
    Rule {
        name: "scroll-container",
        decide: |c| is_scroll_tabbable(c.doc, c.node).then_some(true),
    },
];

/// Whether `node` can receive focus through sequential keyboard navigation.
///
/// Shadow roots and unknown nodes are never tabbable. Inherited state is
/// read by climbing the composed ancestors, so prefer [`resolve_tabbable`]
/// when testing a whole subtree.
pub fn is_tabbable(doc: &Document, node: NodeId) -> bool {
    let Ok(el) = doc.element(node) else {
        return false;
    };
    decide(Candidate {
        doc,
        node,
        el,
        inert: is_inert(doc, node),
        visible: is_visible(doc, node),
    })
}

fn decide(candidate: Candidate<'_>) -> bool {
    for rule in RULES {
        if let Some(result) = (rule.decide)(&candidate) {
            log::trace!(
                "[tabbable] {} <{}> {} -> {}",
                candidate.node,
                candidate.el.tag,
                rule.name,
                result
            );
            return result;
        }
    }
    false
}

/// State a node inherits from its composed ancestors.
#[derive(Debug, Clone, Copy)]
struct Inherited {
    /// An ancestor has `display: none`, `hidden`, or is an unslotted light child.
    hidden: bool,
    /// Nearest non-`inherit` visibility.
    visibility: Visibility,
    /// False inside closed shadow trees, which are walked only to reach the
    /// light content their slots project.
    collect: bool,
    /// Tree scope of the node.
    scope: NodeId,
}

/// A shadow tree entered during the walk.
#[derive(Debug, Clone, Copy)]
struct ShadowScope {
    host: NodeId,
    host_scope: NodeId,
    collect: bool,
}

/// Depth-first walk carrying inherited state downwards, so every node is
/// decided in constant time apart from its own slot lookups.
struct Walker<'a> {
    doc: &'a Document,
    visited: HashSet<NodeId>,
    found: Vec<NodeId>,
    scopes: HashMap<NodeId, ShadowScope>,
    slots: HashMap<NodeId, Vec<NodeId>>,
}

impl<'a> Walker<'a> {
    fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            visited: HashSet::new(),
            found: Vec::new(),
            scopes: HashMap::new(),
            slots: HashMap::new(),
        }
    }

    /// State of `root` itself, read once from its ancestors.
    fn root_state(&mut self, root: NodeId) -> Inherited {
        let doc = self.doc;
        let ancestors = doc.composed_ancestors(root);
        let hidden = is_unslotted(doc, root)
            || ancestors.iter().any(|&n| is_not_rendered(doc, n));
        let visibility = ancestors
            .iter()
            .filter_map(|&n| doc.element(n).ok())
            .map(|el| el.style.visibility)
            .find(|v| *v != Visibility::Inherit)
            .unwrap_or(Visibility::Visible);

        let scope = doc.scope_root(root);
        if let Some(host) = doc.host(scope) {
            self.scopes.insert(
                scope,
                ShadowScope {
                    host,
                    host_scope: doc.scope_root(host),
                    collect: true,
                },
            );
            self.slots.extend(doc.slot_map(scope));
        }

        Inherited {
            hidden,
            visibility,
            collect: true,
            scope,
        }
    }

    fn collect_in(&self, scope: NodeId) -> bool {
        self.scopes.get(&scope).is_none_or(|s| s.collect)
    }

    fn walk(&mut self, node: NodeId, mut state: Inherited) {
        if !self.visited.insert(node) {
            return;
        }
        let doc = self.doc;

        if let Ok(el) = doc.element(node) {
            if el.attributes.contains_key(attr::INERT) {
                log::trace!("[tabbable] pruning inert subtree at {node}");
                return;
            }
            state.hidden |= el.style.display == Display::None
                || el.attributes.contains_key(attr::HIDDEN);
            if el.style.visibility != Visibility::Inherit {
                state.visibility = el.style.visibility;
            }

            let candidate = Candidate {
                doc,
                node,
                el,
                inert: false,
                visible: !state.hidden && state.visibility == Visibility::Visible,
            };
            if state.collect && decide(candidate) {
                self.found.push(node);
            }
        }

        if doc.is_slot(node) {
            self.walk_slot(node, state);
            return;
        }

        if let Some(shadow_root) = doc.shadow_root(node) {
            let open = doc.open_shadow_root(node).is_some();
            self.scopes.insert(
                shadow_root,
                ShadowScope {
                    host: node,
                    host_scope: state.scope,
                    collect: state.collect && open,
                },
            );
            self.slots.extend(doc.slot_map(shadow_root));
            self.walk(
                shadow_root,
                Inherited {
                    collect: state.collect && open,
                    scope: shadow_root,
                    ..state
                },
            );

            // Light children reached here were not picked up by any slot.
            let unslotted = Inherited {
                hidden: true,
                ..state
            };
            for &child in doc.children(node) {
                self.walk(child, unslotted);
            }
            return;
        }

        for &child in doc.children(node) {
            self.walk(child, state);
        }
    }

    fn walk_slot(&mut self, slot: NodeId, state: Inherited) {
        let doc = self.doc;
        let direct = self
            .slots
            .remove(&slot)
            .unwrap_or_else(|| doc.slot_assignment(slot));
        let assigned = if direct.iter().any(|&n| doc.is_slot(n)) {
            doc.assigned_nodes(slot)
        } else {
            direct
        };

        if assigned.is_empty() {
            // Fallback content renders only when nothing is projected.
            for &child in doc.children(slot) {
                self.walk(child, state);
            }
            return;
        }

        let shadow = self.scopes.get(&state.scope).copied();
        for node in assigned {
            let scope = match shadow {
                Some(s) if doc.parent(node) == Some(s.host) => s.host_scope,
                _ => doc.scope_root(node),
            };
            if scope == state.scope {
                log::debug!("[tabbable] slot {slot} assignment {node} loops back into its own scope, skipping");
                continue;
            }
            let projected = Inherited {
                collect: self.collect_in(scope),
                scope,
                ..state
            };
            self.walk(node, projected);
        }
    }
}

/// All tabbable nodes under `root` (inclusive), in sequential focus order.
///
/// Linear in the size of the composed subtree under `root`.
pub fn resolve_tabbable(doc: &Document, root: NodeId) -> Vec<NodeId> {
    if doc.get(root).is_none() || is_inert(doc, root) {
        return Vec::new();
    }

    let mut walker = Walker::new(doc);
    let state = walker.root_state(root);
    walker.walk(root, state);

    let mut found = walker.found;
    found.sort_by_key(|&node| TabIndex::sort_key(doc.attribute(node, attr::TABINDEX)));
    log::debug!(
        "[tabbable] resolved {} tabbable of {} visited under {}",
        found.len(),
        walker.visited.len(),
        root
    );
    found
}

/// First and last entries of [`resolve_tabbable`].
pub fn tabbable_boundary(doc: &Document, root: NodeId) -> Boundary {
    let tabbable = resolve_tabbable(doc, root);
    Boundary {
        first: tabbable.first().copied(),
        last: tabbable.last().copied(),
    }
}
