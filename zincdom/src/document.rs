//! Arena-backed composed tree.
//!
//! Ownership is the ordinary parent/children relation plus a host's shadow
//! root. Slot assignment is a back-reference computed from the live tree on
//! every query, so it always reflects the current light children of a host.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::element::{attr, Element};
use crate::error::DomError;
use crate::types::{ScrollExtents, ShadowMode, Style, Tag};

/// Identity of a node within one [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ElementNode {
    pub id: String,
    pub tag: Tag,
    pub attributes: HashMap<String, String>,
    pub style: Style,
    pub scroll: ScrollExtents,
    pub shadow_root: Option<NodeId>,
    /// Explicit slot assignment, overriding name matching.
    pub manual_assignment: Option<Vec<NodeId>>,
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Element(ElementNode),
    ShadowRoot { host: NodeId, mode: ShadowMode },
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    /// Ownership parent. Shadow roots have none; see [`Document::host`].
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn as_element(&self) -> Option<&ElementNode> {
        match &self.kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::ShadowRoot { .. } => None,
        }
    }

    pub fn is_shadow_root(&self) -> bool {
        matches!(self.kind, NodeKind::ShadowRoot { .. })
    }
}

#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // -------------------------------------------------------------------------
    // Building
    // -------------------------------------------------------------------------

    /// Mount an element tree as a new detached root.
    pub fn mount(&mut self, element: Element) -> NodeId {
        self.build(element, None)
    }

    /// Mount an element tree as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DomError> {
        self.node(parent)?;
        let id = self.build(element, Some(parent));
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    fn build(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let Element {
            id,
            tag,
            attributes,
            style,
            scroll,
            children,
            shadow,
        } = element;

        let node_id = self.push(Node {
            kind: NodeKind::Element(ElementNode {
                id,
                tag,
                attributes,
                style,
                scroll,
                shadow_root: None,
                manual_assignment: None,
            }),
            parent,
            children: Vec::new(),
        });

        if let Some(template) = shadow {
            let root = self.push(Node {
                kind: NodeKind::ShadowRoot {
                    host: node_id,
                    mode: template.mode,
                },
                parent: None,
                children: Vec::new(),
            });
            if let NodeKind::Element(el) = &mut self.nodes[node_id.0].kind {
                el.shadow_root = Some(root);
            }
            for child in template.children {
                let child_id = self.build(child, Some(root));
                self.nodes[root.0].children.push(child_id);
            }
        }

        for child in children {
            let child_id = self.build(child, Some(node_id));
            self.nodes[node_id.0].children.push(child_id);
        }

        node_id
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Move an existing node to the end of `parent`'s children.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.node(parent)?;
        if self.node(child)?.is_shadow_root() {
            return Err(DomError::NotAnElement(child));
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(DomError::CycleDetected { parent, child });
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Detach a node from its parent. The node and its subtree stay valid.
    pub fn remove(&mut self, node: NodeId) -> Result<(), DomError> {
        self.node(node)?;
        self.detach(node);
        Ok(())
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    pub fn attach_shadow(&mut self, host: NodeId, mode: ShadowMode) -> Result<NodeId, DomError> {
        if self.element(host)?.shadow_root.is_some() {
            return Err(DomError::ShadowAlreadyAttached(host));
        }
        let root = self.push(Node {
            kind: NodeKind::ShadowRoot { host, mode },
            parent: None,
            children: Vec::new(),
        });
        self.element_mut(host)?.shadow_root = Some(root);
        Ok(root)
    }

    /// Assign nodes to a slot explicitly, bypassing name matching.
    ///
    /// Nothing is validated beyond `slot` being a slot: assignments may point
    /// anywhere, including back at an ancestor.
    pub fn assign_slot(&mut self, slot: NodeId, nodes: Vec<NodeId>) -> Result<(), DomError> {
        let el = self.element_mut(slot)?;
        if el.tag != Tag::Slot {
            return Err(DomError::NotASlot(slot));
        }
        el.manual_assignment = Some(nodes);
        Ok(())
    }

    /// Return a slot to name-based assignment.
    pub fn clear_slot_assignment(&mut self, slot: NodeId) -> Result<(), DomError> {
        let el = self.element_mut(slot)?;
        if el.tag != Tag::Slot {
            return Err(DomError::NotASlot(slot));
        }
        el.manual_assignment = None;
        Ok(())
    }

    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.element_mut(node)?
            .attributes
            .insert(name.into(), value.into());
        Ok(())
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<(), DomError> {
        self.element_mut(node)?.attributes.remove(name);
        Ok(())
    }

    /// Set or clear a boolean attribute.
    pub fn set_flag(&mut self, node: NodeId, name: &str, on: bool) -> Result<(), DomError> {
        if on {
            self.set_attribute(node, name, "")
        } else {
            self.remove_attribute(node, name)
        }
    }

    pub fn set_style(&mut self, node: NodeId, style: Style) -> Result<(), DomError> {
        self.element_mut(node)?.style = style;
        Ok(())
    }

    pub fn set_scroll(&mut self, node: NodeId, scroll: ScrollExtents) -> Result<(), DomError> {
        self.element_mut(node)?.scroll = scroll;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    pub fn get(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.0)
    }

    fn node(&self, node: NodeId) -> Result<&Node, DomError> {
        self.get(node).ok_or(DomError::NodeNotFound(node))
    }

    pub fn element(&self, node: NodeId) -> Result<&ElementNode, DomError> {
        self.node(node)?
            .as_element()
            .ok_or(DomError::NotAnElement(node))
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut ElementNode, DomError> {
        match self.nodes.get_mut(node.0) {
            Some(Node {
                kind: NodeKind::Element(el),
                ..
            }) => Ok(el),
            Some(_) => Err(DomError::NotAnElement(node)),
            None => Err(DomError::NodeNotFound(node)),
        }
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(|n| n.as_element().is_some())
    }

    pub fn tag(&self, node: NodeId) -> Option<&Tag> {
        self.get(node)?.as_element().map(|el| &el.tag)
    }

    pub fn element_id(&self, node: NodeId) -> Option<&str> {
        self.get(node)?.as_element().map(|el| el.id.as_str())
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node)?
            .as_element()?
            .attributes
            .get(name)
            .map(String::as_str)
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Find an element by its id string.
    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.as_element().is_some_and(|el| el.id == id))
            .map(NodeId)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node)?.parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn shadow_root(&self, host: NodeId) -> Option<NodeId> {
        self.get(host)?.as_element()?.shadow_root
    }

    /// The shadow root of `host`, only if it is open to inspection.
    pub fn open_shadow_root(&self, host: NodeId) -> Option<NodeId> {
        let root = self.shadow_root(host)?;
        match self.get(root)?.kind {
            NodeKind::ShadowRoot {
                mode: ShadowMode::Open,
                ..
            } => Some(root),
            _ => None,
        }
    }

    /// The host element of a shadow root.
    pub fn host(&self, shadow_root: NodeId) -> Option<NodeId> {
        match self.get(shadow_root)?.kind {
            NodeKind::ShadowRoot { host, .. } => Some(host),
            NodeKind::Element(_) => None,
        }
    }

    /// Root of the tree scope `node` lives in: a shadow root, or the top of a
    /// mounted tree.
    pub fn scope_root(&self, node: NodeId) -> NodeId {
        let mut current = node;
        let mut seen = HashSet::new();
        while let Some(parent) = self.parent(current) {
            if !seen.insert(parent) {
                break;
            }
            current = parent;
        }
        current
    }

    /// Whether `ancestor` owns `node`, crossing shadow roots to their hosts.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.owner(node);
        let mut seen = HashSet::new();
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            if !seen.insert(n) {
                return false;
            }
            current = self.owner(n);
        }
        false
    }

    fn owner(&self, node: NodeId) -> Option<NodeId> {
        self.parent(node).or_else(|| self.host(node))
    }

    // -------------------------------------------------------------------------
    // Projection
    // -------------------------------------------------------------------------

    pub fn is_slot(&self, node: NodeId) -> bool {
        self.tag(node) == Some(&Tag::Slot)
    }

    /// Nodes assigned directly to `slot`, without flattening nested slots.
    pub fn slot_assignment(&self, slot: NodeId) -> Vec<NodeId> {
        let Ok(el) = self.element(slot) else {
            return Vec::new();
        };
        if el.tag != Tag::Slot {
            return Vec::new();
        }
        let mut map = self.slot_map(self.scope_root(slot));
        map.remove(&slot)
            .or_else(|| el.manual_assignment.clone())
            .unwrap_or_default()
    }

    /// Direct assignment of every slot in one tree scope.
    ///
    /// Each light child of the scope's host is matched against the slot names
    /// once, so this is linear in the scope plus the host's children.
    pub fn slot_map(&self, scope: NodeId) -> HashMap<NodeId, Vec<NodeId>> {
        let slots = self.slots_in(scope);
        let mut map: HashMap<NodeId, Vec<NodeId>> = HashMap::with_capacity(slots.len());
        let mut first_named: HashMap<&str, NodeId> = HashMap::new();
        for &slot in &slots {
            let name = self.attribute(slot, attr::NAME).unwrap_or("");
            first_named.entry(name).or_insert(slot);
            map.insert(slot, Vec::new());
        }

        if let Some(host) = self.host(scope) {
            for &child in self.children(host) {
                if !self.is_element(child) {
                    continue;
                }
                let name = self.attribute(child, attr::SLOT).unwrap_or("");
                if let Some(&slot) = first_named.get(name) {
                    map.entry(slot).or_default().push(child);
                }
            }
        }

        for &slot in &slots {
            let manual = self
                .element(slot)
                .ok()
                .and_then(|el| el.manual_assignment.as_ref());
            if let Some(manual) = manual {
                map.insert(slot, manual.clone());
            }
        }
        map
    }

    /// Assigned nodes with nested slots replaced by their own assignment.
    pub fn assigned_nodes(&self, slot: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut seen = HashSet::from([slot]);
        self.flatten_assignment(slot, &mut result, &mut seen);
        result
    }

    fn flatten_assignment(&self, slot: NodeId, result: &mut Vec<NodeId>, seen: &mut HashSet<NodeId>) {
        for node in self.slot_assignment(slot) {
            if self.is_slot(node) {
                if seen.insert(node) {
                    self.flatten_assignment(node, result, seen);
                }
            } else if !result.contains(&node) {
                result.push(node);
            }
        }
    }

    /// The slot in the parent host's shadow tree that `node` projects into.
    pub fn assigned_slot(&self, node: NodeId) -> Option<NodeId> {
        let host = self.parent(node)?;
        let root = self.shadow_root(host)?;
        let map = self.slot_map(root);
        self.slots_in(root)
            .into_iter()
            .find(|slot| map.get(slot).is_some_and(|nodes| nodes.contains(&node)))
    }

    /// Slots in one tree scope, in tree order, not entering nested shadows.
    fn slots_in(&self, scope: NodeId) -> Vec<NodeId> {
        let mut slots = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            if self.is_slot(node) {
                slots.push(node);
            }
            stack.extend(self.children(node).iter().rev().copied());
        }
        slots
    }

    /// The first slot in `scope` with the given name (`""` for the default slot).
    pub fn slot_named(&self, scope: NodeId, name: &str) -> Option<NodeId> {
        self.slots_in(scope)
            .into_iter()
            .find(|&slot| self.attribute(slot, attr::NAME).unwrap_or("") == name)
    }

    /// Parent in the composed tree.
    ///
    /// A light child of a shadow host hangs under the slot it is assigned to
    /// (or under the host when unassigned); a shadow root hangs under its host.
    pub fn composed_parent(&self, node: NodeId) -> Option<NodeId> {
        if let Some(host) = self.host(node) {
            return Some(host);
        }
        let parent = self.parent(node)?;
        if self.shadow_root(parent).is_some() {
            return self.assigned_slot(node).or(Some(parent));
        }
        Some(parent)
    }

    /// Composed ancestors from nearest to farthest, stopping on a cycle.
    pub fn composed_ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut seen = HashSet::from([node]);
        let mut current = self.composed_parent(node);
        while let Some(n) = current {
            if !seen.insert(n) {
                log::debug!("[document] composed ancestor cycle at {n} while climbing from {node}");
                break;
            }
            ancestors.push(n);
            current = self.composed_parent(n);
        }
        ancestors
    }
}
