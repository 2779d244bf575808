//! Presentation state derived from the composed tree.

use crate::document::{Document, NodeId};
use crate::element::attr;
use crate::types::{Display, Overflow, Visibility};

/// Whether `node` or any composed ancestor carries `inert`.
pub fn is_inert(doc: &Document, node: NodeId) -> bool {
    doc.has_attribute(node, attr::INERT)
        || doc
            .composed_ancestors(node)
            .into_iter()
            .any(|n| doc.has_attribute(n, attr::INERT))
}

/// Whether `node` is rendered.
///
/// A node is hidden when it or a composed ancestor has `display: none` (or the
/// `hidden` attribute) or is a shadow host's light child that no slot picked
/// up, or when its inherited visibility is not `Visible`.
pub fn is_visible(doc: &Document, node: NodeId) -> bool {
    if is_not_rendered(doc, node) {
        return false;
    }
    let ancestors = doc.composed_ancestors(node);
    if ancestors.iter().any(|&n| is_not_rendered(doc, n)) {
        return false;
    }
    let visibility = std::iter::once(node)
        .chain(ancestors)
        .filter_map(|n| doc.element(n).ok())
        .map(|el| el.style.visibility)
        .find(|v| *v != Visibility::Inherit)
        .unwrap_or(Visibility::Visible);
    visibility == Visibility::Visible
}

/// `display: none`, the `hidden` attribute, or an unslotted light child.
pub(crate) fn is_not_rendered(doc: &Document, node: NodeId) -> bool {
    let Ok(el) = doc.element(node) else {
        return false;
    };
    if el.style.display == Display::None || el.attributes.contains_key(attr::HIDDEN) {
        return true;
    }
    is_unslotted(doc, node)
}

/// A light child of a shadow host that is not projected anywhere.
pub fn is_unslotted(doc: &Document, node: NodeId) -> bool {
    doc.parent(node)
        .and_then(|parent| doc.shadow_root(parent))
        .is_some()
        && doc.assigned_slot(node).is_none()
}

/// Whether `node` is a scroll container reachable by keyboard.
///
/// `overflow: scroll` on either axis always qualifies. An axis set to `auto`
/// qualifies only when its content actually overflows.
pub fn is_scroll_tabbable(doc: &Document, node: NodeId) -> bool {
    let Ok(el) = doc.element(node) else {
        return false;
    };
    let style = &el.style;

    if style.overflow_x == Overflow::Scroll || style.overflow_y == Overflow::Scroll {
        return true;
    }

    if style.overflow_y == Overflow::Auto && el.scroll.overflows_y() {
        return true;
    }

    style.overflow_x == Overflow::Auto && el.scroll.overflows_x()
}
