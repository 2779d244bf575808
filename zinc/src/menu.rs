//! Menu widget: a roving-tabindex list over the elements projected into the
//! menu's default slot.

use zincdom::element::attr;
use zincdom::roving::{self, Handled};
use zincdom::{Document, Element, FocusHost, Key, NodeId, ShadowMode};

use crate::config::MenuConfig;
use crate::dropdown::Dropdown;
use crate::error::Error;

pub const MENU_TAG: &str = "zn-menu";
const MENU_ROLE: &str = "menu";

/// Emitted when a menu item is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Select { item: NodeId },
}

#[derive(Debug, Clone)]
pub struct Menu {
    host: NodeId,
    slot: NodeId,
    config: MenuConfig,
}

impl Menu {
    /// A plain menu item element.
    pub fn item(label: &str) -> Element {
        Element::custom("zn-menu-item")
            .role("menuitem")
            .attr("label", label)
    }

    /// A menu item that toggles `checked` when selected.
    pub fn checkbox_item(label: &str, checked: bool) -> Element {
        Self::item(label)
            .role("menuitemcheckbox")
            .attr(attr::TYPE, "checkbox")
            .checked(checked)
    }

    /// Mount a new menu host with `items` as its light children.
    pub fn mount(
        doc: &mut Document,
        items: impl IntoIterator<Item = Element>,
        config: MenuConfig,
    ) -> Result<Self, Error> {
        let host = doc.mount(Self::element(items));
        Self::new(doc, host, config)
    }

    /// The host element tree of a menu, for embedding into larger trees.
    pub fn element(items: impl IntoIterator<Item = Element>) -> Element {
        Element::custom(MENU_TAG)
            .role(MENU_ROLE)
            .shadow(ShadowMode::Open, [Element::slot()])
            .children(items)
    }

    /// Bind to an existing host whose shadow tree has a default slot.
    pub fn new(doc: &mut Document, host: NodeId, config: MenuConfig) -> Result<Self, Error> {
        let shadow = doc
            .shadow_root(host)
            .ok_or(Error::MissingShadowRoot(host))?;
        let slot = doc.slot_named(shadow, "").ok_or_else(|| Error::MissingSlot {
            host,
            name: String::new(),
        })?;
        doc.set_attribute(host, attr::ROLE, MENU_ROLE)?;
        Ok(Self { host, slot, config })
    }

    pub fn host(&self) -> NodeId {
        self.host
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn is_menu_item(&self, doc: &Document, node: NodeId) -> bool {
        let tagged = doc
            .tag(node)
            .is_some_and(|tag| tag.name() == self.config.item_tag);
        tagged
            || doc
                .attribute(node, attr::ROLE)
                .is_some_and(|role| self.config.item_roles.iter().any(|r| *r == role))
    }

    /// Slotted menu items, skipping dividers, headers and inert items.
    pub fn items(&self, doc: &Document) -> Vec<NodeId> {
        doc.assigned_nodes(self.slot)
            .into_iter()
            .filter(|&el| !doc.has_attribute(el, attr::INERT) && self.is_menu_item(doc, el))
            .collect()
    }

    /// The item holding `tabindex="0"`. It may or may not have focus.
    pub fn current_item(&self, doc: &Document) -> Option<NodeId> {
        roving::current(doc, &self.items(doc))
    }

    pub fn set_current_item(&self, doc: &mut Document, item: NodeId) {
        let items = self.items(doc);
        roving::set_current(doc, &items, item);
    }

    pub fn on_key(&self, doc: &mut Document, key: Key, host: &mut impl FocusHost) -> Handled {
        let items = self.items(doc);
        if key.is_activation() {
            return roving::handle_activation_key(doc, &items, key, host);
        }
        roving::handle_directional_key(doc, &items, key, host, &self.config.roving)
    }

    pub fn on_pointer_down(&self, doc: &mut Document, target: NodeId) {
        if self.is_menu_item(doc, target) {
            self.set_current_item(doc, target);
        }
    }

    pub fn on_pointer_enter(&self, doc: &mut Document, target: NodeId, host: &mut impl FocusHost) {
        let items = self.items(doc);
        roving::handle_pointer_enter(doc, &items, target, host, &self.config.roving);
    }

    /// Reset the current item after the slotted items changed.
    pub fn on_slot_change(&self, doc: &mut Document) {
        let items = self.items(doc);
        roving::reset(doc, &items);
    }

    /// Resolve a click anywhere inside the menu to a selected item.
    ///
    /// Clicks that belong to a nested submenu are left to that submenu. A
    /// selection closes the enclosing dropdown, if any, and returns focus to
    /// its trigger.
    pub fn on_click(
        &self,
        doc: &mut Document,
        target: NodeId,
        host: &mut impl FocusHost,
    ) -> Result<Option<MenuEvent>, Error> {
        let mut path = vec![target];
        path.extend(doc.composed_ancestors(target));

        let Some(item) = path.iter().copied().find(|&n| self.is_menu_item(doc, n)) else {
            return Ok(None);
        };
        let closest_menu = path
            .iter()
            .copied()
            .find(|&n| doc.attribute(n, attr::ROLE) == Some(MENU_ROLE));
        if closest_menu != Some(self.host) {
            log::trace!("[menu] click on {item} belongs to another menu");
            return Ok(None);
        }

        if self.is_checkbox(doc, item) {
            let checked = doc.has_attribute(item, attr::CHECKED);
            doc.set_flag(item, attr::CHECKED, !checked)?;
        }

        let dropdown = doc
            .composed_ancestors(self.host)
            .into_iter()
            .find(|&n| doc.tag(n).is_some_and(|t| t.name() == Dropdown::TAG));
        if let Some(dropdown) = dropdown {
            let dropdown = Dropdown::new(doc, dropdown)?;
            dropdown.hide(doc)?;
            dropdown.focus_on_trigger(doc, host);
        }

        log::debug!("[menu] select {item}");
        Ok(Some(MenuEvent::Select { item }))
    }

    fn is_checkbox(&self, doc: &Document, item: NodeId) -> bool {
        doc.attribute(item, attr::TYPE) == Some("checkbox")
            || doc
                .attribute(item, attr::ROLE)
                .is_some_and(|role| self.config.checkbox_roles.iter().any(|r| *r == role))
    }
}
