//! Dropdown widget: a trigger slot plus a panel slot that is only rendered
//! while the dropdown is open.

use zincdom::element::attr;
use zincdom::roving::Handled;
use zincdom::{tabbable_boundary, Display, Document, Element, FocusHost, Key, NodeId, ShadowMode};

use crate::config::MenuConfig;
use crate::error::Error;
use crate::menu::{Menu, MENU_TAG};

const OPEN: &str = "open";
const TRIGGER_SLOT: &str = "trigger";

#[derive(Debug, Clone, Copy)]
pub struct Dropdown {
    host: NodeId,
    trigger_slot: NodeId,
    panel_slot: NodeId,
    panel: NodeId,
}

impl Dropdown {
    pub const TAG: &'static str = "zn-dropdown";

    /// The host element tree of a closed dropdown.
    pub fn element(trigger: Element, panel: impl IntoIterator<Item = Element>) -> Element {
        Element::custom(Self::TAG)
            .shadow(
                ShadowMode::Open,
                [
                    Element::named_slot(TRIGGER_SLOT),
                    Element::div()
                        .attr("part", "panel")
                        .display(Display::None)
                        .child(Element::slot()),
                ],
            )
            .child(trigger.slot_name(TRIGGER_SLOT))
            .children(panel)
    }

    pub fn mount(
        doc: &mut Document,
        trigger: Element,
        panel: impl IntoIterator<Item = Element>,
    ) -> Result<Self, Error> {
        let host = doc.mount(Self::element(trigger, panel));
        let dropdown = Self::new(doc, host)?;
        dropdown.update_accessible_trigger(doc)?;
        Ok(dropdown)
    }

    /// Bind to an existing host with a `trigger` slot and a default slot.
    pub fn new(doc: &Document, host: NodeId) -> Result<Self, Error> {
        let shadow = doc
            .shadow_root(host)
            .ok_or(Error::MissingShadowRoot(host))?;
        let slot = |name: &str| {
            doc.slot_named(shadow, name).ok_or_else(|| Error::MissingSlot {
                host,
                name: name.to_string(),
            })
        };
        let trigger_slot = slot(TRIGGER_SLOT)?;
        let panel_slot = slot("")?;
        // The panel wrapper is whatever element encloses the default slot.
        let panel = doc
            .parent(panel_slot)
            .filter(|&p| doc.is_element(p))
            .unwrap_or(panel_slot);

        Ok(Self {
            host,
            trigger_slot,
            panel_slot,
            panel,
        })
    }

    pub fn host(&self) -> NodeId {
        self.host
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.has_attribute(self.host, OPEN)
    }

    /// Open the panel. Returns false if it was already open or the dropdown
    /// is disabled.
    pub fn show(&self, doc: &mut Document) -> Result<bool, Error> {
        if self.is_open(doc) || doc.has_attribute(self.host, attr::DISABLED) {
            return Ok(false);
        }
        self.set_open(doc, true)?;
        Ok(true)
    }

    /// Close the panel. Returns false if it was already closed.
    pub fn hide(&self, doc: &mut Document) -> Result<bool, Error> {
        if !self.is_open(doc) {
            return Ok(false);
        }
        self.set_open(doc, false)?;
        Ok(true)
    }

    fn set_open(&self, doc: &mut Document, open: bool) -> Result<(), Error> {
        doc.set_flag(self.host, OPEN, open)?;
        let display = if open { Display::Block } else { Display::None };
        let style = doc.element(self.panel)?.style.display(display);
        doc.set_style(self.panel, style)?;
        self.update_accessible_trigger(doc)?;
        log::debug!("[dropdown] {} {}", self.host, if open { "shown" } else { "hidden" });
        Ok(())
    }

    /// The first element projected into the trigger slot that contains
    /// anything tabbable.
    pub fn accessible_trigger(&self, doc: &Document) -> Option<NodeId> {
        doc.assigned_nodes(self.trigger_slot)
            .into_iter()
            .find(|&el| !tabbable_boundary(doc, el).is_empty())
    }

    /// Mirror the open state onto the accessible trigger.
    pub fn update_accessible_trigger(&self, doc: &mut Document) -> Result<(), Error> {
        if let Some(trigger) = self.accessible_trigger(doc) {
            let expanded = self.is_open(doc).to_string();
            doc.set_attribute(trigger, "aria-haspopup", "true")?;
            doc.set_attribute(trigger, "aria-expanded", expanded)?;
        }
        Ok(())
    }

    pub fn focus_on_trigger(&self, doc: &Document, host: &mut impl FocusHost) {
        if let Some(&trigger) = doc.assigned_nodes(self.trigger_slot).first() {
            host.focus(trigger);
        }
    }

    /// Focus the first tabbable element inside the panel.
    pub fn focus_panel(&self, doc: &Document, host: &mut impl FocusHost) -> Option<NodeId> {
        let first = doc
            .assigned_nodes(self.panel_slot)
            .into_iter()
            .find_map(|el| tabbable_boundary(doc, el).first)?;
        host.focus(first);
        Some(first)
    }

    /// The menu projected into the panel, if any.
    pub fn menu(&self, doc: &mut Document, config: MenuConfig) -> Option<Menu> {
        let menu = doc
            .assigned_nodes(self.panel_slot)
            .into_iter()
            .find(|&el| doc.tag(el).is_some_and(|t| t.name() == MENU_TAG))?;
        Menu::new(doc, menu, config).ok()
    }

    /// Keyboard handling while focus is on the trigger.
    ///
    /// Enter/Space toggle the panel. Arrows, Home and End open it and move
    /// into the menu, at the first item for Down/Home and the last for Up/End.
    pub fn on_trigger_key(
        &self,
        doc: &mut Document,
        key: Key,
        host: &mut impl FocusHost,
    ) -> Result<Handled, Error> {
        if key.is_activation() {
            if self.is_open(doc) {
                self.hide(doc)?;
            } else {
                self.show(doc)?;
                self.focus_on_trigger(doc, host);
            }
            return Ok(Handled::Consumed);
        }

        if !matches!(key, Key::Down | Key::Up | Key::Home | Key::End) {
            return Ok(Handled::Ignored);
        }
        let Some(menu) = self.menu(doc, MenuConfig::default()) else {
            return Ok(Handled::Ignored);
        };

        self.show(doc)?;
        let items = menu.items(doc);
        let target = match key {
            Key::Down | Key::Home => items.first(),
            _ => items.last(),
        };
        if let Some(&item) = target {
            menu.set_current_item(doc, item);
            host.focus(item);
        }
        Ok(Handled::Consumed)
    }

    /// Keyboard handling while the dropdown is open.
    ///
    /// Escape closes it and returns focus to the trigger. Tab does the same
    /// when focus is on one of the panel menu's items.
    pub fn on_key(
        &self,
        doc: &mut Document,
        key: Key,
        host: &mut impl FocusHost,
    ) -> Result<Handled, Error> {
        if !self.is_open(doc) {
            return Ok(Handled::Ignored);
        }
        let close = match key {
            Key::Escape => true,
            Key::Tab | Key::BackTab => self.menu_has_focus(doc, &*host),
            _ => false,
        };
        if !close {
            return Ok(Handled::Ignored);
        }
        self.hide(doc)?;
        self.focus_on_trigger(doc, host);
        Ok(Handled::Consumed)
    }

    fn menu_has_focus(&self, doc: &mut Document, host: &impl FocusHost) -> bool {
        let Some(focused) = host.focused() else {
            return false;
        };
        self.menu(doc, MenuConfig::default())
            .is_some_and(|menu| menu.items(doc).contains(&focused))
    }
}
