//! Widget configuration types.

use zincdom::RovingConfig;

/// Per-menu configuration.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// Navigation behavior of the item collection.
    pub roving: RovingConfig,

    /// Custom element name that always counts as a menu item.
    pub item_tag: &'static str,

    /// `role` values that make any slotted element a menu item.
    pub item_roles: Vec<&'static str>,

    /// `role` values whose items toggle `checked` when selected.
    pub checkbox_roles: Vec<&'static str>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            roving: RovingConfig::default(),
            item_tag: "zn-menu-item",
            item_roles: vec!["menuitem", "menuitemcheckbox", "menuitemradio"],
            checkbox_roles: vec!["menuitemcheckbox"],
        }
    }
}

impl MenuConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the roving navigation behavior.
    pub fn roving(mut self, roving: RovingConfig) -> Self {
        self.roving = roving;
        self
    }

    /// Set the element name recognized as a menu item.
    pub fn item_tag(mut self, tag: &'static str) -> Self {
        self.item_tag = tag;
        self
    }

    /// Accept an additional item role.
    pub fn item_role(mut self, role: &'static str) -> Self {
        if !self.item_roles.contains(&role) {
            self.item_roles.push(role);
        }
        self
    }
}
