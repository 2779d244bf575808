mod node;
mod tab_index;

pub use node::{Element, ShadowTemplate};
pub use tab_index::TabIndex;

/// Attribute names the focus engine reads.
pub mod attr {
    pub const TABINDEX: &str = "tabindex";
    pub const DISABLED: &str = "disabled";
    pub const INERT: &str = "inert";
    pub const HIDDEN: &str = "hidden";
    pub const TYPE: &str = "type";
    pub const CHECKED: &str = "checked";
    pub const CONTROLS: &str = "controls";
    pub const CONTENT_EDITABLE: &str = "contenteditable";
    pub const SLOT: &str = "slot";
    pub const NAME: &str = "name";
    pub const ROLE: &str = "role";
}
