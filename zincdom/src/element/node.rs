use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::attr;
use crate::types::{Display, Overflow, ScrollExtents, ShadowMode, Style, Tag, Visibility};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Contents of a shadow root to attach when the element is mounted.
#[derive(Debug, Clone, Default)]
pub struct ShadowTemplate {
    pub mode: ShadowMode,
    pub children: Vec<Element>,
}

/// Owned element description, mounted into a [`crate::Document`].
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Attributes (presence is meaningful, boolean attributes hold "")
    pub attributes: HashMap<String, String>,

    // Computed presentation
    pub style: Style,
    pub scroll: ScrollExtents,

    // Tree
    pub children: Vec<Element>,
    pub shadow: Option<ShadowTemplate>,
}

impl Element {
    pub fn new(tag: impl Into<Tag>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(tag.name()),
            tag,
            attributes: HashMap::new(),
            style: Style::default(),
            scroll: ScrollExtents::default(),
            children: Vec::new(),
            shadow: None,
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    pub fn button() -> Self {
        Self::new(Tag::Button)
    }

    /// An `<input>` of the given type.
    pub fn input(input_type: &str) -> Self {
        Self::new(Tag::Input).attr(attr::TYPE, input_type)
    }

    pub fn link() -> Self {
        Self::new(Tag::A)
    }

    /// The default (unnamed) projection point.
    pub fn slot() -> Self {
        Self::new(Tag::Slot)
    }

    pub fn named_slot(name: impl Into<String>) -> Self {
        Self::new(Tag::Slot).attr(attr::NAME, name)
    }

    pub fn custom(name: &str) -> Self {
        Self::new(Tag::parse(name))
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set or clear a boolean attribute.
    pub fn flag(mut self, name: &str, on: bool) -> Self {
        if on {
            self.attributes.insert(name.to_string(), String::new());
        } else {
            self.attributes.remove(name);
        }
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&String> {
        self.attributes.get(name)
    }

    pub fn tab_index(self, index: i32) -> Self {
        self.attr(attr::TABINDEX, index.to_string())
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.flag(attr::DISABLED, disabled)
    }

    pub fn inert(self, inert: bool) -> Self {
        self.flag(attr::INERT, inert)
    }

    pub fn hidden(self, hidden: bool) -> Self {
        self.flag(attr::HIDDEN, hidden)
    }

    pub fn checked(self, checked: bool) -> Self {
        self.flag(attr::CHECKED, checked)
    }

    /// Native transport controls on audio/video.
    pub fn controls(self, controls: bool) -> Self {
        self.flag(attr::CONTROLS, controls)
    }

    pub fn content_editable(self, value: &str) -> Self {
        self.attr(attr::CONTENT_EDITABLE, value)
    }

    /// Name of the slot this element projects into.
    pub fn slot_name(self, name: impl Into<String>) -> Self {
        self.attr(attr::SLOT, name)
    }

    pub fn role(self, role: impl Into<String>) -> Self {
        self.attr(attr::ROLE, role)
    }

    // Presentation
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.style.display = display;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.style.visibility = visibility;
        self
    }

    /// Set both horizontal and vertical overflow behavior.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.style.overflow_x = overflow;
        self.style.overflow_y = overflow;
        self
    }

    pub fn overflow_x(mut self, overflow: Overflow) -> Self {
        self.style.overflow_x = overflow;
        self
    }

    pub fn overflow_y(mut self, overflow: Overflow) -> Self {
        self.style.overflow_y = overflow;
        self
    }

    pub fn scroll(mut self, scroll: ScrollExtents) -> Self {
        self.scroll = scroll;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(new_children);
        self
    }

    /// Attach an encapsulated subtree to this element.
    pub fn shadow(mut self, mode: ShadowMode, children: impl IntoIterator<Item = Element>) -> Self {
        self.shadow = Some(ShadowTemplate {
            mode,
            children: children.into_iter().collect(),
        });
        self
    }
}
