use std::fmt;

/// Element type, parsed case-insensitively from a tag name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    A,
    Audio,
    Button,
    Details,
    Dialog,
    Div,
    Form,
    Iframe,
    Input,
    Li,
    Nav,
    Select,
    Slot,
    Span,
    Summary,
    Textarea,
    Ul,
    Video,
    Custom(String),
}

impl Tag {
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "a" => Tag::A,
            "audio" => Tag::Audio,
            "button" => Tag::Button,
            "details" => Tag::Details,
            "dialog" => Tag::Dialog,
            "div" => Tag::Div,
            "form" => Tag::Form,
            "iframe" => Tag::Iframe,
            "input" => Tag::Input,
            "li" => Tag::Li,
            "nav" => Tag::Nav,
            "select" => Tag::Select,
            "slot" => Tag::Slot,
            "span" => Tag::Span,
            "summary" => Tag::Summary,
            "textarea" => Tag::Textarea,
            "ul" => Tag::Ul,
            "video" => Tag::Video,
            other => Tag::Custom(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Tag::A => "a",
            Tag::Audio => "audio",
            Tag::Button => "button",
            Tag::Details => "details",
            Tag::Dialog => "dialog",
            Tag::Div => "div",
            Tag::Form => "form",
            Tag::Iframe => "iframe",
            Tag::Input => "input",
            Tag::Li => "li",
            Tag::Nav => "nav",
            Tag::Select => "select",
            Tag::Slot => "slot",
            Tag::Span => "span",
            Tag::Summary => "summary",
            Tag::Textarea => "textarea",
            Tag::Ul => "ul",
            Tag::Video => "video",
            Tag::Custom(name) => name,
        }
    }

    /// Elements that take keyboard focus without an explicit tab index.
    pub fn is_natively_tabbable(&self) -> bool {
        matches!(
            self,
            Tag::Button
                | Tag::Input
                | Tag::Select
                | Tag::Textarea
                | Tag::A
                | Tag::Audio
                | Tag::Video
                | Tag::Summary
                | Tag::Iframe
        )
    }

    pub fn is_media(&self) -> bool {
        matches!(self, Tag::Audio | Tag::Video)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::parse(name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
