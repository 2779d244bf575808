mod enums;
mod style;
mod tag;

pub use enums::{Display, Overflow, ShadowMode, Visibility};
pub use style::{ScrollExtents, Style};
pub use tag::Tag;
