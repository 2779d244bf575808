pub mod computed;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod roving;
pub mod tabbable;
pub mod types;

pub use document::{Document, Node, NodeId, NodeKind};
pub use element::{Element, TabIndex};
pub use error::DomError;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{FocusHost, FocusState};
pub use roving::{Handled, Orientation, RovingConfig};
pub use tabbable::{is_tabbable, resolve_tabbable, tabbable_boundary, Boundary};
pub use types::*;
