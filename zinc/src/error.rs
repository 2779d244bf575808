use thiserror::Error;
use zincdom::{DomError, NodeId};

/// Errors raised while a widget locates its own structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("widget host {0} has no shadow root")]
    MissingShadowRoot(NodeId),

    #[error("widget host {host} has no slot named '{name}'")]
    MissingSlot { host: NodeId, name: String },

    #[error(transparent)]
    Dom(#[from] DomError),
}
