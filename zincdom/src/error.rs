use thiserror::Error;

use crate::document::NodeId;

/// Errors from structural mutation of a [`crate::Document`].
///
/// Reads never fail: the tabbable resolver and roving navigator degrade to
/// empty or partial results instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("node {0} does not exist in this document")]
    NodeNotFound(NodeId),

    #[error("node {0} is a shadow root, not an element")]
    NotAnElement(NodeId),

    #[error("element {0} already hosts a shadow root")]
    ShadowAlreadyAttached(NodeId),

    #[error("element {0} is not a slot")]
    NotASlot(NodeId),

    #[error("appending {child} under {parent} would make a node its own ancestor")]
    CycleDetected { parent: NodeId, child: NodeId },
}
