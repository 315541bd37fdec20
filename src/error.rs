use std::{error::Error, fmt};

use crate::tree::NodeId;

/// Errors reported when resolving node handles or checking a tree's structure.
///
/// None of the core operations (`add`, `search`, `remove`, ...) return these. A missing key or a
/// duplicate insertion is an ordinary `bool`/`Option` answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The handle refers to a node that has been removed (or never belonged to this tree).
    StaleNode(NodeId),
    /// A node's parent link doesn't point at the node that actually owns it.
    ParentMismatch {
        /// The node whose parent link is wrong.
        node: NodeId,
        /// The owner found by walking down from the root.
        expected: Option<NodeId>,
        /// What the node's parent link holds.
        found: Option<NodeId>,
    },
    /// An in-order walk found this node's key not strictly greater than its predecessor's.
    OutOfOrder(NodeId),
    /// The recorded element count disagrees with the number of reachable nodes.
    CountMismatch {
        /// Nodes reachable from the root.
        reachable: usize,
        /// What the tree's counter says.
        recorded: usize,
    },
}

impl Error for TreeError {}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::StaleNode(id) => write!(f, "Node handle is stale: {}", id),
            TreeError::ParentMismatch {
                node,
                expected,
                found,
            } => write!(
                f,
                "Parent link of {} is {} but its owner is {}",
                node,
                DisplayLink(*found),
                DisplayLink(*expected)
            ),
            TreeError::OutOfOrder(id) => write!(f, "Key of {} breaks the search order", id),
            TreeError::CountMismatch {
                reachable,
                recorded,
            } => write!(
                f,
                "Tree records {} elements but {} are reachable",
                recorded, reachable
            ),
        }
    }
}

struct DisplayLink(Option<NodeId>);

impl fmt::Display for DisplayLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{}", id),
            None => f.write_str("none"),
        }
    }
}
