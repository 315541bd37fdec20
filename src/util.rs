use crate::tree::NodeId;

/// Which children a node being removed has. This decides how its subtree is spliced back together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shape {
    /// No children - the node is simply unlinked.
    Leaf,
    /// Only a right child, which takes the node's place.
    RightOnly(NodeId),
    /// Only a left child, which takes the node's place.
    LeftOnly(NodeId),
    /// Both children. The in-order successor takes the node's place.
    Both(NodeId, NodeId),
}

impl Shape {
    pub(crate) fn of(left: Option<NodeId>, right: Option<NodeId>) -> Self {
        match (left, right) {
            (None, None) => Shape::Leaf,
            (None, Some(right)) => Shape::RightOnly(right),
            (Some(left), None) => Shape::LeftOnly(left),
            (Some(left), Some(right)) => Shape::Both(left, right),
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Shape::Leaf => "leaf",
            Shape::RightOnly(_) => "right-only",
            Shape::LeftOnly(_) => "left-only",
            Shape::Both(..) => "two children",
        }
    }
}
