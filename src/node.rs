use std::fmt;

use crate::tree::{Node, NodeId, Tree};

/// A borrowed view of one node of a [`Tree`]. It can walk to the node's parent and children and
/// find the extremes of the subtree rooted at it.
///
/// # Examples
///
/// ```
/// use ordered_tree::Tree;
///
/// let tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
///
/// let three = tree.search(&3).unwrap();
/// assert_eq!(*three.min().value(), 1);
/// assert_eq!(*three.max().value(), 4);
/// assert_eq!(three.parent().map(|p| *p.value()), Some(5));
/// ```
pub struct NodeRef<'a, K> {
    tree: &'a Tree<K>,
    id: NodeId,
    node: &'a Node<K>,
}

impl<'a, K> Clone for NodeRef<'a, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, K> Copy for NodeRef<'a, K> {}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(tree: &'a Tree<K>, id: NodeId) -> Self {
        Self {
            tree,
            id,
            node: tree.link(id),
        }
    }

    /// The handle of this node, usable with [`Tree::get`] while the node stays in the tree.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The key stored in this node.
    pub fn value(&self) -> &'a K {
        &self.node.value
    }

    /// The structural parent, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.node.parent.map(|id| Self::new(self.tree, id))
    }

    /// The root of the left subtree.
    pub fn left(&self) -> Option<Self> {
        self.node.left.map(|id| Self::new(self.tree, id))
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<Self> {
        self.node.right.map(|id| Self::new(self.tree, id))
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }

    /// Whether this node is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.node.parent.is_none()
    }

    /// The leftmost node of this subtree, i.e. the one with the smallest key. This may be `self`.
    pub fn min(&self) -> Self {
        Self::new(self.tree, self.tree.subtree_min(self.id))
    }

    /// The rightmost node of this subtree, i.e. the one with the largest key. This may be `self`.
    pub fn max(&self) -> Self {
        Self::new(self.tree, self.tree.subtree_max(self.id))
    }

    pub(crate) fn parent_id(&self) -> Option<NodeId> {
        self.node.parent
    }

    pub(crate) fn left_id(&self) -> Option<NodeId> {
        self.node.left
    }

    pub(crate) fn right_id(&self) -> Option<NodeId> {
        self.node.right
    }
}

impl<'a, K> fmt::Debug for NodeRef<'a, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", &self.node.value)
            .field("parent", &self.node.parent)
            .field("left", &self.node.left)
            .field("right", &self.node.right)
            .finish()
    }
}
