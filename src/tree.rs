//! An unbalanced BST whose nodes keep a link back to their parent. Nodes live in an arena owned by
//! the [`Tree`] and refer to each other by [`NodeId`] so the parent links never own anything.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new(5);
//!
//! // `add` answers "was it already there?".
//! assert!(!tree.add(3));
//! assert!(!tree.add(8));
//! assert!(tree.add(3));
//! assert_eq!(tree.len(), 3);
//!
//! let three = tree.search(&3).unwrap();
//! assert_eq!(three.parent().map(|p| *p.value()), Some(5));
//!
//! assert!(tree.remove(&5));
//! assert!(!tree.remove(&5));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 8]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};
use slotmap::{new_key_type, Key, SlotMap};

use crate::error::TreeError;
use crate::node::NodeRef;
use crate::util::Shape;

new_key_type! {
    /// A stable handle to a node in a [`Tree`].
    ///
    /// Handles stay valid until the node they name is removed. The slot of a removed node may be
    /// reused, but the version stored in the handle makes the old handle detectably stale.
    pub struct NodeId;
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The low half is the slot index, the high half its version.
        let raw = self.data().as_ffi();
        write!(f, "#{}v{}", raw & 0xffff_ffff, raw >> 32)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) value: K,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K> Node<K> {
    fn leaf(value: K, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// An unbalanced Binary Search Tree of unique keys. The shape of the tree is a direct function of
/// the order keys were added in - nothing is ever rotated.
///
/// Every non-root node records its parent, which is what lets [`NodeRef`]s walk upwards and what
/// the breadth/depth-first visits guard against revisiting.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    nodes: SlotMap<NodeId, Node<K>>,
    root: Option<NodeId>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K> Tree<K> {
    /// Generates a new `Tree` holding just `seed`.
    pub fn new(seed: K) -> Self {
        let mut tree = Self::empty();
        let root = tree.nodes.insert(Node::leaf(seed, None));
        tree.root = Some(root);
        tree.len = 1;
        tree
    }

    /// Generates a new, empty `Tree`.
    pub fn empty() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            len: 0,
        }
    }

    /// How many keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no keys are stored. This is the only emptiness signal - an empty tree has no root.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every key. Handles to the removed nodes become stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|root| NodeRef::new(self, root))
    }

    /// Resolves a handle, returning `None` if its node has since been removed.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        self.entry(id).map(|_| NodeRef::new(self, id))
    }

    /// Resolves a handle like [`Tree::get`] but reports a stale handle as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new(2);
    /// tree.add(1);
    /// let one = tree.search(&1).unwrap().id();
    ///
    /// assert_eq!(tree.node(one).map(|n| *n.value()), Ok(1));
    ///
    /// tree.remove(&1);
    /// assert_eq!(tree.node(one).map(|n| *n.value()), Err(TreeError::StaleNode(one)));
    /// ```
    pub fn node(&self, id: NodeId) -> Result<NodeRef<'_, K>, TreeError> {
        self.get(id).ok_or(TreeError::StaleNode(id))
    }

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn entry(&self, id: NodeId) -> Option<&Node<K>> {
        self.nodes.get(id)
    }

    /// Looks up a node that is known to be linked into the tree.
    pub(crate) fn link(&self, id: NodeId) -> &Node<K> {
        self.entry(id).expect("Linked node handle must be live")
    }

    fn link_mut(&mut self, id: NodeId) -> &mut Node<K> {
        self.nodes
            .get_mut(id)
            .expect("Linked node handle must be live")
    }

    fn child_mut(&mut self, parent: NodeId, side: Side) -> &mut Option<NodeId> {
        let parent = self.link_mut(parent);
        match side {
            Side::Left => &mut parent.left,
            Side::Right => &mut parent.right,
        }
    }

    /// Follows left links from `id` until there are none.
    pub(crate) fn subtree_min(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(left) = self.link(current).left {
            current = left;
        }
        current
    }

    /// Follows right links from `id` until there are none.
    pub(crate) fn subtree_max(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(right) = self.link(current).right {
            current = right;
        }
        current
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Inserts `value` unless it is already stored.
    ///
    /// Returns `true` if the value was **already present** (and nothing changed), `false` if a new
    /// node was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new(1);
    ///
    /// assert!(!tree.add(2));
    /// assert!(tree.add(2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add(&mut self, value: K) -> bool {
        let Some(mut current) = self.root else {
            let root = self.nodes.insert(Node::leaf(value, None));
            self.root = Some(root);
            self.len += 1;
            trace!("added {} as the root", root);
            return false;
        };

        loop {
            let node = self.link(current);
            let (side, next) = match value.cmp(&node.value) {
                Ordering::Less => (Side::Left, node.left),
                Ordering::Equal => return true,
                Ordering::Greater => (Side::Right, node.right),
            };

            match next {
                Some(next) => current = next,
                None => {
                    let added = self.nodes.insert(Node::leaf(value, Some(current)));
                    *self.child_mut(current, side) = Some(added);
                    self.len += 1;
                    trace!("added {} under {}", added, current);
                    return false;
                }
            }
        }
    }

    /// Potentially finds the node holding `needle`. If no node has it, `None` is returned.
    ///
    /// This walks one path from the root so it takes `O(height)`, and since nothing is ever
    /// rebalanced the height can be as large as the number of keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new(2);
    /// tree.add(1);
    ///
    /// assert_eq!(tree.search(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, needle: &K) -> Option<NodeRef<'_, K>> {
        self.find(needle).map(|id| NodeRef::new(self, id))
    }

    /// Whether `needle` is stored.
    pub fn contains(&self, needle: &K) -> bool {
        self.find(needle).is_some()
    }

    /// The node holding the smallest key.
    pub fn min(&self) -> Option<NodeRef<'_, K>> {
        self.root().map(|root| root.min())
    }

    /// The node holding the largest key.
    pub fn max(&self) -> Option<NodeRef<'_, K>> {
        self.root().map(|root| root.max())
    }

    /// Removes the node holding `value`. Returns `false` if there wasn't one.
    ///
    /// A node with two children is replaced by its in-order successor (the smallest key in its
    /// right subtree), which adopts both of the removed node's subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new(10);
    ///
    /// assert!(tree.remove(&10));
    /// assert!(tree.is_empty());
    ///
    /// // A fresh insertion, not a duplicate.
    /// assert!(!tree.add(10));
    /// ```
    pub fn remove(&mut self, value: &K) -> bool {
        let Some(target) = self.find(value) else {
            return false;
        };

        let (parent, shape) = {
            let node = self.link(target);
            (node.parent, Shape::of(node.left, node.right))
        };
        debug!("removing {} ({})", target, shape.name());

        match shape {
            Shape::Leaf => self.replace(parent, target, None),
            Shape::RightOnly(child) | Shape::LeftOnly(child) => {
                self.replace(parent, target, Some(child))
            }
            Shape::Both(left, right) => {
                let successor = self.subtree_min(right);
                if successor != right {
                    // The successor has no left child. Its right subtree moves up into its place
                    // and the removed node's right subtree hangs under it instead.
                    let (successor_parent, successor_right) = {
                        let node = self.link(successor);
                        (node.parent, node.right)
                    };
                    self.replace(successor_parent, successor, successor_right);
                    self.link_mut(successor).right = Some(right);
                    self.link_mut(right).parent = Some(successor);
                }

                self.link_mut(successor).left = Some(left);
                self.link_mut(left).parent = Some(successor);
                self.replace(parent, target, Some(successor));
            }
        }

        self.nodes.remove(target);
        self.len -= 1;
        true
    }

    /// Walks the whole tree and reports the first broken structural invariant: a parent link that
    /// disagrees with the child links, keys out of order, or a count that doesn't match the
    /// number of reachable nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree: Tree<_> = (0..10).rev().collect();
    /// tree.remove(&4);
    ///
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), TreeError> {
        let mut reachable = 0;
        let mut previous: Option<&K> = None;
        let mut stack = Vec::new();
        let mut cursor = self.root.map(|root| (root, None));

        loop {
            while let Some((id, owner)) = cursor {
                let node = self.entry(id).ok_or(TreeError::StaleNode(id))?;
                if node.parent != owner {
                    return Err(TreeError::ParentMismatch {
                        node: id,
                        expected: owner,
                        found: node.parent,
                    });
                }
                stack.push(id);
                cursor = node.left.map(|left| (left, Some(id)));
            }

            let Some(id) = stack.pop() else {
                break;
            };
            let node = self.link(id);
            if previous.map_or(false, |previous| *previous >= node.value) {
                return Err(TreeError::OutOfOrder(id));
            }
            previous = Some(&node.value);

            reachable += 1;
            // A cycle through child links would otherwise never finish.
            if reachable > self.len {
                break;
            }
            cursor = node.right.map(|right| (right, Some(id)));
        }

        if reachable != self.len {
            return Err(TreeError::CountMismatch {
                reachable,
                recorded: self.len,
            });
        }
        Ok(())
    }

    fn find(&self, needle: &K) -> Option<NodeId> {
        let mut current = self.root?;
        loop {
            let node = self.link(current);
            current = match needle.cmp(&node.value) {
                Ordering::Less => node.left?,
                Ordering::Equal => return Some(current),
                Ordering::Greater => node.right?,
            };
        }
    }

    /// Which of `parent`'s slots `child` belongs in, decided by comparing their keys.
    fn side_of(&self, child: NodeId, parent: NodeId) -> Side {
        if self.link(child).value < self.link(parent).value {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Puts `new` where `old` hangs under `parent` (or at the root when there's no parent) and
    /// points `new`'s parent link at `parent`.
    fn replace(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            Some(parent) => {
                let side = self.side_of(old, parent);
                *self.child_mut(parent, side) = new;
            }
            None => self.root = new,
        }
        if let Some(new) = new {
            self.link_mut(new).parent = parent;
        }
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::empty();
        tree.extend(iter);
        tree
    }
}
