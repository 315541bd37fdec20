//! Whole-tree walks.
//!
//! The breadth/depth-first visits follow parent links as well as child links, so the nodes form a
//! graph with cycles rather than a tree. Both keep a visited set keyed by [`NodeId`]: a neighbour
//! already visited is never queued, and a node queued twice before being reached is skipped the
//! second time. Every node is handed to the callback exactly once.

use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::node::NodeRef;
use crate::tree::{NodeId, Tree};

impl<K> Tree<K> {
    /// Calls `visit` once for every node, in FIFO order starting at the root. Each node's
    /// neighbours are queued left, parent, right.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// let mut order = Vec::new();
    /// tree.breadth_first_visit(|node| order.push(*node.value()));
    /// assert_eq!(order, vec![5, 3, 8, 1, 4]);
    /// ```
    pub fn breadth_first_visit<F>(&self, mut visit: F)
    where
        F: FnMut(NodeRef<'_, K>),
    {
        let Some(root) = self.root_id() else {
            return;
        };
        let mut visited = HashSet::with_capacity(self.len());
        let mut queue = VecDeque::new();
        queue.push_back(root);

        while let Some(id) = queue.pop_front() {
            if !visited.insert(id) {
                continue;
            }
            let node = NodeRef::new(self, id);
            visit(node);

            for &neighbour in [node.left_id(), node.parent_id(), node.right_id()]
                .iter()
                .flatten()
            {
                if !visited.contains(&neighbour) {
                    queue.push_back(neighbour);
                }
            }
        }
        trace!("breadth-first visit reached {} nodes", visited.len());
    }

    /// Calls `visit` once for every node, in LIFO order starting at the root. Each node's
    /// neighbours are pushed right, parent, left, so left subtrees are explored first.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// let mut order = Vec::new();
    /// tree.depth_first_visit(|node| order.push(*node.value()));
    /// assert_eq!(order, vec![5, 3, 1, 4, 8]);
    /// ```
    pub fn depth_first_visit<F>(&self, mut visit: F)
    where
        F: FnMut(NodeRef<'_, K>),
    {
        let Some(root) = self.root_id() else {
            return;
        };
        let mut visited = HashSet::with_capacity(self.len());
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let node = NodeRef::new(self, id);
            visit(node);

            for &neighbour in [node.right_id(), node.parent_id(), node.left_id()]
                .iter()
                .flatten()
            {
                if !visited.contains(&neighbour) {
                    stack.push(neighbour);
                }
            }
        }
        trace!("depth-first visit reached {} nodes", visited.len());
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root_id());
        iter
    }
}

/// An in-order iterator over the keys of a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, K> {
    tree: &'a Tree<K>,
    // The nodes whose left subtrees are being walked, innermost last.
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut cursor: Option<NodeId>) {
        while let Some(id) = cursor {
            self.stack.push(id);
            cursor = self.tree.link(id).left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.link(id);
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
