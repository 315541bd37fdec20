//! An ordered set of unique keys stored as a plain, never-rebalanced binary search tree in which
//! every node can also reach its parent.
//!
//! ## Shape
//!
//! Keys smaller than a node's key end up somewhere below its left link and larger ones below its
//! right link. Nothing rotates, so the tree keeps exactly the shape its insertion order gave it:
//! shuffled keys give a bushy tree, sorted keys give a chain as long as the tree itself. Every
//! lookup follows a single path down from the root and costs one comparison per level.
//!
//! Removing a node with two children lifts its in-order successor (the leftmost key of its right
//! subtree) into its place.
//!
//! ## Parent links
//!
//! The tree owns all of its nodes in a [`slotmap`] arena, and nodes refer to each other through
//! [`NodeId`] handles. A parent link is only a handle and owns nothing, and a handle to a removed
//! node never resolves again, even once its slot is reused. Parent links make the nodes a graph
//! with cycles, so [`Tree::breadth_first_visit`] and [`Tree::depth_first_visit`] remember which
//! handles they have already seen. They still visit every node exactly once.
//!
//! [`slotmap`]: https://docs.rs/slotmap
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new(5);
//! for key in vec![3, 8, 1, 4, 7, 9] {
//!     tree.add(key);
//! }
//!
//! assert_eq!(tree.min().map(|n| *n.value()), Some(1));
//! assert_eq!(tree.max().map(|n| *n.value()), Some(9));
//!
//! // 5 has two children so its in-order successor, 7, takes its place.
//! tree.remove(&5);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(7));
//!
//! let mut seen = Vec::new();
//! tree.depth_first_visit(|node| seen.push(*node.value()));
//! assert_eq!(seen, vec![7, 3, 1, 4, 8, 9]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
pub mod pretty;
mod tree;
mod util;
mod visit;

pub use error::TreeError;
pub use node::NodeRef;
pub use pretty::PrettyConfig;
pub use tree::{NodeId, Tree};
pub use visit::Iter;

#[cfg(test)]
mod test;
