//! A sideways rendering of a [`Tree`] for debugging. Each key goes on its own line, indented by
//! its depth, with the right subtree above its root and the left subtree below:
//!
//! ```text
//!         9
//!     8
//!         7
//! 5
//!         4
//!     3
//!         1
//! ```
//!
//! This is a debugging aid - the exact layout is not something to parse.

use std::fmt::{self, Write};

use crate::tree::{NodeId, Tree};

/// How [`Tree::pretty`] indents its output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrettyConfig {
    /// Spaces added per level of depth.
    pub indent: usize,
    /// Spaces in front of every line.
    pub offset: usize,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            offset: 0,
        }
    }
}

impl PrettyConfig {
    /// Sets the spaces added per level of depth.
    pub fn with_indent(self, indent: usize) -> Self {
        Self { indent, ..self }
    }

    /// Sets the spaces in front of every line.
    pub fn with_offset(self, offset: usize) -> Self {
        Self { offset, ..self }
    }
}

impl<K> Tree<K>
where
    K: fmt::Display,
{
    /// Renders the tree sideways, one key per line. An empty tree renders as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{PrettyConfig, Tree};
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    /// let config = PrettyConfig::default().with_indent(2).with_offset(1);
    ///
    /// assert_eq!(tree.pretty(&config), "   3\n 2\n   1\n");
    /// ```
    pub fn pretty(&self, config: &PrettyConfig) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, config)
            .expect("Writing to a String cannot fail");
        out
    }

    fn write_pretty<W: Write>(&self, out: &mut W, config: &PrettyConfig) -> fmt::Result {
        // Reverse in-order walk with an explicit stack, so a degenerate tree can't overflow the
        // call stack.
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        let mut cursor = self.root_id().map(|root| (root, 0));

        loop {
            while let Some((id, depth)) = cursor {
                stack.push((id, depth));
                cursor = self.link(id).right.map(|right| (right, depth + 1));
            }

            let Some((id, depth)) = stack.pop() else {
                return Ok(());
            };
            let node = self.link(id);
            writeln!(
                out,
                "{:width$}{}",
                "",
                node.value,
                width = config.offset + config.indent * depth
            )?;
            cursor = node.left.map(|left| (left, depth + 1));
        }
    }
}

impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_pretty(f, &PrettyConfig::default())
    }
}
