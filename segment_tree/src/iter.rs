/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Pre-order walk over the nodes of a [`SegmentTree`].

use crate::arena::NodeIndex;
use crate::{SegmentNode, SegmentTree};

/// Yields every node of a subtree, each parent ahead of its children and a
/// left subtree ahead of its right sibling. Leaves therefore appear in index
/// order.
///
/// Nodes are yielded as stored, without flushing. Below a node that still
/// holds a pending delta, aggregates lag behind by that delta.
#[derive(Debug)]
pub struct PreOrderDfsIterator<'a> {
    tree: &'a SegmentTree,
    /// Nodes still to be yielded; the top of the stack comes next.
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderDfsIterator<'a> {
    /// Walk the whole tree. Yields nothing for the empty tree.
    pub fn new(tree: &'a SegmentTree) -> Self {
        // A pre-order stack never holds more than one pending sibling per level.
        let mut stack = Vec::with_capacity(tree.height() as usize + 1);
        stack.extend(tree.root_index());
        Self { tree, stack }
    }

    /// Walk only the subtree below (and including) `node_idx`.
    pub fn from_node(tree: &'a SegmentTree, node_idx: NodeIndex) -> Self {
        Self {
            tree,
            stack: vec![node_idx],
        }
    }
}

impl<'a> Iterator for PreOrderDfsIterator<'a> {
    type Item = &'a SegmentNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node_idx = self.stack.pop()?;
        let node = self.tree.node(node_idx);

        if let Some((left, right)) = node.child_indices() {
            self.stack.extend([right, left]);
        }

        Some(node)
    }
}

impl<'a> IntoIterator for &'a SegmentTree {
    type Item = &'a SegmentNode;
    type IntoIter = PreOrderDfsIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        PreOrderDfsIterator::new(self)
    }
}
