/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Debug and introspection utilities for the segment tree.
//!
//! A [`TreeSnapshot`] is a read-only copy of every node, taken after all
//! pending deltas have been flushed to the leaves. Renderers read snapshots
//! instead of the live tree, so they can never mutate it.

use std::fmt;

use crate::arena::NodeIndex;
use crate::{Aggregate, IndexSpan, SegmentTree};

/// The state of a single node, as captured by [`SegmentTree::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSnapshot {
    /// The indices covered by the node.
    pub span: IndexSpan,
    /// Sum, minimum and maximum of the covered values.
    pub aggregate: Aggregate,
    /// Distance from the root; the root has depth 0.
    pub depth: usize,
}

/// A flushed, pre-order copy of every node of a [`SegmentTree`].
///
/// Since no node carries a pending delta at snapshot time, every internal
/// node's aggregate is exactly the combination of its children's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeSnapshot {
    nodes: Vec<NodeSnapshot>,
}

impl TreeSnapshot {
    /// All captured nodes, in pre-order (parent first, left before right).
    pub fn nodes(&self) -> &[NodeSnapshot] {
        &self.nodes
    }

    /// Returns true for the snapshot of an empty tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The captured leaf values, in index order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.span.is_unit())
            .map(|node| node.aggregate.sum)
    }
}

impl SegmentTree {
    /// Flush every pending delta, then capture the state of every node.
    pub fn snapshot(&mut self) -> TreeSnapshot {
        self.flush_all();

        let mut nodes = Vec::with_capacity(self.num_nodes());
        if let Some(root) = self.root_index() {
            self.capture(root, 0, &mut nodes);
        }
        TreeSnapshot { nodes }
    }

    fn capture(&self, node_idx: NodeIndex, depth: usize, out: &mut Vec<NodeSnapshot>) {
        let node = self.node(node_idx);
        out.push(NodeSnapshot {
            span: node.span(),
            aggregate: node.aggregate(),
            depth,
        });
        if let Some((left, right)) = node.child_indices() {
            self.capture(left, depth + 1, out);
            self.capture(right, depth + 1, out);
        }
    }
}

/// Renders one node per line, children indented under their parent:
///
/// ```text
/// 10 [0,3] min=1 max=4
///   ↳3 [0,1] min=1 max=2
///     ↳1 [0,0]
/// ```
///
/// Leaves omit `min`/`max`, which always equal their value.
impl fmt::Display for TreeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nodes.is_empty() {
            return f.write_str("Tree is empty");
        }

        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            if node.depth > 0 {
                write!(f, "{:indent$}↳", "", indent = node.depth * 2)?;
            }
            write!(f, "{} {}", node.aggregate.sum, node.span)?;
            if !node.span.is_unit() {
                write!(f, " min={} max={}", node.aggregate.min, node.aggregate.max)?;
            }
        }
        Ok(())
    }
}
