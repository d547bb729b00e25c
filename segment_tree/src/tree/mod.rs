/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Segment tree implementation.
//!
//! This module contains the core tree structure and the algorithms that
//! operate on it.
//!
//! The implementation is split into sub-modules by concern:
//! - [`query`]: Read path (range sum / min / max)
//! - [`update`]: Write path (point assignment, range addition)
//! - [`flush`]: Lazy propagation of pending deltas
//! - [`invariants`]: Structural consistency checks

mod flush;
mod invariants;
mod query;
mod update;

use tracing::debug;

use crate::arena::{NodeArena, NodeIndex};
use crate::{Aggregate, IndexSpan, InternalNode, LeafNode, SegmentNode, SegmentTreeError};

/// A segment tree over a fixed-size array of `i64` values.
///
/// Every node covers an inclusive span of array indices and keeps the sum,
/// minimum and maximum of the values in it. The tree shape depends only on
/// the array length and never changes after construction.
///
/// # Arena Storage
///
/// All nodes are stored in a [`NodeArena`]. Children are referenced by
/// [`NodeIndex`] instead of `Box<SegmentNode>`, so the whole tree lives in a
/// single allocation of `2n - 1` nodes.
///
/// # Lazy Propagation
///
/// A range addition that entirely covers an internal node stops there: the
/// node's aggregates absorb the delta and the delta is recorded as
/// `pending`. Every traversal flushes a node before inspecting it, pushing
/// its pending delta one level down. Flushing never touches the aggregates
/// of the node being flushed, since they already include the delta.
///
/// # Borrowing
///
/// Queries take `&mut self` because flushing mutates pending state. Wrap the
/// tree in a lock to share it between threads.
#[derive(Debug, Default)]
pub struct SegmentTree {
    /// The root node index, or `None` for the empty tree.
    root: Option<NodeIndex>,
    /// Arena holding all tree nodes.
    nodes: NodeArena,
    /// Number of values in the backing array.
    len: usize,
}

impl SegmentTree {
    /// Build a tree over `values`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTreeError::EmptyInput`] if `values` is empty.
    pub fn build(values: &[i64]) -> Result<Self, SegmentTreeError> {
        if values.is_empty() {
            debug!("refusing to build a segment tree from an empty array");
            return Err(SegmentTreeError::EmptyInput);
        }

        let mut nodes = NodeArena::with_capacity(2 * values.len() - 1);
        let root = Self::build_node(&mut nodes, values, IndexSpan::new(0, values.len() - 1));
        debug!(len = values.len(), nodes = nodes.len(), "built segment tree");

        Ok(Self {
            root: Some(root),
            nodes,
            len: values.len(),
        })
    }

    /// Create the tree of an empty array.
    ///
    /// Every query on it returns the neutral value of its aggregate and every
    /// update is a no-op, regardless of the bounds passed in.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the subtree covering `span`, children first.
    fn build_node(nodes: &mut NodeArena, values: &[i64], span: IndexSpan) -> NodeIndex {
        if span.is_unit() {
            let index = span.start();
            return nodes.insert(SegmentNode::Leaf(LeafNode::new(index, values[index])));
        }

        let (left_span, right_span) = span.halves();
        let left = Self::build_node(nodes, values, left_span);
        let right = Self::build_node(nodes, values, right_span);
        let aggregate = nodes[left].aggregate().combine(nodes[right].aggregate());

        nodes.insert(SegmentNode::Internal(InternalNode {
            span,
            aggregate,
            pending: 0,
            left,
            right,
        }))
    }

    /// Number of values in the backing array.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true for the tree of an empty array.
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total number of nodes: `2n - 1` for `n` values, zero when empty.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of levels from the root down to the deepest leaf.
    ///
    /// A single-value tree has height 1; the empty tree has height 0.
    pub const fn height(&self) -> u32 {
        let mut len = self.len;
        let mut height = 0;
        while len > 0 {
            height += 1;
            if len == 1 {
                break;
            }
            // The left half is the larger one.
            len = len.div_ceil(2);
        }
        height
    }

    /// Get a reference to the root node, if the tree is not empty.
    pub fn root(&self) -> Option<&SegmentNode> {
        self.root.map(|idx| &self.nodes[idx])
    }

    /// Get the root node index, if the tree is not empty.
    pub const fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    /// Resolve a [`NodeIndex`] to a shared reference to the node.
    ///
    /// Aggregates read this way may not yet include deltas still pending on
    /// an ancestor. Use [`snapshot`](Self::snapshot) for a fully flushed view.
    ///
    /// # Panics
    ///
    /// Panics if `idx` was not produced by this tree.
    pub fn node(&self, idx: NodeIndex) -> &SegmentNode {
        &self.nodes[idx]
    }

    /// Returns an iterator over all nodes in the tree (pre-order, left first).
    pub fn iter(&self) -> crate::PreOrderDfsIterator<'_> {
        crate::PreOrderDfsIterator::new(self)
    }

    /// Calculate the total memory usage of the tree, in bytes.
    pub fn mem_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.nodes.mem_usage()
    }

    /// Check that `[left, right]` is a valid, non-reversed span of the array.
    fn check_bounds(&self, left: usize, right: usize) -> Result<(), SegmentTreeError> {
        if left > right || right >= self.len {
            debug!(left, right, len = self.len, "rejecting out of range request");
            return Err(SegmentTreeError::OutOfRange {
                start: left,
                end: right,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl TryFrom<&[i64]> for SegmentTree {
    type Error = SegmentTreeError;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        Self::build(values)
    }
}

impl TryFrom<Vec<i64>> for SegmentTree {
    type Error = SegmentTreeError;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        Self::build(&values)
    }
}
