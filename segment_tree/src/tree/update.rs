/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: point assignment and range addition.
//!
//! Both operations descend from the root, flushing every visited node, and
//! recompute the aggregates of every node they descended through on the way
//! back up.

use tracing::trace;

use super::SegmentTree;
use crate::arena::{NodeArena, NodeIndex};
use crate::{SegmentNode, SegmentTreeError};

impl SegmentTree {
    /// Set the value at `index` to `value`.
    ///
    /// A no-op on the empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTreeError::OutOfRange`] if `index >= self.len()`.
    pub fn update(&mut self, index: usize, value: i64) -> Result<(), SegmentTreeError> {
        let Some(root) = self.root else {
            return Ok(());
        };
        self.check_bounds(index, index)?;

        Self::node_update(&mut self.nodes, root, index, value);

        #[cfg(all(feature = "unittest", not(miri)))]
        self.check_tree_invariants();
        Ok(())
    }

    /// Add `delta` to every value in `[left, right]`.
    ///
    /// A no-op on the empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTreeError::OutOfRange`] if `left > right` or
    /// `right >= self.len()`.
    pub fn range_add(
        &mut self,
        left: usize,
        right: usize,
        delta: i64,
    ) -> Result<(), SegmentTreeError> {
        let Some(root) = self.root else {
            return Ok(());
        };
        self.check_bounds(left, right)?;

        if delta != 0 {
            Self::node_range_add(&mut self.nodes, root, left, right, delta);
        }

        #[cfg(all(feature = "unittest", not(miri)))]
        self.check_tree_invariants();
        Ok(())
    }

    /// Recursive point assignment.
    ///
    /// Only the child whose span contains `index` is visited, so exactly one
    /// node per level is flushed and recomputed.
    fn node_update(nodes: &mut NodeArena, node_idx: NodeIndex, index: usize, value: i64) {
        Self::flush(nodes, node_idx);

        match &mut nodes[node_idx] {
            SegmentNode::Leaf(leaf) => {
                debug_assert_eq!(leaf.index, index);
                leaf.value = value;
            }
            SegmentNode::Internal(internal) => {
                let (left, right) = (internal.left, internal.right);
                let child = if nodes[left].span().contains(index) {
                    left
                } else {
                    right
                };
                Self::node_update(nodes, child, index, value);
                Self::recombine(nodes, node_idx);
            }
        }
    }

    /// Recursive range addition.
    ///
    /// # Algorithm
    ///
    /// 1. Flush the node, so an older delta is pushed down before a new one
    ///    is layered on top of it.
    /// 2. **No overlap**: nothing to do.
    /// 3. **Contained**: the node absorbs the delta into its own aggregates
    ///    and, unless it is a leaf, defers it to its children as pending.
    ///    This is what keeps a range addition at O(log n).
    /// 4. **Partial overlap**: recurse into both children, then recompute the
    ///    node's aggregates from theirs.
    fn node_range_add(
        nodes: &mut NodeArena,
        node_idx: NodeIndex,
        left: usize,
        right: usize,
        delta: i64,
    ) {
        Self::flush(nodes, node_idx);

        let span = nodes[node_idx].span();
        if !span.overlaps(left, right) {
            return;
        }
        if span.contained_in(left, right) {
            trace!(%span, delta, "deferring range addition");
            nodes[node_idx].absorb(delta);
            return;
        }

        let Some((left_idx, right_idx)) = nodes[node_idx].child_indices() else {
            unreachable!("a leaf span is either contained in or disjoint from the update span")
        };
        Self::node_range_add(nodes, left_idx, left, right, delta);
        Self::node_range_add(nodes, right_idx, left, right, delta);
        Self::recombine(nodes, node_idx);
    }

    /// Recompute the aggregates of an internal node from its children.
    ///
    /// The node must have been flushed first: with no pending delta, its
    /// aggregates are exactly the combination of its children's.
    fn recombine(nodes: &mut NodeArena, node_idx: NodeIndex) {
        let Some((left, right)) = nodes[node_idx].child_indices() else {
            return;
        };
        let aggregate = nodes[left].aggregate().combine(nodes[right].aggregate());

        if let SegmentNode::Internal(internal) = &mut nodes[node_idx] {
            debug_assert_eq!(internal.pending, 0, "recombining a node that was not flushed");
            internal.aggregate = aggregate;
        }
    }
}
