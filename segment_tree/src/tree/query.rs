/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: range queries.
//!
//! All three range queries share a single traversal that computes the full
//! [`Aggregate`] of the requested span; the public methods project the field
//! they are asked for.

use super::SegmentTree;
use crate::arena::{NodeArena, NodeIndex};
use crate::{Aggregate, SegmentNode, SegmentTreeError};

impl SegmentTree {
    /// Sum of the values in `[left, right]`.
    ///
    /// Returns `0` on the empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTreeError::OutOfRange`] if `left > right` or
    /// `right >= self.len()`.
    pub fn range_sum(&mut self, left: usize, right: usize) -> Result<i64, SegmentTreeError> {
        self.range_aggregate(left, right).map(|agg| agg.sum)
    }

    /// Smallest value in `[left, right]`.
    ///
    /// Returns `i64::MAX` on the empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTreeError::OutOfRange`] if `left > right` or
    /// `right >= self.len()`.
    pub fn range_min(&mut self, left: usize, right: usize) -> Result<i64, SegmentTreeError> {
        self.range_aggregate(left, right).map(|agg| agg.min)
    }

    /// Largest value in `[left, right]`.
    ///
    /// Returns `i64::MIN` on the empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTreeError::OutOfRange`] if `left > right` or
    /// `right >= self.len()`.
    pub fn range_max(&mut self, left: usize, right: usize) -> Result<i64, SegmentTreeError> {
        self.range_aggregate(left, right).map(|agg| agg.max)
    }

    /// Sum, minimum and maximum of the values in `[left, right]`, computed in
    /// a single traversal.
    ///
    /// Returns [`Aggregate::IDENTITY`] on the empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTreeError::OutOfRange`] if `left > right` or
    /// `right >= self.len()`.
    pub fn range_aggregate(
        &mut self,
        left: usize,
        right: usize,
    ) -> Result<Aggregate, SegmentTreeError> {
        let Some(root) = self.root else {
            return Ok(Aggregate::IDENTITY);
        };
        self.check_bounds(left, right)?;

        Ok(Self::node_query(&mut self.nodes, root, left, right))
    }

    /// The current value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTreeError::OutOfRange`] if `index >= self.len()`,
    /// which includes every index of the empty tree.
    pub fn value_at(&mut self, index: usize) -> Result<i64, SegmentTreeError> {
        self.check_bounds(index, index)?;
        self.range_sum(index, index)
    }

    /// The current values of the whole array, in index order.
    ///
    /// Flushes every pending delta down to the leaves.
    pub fn to_vec(&mut self) -> Vec<i64> {
        self.flush_all();
        self.iter()
            .filter_map(|node| match node {
                SegmentNode::Leaf(leaf) => Some(leaf.value()),
                SegmentNode::Internal(_) => None,
            })
            .collect()
    }

    /// Recursively aggregate the part of `[left, right]` covered by `node_idx`.
    ///
    /// # Containment vs Overlap
    ///
    /// - **No overlap**: contributes the identity.
    /// - **Contained**: the node's span lies within `[left, right]`, so its
    ///   aggregate is the answer for this subtree and we stop descending.
    /// - **Partial overlap**: only internal nodes can partially overlap a
    ///   span; recurse into both children and combine.
    fn node_query(
        nodes: &mut NodeArena,
        node_idx: NodeIndex,
        left: usize,
        right: usize,
    ) -> Aggregate {
        // The node's children must be up to date before we read or descend.
        Self::flush(nodes, node_idx);

        let node = &nodes[node_idx];
        let span = node.span();
        if !span.overlaps(left, right) {
            return Aggregate::IDENTITY;
        }
        if span.contained_in(left, right) {
            return node.aggregate();
        }

        let Some((left_idx, right_idx)) = node.child_indices() else {
            unreachable!("a leaf span is either contained in or disjoint from the query span")
        };
        let left_agg = Self::node_query(nodes, left_idx, left, right);
        let right_agg = Self::node_query(nodes, right_idx, left, right);
        left_agg.combine(right_agg)
    }
}
