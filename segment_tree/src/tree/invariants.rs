/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Structural invariant checks for the segment tree.
//!
//! When the `unittest` feature is enabled these checks run after every
//! mutation (`update`, `range_add`) to catch violations early. They are
//! always available to tests through [`SegmentTree::check_tree_invariants`].

use super::SegmentTree;
use crate::arena::NodeIndex;
use crate::{Aggregate, IndexSpan, SegmentNode};

impl SegmentTree {
    /// Verify all structural invariants of the tree.
    ///
    /// Panics with a descriptive message if any invariant is violated.
    /// Does not flush, so it can be called at any point between operations.
    pub fn check_tree_invariants(&self) {
        let Some(root) = self.root else {
            assert_eq!(self.len, 0, "an empty tree must have length 0");
            assert_eq!(self.nodes.len(), 0, "an empty tree must have no nodes");
            return;
        };

        assert_eq!(
            self.nodes.len(),
            2 * self.len - 1,
            "a tree over {} values must have {} nodes",
            self.len,
            2 * self.len - 1,
        );
        let num_leaves = self.nodes.iter().filter(|(_, node)| node.is_leaf()).count();
        assert_eq!(
            num_leaves, self.len,
            "leaf count mismatch: {num_leaves} leaves for {} values",
            self.len,
        );

        self.check_node_invariants(root, IndexSpan::new(0, self.len - 1));
    }

    /// Recursively check invariants for the subtree rooted at `node_idx`,
    /// which must cover exactly `expected_span`.
    ///
    /// Returns the aggregate the subtree reports to its parent.
    fn check_node_invariants(&self, node_idx: NodeIndex, expected_span: IndexSpan) -> Aggregate {
        let node = self.node(node_idx);
        assert_eq!(
            node.span(),
            expected_span,
            "span mismatch at node {node_idx:?}",
        );

        match node {
            SegmentNode::Leaf(_) => {
                // --- Invariant 1: leaves are single slots ---
                assert!(
                    expected_span.is_unit(),
                    "leaf {node_idx:?} covers {expected_span}, expected a single slot",
                );
                node.aggregate()
            }
            SegmentNode::Internal(internal) => {
                assert!(
                    !expected_span.is_unit(),
                    "internal node {node_idx:?} covers the single slot {expected_span}",
                );
                let (left_span, right_span) = expected_span.halves();
                let left = self.check_node_invariants(internal.left_index(), left_span);
                let right = self.check_node_invariants(internal.right_index(), right_span);

                // --- Invariant 2: aggregates above pending ---
                // The node's aggregates include its pending delta, its
                // children's do not.
                let expected = left
                    .combine(right)
                    .shifted(internal.pending(), expected_span.len());
                assert_eq!(
                    internal.aggregate(),
                    expected,
                    "aggregate mismatch at node {node_idx:?} covering {expected_span} \
                     (pending={}, left={left:?}, right={right:?})",
                    internal.pending(),
                );

                internal.aggregate()
            }
        }
    }
}
