/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Lazy propagation: pushing pending deltas down the tree.
//!
//! A pending delta on a node has already been folded into that node's own
//! aggregates. Flushing moves it one level down, into both children, and
//! clears it. It never re-applies the delta to the node being flushed: doing
//! so would count the delta twice in that node's sum.

use tracing::trace;

use super::SegmentTree;
use crate::SegmentNode;
use crate::arena::{NodeArena, NodeIndex};

impl SegmentTree {
    /// Push the pending delta of `node_idx`, if any, into its children.
    ///
    /// Each child absorbs the delta into its own aggregates and, if it is an
    /// internal node, accumulates it into its own pending delta. Leaves are
    /// never flushed, as they carry no pending delta.
    pub(super) fn flush(nodes: &mut NodeArena, node_idx: NodeIndex) {
        let SegmentNode::Internal(internal) = &mut nodes[node_idx] else {
            return;
        };
        if internal.pending == 0 {
            return;
        }

        let delta = std::mem::take(&mut internal.pending);
        let (left, right) = (internal.left, internal.right);
        trace!(node = node_idx.position(), delta, "flushing pending delta");

        nodes[left].absorb(delta);
        nodes[right].absorb(delta);
    }

    /// Flush every node of the subtree rooted at `node_idx`, top-down.
    ///
    /// Afterwards no node in the subtree has a pending delta and every leaf
    /// holds its current value.
    pub(super) fn flush_subtree(nodes: &mut NodeArena, node_idx: NodeIndex) {
        Self::flush(nodes, node_idx);
        if let Some((left, right)) = nodes[node_idx].child_indices() {
            Self::flush_subtree(nodes, left);
            Self::flush_subtree(nodes, right);
        }
    }

    /// Flush all pending deltas down to the leaves.
    ///
    /// This costs O(n) and is only needed to read the tree node by node; the
    /// query and update paths flush lazily on their own.
    pub fn flush_all(&mut self) {
        if let Some(root) = self.root {
            Self::flush_subtree(&mut self.nodes, root);
        }
    }
}
