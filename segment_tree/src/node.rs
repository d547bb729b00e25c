/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! SegmentNode - A node in the segment tree.

use crate::arena::NodeIndex;
use crate::{Aggregate, IndexSpan};

/// A node in the segment tree. Either a leaf covering a single array slot,
/// or an internal node with exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentNode {
    /// A single array slot.
    Leaf(LeafNode),
    /// A span of two or more slots, split between two children.
    Internal(InternalNode),
}

/// A leaf node, holding the current value of one array slot.
///
/// Leaves have no children to defer work to, so any delta that reaches a
/// leaf is applied to its value immediately. They carry no pending delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub(crate) index: usize,
    pub(crate) value: i64,
}

/// An internal node, aggregating the values of both of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalNode {
    /// The indices covered by this node. Split evenly between the children,
    /// with the left child taking the extra index on odd lengths.
    pub(crate) span: IndexSpan,
    /// Aggregates of the span, including the effect of `pending`.
    pub(crate) aggregate: Aggregate,
    /// Delta already folded into `aggregate` but not yet into the children.
    pub(crate) pending: i64,
    pub(crate) left: NodeIndex,
    pub(crate) right: NodeIndex,
}

impl LeafNode {
    pub(crate) const fn new(index: usize, value: i64) -> Self {
        Self { index, value }
    }

    /// The array index this leaf covers.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The current value of the array slot.
    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl InternalNode {
    /// The indices covered by this node.
    pub const fn span(&self) -> IndexSpan {
        self.span
    }

    /// Sum, minimum and maximum of the span.
    pub const fn aggregate(&self) -> Aggregate {
        self.aggregate
    }

    /// Delta not yet pushed into the children. Zero when there is no
    /// deferred work below this node.
    pub const fn pending(&self) -> i64 {
        self.pending
    }

    /// Index of the left child.
    pub const fn left_index(&self) -> NodeIndex {
        self.left
    }

    /// Index of the right child.
    pub const fn right_index(&self) -> NodeIndex {
        self.right
    }
}

impl SegmentNode {
    /// The indices covered by this node.
    pub const fn span(&self) -> IndexSpan {
        match self {
            Self::Leaf(leaf) => IndexSpan::new(leaf.index, leaf.index),
            Self::Internal(internal) => internal.span,
        }
    }

    /// Sum, minimum and maximum of the values covered by this node.
    pub const fn aggregate(&self) -> Aggregate {
        match self {
            Self::Leaf(leaf) => Aggregate::of_value(leaf.value),
            Self::Internal(internal) => internal.aggregate,
        }
    }

    /// Delta not yet pushed into this node's children. Always zero for leaves.
    pub const fn pending(&self) -> i64 {
        match self {
            Self::Leaf(_) => 0,
            Self::Internal(internal) => internal.pending,
        }
    }

    /// Returns true if this is a leaf node (has no children).
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Indices of the left and right children, if this is an internal node.
    pub const fn child_indices(&self) -> Option<(NodeIndex, NodeIndex)> {
        match self {
            Self::Leaf(_) => None,
            Self::Internal(internal) => Some((internal.left, internal.right)),
        }
    }

    /// Add `delta` to every value covered by this node.
    ///
    /// The node's own aggregates change immediately. An internal node also
    /// records the delta as pending, to be pushed into its children when it
    /// is next flushed; a leaf has nowhere to defer to.
    pub(crate) fn absorb(&mut self, delta: i64) {
        match self {
            Self::Leaf(leaf) => leaf.value = leaf.value.wrapping_add(delta),
            Self::Internal(internal) => {
                internal.aggregate = internal.aggregate.shifted(delta, internal.span.len());
                internal.pending = internal.pending.wrapping_add(delta);
            }
        }
    }
}
