/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for segment tree nodes.
//!
//! The shape of a segment tree is fixed once it is built, so nodes are
//! appended to a single `Vec` and never removed. Children are referenced by
//! [`NodeIndex`] instead of `Box<SegmentNode>`, which keeps the whole tree in
//! one allocation.

use std::ops::{Index, IndexMut};

use crate::SegmentNode;

/// Index into the node arena.
///
/// A lightweight handle, only meaningful for the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Position of the node in the arena.
    pub const fn position(self) -> usize {
        self.0 as usize
    }
}

/// Append-only arena of [`SegmentNode`]s.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<SegmentNode>,
}

impl NodeArena {
    /// Create an arena able to hold `capacity` nodes without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of nodes stored in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Append a node to the arena, returning its index.
    ///
    /// # Panics
    ///
    /// Panics if the arena grows beyond `u32::MAX` nodes.
    pub fn insert(&mut self, node: SegmentNode) -> NodeIndex {
        let position = u32::try_from(self.nodes.len())
            .expect("segment tree arena cannot hold more than u32::MAX nodes");
        self.nodes.push(node);
        NodeIndex(position)
    }

    /// Iterate over all nodes in insertion order.
    ///
    /// Yields `(NodeIndex, &SegmentNode)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &SegmentNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (NodeIndex(position as u32), node))
    }

    /// Get the memory usage of the arena, in bytes.
    pub fn mem_usage(&self) -> usize {
        self.nodes.capacity() * std::mem::size_of::<SegmentNode>()
    }
}

impl Index<NodeIndex> for NodeArena {
    type Output = SegmentNode;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        &self.nodes[idx.position()]
    }
}

impl IndexMut<NodeIndex> for NodeArena {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[idx.position()]
    }
}
