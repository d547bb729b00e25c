/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! SegmentTree - A range-aggregate segment tree with lazy propagation.
//!
//! The tree is built once over a fixed-size `i64` array. Every node covers a
//! contiguous, inclusive index span and keeps the sum, minimum and maximum of
//! the values in that span. Range additions are deferred: a node entirely
//! covered by an update absorbs the delta into its own aggregates and records
//! it as `pending`, to be pushed one level down the next time the node is
//! visited.
//!
//! # Overview
//!
//! - Construction in O(n), one leaf per array slot.
//! - Range sum / min / max queries in O(log n).
//! - Point assignment and range addition in O(log n).
//!
//! # Example
//!
//! ```
//! use segment_tree::SegmentTree;
//!
//! let mut tree = SegmentTree::build(&[1, 2, 3, 4, 5]).unwrap();
//!
//! tree.range_add(1, 3, 5).unwrap();
//! assert_eq!(tree.range_sum(1, 3).unwrap(), 24);
//! assert_eq!(tree.range_sum(0, 4).unwrap(), 30);
//!
//! tree.update(0, -7).unwrap();
//! assert_eq!(tree.range_min(0, 4).unwrap(), -7);
//! assert_eq!(tree.range_max(0, 4).unwrap(), 9);
//! ```

mod aggregate;
mod arena;
mod debug;
mod error;
mod iter;
mod node;
mod span;
mod tree;

pub use aggregate::Aggregate;
pub use arena::NodeIndex;
pub use debug::{NodeSnapshot, TreeSnapshot};
pub use error::SegmentTreeError;
pub use iter::PreOrderDfsIterator;
pub use node::{InternalNode, LeafNode, SegmentNode};
pub use span::IndexSpan;
pub use tree::SegmentTree;
