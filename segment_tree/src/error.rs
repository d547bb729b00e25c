/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use thiserror::Error;

/// Errors returned by [`SegmentTree`](crate::SegmentTree) operations.
///
/// Bounds are validated before any node is visited, so a failed call
/// never leaves the tree partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SegmentTreeError {
    /// A tree cannot be built from an empty array.
    ///
    /// Use [`SegmentTree::empty`](crate::SegmentTree::empty) when the empty
    /// array is an expected input.
    #[error("cannot build a segment tree from an empty array")]
    EmptyInput,
    /// The requested span `[start, end]` is reversed or reaches past the
    /// last index of the array.
    #[error("span [{start}, {end}] is out of range for an array of length {len}")]
    OutOfRange {
        /// First requested index.
        start: usize,
        /// Last requested index (inclusive).
        end: usize,
        /// Length of the array backing the tree.
        len: usize,
    },
}
