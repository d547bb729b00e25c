/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Inclusive index spans covered by tree nodes.

use std::fmt;

/// A contiguous, inclusive span of array indices `[start, end]`.
///
/// Spans are fixed when the tree is built and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexSpan {
    start: usize,
    end: usize,
}

impl IndexSpan {
    /// Create the span `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `start > end`.
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed its end");
        Self { start, end }
    }

    /// First index of the span.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Last index of the span (inclusive).
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of indices covered by the span. Never zero.
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether the span covers a single index.
    pub const fn is_unit(&self) -> bool {
        self.start == self.end
    }

    /// Whether `index` falls within the span.
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Whether the span is entirely within `[left, right]`.
    pub const fn contained_in(&self, left: usize, right: usize) -> bool {
        left <= self.start && self.end <= right
    }

    /// Whether the span shares at least one index with `[left, right]`.
    pub const fn overlaps(&self, left: usize, right: usize) -> bool {
        self.start <= right && left <= self.end
    }

    /// Split the span at its midpoint into a left and a right half.
    ///
    /// The left half receives the extra index when the length is odd.
    /// Must not be called on a unit span.
    pub const fn halves(&self) -> (Self, Self) {
        let mid = self.start + (self.end - self.start) / 2;
        (Self::new(self.start, mid), Self::new(mid + 1, self.end))
    }
}

impl fmt::Display for IndexSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.start, self.end)
    }
}
