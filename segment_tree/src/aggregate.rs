/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Sum / minimum / maximum of a span of values.

/// The aggregates kept for every span of the tree.
///
/// Aggregates form a monoid under [`Aggregate::combine`], with
/// [`Aggregate::IDENTITY`] as the neutral element: a sum of `0`, a minimum
/// of `i64::MAX` and a maximum of `i64::MIN`.
///
/// Arithmetic wraps on overflow, so sums are exact modulo 2^64. The minimum
/// and maximum of a span are only meaningful while none of its values has
/// wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aggregate {
    /// Sum of the values in the span.
    pub sum: i64,
    /// Smallest value in the span.
    pub min: i64,
    /// Largest value in the span.
    pub max: i64,
}

impl Aggregate {
    /// The neutral aggregate, returned for spans that contain no values.
    pub const IDENTITY: Self = Self {
        sum: 0,
        min: i64::MAX,
        max: i64::MIN,
    };

    /// The aggregate of a span holding a single value.
    pub const fn of_value(value: i64) -> Self {
        Self {
            sum: value,
            min: value,
            max: value,
        }
    }

    /// Merge the aggregates of two adjacent spans.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            sum: self.sum.wrapping_add(other.sum),
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// The aggregate after adding `delta` to each of the `len` values of the span.
    #[must_use]
    pub const fn shifted(self, delta: i64, len: usize) -> Self {
        Self {
            sum: self.sum.wrapping_add(delta.wrapping_mul(len as i64)),
            min: self.min.wrapping_add(delta),
            max: self.max.wrapping_add(delta),
        }
    }
}

impl FromIterator<i64> for Aggregate {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        iter.into_iter()
            .map(Self::of_value)
            .fold(Self::IDENTITY, Self::combine)
    }
}
