/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Shared test helpers for the segment tree integration tests.

use proptest::prelude::*;
use segment_tree::{SegmentTree, SegmentTreeError};

/// A single operation against the tree, as generated by `proptest`.
#[derive(Debug, Clone, Copy)]
pub enum Op {
    Sum(usize, usize),
    Min(usize, usize),
    Max(usize, usize),
    Set(usize, i64),
    Add(usize, usize, i64),
}

/// The plain array the tree is checked against.
///
/// Every operation is answered by scanning the slice, so the model is
/// trivially correct.
#[derive(Debug, Clone)]
pub struct Model {
    pub values: Vec<i64>,
}

impl Model {
    pub fn new(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    pub fn sum(&self, left: usize, right: usize) -> i64 {
        self.values[left..=right].iter().sum()
    }

    pub fn min(&self, left: usize, right: usize) -> i64 {
        self.values[left..=right].iter().copied().min().unwrap()
    }

    pub fn max(&self, left: usize, right: usize) -> i64 {
        self.values[left..=right].iter().copied().max().unwrap()
    }

    /// Apply `op`, returning the query answer if it is a query.
    pub fn apply(&mut self, op: Op) -> Option<i64> {
        match op {
            Op::Sum(l, r) => Some(self.sum(l, r)),
            Op::Min(l, r) => Some(self.min(l, r)),
            Op::Max(l, r) => Some(self.max(l, r)),
            Op::Set(i, v) => {
                self.values[i] = v;
                None
            }
            Op::Add(l, r, d) => {
                self.values[l..=r].iter_mut().for_each(|value| *value += d);
                None
            }
        }
    }
}

/// Apply `op` to `tree`, returning the query answer if it is a query.
pub fn apply(tree: &mut SegmentTree, op: Op) -> Result<Option<i64>, SegmentTreeError> {
    Ok(match op {
        Op::Sum(l, r) => Some(tree.range_sum(l, r)?),
        Op::Min(l, r) => Some(tree.range_min(l, r)?),
        Op::Max(l, r) => Some(tree.range_max(l, r)?),
        Op::Set(i, v) => {
            tree.update(i, v)?;
            None
        }
        Op::Add(l, r, d) => {
            tree.range_add(l, r, d)?;
            None
        }
    })
}

/// Read every slot of the tree through single-index sum queries.
pub fn read_all(tree: &mut SegmentTree) -> Vec<i64> {
    (0..tree.len())
        .map(|i| tree.range_sum(i, i).unwrap())
        .collect()
}

/// A valid, non-reversed span of an array of length `len`.
pub fn span(len: usize) -> impl Strategy<Value = (usize, usize)> {
    (0..len, 0..len).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

/// Any operation that is valid on an array of length `len`.
pub fn op(len: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        span(len).prop_map(|(l, r)| Op::Sum(l, r)),
        span(len).prop_map(|(l, r)| Op::Min(l, r)),
        span(len).prop_map(|(l, r)| Op::Max(l, r)),
        (0..len, -1_000i64..1_000).prop_map(|(i, v)| Op::Set(i, v)),
        (span(len), -100i64..100).prop_map(|((l, r), d)| Op::Add(l, r, d)),
    ]
}

/// Small arrays of small values, so that sums stay far from `i64` limits.
pub fn arrays() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(-1_000i64..1_000, 1..64)
}

/// An array together with a sequence of operations valid on it.
pub fn values_and_ops() -> impl Strategy<Value = (Vec<i64>, Vec<Op>)> {
    arrays().prop_flat_map(|values| {
        let ops = proptest::collection::vec(op(values.len()), 0..48);
        (Just(values), ops)
    })
}
