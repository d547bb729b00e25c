/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for the write path.

use segment_tree::SegmentTree;

use super::helpers::read_all;

#[test]
fn test_point_update() {
    let mut tree = SegmentTree::build(&[2, 4, 6, 8]).unwrap();
    tree.update(2, 10).unwrap();
    assert_eq!(tree.range_sum(0, 3), Ok(24));
    assert_eq!(read_all(&mut tree), vec![2, 4, 10, 8]);
}

#[test]
fn test_range_add() {
    let mut tree = SegmentTree::build(&[1, 2, 3, 4, 5]).unwrap();
    tree.range_add(1, 3, 5).unwrap();
    assert_eq!(tree.range_sum(1, 3), Ok(24));
    assert_eq!(tree.range_sum(0, 4), Ok(30));
    assert_eq!(tree.range_min(0, 4), Ok(1));
    assert_eq!(tree.range_max(0, 4), Ok(10));
}

#[test]
fn test_stacked_range_adds_accumulate() {
    let mut tree = SegmentTree::build(&[0; 8]).unwrap();
    tree.range_add(0, 7, 1).unwrap();
    tree.range_add(0, 3, 2).unwrap();
    tree.range_add(0, 1, 4).unwrap();
    tree.range_add(0, 0, 8).unwrap();
    assert_eq!(read_all(&mut tree), vec![15, 7, 3, 3, 1, 1, 1, 1]);
    tree.check_tree_invariants();
}

#[test]
fn test_point_update_below_pending_delta() {
    let mut tree = SegmentTree::build(&[1, 1, 1, 1]).unwrap();
    tree.range_add(0, 3, 10).unwrap();
    // Overwrites the slot, discarding the delta it had received.
    tree.update(1, 0).unwrap();
    assert_eq!(tree.to_vec(), vec![11, 0, 11, 11]);
    assert_eq!(tree.range_sum(0, 3), Ok(33));
    assert_eq!(tree.range_min(0, 3), Ok(0));
}

#[test]
fn test_negative_and_zero_deltas() {
    let mut tree = SegmentTree::build(&[5, 5, 5]).unwrap();
    tree.range_add(0, 2, 0).unwrap();
    tree.range_add(1, 2, -6).unwrap();
    assert_eq!(tree.to_vec(), vec![5, -1, -1]);
    assert_eq!(tree.range_min(0, 2), Ok(-1));
    assert_eq!(tree.range_max(1, 2), Ok(-1));
}

/// A node that received a delta through a full-overlap addition must not
/// count that delta again when it is later visited through a partial
/// descent and then queried at exactly its own span.
#[test]
fn test_pending_delta_is_not_double_counted() {
    let mut tree = SegmentTree::build(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();

    // [0, 3] is exactly the root's left child.
    tree.range_add(0, 3, 10).unwrap();
    // Partial descent through [0, 3] flushes it.
    assert_eq!(tree.range_sum(1, 2), Ok(25));
    // Query exactly at the node's own span.
    assert_eq!(tree.range_sum(0, 3), Ok(50));
    assert_eq!(tree.range_sum(0, 7), Ok(76));
    assert_eq!(tree.range_min(0, 3), Ok(11));
    assert_eq!(tree.range_max(0, 3), Ok(14));

    // Interleave more queries at every granularity; the total never drifts.
    for i in 0..8 {
        tree.range_sum(i, i).unwrap();
    }
    assert_eq!(tree.range_sum(0, 7), Ok(76));
    tree.check_tree_invariants();
}
