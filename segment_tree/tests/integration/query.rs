/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for the read path.

use segment_tree::{Aggregate, SegmentTree, SegmentTreeError};

#[test]
fn test_queries_on_odd_length_array() {
    let mut tree = SegmentTree::build(&[1, 3, 5, 7, 9]).unwrap();
    assert_eq!(tree.range_sum(1, 3), Ok(15));
    assert_eq!(tree.range_min(1, 3), Ok(3));
    assert_eq!(tree.range_max(1, 3), Ok(7));
}

#[test]
fn test_every_span_matches_a_scan() {
    let values = [4, -1, 0, 12, -7, 3, 3, 9, -2, 5, 1];
    let mut tree = SegmentTree::build(&values).unwrap();
    for left in 0..values.len() {
        for right in left..values.len() {
            let expected: Aggregate = values[left..=right].iter().copied().collect();
            assert_eq!(
                tree.range_aggregate(left, right),
                Ok(expected),
                "span [{left}, {right}]"
            );
        }
    }
}

#[test]
fn test_out_of_range_queries() {
    let mut tree = SegmentTree::build(&[1, 2, 3, 4]).unwrap();
    let err = SegmentTreeError::OutOfRange {
        start: 2,
        end: 4,
        len: 4,
    };
    assert_eq!(tree.range_sum(2, 4), Err(err));
    assert_eq!(tree.range_min(2, 4), Err(err));
    assert_eq!(tree.range_max(2, 4), Err(err));
    assert!(tree.range_sum(3, 2).is_err());
    assert!(tree.range_aggregate(usize::MAX, usize::MAX).is_err());
}

#[test]
fn test_out_of_range_error_message() {
    let mut tree = SegmentTree::build(&[1, 2]).unwrap();
    let err = tree.range_sum(1, 2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "span [1, 2] is out of range for an array of length 2"
    );
}

#[test]
fn test_empty_tree_queries_return_neutral_values() {
    let mut tree = SegmentTree::empty();
    assert_eq!(tree.range_sum(0, 10), Ok(0));
    assert_eq!(tree.range_min(0, 10), Ok(i64::MAX));
    assert_eq!(tree.range_max(0, 10), Ok(i64::MIN));
    assert_eq!(tree.range_aggregate(4, 2), Ok(Aggregate::IDENTITY));
}
