/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for SegmentTree construction.

use segment_tree::{Aggregate, SegmentTree, SegmentTreeError};

#[test]
fn test_build_rejects_empty_input() {
    assert_eq!(
        SegmentTree::build(&[]).unwrap_err(),
        SegmentTreeError::EmptyInput
    );
    assert!(SegmentTree::try_from(Vec::new()).is_err());
}

#[test]
fn test_empty_tree() {
    let tree = SegmentTree::empty();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.num_nodes(), 0);
    assert_eq!(tree.height(), 0);
    assert!(tree.root().is_none());
    tree.check_tree_invariants();
}

#[test]
fn test_single_element() {
    let mut tree = SegmentTree::build(&[5]).unwrap();
    assert_eq!(tree.num_nodes(), 1);
    assert!(tree.root().unwrap().is_leaf());
    assert_eq!(tree.range_sum(0, 0), Ok(5));
    assert_eq!(tree.range_min(0, 0), Ok(5));
    assert_eq!(tree.range_max(0, 0), Ok(5));

    tree.update(0, 10).unwrap();
    assert_eq!(tree.range_sum(0, 0), Ok(10));
}

#[test]
fn test_root_aggregates_whole_array() {
    let values = [7, -2, 19, 0, 3, 3, -11, 8];
    let tree = SegmentTree::try_from(&values[..]).unwrap();
    let expected: Aggregate = values.iter().copied().collect();
    assert_eq!(tree.root().unwrap().aggregate(), expected);
    assert_eq!(tree.root().unwrap().pending(), 0);
    tree.check_tree_invariants();
}

#[test]
fn test_memory_usage_covers_all_nodes() {
    let small = SegmentTree::build(&[1; 4]).unwrap();
    let large = SegmentTree::build(&[1; 4096]).unwrap();
    assert!(small.mem_usage() > std::mem::size_of::<SegmentTree>());
    assert!(large.mem_usage() > small.mem_usage());
}
