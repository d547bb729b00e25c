/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests for the segment tree using `proptest`.

#[cfg(not(miri))]
mod proptests {
    use proptest::prelude::*;
    use segment_tree::SegmentTree;

    use crate::helpers::{Model, Op, apply, arrays, op, read_all, span, values_and_ops};

    proptest::proptest! {
        #[test]
        fn prop_build_matches_whole_array(values in arrays()) {
            let mut tree = SegmentTree::build(&values).unwrap();
            let last = values.len() - 1;

            prop_assert_eq!(tree.range_sum(0, last).unwrap(), values.iter().sum::<i64>());
            prop_assert_eq!(tree.range_min(0, last).unwrap(), *values.iter().min().unwrap());
            prop_assert_eq!(tree.range_max(0, last).unwrap(), *values.iter().max().unwrap());
        }

        #[test]
        fn prop_point_update_is_local(
            (values, index, value) in arrays().prop_flat_map(|values| {
                let len = values.len();
                (Just(values), 0..len, -1_000i64..1_000)
            })
        ) {
            let mut tree = SegmentTree::build(&values).unwrap();
            tree.update(index, value).unwrap();

            let mut expected = values.clone();
            expected[index] = value;
            prop_assert_eq!(read_all(&mut tree), expected);
        }

        #[test]
        fn prop_range_add_is_additive(
            (values, (left, right), delta) in arrays().prop_flat_map(|values| {
                let len = values.len();
                (Just(values), span(len), -100i64..100)
            })
        ) {
            let mut tree = SegmentTree::build(&values).unwrap();
            tree.range_add(left, right, delta).unwrap();

            for (i, (&before, after)) in values.iter().zip(read_all(&mut tree)).enumerate() {
                let expected = if (left..=right).contains(&i) { before + delta } else { before };
                prop_assert_eq!(after, expected, "index {}", i);
            }
        }

        #[test]
        fn prop_range_adds_are_never_double_counted(
            (values, adds, queries) in arrays().prop_flat_map(|values| {
                let len = values.len();
                let adds = proptest::collection::vec((span(len), -100i64..100), 1..16);
                let queries = proptest::collection::vec(op(len), 0..32);
                (Just(values), adds, queries)
            })
        ) {
            let mut tree = SegmentTree::build(&values).unwrap();
            let mut model = Model::new(&values);
            for ((left, right), delta) in adds {
                tree.range_add(left, right, delta).unwrap();
                model.apply(Op::Add(left, right, delta));
            }

            // Only the read operations of the generated sequence are run.
            for query in queries {
                if matches!(query, Op::Sum(..) | Op::Min(..) | Op::Max(..)) {
                    apply(&mut tree, query).unwrap();
                }
            }

            let last = values.len() - 1;
            prop_assert_eq!(tree.range_sum(0, last).unwrap(), model.sum(0, last));
        }

        #[test]
        fn prop_matches_model_and_keeps_invariants((values, ops) in values_and_ops()) {
            let mut tree = SegmentTree::build(&values).unwrap();
            let mut model = Model::new(&values);

            for op in ops {
                prop_assert_eq!(apply(&mut tree, op).unwrap(), model.apply(op), "{:?}", op);
                tree.check_tree_invariants();
            }

            let snapshot = tree.snapshot();
            prop_assert_eq!(snapshot.values().collect::<Vec<_>>(), model.values.clone());
            prop_assert_eq!(tree.to_vec(), model.values);
        }
    }
}
