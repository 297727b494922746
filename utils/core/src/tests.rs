// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

#[allow(unused_imports)]
use crate::iterators::*;

// ITERATOR MACRO TESTS
// ================================================================================================

#[test]
fn iter_preserves_order() {
    let values: Vec<u64> = (0..64).collect();
    let squares: Vec<u64> = crate::iter!(values).map(|v| v * v).collect();
    assert_eq!(values.len(), squares.len());
    for (i, square) in squares.iter().enumerate() {
        assert_eq!((i * i) as u64, *square);
    }
}

#[test]
fn iter_sum() {
    let values: Vec<u64> = (1..=10).collect();
    let sum: u64 = crate::iter!(values).sum();
    assert_eq!(55, sum);
}

#[test]
fn iter_enumerate_collects_results() {
    let values = vec![2u64, 4, 0, 8];
    let result: Result<Vec<u64>, usize> = crate::iter!(values)
        .enumerate()
        .map(|(i, &v)| if v == 0 { Err(i) } else { Ok(100 / v) })
        .collect();
    assert_eq!(Err(2), result);
}
