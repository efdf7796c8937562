//! Index-sequence helpers: seeded shuffling, permutation checks and
//! sort-order bookkeeping over dense integer ranges.

use std::cmp::Ordering;

use crate::error::{Result, RoutingError};
use crate::util::random::RandomSource;

/// `0..n` in ascending order.
pub fn identity_sequence(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// `size` copies of `value`.
pub fn constant(size: usize, value: i32) -> Vec<i32> {
    vec![value; size]
}

/// `start..end`; empty when `start >= end`.
pub fn range(start: i32, end: i32) -> Vec<i32> {
    (start..end).collect()
}

/// `start..=end`; empty when `start > end`.
pub fn range_closed(start: i32, end: i32) -> Vec<i32> {
    (start..=end).collect()
}

/// Reverses `list` in place and hands it back.
pub fn reverse<T>(list: &mut Vec<T>) -> &mut Vec<T> {
    list.reverse();
    list
}

/// Partial shuffle: each slot in the lower half is swapped with a random slot
/// of the upper half.
///
/// With `half = len / 2`, exactly `half` draws of `next_int(half)` are made.
/// This is not a Fisher-Yates shuffle; consumers rely on the draw count.
pub fn shuffle<'a, T>(list: &'a mut Vec<T>, random: &mut dyn RandomSource) -> &'a mut Vec<T> {
    let half = list.len() / 2;
    for i in 0..half {
        let j = half + random.next_int(half);
        list.swap(i, j);
    }
    list
}

/// A shuffled `0..n`.
pub fn permutation(n: usize, random: &mut dyn RandomSource) -> Vec<usize> {
    let mut list = identity_sequence(n);
    shuffle(&mut list, random);
    list
}

/// True when `list` holds every value of `0..len` exactly once. Works for
/// signed input too; negative values never match.
pub fn is_permutation<T>(list: &[T]) -> bool
where
    T: Copy + TryInto<usize>,
{
    let mut seen = vec![false; list.len()];
    for &value in list {
        match value.try_into() {
            Ok(idx) if idx < list.len() && !seen[idx] => seen[idx] = true,
            _ => return false,
        }
    }
    true
}

/// Compacts runs of equal neighbours inside `list[..end]` down to their first
/// element and returns the new logical length. Slots past the returned length
/// keep whatever they held.
pub fn remove_consecutive_duplicates(list: &mut [i32], end: i64) -> Result<usize> {
    if end < 0 {
        return Err(RoutingError::invalid(format!(
            "end must be >= 0, got {}",
            end
        )));
    }
    let end = end as usize;
    if end > list.len() {
        return Err(RoutingError::out_of_bounds(end, list.len()));
    }
    if end == 0 {
        return Ok(0);
    }

    let mut write = 1;
    for read in 1..end {
        if list[read] != list[write - 1] {
            list[write] = list[read];
            write += 1;
        }
    }
    Ok(write)
}

/// Copy of `list` with consecutive duplicates removed.
pub fn without_consecutive_duplicates(list: &[i32]) -> Vec<i32> {
    let mut result = list.to_vec();
    result.dedup();
    result
}

/// Maps every element through `map`, i.e. `result[i] = map[list[i]]`.
pub fn transform(list: &[i32], map: &[i32]) -> Result<Vec<i32>> {
    list.iter()
        .map(|&value| {
            usize::try_from(value)
                .ok()
                .and_then(|idx| map.get(idx).copied())
                .ok_or_else(|| RoutingError::out_of_bounds(value, map.len()))
        })
        .collect()
}

/// Stable merge of two ascending arrays. Duplicates are kept.
pub fn merge_sorted_ascending(a: &[i32], b: &[i32]) -> Vec<i32> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if b[j] < a[i] {
            result.push(b[j]);
            j += 1;
        } else {
            result.push(a[i]);
            i += 1;
        }
    }
    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);
    result
}

/// Ascending union of two ascending arrays with repeated values collapsed.
pub fn merge_sorted_unique(a: &[i32], b: &[i32]) -> Vec<i32> {
    let mut merged = merge_sorted_ascending(a, b);
    merged.dedup();
    merged
}

/// `result[i] = list[order[i]]`.
pub fn apply_order(list: &[i32], order: &[usize]) -> Result<Vec<i32>> {
    if order.len() > list.len() {
        return Err(RoutingError::invalid(format!(
            "order array ({}) must not be longer than the array it is applied to ({})",
            order.len(),
            list.len()
        )));
    }
    order
        .iter()
        .map(|&idx| {
            list.get(idx)
                .copied()
                .ok_or_else(|| RoutingError::out_of_bounds(idx, list.len()))
        })
        .collect()
}

/// Indices `0..length` sorted by `(a[i], b[i])`. Ties keep index order.
pub fn calc_sort_order(a: &[i32], b: &[i32], length: usize) -> Result<Vec<usize>> {
    if a.len() < length || b.len() < length {
        return Err(RoutingError::invalid(format!(
            "arrays of length {} and {} must not be shorter than given length {}",
            a.len(),
            b.len(),
            length
        )));
    }
    let mut order = identity_sequence(length);
    order.sort_by(|&x, &y| match a[x].cmp(&a[y]) {
        Ordering::Equal => b[x].cmp(&b[y]),
        other => other,
    });
    Ok(order)
}

/// Inverse permutation: `result[list[i]] = i`.
///
/// Every element has to be a valid index into `list` itself.
pub fn invert(list: &[i32]) -> Result<Vec<i32>> {
    let mut result = vec![0; list.len()];
    for (i, &value) in list.iter().enumerate() {
        let target = usize::try_from(value)
            .ok()
            .filter(|&idx| idx < list.len())
            .ok_or_else(|| RoutingError::out_of_bounds(value, list.len()))?;
        result[target] = i as i32;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::random::SeededRandom;
    use std::collections::VecDeque;

    /// Replays scripted draws and records every bound it was asked for.
    struct ScriptedRandom {
        draws: VecDeque<usize>,
        bounds: Vec<usize>,
    }

    impl ScriptedRandom {
        fn new(draws: &[usize]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
                bounds: Vec::new(),
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn next_int(&mut self, bound: usize) -> usize {
            self.bounds.push(bound);
            self.draws.pop_front().unwrap_or(0)
        }

        fn next_double(&mut self) -> f64 {
            0.0
        }

        fn next_bool(&mut self) -> bool {
            false
        }
    }

    #[test]
    fn test_identity_sequence() {
        assert_eq!(identity_sequence(4), vec![0, 1, 2, 3]);
        assert!(identity_sequence(0).is_empty());
    }

    #[test]
    fn test_shuffle_with_scripted_draws() {
        let mut list = identity_sequence(10);
        let mut rnd = ScriptedRandom::new(&[2, 1, 3, 0, 2]);

        let result = shuffle(&mut list, &mut rnd);

        assert_eq!(*result, vec![7, 6, 8, 5, 0, 3, 1, 4, 2, 9]);
        assert_eq!(rnd.bounds, vec![5; 5]);
    }

    #[test]
    fn test_shuffle_returns_same_list() {
        let mut list = identity_sequence(6);
        let ptr = list.as_ptr();
        let mut rnd = SeededRandom::new(1);
        let result = shuffle(&mut list, &mut rnd);
        assert_eq!(result.as_ptr(), ptr);
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn test_shuffle_draw_count_matches_half_size() {
        for size in 0..12 {
            let mut list = identity_sequence(size);
            let mut rnd = ScriptedRandom::new(&[]);
            shuffle(&mut list, &mut rnd);
            assert_eq!(rnd.bounds.len(), size / 2, "size {}", size);
            assert!(rnd.bounds.iter().all(|&b| b == size / 2));
        }
    }

    #[test]
    fn test_shuffle_keeps_arbitrary_values() {
        let original = vec![-5, 17, 3, 99, -100, 42, 0];
        let mut list = original.clone();
        shuffle(&mut list, &mut SeededRandom::new(12345));

        let mut sorted_before = original.clone();
        sorted_before.sort();
        let mut sorted_after = list.clone();
        sorted_after.sort();
        assert_eq!(sorted_before, sorted_after);
        // upper half never drives the loop, so the odd tail slot is untouched
        assert_eq!(list[6], 0);
    }

    #[test]
    fn test_permutation_is_valid() {
        let mut rnd = ScriptedRandom::new(&[1, 0, 2, 1, 0]);
        let result = permutation(10, &mut rnd);
        assert_eq!(result.len(), 10);
        assert!(is_permutation(&result));
        assert!(!rnd.bounds.is_empty());

        for n in 1..50 {
            let p = permutation(n, &mut SeededRandom::new(n as u64));
            assert_eq!(p.len(), n);
            assert!(is_permutation(&p), "n = {}", n);
        }
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation::<i64>(&[]));
        assert!(is_permutation(&[2, 0, 1]));
        assert!(is_permutation(&[1usize, 0]));
        assert!(is_permutation(&vec![3i64, 1, 0, 2]));
        assert!(!is_permutation(&[-1, 0, 1]));
        assert!(!is_permutation(&[0, 1, 5]));
        assert!(!is_permutation(&[0, 1, 1]));
    }

    #[test]
    fn test_remove_consecutive_duplicates() {
        let mut all_same = [5, 5, 5, 5, 5];
        assert_eq!(remove_consecutive_duplicates(&mut all_same, 5).unwrap(), 1);
        assert_eq!(all_same[0], 5);

        let mut mixed = [1, 1, 2, 3, 3, 3, 1];
        assert_eq!(remove_consecutive_duplicates(&mut mixed, 7).unwrap(), 4);
        assert_eq!(&mixed[..4], &[1, 2, 3, 1]);

        let mut empty: [i32; 0] = [];
        assert_eq!(remove_consecutive_duplicates(&mut empty, 0).unwrap(), 0);
    }

    #[test]
    fn test_remove_consecutive_duplicates_only_touches_prefix() {
        let mut list = [0, 1, 2, 3, 4, 7, 7, 7];
        assert_eq!(remove_consecutive_duplicates(&mut list, 5).unwrap(), 5);
        assert_eq!(list, [0, 1, 2, 3, 4, 7, 7, 7]);
    }

    #[test]
    fn test_remove_consecutive_duplicates_rejects_negative_end() {
        let mut list = [1, 2, 3];
        assert!(matches!(
            remove_consecutive_duplicates(&mut list, -1),
            Err(RoutingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_remove_consecutive_duplicates_end_past_array() {
        let mut list = [1, 2, 3];
        assert_eq!(
            remove_consecutive_duplicates(&mut list, 4),
            Err(RoutingError::OutOfBounds { index: 4, len: 3 })
        );
        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    fn test_without_consecutive_duplicates() {
        assert_eq!(
            without_consecutive_duplicates(&[-3, -3, -1, 0, 0, 2, 2, 2]),
            vec![-3, -1, 0, 2]
        );
    }

    #[test]
    fn test_small_builders() {
        assert!(constant(0, 5).is_empty());
        assert_eq!(constant(3, 5), vec![5, 5, 5]);
        assert!(range(5, 5).is_empty());
        assert_eq!(range(2, 5), vec![2, 3, 4]);
        assert_eq!(range_closed(5, 5), vec![5]);

        let mut single = vec![42];
        assert_eq!(*reverse(&mut single), vec![42]);
        let mut list = vec![1, 2, 3];
        assert_eq!(*reverse(&mut list), vec![3, 2, 1]);
    }

    #[test]
    fn test_transform() {
        let map = [10, 11, 12, 13, 14];
        assert_eq!(transform(&[4, 0, 2], &map).unwrap(), vec![14, 10, 12]);
        assert_eq!(
            transform(&[1, 2, 3, 4, 9, 3], &map),
            Err(RoutingError::OutOfBounds { index: 9, len: 5 })
        );
        assert!(transform(&[-1], &map).is_err());
    }

    #[test]
    fn test_merge_sorted_ascending() {
        assert_eq!(merge_sorted_ascending(&[], &[1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(merge_sorted_ascending(&[1, 2, 3], &[]), vec![1, 2, 3]);
        assert_eq!(
            merge_sorted_ascending(&[1, 4, 6], &[2, 4, 5, 9]),
            vec![1, 2, 4, 4, 5, 6, 9]
        );
        assert!(merge_sorted_ascending(&[], &[]).is_empty());
    }

    #[test]
    fn test_merge_sorted_unique() {
        let a = [-2, -1, 0, 1, 2];
        assert_eq!(merge_sorted_unique(&a, &a), a.to_vec());
        assert_eq!(merge_sorted_unique(&[1, 4], &[2, 4, 5]), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_apply_order() {
        assert_eq!(apply_order(&[3, 4, 5], &[2, 0, 1]).unwrap(), vec![5, 3, 4]);
        assert_eq!(apply_order(&[3, 4, 5], &[1]).unwrap(), vec![4]);
        assert!(matches!(
            apply_order(&[1, 2], &[0, 1, 2]),
            Err(RoutingError::InvalidArgument(_))
        ));
        assert!(matches!(
            apply_order(&[1, 2], &[0, 7]),
            Err(RoutingError::OutOfBounds { index: 7, len: 2 })
        ));
    }

    #[test]
    fn test_calc_sort_order() {
        let a = [3, 1, 3, 0];
        let b = [2, 5, 1, 9];
        assert_eq!(calc_sort_order(&a, &b, 4).unwrap(), vec![3, 1, 2, 0]);
        assert_eq!(calc_sort_order(&a, &b, 2).unwrap(), vec![1, 0]);

        assert!(matches!(
            calc_sort_order(&[1, 2, 3], &[4, 5], 3),
            Err(RoutingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert(&[2, 0, 1]).unwrap(), vec![1, 2, 0]);
        assert!(invert(&[]).unwrap().is_empty());
        assert_eq!(
            invert(&[0, 1, 5]),
            Err(RoutingError::OutOfBounds { index: 5, len: 3 })
        );
        assert!(matches!(
            invert(&[0, -1, 1]),
            Err(RoutingError::OutOfBounds { .. })
        ));
    }
}
