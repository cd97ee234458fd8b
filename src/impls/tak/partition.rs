//
// This file is part of tak_ai.
//
// tak_ai is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tak_ai is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tak_ai. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2016-2017 Chris Foster
//

//! Ways of dropping a carried stack along a slide.
//!
//! A partition of `n` here is an ordered sequence of positive parts summing to
//! `n` (a composition).  The results are cached for the life of the process and
//! shared between searches.

use std::sync::{Arc, PoisonError, RwLock};

use fnv::FnvHashMap;

/// The most parts a partition can have: a slide covers at most the width of the
/// largest board, origin included.
pub const MAX_PARTS: usize = 8;

type Partitions = Arc<Vec<Vec<u8>>>;

lazy_static! {
    static ref PARTITIONS: RwLock<FnvHashMap<usize, Partitions>> = RwLock::new(FnvHashMap::default());
    static ref LEADING_ZERO_PARTITIONS: RwLock<FnvHashMap<usize, Partitions>> = RwLock::new(FnvHashMap::default());
}

/// Returns every ordered sequence of at most `MAX_PARTS` positive integers that
/// sums to `n`, in lexicographic order.
pub fn partitions(n: usize) -> Partitions {
    if let Some(cached) = lookup(&PARTITIONS, n) {
        return cached;
    }

    let mut result = Vec::new();

    for first in 1..n + 1 {
        if first == n {
            result.push(vec![n as u8]);
            continue;
        }

        for rest in partitions(n - first).iter() {
            if rest.len() < MAX_PARTS {
                let mut partition = Vec::with_capacity(rest.len() + 1);
                partition.push(first as u8);
                partition.extend_from_slice(rest);
                result.push(partition);
            }
        }
    }

    store(&PARTITIONS, n, result)
}

/// Returns `partitions(n)` followed by each of its sequences prefixed with a 0.
pub fn partitions_with_leading_zero(n: usize) -> Partitions {
    if let Some(cached) = lookup(&LEADING_ZERO_PARTITIONS, n) {
        return cached;
    }

    let plain = partitions(n);
    let mut result = Vec::with_capacity(plain.len() * 2);
    result.extend(plain.iter().cloned());

    for partition in plain.iter() {
        let mut prefixed = Vec::with_capacity(partition.len() + 1);
        prefixed.push(0);
        prefixed.extend_from_slice(partition);
        result.push(prefixed);
    }

    store(&LEADING_ZERO_PARTITIONS, n, result)
}

fn lookup(cache: &RwLock<FnvHashMap<usize, Partitions>>, n: usize) -> Option<Partitions> {
    cache.read().unwrap_or_else(PoisonError::into_inner).get(&n).cloned()
}

fn store(cache: &RwLock<FnvHashMap<usize, Partitions>>, n: usize, partitions: Vec<Vec<u8>>) -> Partitions {
    let mut cache = cache.write().unwrap_or_else(PoisonError::into_inner);
    // Another thread may have computed the same entry; entries never change once stored
    cache.entry(n).or_insert_with(|| Arc::new(partitions)).clone()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_small_partitions() {
        assert!(partitions(0).is_empty());
        assert_eq!(*partitions(1), vec![vec![1]]);
        assert_eq!(*partitions(3), vec![
            vec![1, 1, 1],
            vec![1, 2],
            vec![2, 1],
            vec![3],
        ]);
    }

    #[test]
    fn test_partition_counts() {
        // Up to MAX_PARTS, no composition is too long to keep
        for n in 1..MAX_PARTS + 1 {
            assert_eq!(partitions(n).len(), 1 << (n - 1));
        }

        // Compositions of 9 minus the single one with 9 parts
        assert_eq!(partitions(9).len(), (1 << 8) - 1);
        assert!(partitions(12).iter().all(|partition| partition.len() <= MAX_PARTS));
    }

    #[test]
    fn test_partitions_sum() {
        for n in 1..14 {
            for partition in partitions(n).iter() {
                assert_eq!(partition.iter().map(|&part| part as usize).sum::<usize>(), n);
                assert!(partition.iter().all(|&part| part > 0));
            }
        }
    }

    #[test]
    fn test_leading_zero() {
        assert_eq!(*partitions_with_leading_zero(2), vec![
            vec![1, 1],
            vec![2],
            vec![0, 1, 1],
            vec![0, 2],
        ]);

        let plain = partitions(5);
        let with_zero = partitions_with_leading_zero(5);
        assert_eq!(with_zero.len(), plain.len() * 2);
        assert_eq!(&with_zero[..plain.len()], &plain[..]);
    }

    #[test]
    fn test_cache_shares_results() {
        let first = partitions(6);
        let second = partitions(6);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
