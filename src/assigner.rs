// lem-in: ant colony routing simulator
// Copyright (C) 2026 The lem-in Contributors
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Greedy ant-to-path assignment.
//!
//! The finish time of the last ant on path `i` is
//! `edge_count(P_i) + c_i - 1`: the first ant needs `edge_count` turns, and
//! every additional ant on the same path delays one further turn behind it.
//! Minimizing the maximum finish time over all paths is achieved by always
//! adding the next ant to the path with the smallest *projected* finish
//! time, `edge_count(P_i) + c_i`.

use log::debug;

use crate::pathfinder::{edge_count, Path};

/// The per-path ant counts, in the same order as the input paths.
pub type Assignment = Vec<u32>;

/// Assign `ant_count` ants across `paths`, approximately minimizing the
/// makespan `max_i (edge_count(P_i) + c_i - 1)`.
///
/// `paths` must already be sorted by edge count ascending (the caller's
/// responsibility, per the path finder's contract); ties among
/// equally-loaded paths are broken by lowest index, i.e. the shorter path.
pub fn assign(ant_count: u32, paths: &[Path]) -> Assignment {
    let mut counts = vec![0u32; paths.len()];
    if paths.is_empty() {
        return counts;
    }

    let base_cost: Vec<u32> = paths.iter().map(|p| edge_count(p) as u32).collect();

    for _ in 0..ant_count {
        let (best, _) = counts
            .iter()
            .zip(base_cost.iter())
            .enumerate()
            .map(|(i, (&c, &base))| (i, base + c))
            .min_by_key(|&(i, projected)| (projected, i))
            .expect("paths is non-empty");
        counts[best] += 1;
    }

    debug!("assigned {ant_count} ants across {} paths: {counts:?}", paths.len());
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of_len(n: usize) -> Path {
        (0..n).map(|i| i.to_string()).collect()
    }

    #[test]
    fn empty_population() {
        let paths = vec![path_of_len(3)];
        assert_eq!(assign(0, &paths), vec![0]);
    }

    #[test]
    fn single_path_gets_everything() {
        let paths = vec![path_of_len(4)];
        assert_eq!(assign(7, &paths), vec![7]);
    }

    #[test]
    fn two_equal_paths_split_evenly() {
        // edge_count 3 each (S2: length 4 rooms).
        let paths = vec![path_of_len(4), path_of_len(4)];
        assert_eq!(assign(4, &paths), vec![2, 2]);
    }

    #[test]
    fn differing_lengths_favor_shorter_path() {
        // S3: edge_count 2 and edge_count 3, 3 ants.
        let paths = vec![path_of_len(3), path_of_len(4)];
        assert_eq!(assign(3, &paths), vec![2, 1]);
    }
}
