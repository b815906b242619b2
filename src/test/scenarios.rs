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

//! Concrete end-to-end scenarios S1-S6 from the top-level design document.

use pretty_assertions::assert_eq;
use test_log::test;

use crate::error::LemInError;
use crate::simulator::format_turns;
use crate::test::{run, run_with_paths};

#[test]
fn s1_single_linear_path() {
    let input = "3\n##start\nA 0 0\nB 1 0\n##end\nC 2 0\nA-B\nB-C\n";
    let turns = run(input).unwrap();
    assert_eq!(
        format_turns(&turns),
        vec!["L1-B", "L2-B L1-C", "L3-B L2-C", "L3-C"]
    );
}

#[test]
fn s2_two_disjoint_equal_paths() {
    let input = "4\n##start\nS 0 0\na 1 0\nb 2 0\nc 1 1\nd 2 1\n##end\nE 3 0\n\
                 S-a\na-b\nb-E\nS-c\nc-d\nd-E\n";
    let turns = run(input).unwrap();
    assert_eq!(turns.len(), 4);
}

#[test]
fn s3_unequal_path_lengths_favor_the_shorter_one() {
    let input = "3\n##start\nS 0 0\na 1 0\nb 1 1\nc 2 1\n##end\nE 3 0\n\
                 S-a\na-E\nS-b\nb-c\nc-E\n";
    let (paths, assignment, turns) = run_with_paths(input).unwrap();
    assert_eq!(paths.len(), 2);
    assert_eq!(
        crate::render::expected_makespan(&paths, &assignment),
        3
    );
    assert_eq!(turns.len(), 3);
}

#[test]
fn s4_direct_tunnel_only_one_ant_per_turn() {
    let input = "3\n##start\nS 0 0\n##end\nE 1 0\nS-E\n";
    let turns = run(input).unwrap();
    assert_eq!(turns.len(), 3);
    for turn in &turns {
        assert_eq!(turn.len(), 1);
    }
}

#[test]
fn s5_no_path_reports_no_path_error() {
    let input = "3\n##start\nS 0 0\n##end\nE 1 0\n";
    assert!(matches!(run(input), Err(LemInError::NoPath)));
}

#[test]
fn s6_duplicate_room_coordinates_is_invalid_data() {
    let input = "1\n##start\nS 0 0\n##end\nE 0 0\nS-E\n";
    let err = run(input).unwrap_err();
    assert_eq!(err.surfaced_kind(), "invalid data format");
    assert!(matches!(err, LemInError::Parse(_)));
}
