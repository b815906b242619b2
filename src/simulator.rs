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

//! Synchronous, turn-indexed multi-path movement simulation.
//!
//! Every turn, every path is advanced independently (paths are
//! vertex-disjoint, so their moves cannot collide); within a path, ants are
//! processed farthest-advanced first so that a room vacated this turn can be
//! entered this turn, but the resulting moves are emitted least-advanced
//! first, matching the reference transcript format. A turn in which nothing
//! moves closes the simulation.

use std::fmt;

use log::trace;

use crate::assigner::Assignment;
use crate::pathfinder::Path;

/// One atomic move: an ant steps onto a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// The moving ant's stable id.
    pub ant_id: u32,
    /// The room the ant steps onto.
    pub room: String,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}-{}", self.ant_id, self.room)
    }
}

/// All moves made during one turn, in emission order (paths in path-set
/// order; within a path, least-advanced ant first, i.e. injections before
/// in-transit advances).
pub type Turn = Vec<Move>;

/// Per-path simulation state: the path itself, each assigned ant's current
/// position (`None` until injected, else an index into `path`), and the
/// stable ids of those ants.
struct PathState<'p> {
    path: &'p Path,
    positions: Vec<Option<usize>>,
    ant_ids: Vec<u32>,
}

impl<'p> PathState<'p> {
    fn len(&self) -> usize {
        self.path.len()
    }

    fn is_occupied(&self, positions: &[Option<usize>], idx: usize) -> bool {
        let end = self.len() - 1;
        idx != end && positions.iter().any(|&p| p == Some(idx))
    }

    /// Advance this path by one turn, returning the moves made.
    fn step(&mut self) -> Vec<Move> {
        let end = self.len() - 1;
        let mut next_positions = self.positions.clone();
        let mut moves = Vec::new();
        // At most one ant may be injected onto this path per turn. On a
        // direct start-end tunnel (end == 1), `is_occupied` never blocks
        // index 1 because the end room carries no occupancy limit, so the
        // single-injection rule has to be tracked separately instead of
        // falling out of the occupancy check.
        let mut injected_this_turn = false;

        // Farthest-advanced first; not-yet-injected ants (None, treated as
        // -1) come last, in ascending ant-id order among themselves.
        let mut order: Vec<usize> = (0..self.positions.len()).collect();
        order.sort_by_key(|&j| std::cmp::Reverse((self.positions[j], std::cmp::Reverse(j))));

        for j in order {
            match self.positions[j] {
                None => {
                    if !injected_this_turn && !self.is_occupied(&next_positions, 1) {
                        next_positions[j] = Some(1);
                        injected_this_turn = true;
                        moves.push(Move {
                            ant_id: self.ant_ids[j],
                            room: self.path[1].clone(),
                        });
                    }
                }
                Some(k) if k < end => {
                    let next = k + 1;
                    if next == end || !self.is_occupied(&next_positions, next) {
                        next_positions[j] = Some(next);
                        moves.push(Move {
                            ant_id: self.ant_ids[j],
                            room: self.path[next].clone(),
                        });
                    }
                }
                Some(_) => {} // already arrived
            }
        }

        self.positions = next_positions;
        // The occupancy checks above must run farthest-advanced first (so a
        // room vacated this turn can be entered this turn), but the move
        // transcript itself is emitted least-advanced first (spec.md §8 S1:
        // "L2-B L1-C", not "L1-C L2-B").
        moves.reverse();
        moves
    }
}

/// Run the full multi-path simulation to completion, returning one [`Turn`]
/// per synchronized step.
///
/// `paths` and `assignment` must have the same length, index-aligned
/// (`assignment[i]` ants are injected onto `paths[i]`).
pub fn simulate(paths: &[Path], assignment: &Assignment) -> Vec<Turn> {
    let mut next_ant_id = 1u32;
    let mut states: Vec<PathState<'_>> = paths
        .iter()
        .zip(assignment.iter())
        .map(|(path, &count)| {
            let ant_ids: Vec<u32> = (0..count).map(|_| {
                let id = next_ant_id;
                next_ant_id += 1;
                id
            }).collect();
            PathState {
                path,
                positions: vec![None; count as usize],
                ant_ids,
            }
        })
        .collect();

    let total_ants: u32 = assignment.iter().sum();
    let max_edge_count = paths.iter().map(|p| p.len().saturating_sub(1)).max().unwrap_or(0);
    let turn_bound = (total_ants as usize + max_edge_count) * 2;

    let mut turns = Vec::new();
    loop {
        let mut turn = Turn::new();
        for state in states.iter_mut() {
            turn.extend(state.step());
        }
        if turn.is_empty() {
            break;
        }
        trace!("turn {}: {} moves", turns.len() + 1, turn.len());
        turns.push(turn);
        assert!(
            turns.len() <= turn_bound,
            "simulation exceeded its bounded-turns invariant ({turn_bound} turns); this is a programming bug, not a user error"
        );
    }
    turns
}

/// Render a sequence of turns as the primary output format: one line per
/// turn, moves space-separated, in emission order.
pub fn format_turns(turns: &[Turn]) -> Vec<String> {
    turns
        .iter()
        .map(|turn| {
            turn.iter()
                .map(Move::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
