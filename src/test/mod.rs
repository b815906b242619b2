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

//! Crate-level end-to-end tests: the whole parser -> graph -> pathfinder
//! -> assigner -> simulator pipeline exercised against the scenarios and
//! invariants of the top-level design document, rather than any single
//! module in isolation (those have their own `#[cfg(test)]` blocks).

mod scenarios;

use crate::error::LemInError;
use crate::simulator::Turn;

/// Run the full pipeline against raw input text, returning the move
/// transcript (one [`Turn`] per synchronized step) or the error the
/// pipeline stopped at.
pub(crate) fn run(input: &str) -> Result<Vec<Turn>, LemInError> {
    let parsed = crate::parser::parse(input)?;
    let graph = crate::graph::Graph::build(parsed.ant_count, parsed.rooms, parsed.tunnels)?;
    let mut paths = crate::pathfinder::find_paths(&graph).ok_or(LemInError::NoPath)?;
    paths.sort_by_key(|p| crate::pathfinder::edge_count(p));
    let assignment = crate::assigner::assign(graph.ant_count(), &paths);
    Ok(crate::simulator::simulate(&paths, &assignment))
}

/// [`run`], plus the sorted path set and assignment it computed, for tests
/// that need to check the makespan bound against them.
pub(crate) fn run_with_paths(
    input: &str,
) -> Result<(Vec<crate::pathfinder::Path>, crate::assigner::Assignment, Vec<Turn>), LemInError> {
    let parsed = crate::parser::parse(input)?;
    let graph = crate::graph::Graph::build(parsed.ant_count, parsed.rooms, parsed.tunnels)?;
    let mut paths = crate::pathfinder::find_paths(&graph).ok_or(LemInError::NoPath)?;
    paths.sort_by_key(|p| crate::pathfinder::edge_count(p));
    let assignment = crate::assigner::assign(graph.ant_count(), &paths);
    let turns = crate::simulator::simulate(&paths, &assignment);
    Ok((paths, assignment, turns))
}
