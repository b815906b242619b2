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

//! Peripheral line-oriented input format parser. Not part of the algorithmic
//! core; responsible only for turning a text file into the rooms/tunnels/ant
//! count that [`crate::graph::Graph::build`] validates further.
//!
//! ```text
//! <ant_count>
//! [##start | ##end | #<comment>]*
//! <name> <x> <y>      room definition
//! ...
//! <nameA>-<nameB>     tunnel definition
//! ...
//! ```
//! `##start`/`##end` apply to the *next* room definition. Other `#`-prefixed
//! lines are comments; blank lines are ignored.

use std::collections::HashSet;

use log::debug;

use crate::error::ParseError;
use crate::graph::{Room, Tunnel};

/// The parsed, but not yet graph-validated, contents of an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// The first line of the file, as an integer.
    pub ant_count: i64,
    /// Room definitions, in declaration order.
    pub rooms: Vec<Room>,
    /// Tunnel definitions, in declaration order.
    pub tunnels: Vec<Tunnel>,
}

/// Parse the full contents of an input file.
pub fn parse(input: &str) -> Result<ParsedInput, ParseError> {
    let mut lines = input.lines();

    let ant_count = lines
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| ParseError::InvalidAntCount(input.lines().next().unwrap_or("").to_string()))?;

    let mut rooms = Vec::new();
    let mut tunnels = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();
    let mut seen_coords: HashSet<(i64, i64)> = HashSet::new();
    let mut coord_owner: std::collections::HashMap<(i64, i64), String> = std::collections::HashMap::new();

    let mut pending_start = false;
    let mut pending_end = false;

    for raw_line in lines {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('#') {
            if rest.starts_with("#start") {
                pending_start = true;
            } else if rest.starts_with("#end") {
                pending_end = true;
            }
            // Any other `#`-prefixed line, including unrecognized `##`
            // commands, is a comment.
            continue;
        }

        if line.contains('-') && !looks_like_room_line(line) {
            let mut parts = line.splitn(2, '-');
            let a = parts.next().unwrap_or("").trim();
            let b = parts.next().unwrap_or("").trim();
            if a.is_empty() || b.is_empty() {
                return Err(ParseError::InvalidTunnelLine(line.to_string()));
            }
            tunnels.push(Tunnel::new(a, b));
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(ParseError::InvalidRoomLine(line.to_string()));
        }
        let name = fields[0];
        validate_room_name(name)?;
        if !seen_names.insert(name.to_string()) {
            return Err(ParseError::DuplicateRoomName(name.to_string()));
        }
        let x = fields[1]
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidCoordinates(line.to_string()))?;
        let y = fields[2]
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidCoordinates(line.to_string()))?;

        if !seen_coords.insert((x, y)) {
            let other = coord_owner.get(&(x, y)).cloned().unwrap_or_default();
            return Err(ParseError::DuplicateCoordinates(other, name.to_string(), x, y));
        }
        coord_owner.insert((x, y), name.to_string());

        rooms.push(Room {
            name: name.to_string(),
            x,
            y,
            is_start: pending_start,
            is_end: pending_end,
        });
        pending_start = false;
        pending_end = false;
    }

    debug!(
        "parsed {} ants, {} rooms, {} tunnels",
        ant_count,
        rooms.len(),
        tunnels.len()
    );

    Ok(ParsedInput {
        ant_count,
        rooms,
        tunnels,
    })
}

/// A line is a tunnel, not a room, unless it splits into exactly three
/// whitespace-separated fields (name, x, y). Room names may not themselves
/// contain `-`, so this check is unambiguous.
fn looks_like_room_line(line: &str) -> bool {
    line.split_whitespace().count() == 3
}

fn validate_room_name(name: &str) -> Result<(), ParseError> {
    let invalid = name.is_empty()
        || name.starts_with('L')
        || name.starts_with('#')
        || name.chars().any(|c| c.is_whitespace() || c == '-');
    if invalid {
        Err(ParseError::InvalidRoomName(name.to_string()))
    } else {
        Ok(())
    }
}
