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

//! The room graph: an immutable, undirected model built once by [`Graph::build`]
//! and read-only afterwards. Neighbor order is insertion order, not hash order,
//! so that path discovery is deterministic across runs (see the crate's
//! determinism note in the top-level design doc).

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::error::GraphError;

/// A named room with two informational coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// The room's name. Unique within a graph.
    pub name: String,
    /// X coordinate, used only by peripheral visualization.
    pub x: i64,
    /// Y coordinate, used only by peripheral visualization.
    pub y: i64,
    /// Whether ants start here.
    pub is_start: bool,
    /// Whether ants must reach here.
    pub is_end: bool,
}

/// An unordered connection between two rooms, named by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tunnel {
    /// One endpoint.
    pub a: String,
    /// The other endpoint.
    pub b: String,
}

impl Tunnel {
    /// Create a new tunnel between two room names.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

/// The immutable room graph, plus the ant population that must cross it.
#[derive(Debug, Clone)]
pub struct Graph {
    ant_count: u32,
    rooms: HashMap<String, Room>,
    /// Room names in the order they were declared, for deterministic iteration.
    room_order: Vec<String>,
    /// Neighbor lists in tunnel-declaration order, for deterministic BFS.
    adjacency: HashMap<String, Vec<String>>,
    start: String,
    end: String,
}

impl Graph {
    /// Build a graph from a parsed room list and tunnel list.
    ///
    /// Rejects: a non-positive ant count, a missing or duplicated start/end
    /// room, a tunnel to an unknown room, a self-loop tunnel, and a tunnel
    /// declared twice (in either direction).
    pub fn build(ant_count: i64, rooms: Vec<Room>, tunnels: Vec<Tunnel>) -> Result<Self, GraphError> {
        if ant_count <= 0 {
            return Err(GraphError::NonPositiveAntCount(ant_count));
        }

        let mut start: Option<String> = None;
        let mut end: Option<String> = None;
        let mut room_order = Vec::with_capacity(rooms.len());
        let mut room_map = HashMap::with_capacity(rooms.len());

        for room in rooms {
            if room.is_start {
                if start.is_some() {
                    return Err(GraphError::DuplicateStart);
                }
                start = Some(room.name.clone());
            }
            if room.is_end {
                if end.is_some() {
                    return Err(GraphError::DuplicateEnd);
                }
                end = Some(room.name.clone());
            }
            room_order.push(room.name.clone());
            room_map.insert(room.name.clone(), room);
        }

        let start = start.ok_or(GraphError::MissingStart)?;
        let end = end.ok_or(GraphError::MissingEnd)?;
        if start == end {
            return Err(GraphError::StartEqualsEnd);
        }

        let mut adjacency: HashMap<String, Vec<String>> =
            room_order.iter().map(|n| (n.clone(), Vec::new())).collect();
        let mut seen_edges: HashSet<(String, String)> = HashSet::new();

        for tunnel in tunnels {
            if !room_map.contains_key(&tunnel.a) {
                return Err(GraphError::UnknownRoom(tunnel.a));
            }
            if !room_map.contains_key(&tunnel.b) {
                return Err(GraphError::UnknownRoom(tunnel.b));
            }
            if tunnel.a == tunnel.b {
                return Err(GraphError::SelfLoop(tunnel.a));
            }
            let key = if tunnel.a <= tunnel.b {
                (tunnel.a.clone(), tunnel.b.clone())
            } else {
                (tunnel.b.clone(), tunnel.a.clone())
            };
            if !seen_edges.insert(key) {
                return Err(GraphError::DuplicateTunnel(tunnel.a, tunnel.b));
            }
            adjacency.get_mut(&tunnel.a).unwrap().push(tunnel.b.clone());
            adjacency.get_mut(&tunnel.b).unwrap().push(tunnel.a.clone());
        }

        debug!(
            "built graph: {} rooms, {} tunnels, start={start:?}, end={end:?}",
            room_order.len(),
            seen_edges.len(),
        );

        Ok(Self {
            ant_count: ant_count as u32,
            rooms: room_map,
            room_order,
            adjacency,
            start,
            end,
        })
    }

    /// The number of ants to route from start to end.
    pub fn ant_count(&self) -> u32 {
        self.ant_count
    }

    /// The start room's name.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The end room's name.
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Every room, in declaration order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.room_order.iter().map(|n| &self.rooms[n])
    }

    /// Whether `name` names a room in this graph.
    pub fn contains(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    /// The neighbors of `name`, in tunnel-declaration order.
    ///
    /// Panics if `name` is not a room in this graph; all callers within this
    /// crate only ever look up names that originated from this same graph.
    pub fn neighbors(&self, name: &str) -> &[String] {
        self.adjacency
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_else(|| panic!("room not in graph: {name:?}"))
    }

    /// Whether `a` and `b` are directly connected by a tunnel.
    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .map(|ns| ns.iter().any(|n| n == b))
            .unwrap_or(false)
    }

    /// Total number of tunnels in the graph.
    pub fn tunnel_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(name: &str, is_start: bool, is_end: bool) -> Room {
        Room {
            name: name.to_string(),
            x: 0,
            y: 0,
            is_start,
            is_end,
        }
    }

    #[test]
    fn builds_a_simple_graph() {
        let rooms = vec![room("A", true, false), room("B", false, false), room("C", false, true)];
        let tunnels = vec![Tunnel::new("A", "B"), Tunnel::new("B", "C")];
        let graph = Graph::build(3, rooms, tunnels).unwrap();
        assert_eq!(graph.start(), "A");
        assert_eq!(graph.end(), "C");
        assert_eq!(graph.tunnel_count(), 2);
        assert!(graph.is_adjacent("A", "B"));
        assert!(!graph.is_adjacent("A", "C"));
    }

    #[test]
    fn rejects_non_positive_ant_count() {
        let rooms = vec![room("A", true, false), room("B", false, true)];
        let err = Graph::build(0, rooms, vec![]).unwrap_err();
        assert_eq!(err, GraphError::NonPositiveAntCount(0));
    }

    #[test]
    fn rejects_missing_start_or_end() {
        let rooms = vec![room("A", false, false), room("B", false, true)];
        assert_eq!(
            Graph::build(1, rooms, vec![]).unwrap_err(),
            GraphError::MissingStart
        );

        let rooms = vec![room("A", true, false), room("B", false, false)];
        assert_eq!(
            Graph::build(1, rooms, vec![]).unwrap_err(),
            GraphError::MissingEnd
        );
    }

    #[test]
    fn rejects_tunnel_to_unknown_room() {
        let rooms = vec![room("A", true, false), room("B", false, true)];
        let tunnels = vec![Tunnel::new("A", "Z")];
        assert!(matches!(
            Graph::build(1, rooms, tunnels).unwrap_err(),
            GraphError::UnknownRoom(_)
        ));
    }

    #[test]
    fn rejects_self_loop_and_duplicate_tunnels() {
        let rooms = vec![room("A", true, false), room("B", false, true)];
        let tunnels = vec![Tunnel::new("A", "A")];
        assert!(matches!(
            Graph::build(1, rooms, tunnels).unwrap_err(),
            GraphError::SelfLoop(_)
        ));

        let rooms = vec![room("A", true, false), room("B", false, true)];
        let tunnels = vec![Tunnel::new("A", "B"), Tunnel::new("B", "A")];
        assert!(matches!(
            Graph::build(1, rooms, tunnels).unwrap_err(),
            GraphError::DuplicateTunnel(..)
        ));
    }

    #[test]
    fn neighbors_preserve_tunnel_declaration_order() {
        let rooms = vec![
            room("S", true, false),
            room("a", false, false),
            room("b", false, false),
            room("E", false, true),
        ];
        let tunnels = vec![Tunnel::new("S", "b"), Tunnel::new("S", "a")];
        let graph = Graph::build(1, rooms, tunnels).unwrap();
        assert_eq!(graph.neighbors("S"), &["b".to_string(), "a".to_string()]);
    }
}
