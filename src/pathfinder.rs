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

//! Vertex-disjoint path discovery via a vertex-split max-flow construction.
//!
//! Every interior room `v` is split into `v_in` and `v_out`, joined by a
//! capacity-1 edge; `start` and `end` are left unsplit. Every tunnel `{u, v}`
//! becomes two directed, capacity-1 edges `u_out -> v_in` and `v_out ->
//! u_in`. Edmonds-Karp finds the maximum flow from `start` to `end`, one
//! unit at a time; the resulting flow is then decomposed into simple,
//! vertex-disjoint paths by repeatedly walking positive-flow edges from
//! `start` to `end`.
//!
//! The residual/augmenting-path machinery below follows the classic paired
//! forward/residual edge-list representation (edge `e` and its residual
//! companion `e ^ 1` always added together), the same layout used by flow
//! solvers such as `rustrithm`'s `graph::flow` module.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::graph::Graph;

/// A single directed, capacity-1 edge in the split flow network, paired with
/// a residual companion edge at index `self_index ^ 1`.
#[derive(Debug, Clone, Copy)]
struct FlowEdge {
    to: usize,
    cap: i32,
    flow: i32,
}

/// The vertex-split flow network built from a [`Graph`].
struct FlowNetwork {
    adjacency: Vec<Vec<usize>>,
    edges: Vec<FlowEdge>,
}

impl FlowNetwork {
    fn with_nodes(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
            edges: Vec::new(),
        }
    }

    /// Add a directed edge `from -> to` with the given capacity, plus its
    /// zero-capacity residual companion `to -> from`.
    fn add_edge(&mut self, from: usize, to: usize, cap: i32) {
        let fwd = self.edges.len();
        self.edges.push(FlowEdge { to, cap, flow: 0 });
        self.adjacency[from].push(fwd);

        let rev = self.edges.len();
        self.edges.push(FlowEdge {
            to: from,
            cap: 0,
            flow: 0,
        });
        self.adjacency[to].push(rev);
    }

    fn residual(&self, edge: usize) -> i32 {
        self.edges[edge].cap - self.edges[edge].flow
    }

    /// BFS from `start` to `end` over edges with positive residual capacity,
    /// breaking ties by adjacency (insertion) order. Returns the sequence of
    /// edge indices forming the augmenting path, if any.
    fn find_augmenting_path(&self, start: usize, end: usize) -> Option<Vec<usize>> {
        let mut pred: Vec<Option<usize>> = vec![None; self.adjacency.len()];
        let mut visited = vec![false; self.adjacency.len()];
        visited[start] = true;
        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            if node == end {
                let mut path = Vec::new();
                let mut cur = end;
                while let Some(edge) = pred[cur] {
                    path.push(edge);
                    cur = self.edges[edge ^ 1].to;
                }
                path.reverse();
                return Some(path);
            }
            for &edge in &self.adjacency[node] {
                if self.residual(edge) <= 0 {
                    continue;
                }
                let next = self.edges[edge].to;
                if !visited[next] {
                    visited[next] = true;
                    pred[next] = Some(edge);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    /// Augment flow by 1 unit along `path`.
    fn augment(&mut self, path: &[usize]) {
        for &edge in path {
            self.edges[edge].flow += 1;
            self.edges[edge ^ 1].flow -= 1;
        }
    }

    /// Run Edmonds-Karp to completion; returns the achieved flow value.
    fn max_flow(&mut self, start: usize, end: usize) -> u32 {
        let mut flow = 0;
        while let Some(path) = self.find_augmenting_path(start, end) {
            self.augment(&path);
            flow += 1;
            trace!("augmented flow to {flow}");
        }
        flow
    }
}

/// A simple path from start to end: an ordered list of room names.
pub type Path = Vec<String>;

/// The number of edges in `path`.
pub fn edge_count(path: &Path) -> usize {
    path.len().saturating_sub(1)
}

/// Compute a non-empty, ordered set of vertex-disjoint simple paths from
/// [`Graph::start`] to [`Graph::end`].
///
/// Returns `None` (the `NoPath` case) if no path exists at all.
pub fn find_paths(graph: &Graph) -> Option<Vec<Path>> {
    // Node numbering: start and end each get a single id; every other room
    // gets an (in, out) pair.
    let mut node_of: std::collections::HashMap<&str, (usize, usize)> =
        std::collections::HashMap::new();
    let mut next_id = 0usize;

    let start_id = next_id;
    next_id += 1;
    let end_id = next_id;
    next_id += 1;
    node_of.insert(graph.start(), (start_id, start_id));
    node_of.insert(graph.end(), (end_id, end_id));

    for room in graph.rooms() {
        if room.name == graph.start() || room.name == graph.end() {
            continue;
        }
        let room_in = next_id;
        next_id += 1;
        let room_out = next_id;
        next_id += 1;
        node_of.insert(&room.name, (room_in, room_out));
    }

    let mut net = FlowNetwork::with_nodes(next_id);

    // Split edges for interior rooms.
    for room in graph.rooms() {
        if room.name == graph.start() || room.name == graph.end() {
            continue;
        }
        let (room_in, room_out) = node_of[room.name.as_str()];
        net.add_edge(room_in, room_out, 1);
    }

    // Directed tunnel edges, in declaration order, both directions.
    for room in graph.rooms() {
        let (_, out_id) = node_of[room.name.as_str()];
        for neighbor in graph.neighbors(&room.name) {
            let (in_id, _) = node_of[neighbor.as_str()];
            net.add_edge(out_id, in_id, 1);
        }
    }

    let flow = net.max_flow(start_id, end_id);
    debug!("max flow from start to end: {flow}");
    if flow == 0 {
        return None;
    }

    let id_to_room: std::collections::HashMap<usize, &str> = node_of
        .iter()
        .flat_map(|(name, &(i, o))| [(i, *name), (o, *name)])
        .collect();

    let paths = decompose(&mut net, start_id, end_id, &id_to_room);
    if paths.is_empty() {
        None
    } else {
        Some(paths)
    }
}

/// Walk positive-flow forward edges from `start` to `end`, one simple path
/// at a time, consuming flow as we go. Degenerate walks that do not reach
/// `end` are discarded, per the decomposition contract.
fn decompose(
    net: &mut FlowNetwork,
    start: usize,
    end: usize,
    id_to_room: &std::collections::HashMap<usize, &str>,
) -> Vec<Path> {
    let mut paths = Vec::new();

    loop {
        let mut node = start;
        let mut edge_path = Vec::new();
        let mut visited_nodes = std::collections::HashSet::new();
        visited_nodes.insert(node);

        loop {
            if node == end {
                break;
            }
            let next_edge = net.adjacency[node].iter().find(|&&e| {
                // Only original (non-residual) edges carry meaningful flow;
                // residual companions have cap == 0 and a non-positive flow.
                net.edges[e].cap > 0 && net.edges[e].flow > 0
            });
            match next_edge {
                Some(&edge) => {
                    let to = net.edges[edge].to;
                    edge_path.push(edge);
                    node = to;
                    if !visited_nodes.insert(node) {
                        // A cycle in the flow decomposition should not occur
                        // given the vertex-split construction; bail out
                        // rather than loop forever.
                        edge_path.clear();
                        break;
                    }
                }
                None => {
                    edge_path.clear();
                    break;
                }
            }
        }

        if edge_path.is_empty() {
            break;
        }

        for &edge in &edge_path {
            net.edges[edge].flow -= 1;
        }

        let mut room_path: Vec<String> = Vec::new();
        room_path.push(id_to_room[&start].to_string());
        for &edge in &edge_path {
            let to = net.edges[edge].to;
            let name = id_to_room[&to].to_string();
            if room_path.last() != Some(&name) {
                room_path.push(name);
            }
        }
        paths.push(room_path);
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Room, Tunnel};

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
    fn s2_two_disjoint_paths_of_equal_length() {
        let rooms = vec![
            room("S", true, false),
            room("a", false, false),
            room("b", false, false),
            room("c", false, false),
            room("d", false, false),
            room("E", false, true),
        ];
        let tunnels = vec![
            Tunnel::new("S", "a"),
            Tunnel::new("a", "b"),
            Tunnel::new("b", "E"),
            Tunnel::new("S", "c"),
            Tunnel::new("c", "d"),
            Tunnel::new("d", "E"),
        ];
        let graph = Graph::build(4, rooms, tunnels).unwrap();
        let mut paths = find_paths(&graph).expect("a path must exist");
        paths.sort();
        assert_eq!(paths.len(), 2);
        for path in &paths {
            assert_eq!(edge_count(path), 3);
            assert_eq!(path.first().unwrap(), "S");
            assert_eq!(path.last().unwrap(), "E");
        }
    }

    #[test]
    fn paths_are_vertex_disjoint_on_interior_rooms() {
        // A "bowtie": two independent S->E routes plus a shared room `m`
        // that only one of them can actually use without violating
        // disjointness, so the max flow must route around it.
        let rooms = vec![
            room("S", true, false),
            room("a", false, false),
            room("m", false, false),
            room("b", false, false),
            room("E", false, true),
        ];
        let tunnels = vec![
            Tunnel::new("S", "a"),
            Tunnel::new("a", "m"),
            Tunnel::new("m", "E"),
            Tunnel::new("S", "b"),
            Tunnel::new("b", "m"),
        ];
        let graph = Graph::build(1, rooms, tunnels).unwrap();
        let paths = find_paths(&graph).expect("a path must exist");
        let mut interior_seen = std::collections::HashSet::new();
        for path in &paths {
            for room in &path[1..path.len() - 1] {
                assert!(interior_seen.insert(room.clone()), "room {room} reused across paths");
            }
        }
    }

    #[test]
    fn no_path_when_disconnected() {
        let rooms = vec![room("S", true, false), room("E", false, true)];
        let graph = Graph::build(1, rooms, vec![]).unwrap();
        assert!(find_paths(&graph).is_none());
    }

    #[test]
    fn single_direct_tunnel_is_one_path_of_edge_count_one() {
        let rooms = vec![room("S", true, false), room("E", false, true)];
        let tunnels = vec![Tunnel::new("S", "E")];
        let graph = Graph::build(1, rooms, tunnels).unwrap();
        let paths = find_paths(&graph).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(edge_count(&paths[0]), 1);
    }
}
