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

//! Crate-wide error type, unifying every fallible stage of the pipeline.

use thiserror::Error;

/// Everything that can go wrong between reading the input file and
/// producing the move transcript.
#[derive(Debug, Error)]
pub enum LemInError {
    /// The input file could not be read.
    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),
    /// The input file was malformed.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// The parsed rooms/tunnels do not form a valid graph.
    #[error("{0}")]
    Graph(#[from] GraphError),
    /// No vertex-disjoint path exists between start and end.
    #[error("no path exists between start and end")]
    NoPath,
}

impl LemInError {
    /// Collapse the full taxonomy down to the two error kinds surfaced by
    /// the CLI: either the input was malformed, or no route could be found.
    pub fn surfaced_kind(&self) -> &'static str {
        match self {
            LemInError::NoPath => "no path found",
            _ => "invalid data format",
        }
    }
}

/// Errors raised while parsing the textual input format.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// The file was empty, or its first line was not a positive integer.
    #[error("invalid ant count: {0:?}")]
    InvalidAntCount(String),
    /// A room definition did not have the form `<name> <x> <y>`.
    #[error("invalid room definition: {0:?}")]
    InvalidRoomLine(String),
    /// A room's coordinates could not be parsed as integers.
    #[error("invalid room coordinates: {0:?}")]
    InvalidCoordinates(String),
    /// A tunnel definition did not have the form `<name>-<name>`.
    #[error("invalid tunnel definition: {0:?}")]
    InvalidTunnelLine(String),
    /// A room name used reserved characters or a reserved leading letter.
    #[error("invalid room name: {0:?}")]
    InvalidRoomName(String),
    /// Two rooms were declared at the same coordinates.
    #[error("duplicate room coordinates: {0:?} and {1:?} both at ({2}, {3})")]
    DuplicateCoordinates(String, String, i64, i64),
    /// A room name appeared twice in a room definition.
    #[error("duplicate room name: {0:?}")]
    DuplicateRoomName(String),
}

/// Errors raised while building the [`crate::graph::Graph`] from parsed
/// rooms and tunnels.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GraphError {
    /// The ant count was zero or negative.
    #[error("ant count must be positive, got {0}")]
    NonPositiveAntCount(i64),
    /// No room was marked `##start`.
    #[error("no start room defined")]
    MissingStart,
    /// No room was marked `##end`.
    #[error("no end room defined")]
    MissingEnd,
    /// More than one room was marked `##start`.
    #[error("more than one start room defined")]
    DuplicateStart,
    /// More than one room was marked `##end`.
    #[error("more than one end room defined")]
    DuplicateEnd,
    /// Start and end were the same room.
    #[error("start and end room must be distinct")]
    StartEqualsEnd,
    /// A tunnel referenced a room that was never defined.
    #[error("tunnel references unknown room: {0:?}")]
    UnknownRoom(String),
    /// A tunnel connected a room to itself.
    #[error("self-loop tunnel on room: {0:?}")]
    SelfLoop(String),
    /// The same tunnel (in either direction) was declared twice.
    #[error("duplicate tunnel: {0:?}-{1:?}")]
    DuplicateTunnel(String, String),
}
