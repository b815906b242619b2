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

//! CLI entry point: reads an input file, runs the pipeline, prints the
//! move transcript to stdout, and writes the secondary echo/summary/grid
//! transcript to a file. Every error surfaces as a single `ERROR: ...`
//! line on stdout with a nonzero exit code, per spec §6/§7.

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use lem_in::error::LemInError;
use lem_in::{assigner, graph::Graph, parser, pathfinder, render, simulator};

/// Route a population of ants from a start room to an end room in as few
/// synchronized turns as possible.
#[derive(Debug, Parser)]
#[command(name = "lem-in", version, about)]
struct Cli {
    /// Path to the input file describing rooms, tunnels, and ant count.
    input: String,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Where to write the secondary echo/summary/grid transcript.
    #[arg(short, long, default_value = "simulation_output.txt")]
    output: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("ERROR: {}", err.surfaced_kind());
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| format!("lem_in={level}")))
        .init();
}

fn run(cli: &Cli) -> Result<(), LemInError> {
    let text = fs::read_to_string(&cli.input)?;
    let parsed = parser::parse(&text)?;
    let graph = Graph::build(parsed.ant_count, parsed.rooms.clone(), parsed.tunnels.clone())?;

    let paths = pathfinder::find_paths(&graph).ok_or(LemInError::NoPath)?;
    let mut sorted_paths = paths;
    sorted_paths.sort_by_key(|p| pathfinder::edge_count(p));

    let assignment = assigner::assign(graph.ant_count(), &sorted_paths);
    let turns = simulator::simulate(&sorted_paths, &assignment);
    info!("simulation finished in {} turns", turns.len());

    for line in simulator::format_turns(&turns) {
        println!("{line}");
    }

    let transcript = render::transcript(
        &graph,
        &parsed.rooms,
        &parsed.tunnels,
        &sorted_paths,
        &assignment,
        &turns,
    );
    fs::write(&cli.output, transcript)?;

    Ok(())
}
