//! Command-line orchestration for spanwise.
//!
//! `show` and `mst` load an edge-list file, `generate` writes a random
//! connected graph, and `bench` times the four spanning tree engines over
//! generated graphs.

mod commands;

pub use commands::{
    AlgorithmChoice, BenchCommand, Cli, CliError, Command, ExecutionSummary, GenerateCommand,
    MstCommand, ShowCommand, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
