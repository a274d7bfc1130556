//! Property-based tests for the four MST engines and the graph store they
//! read.
//!
//! Every engine is checked against an independent Kruskal oracle on varied
//! topologies (including disconnected ones), and the store is checked for
//! matrix/list agreement after generation and round-tripping through the
//! edge-list format.

mod oracle;
mod strategies;
mod structural;
mod types;
