//! Spanwise core library: a dual-representation graph store and four
//! minimum spanning tree engines built on top of it.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod benchmark;
mod display;
mod error;
mod generator;
mod graph;
mod loader;
mod mst;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    benchmark::{
        Benchmark, BenchmarkBuilder, BenchmarkReport, STANDARD_DENSITIES, STANDARD_REPETITIONS,
        STANDARD_VERTEX_COUNTS, standard_suite,
    },
    display::{AdjacencyDisplay, MatrixDisplay},
    error::{
        BenchmarkError, BenchmarkErrorCode, GraphError, GraphErrorCode, LoadError, LoadErrorCode,
        Result,
    },
    generator::{GENERATED_WEIGHT_RANGE, GenerationReport},
    graph::{AdjacencyList, AdjacencyMatrix, ConsistencyViolation, Graph, Neighbour, Records},
    loader::{EdgeListHeader, write_edge_list},
    mst::{MstAlgorithm, MstEdge, SpanningTree},
    union_find::DisjointSet,
};
