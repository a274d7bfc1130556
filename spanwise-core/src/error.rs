//! Error types for the spanwise core library.
//!
//! Each concern gets its own enum plus a companion code enum whose string
//! form is stable, so callers can log or match failures without parsing
//! messages.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( ( $($tuple:tt)* ) )? $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( ( $($tuple)* ) )? $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors raised when configuring or mutating a [`crate::Graph`].
///
/// Every variant is detected before the store is touched, so a failed call
/// leaves the graph unchanged.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// Graphs must contain at least one vertex.
    #[error("vertex count must be at least 1 (got {got})")]
    InvalidVertexCount {
        /// The rejected vertex count.
        got: usize,
    },
    /// The storage for this many vertices cannot be allocated.
    #[error("cannot allocate storage for {got} vertices")]
    TooManyVertices {
        /// The rejected vertex count.
        got: usize,
    },
    /// Requested density was outside `[0.0, 1.0]` or not a finite number.
    #[error("density must lie within [0.0, 1.0] (got {got})")]
    InvalidDensity {
        /// The rejected density.
        got: f64,
    },
    /// An edge endpoint did not name a vertex of the graph.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Both endpoints named the same vertex.
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop {
        /// The repeated endpoint.
        vertex: usize,
    },
    /// Weight zero is reserved as the matrix's "no edge" marker.
    #[error("edge ({source_vertex}, {target_vertex}) has weight 0")]
    ZeroWeight {
        /// First endpoint as supplied.
        source_vertex: usize,
        /// Second endpoint as supplied.
        target_vertex: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Graphs must contain at least one vertex.
        InvalidVertexCount => InvalidVertexCount { .. } => "GRAPH_INVALID_VERTEX_COUNT",
        /// The storage for this many vertices cannot be allocated.
        TooManyVertices => TooManyVertices { .. } => "GRAPH_TOO_MANY_VERTICES",
        /// Requested density was outside `[0.0, 1.0]`.
        InvalidDensity => InvalidDensity { .. } => "GRAPH_INVALID_DENSITY",
        /// An edge endpoint did not name a vertex of the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// Both endpoints named the same vertex.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// Weight zero is reserved for "no edge".
        ZeroWeight => ZeroWeight { .. } => "GRAPH_ZERO_WEIGHT",
    }
}

/// Errors raised while reading an edge-list file.
///
/// Loading is transactional: when any of these is returned the target graph
/// still holds exactly the edges it held before the call.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An in-memory or streamed reader failed.
    #[error("failed to read edge list: {source}")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The input ended before an expected token.
    #[error("unexpected end of input while reading {expected}")]
    MissingToken {
        /// Description of the token that was expected.
        expected: &'static str,
    },
    /// A token could not be parsed as a non-negative integer.
    #[error("invalid {expected} `{token}`")]
    InvalidToken {
        /// Description of the token that was expected.
        expected: &'static str,
        /// Raw text that failed to parse.
        token: String,
    },
    /// The header's vertex count did not match the target graph.
    #[error("file declares {found} vertices but the graph has {expected}")]
    VertexCountMismatch {
        /// Vertex count of the target graph.
        expected: usize,
        /// Vertex count declared by the file header.
        found: usize,
    },
    /// A triple was rejected by the graph's edge preconditions.
    #[error("edge #{index} is invalid: {source}")]
    InvalidEdge {
        /// Zero-based position of the triple in the file.
        index: usize,
        /// Precondition that the triple violated.
        #[source]
        source: GraphError,
    },
    /// The header described a graph that cannot be constructed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`LoadError`] variants.
    enum LoadErrorCode for LoadError {
        /// The file could not be opened or read.
        Io => Io { .. } => "LOAD_IO",
        /// A reader failed.
        Read => Read { .. } => "LOAD_READ",
        /// The input ended before an expected token.
        MissingToken => MissingToken { .. } => "LOAD_MISSING_TOKEN",
        /// A token could not be parsed.
        InvalidToken => InvalidToken { .. } => "LOAD_INVALID_TOKEN",
        /// The header's vertex count did not match the target graph.
        VertexCountMismatch => VertexCountMismatch { .. } => "LOAD_VERTEX_COUNT_MISMATCH",
        /// A triple was rejected by the graph's edge preconditions.
        InvalidEdge => InvalidEdge { .. } => "LOAD_INVALID_EDGE",
        /// The header described a graph that cannot be constructed.
        Graph => Graph(..) => "LOAD_GRAPH",
    }
}

/// Errors raised by the benchmark harness.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BenchmarkError {
    /// At least one repetition is required.
    #[error("repetitions must be at least 1")]
    ZeroRepetitions,
    /// Graph construction or generation rejected the configuration.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The four engines disagreed on the total weight of the same graph.
    #[error(
        "engines disagree on MST weight in repetition {repetition}: \
         {reference_algorithm}={reference_weight}, {algorithm}={weight}"
    )]
    WeightDisagreement {
        /// Zero-based repetition in which the mismatch occurred.
        repetition: usize,
        /// Engine whose weight served as the reference.
        reference_algorithm: &'static str,
        /// Weight reported by the reference engine.
        reference_weight: u64,
        /// Engine that disagreed.
        algorithm: &'static str,
        /// Weight reported by the disagreeing engine.
        weight: u64,
    },
}

define_error_codes! {
    /// Stable codes describing [`BenchmarkError`] variants.
    enum BenchmarkErrorCode for BenchmarkError {
        /// At least one repetition is required.
        ZeroRepetitions => ZeroRepetitions => "BENCH_ZERO_REPETITIONS",
        /// Graph construction or generation rejected the configuration.
        Graph => Graph(..) => "BENCH_GRAPH",
        /// The engines disagreed on the MST weight.
        WeightDisagreement => WeightDisagreement { .. } => "BENCH_WEIGHT_DISAGREEMENT",
    }
}

impl LoadError {
    /// Retrieve the inner [`GraphErrorCode`] when the failure came from a
    /// graph precondition.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::InvalidEdge { source, .. } | Self::Graph(source) => Some(source.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by graph mutations.
pub type Result<T> = core::result::Result<T, GraphError>;
