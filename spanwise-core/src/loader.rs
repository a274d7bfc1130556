//! Edge-list text format: reading into and writing out of a [`Graph`].
//!
//! The format is whitespace-delimited. The first two tokens are the edge
//! count and the vertex count, followed by one `source target weight`
//! triple per edge. Line breaks carry no meaning and tokens after the last
//! declared triple are ignored.

use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
    str::SplitWhitespace,
};

use tracing::{debug, info, instrument};

use crate::{
    Graph,
    error::LoadError,
    graph::validate_edge,
};

/// Upper bound on the capacity reserved up front from a header's edge count.
const MAX_PREALLOCATED_EDGES: usize = 1 << 16;

/// Leading `(edge_count, vertex_count)` pair of an edge-list file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EdgeListHeader {
    edge_count: usize,
    vertex_count: usize,
}

impl EdgeListHeader {
    /// Reads only the header of the file at `path`, so a caller can size a
    /// [`Graph`] before loading it.
    ///
    /// # Errors
    /// Returns [`LoadError::Io`] when the file cannot be read, or a format
    /// error when the header is missing or malformed.
    pub fn read_from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = read_file(path.as_ref())?;
        Self::parse(&mut Tokens::new(&text))
    }

    /// Returns the number of triples the file declares.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the vertex count the file declares.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    fn parse(tokens: &mut Tokens<'_>) -> Result<Self, LoadError> {
        let edge_count = tokens.next_number("edge count")?;
        let vertex_count = tokens.next_number("vertex count")?;
        Ok(Self {
            edge_count,
            vertex_count,
        })
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next_number<T: std::str::FromStr>(&mut self, expected: &'static str) -> Result<T, LoadError> {
        let token = self
            .inner
            .next()
            .ok_or(LoadError::MissingToken { expected })?;
        token.parse().map_err(|_| LoadError::InvalidToken {
            expected,
            token: token.to_owned(),
        })
    }
}

/// Parses and validates every triple without touching any graph.
fn stage_edges(text: &str, vertex_count: usize) -> Result<Vec<(usize, usize, u32)>, LoadError> {
    let mut tokens = Tokens::new(text);
    let header = EdgeListHeader::parse(&mut tokens)?;
    if header.vertex_count != vertex_count {
        return Err(LoadError::VertexCountMismatch {
            expected: vertex_count,
            found: header.vertex_count,
        });
    }

    let mut staged = Vec::with_capacity(header.edge_count.min(MAX_PREALLOCATED_EDGES));
    for index in 0..header.edge_count {
        let source = tokens.next_number("source vertex")?;
        let target = tokens.next_number("target vertex")?;
        let weight = tokens.next_number("edge weight")?;
        validate_edge(vertex_count, source, target, weight)
            .map_err(|source| LoadError::InvalidEdge { index, source })?;
        staged.push((source, target, weight));
    }
    Ok(staged)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Graph {
    /// Builds a graph sized from the file's header and loads its edges.
    ///
    /// # Errors
    /// Returns [`LoadError::Graph`] when the header declares zero vertices,
    /// or any error [`Graph::load_from_path`] can return.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::Graph;
    ///
    /// let dir = tempfile::tempdir()?;
    /// let path = dir.path().join("square.txt");
    /// std::fs::write(&path, "4 4\n0 1 5\n1 2 3\n2 3 1\n0 3 10\n")?;
    ///
    /// let graph = Graph::from_edge_list_path(&path)?;
    /// assert_eq!(graph.vertex_count(), 4);
    /// assert_eq!(graph.run_kruskal_list().total_weight(), 9);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_edge_list_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = read_file(path)?;
        let header = EdgeListHeader::parse(&mut Tokens::new(&text))?;
        let mut graph = Self::new(header.vertex_count)?;
        graph.load_text(&text)?;
        Ok(graph)
    }

    /// Replaces this graph's edges with those of the file at `path`.
    ///
    /// The whole file is parsed and validated before the graph is touched:
    /// on any error the graph keeps exactly the edges it had before.
    ///
    /// # Errors
    /// Returns [`LoadError::Io`] when the file cannot be read,
    /// [`LoadError::VertexCountMismatch`] when the header disagrees with
    /// [`Graph::vertex_count`], [`LoadError::InvalidEdge`] for a triple that
    /// violates an edge precondition, and [`LoadError::MissingToken`] or
    /// [`LoadError::InvalidToken`] for malformed input.
    #[instrument(
        name = "graph.load",
        skip(self, path),
        fields(path = %path.as_ref().display(), vertex_count = self.vertex_count()),
    )]
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let text = read_file(path.as_ref())?;
        self.load_text(&text)
    }

    /// Same as [`Graph::load_from_path`] over an arbitrary reader.
    ///
    /// # Errors
    /// Returns [`LoadError::Read`] when the reader fails (including on
    /// invalid UTF-8), otherwise the format errors listed on
    /// [`Graph::load_from_path`].
    pub fn load_from_reader(&mut self, mut reader: impl Read) -> Result<(), LoadError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| LoadError::Read { source })?;
        self.load_text(&text)
    }

    fn load_text(&mut self, text: &str) -> Result<(), LoadError> {
        let staged = match stage_edges(text, self.vertex_count()) {
            Ok(staged) => staged,
            Err(err) => {
                debug!(code = err.code().as_str(), "edge list rejected; graph unchanged");
                return Err(err);
            }
        };
        self.reset();
        for (source, target, weight) in staged {
            self.add_edge(source, target, weight)?;
        }
        info!(
            edge_count = self.edge_count(),
            density = self.density(),
            "edge list loaded"
        );
        Ok(())
    }
}

/// Writes `graph` in the edge-list format, one `source target weight` line
/// per distinct vertex pair with `source < target`.
///
/// The header's edge count is the number of lines written, which can be
/// lower than [`Graph::edge_count`] when the same pair was inserted twice.
///
/// # Errors
/// Propagates any error from `writer`.
///
/// # Examples
/// ```
/// use spanwise_core::{Graph, write_edge_list};
///
/// let mut graph = Graph::new(3)?;
/// graph.add_edge(2, 0, 8)?;
/// graph.add_edge(0, 1, 4)?;
/// let mut out = Vec::new();
/// write_edge_list(&graph, &mut out)?;
/// assert_eq!(String::from_utf8(out)?, "2 3\n0 1 4\n0 2 8\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_edge_list(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    let mut lines = Vec::with_capacity(graph.edge_count());
    for (source, row) in graph.matrix().rows().enumerate() {
        for (target, &weight) in row.iter().enumerate().skip(source + 1) {
            if weight != 0 {
                lines.push((source, target, weight));
            }
        }
    }
    writeln!(writer, "{} {}", lines.len(), graph.vertex_count())?;
    for (source, target, weight) in lines {
        writeln!(writer, "{source} {target} {weight}")?;
    }
    writer.flush()
}
