//! Per-vertex neighbour lists backing the list representation.

use std::{iter::Rev, slice};

use crate::error::{GraphError, Result};

/// Records of one vertex, newest first.
pub type Records<'a> = Rev<slice::Iter<'a, Neighbour>>;

/// One adjacency record: the neighbouring vertex and the connecting weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbour {
    vertex: usize,
    weight: u32,
}

impl Neighbour {
    pub(super) const fn new(vertex: usize, weight: u32) -> Self {
        Self { vertex, weight }
    }

    /// Returns the neighbouring vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> usize { self.vertex }

    /// Returns the weight of the connecting edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }
}

/// Adjacency list: one growable record sequence per vertex.
///
/// Each undirected edge is stored twice, once under each endpoint. Records
/// are read back newest first, as though every insertion were prepended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<Vec<Neighbour>>,
}

impl AdjacencyList {
    pub(super) fn new(vertex_count: usize) -> Result<Self> {
        let mut lists = Vec::new();
        lists
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::TooManyVertices { got: vertex_count })?;
        lists.resize_with(vertex_count, Vec::new);
        Ok(Self { lists })
    }

    /// Returns the records stored for `vertex`, newest first. A vertex that
    /// does not exist has no records.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> Records<'_> {
        self.lists
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .rev()
    }

    /// Iterates over `(vertex, records)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Records<'_>)> + '_ {
        self.lists
            .iter()
            .enumerate()
            .map(|(vertex, records)| (vertex, records.iter().rev()))
    }

    /// Returns the total number of stored records (twice the edge count).
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub(super) fn link(&mut self, left: usize, right: usize, weight: u32) {
        if let Some(records) = self.lists.get_mut(left) {
            records.push(Neighbour::new(right, weight));
        }
        if let Some(records) = self.lists.get_mut(right) {
            records.push(Neighbour::new(left, weight));
        }
    }

    pub(super) fn clear(&mut self) {
        for records in &mut self.lists {
            records.clear();
        }
    }
}
