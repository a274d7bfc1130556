//! Agreement checks between the matrix and list representations.
//!
//! Both representations are mutated in lockstep by [`Graph`]. These checks
//! confirm they still agree after any mix of insertions, resets, loads and
//! generations.

use thiserror::Error;
use tracing::{Level, debug, trace};

use super::Graph;

/// Describes the first representation disagreement found by
/// [`Graph::check_consistency`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConsistencyViolation {
    /// A diagonal matrix cell held an edge.
    #[error("matrix diagonal at vertex {vertex} holds weight {weight}")]
    SelfLoop {
        /// Vertex whose diagonal cell is non-zero.
        vertex: usize,
        /// Weight found on the diagonal.
        weight: u32,
    },
    /// `matrix[row][column]` differs from `matrix[column][row]`.
    #[error("matrix is asymmetric at ({row}, {column})")]
    Asymmetric {
        /// Row of the first cell.
        row: usize,
        /// Column of the first cell.
        column: usize,
    },
    /// The matrix records an edge that the vertex's list lacks.
    #[error("vertex {vertex} has no list record for neighbour {neighbour} with weight {weight}")]
    MissingRecord {
        /// Vertex whose list is missing the record.
        vertex: usize,
        /// Neighbour expected in the list.
        neighbour: usize,
        /// Weight stored in the matrix.
        weight: u32,
    },
    /// The list holds a record for which the matrix has no edge.
    #[error("vertex {vertex} lists neighbour {neighbour} but the matrix has no edge")]
    OrphanRecord {
        /// Vertex owning the record.
        vertex: usize,
        /// Neighbour named by the record.
        neighbour: usize,
    },
    /// A list record's weight differs from the matrix cell, typically left
    /// behind by inserting the same pair twice.
    #[error(
        "vertex {vertex} lists neighbour {neighbour} with weight {weight} but the matrix holds {matrix_weight}"
    )]
    StaleRecord {
        /// Vertex owning the record.
        vertex: usize,
        /// Neighbour named by the record.
        neighbour: usize,
        /// Weight stored in the record.
        weight: u32,
        /// Weight stored in the matrix.
        matrix_weight: u32,
    },
    /// A vertex lists the same neighbour more than once, typically left
    /// behind by inserting the same pair twice with the same weight.
    #[error("vertex {vertex} lists neighbour {neighbour} more than once")]
    DuplicateRecord {
        /// Vertex owning the records.
        vertex: usize,
        /// Neighbour named by every copy.
        neighbour: usize,
    },
    /// The number of list records is not twice the edge count.
    #[error("{records} list records stored for {edge_count} edges")]
    RecordCount {
        /// Total records across all lists.
        records: usize,
        /// Edge count reported by the graph.
        edge_count: usize,
    },
}

impl Graph {
    /// Verifies that the matrix and the adjacency list describe the same
    /// edge set.
    ///
    /// # Errors
    /// Returns the first [`ConsistencyViolation`] encountered.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::Graph;
    ///
    /// let mut graph = Graph::new(3)?;
    /// graph.add_edge(0, 1, 4)?;
    /// graph.add_edge(1, 2, 7)?;
    /// assert!(graph.check_consistency().is_ok());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn check_consistency(&self) -> Result<(), ConsistencyViolation> {
        if tracing::enabled!(Level::TRACE) {
            trace!(
                vertex_count = self.vertex_count(),
                edge_count = self.edge_count(),
                "checking representation consistency"
            );
        }
        self.check_matrix_shape()?;
        self.check_matrix_against_list()?;
        self.check_list_against_matrix()?;

        let records = self.adjacency().record_count();
        let expected = self.edge_count().saturating_mul(2);
        if records != expected {
            debug!(records, expected, "record count mismatch");
            return Err(ConsistencyViolation::RecordCount {
                records,
                edge_count: self.edge_count(),
            });
        }
        Ok(())
    }

    fn check_matrix_shape(&self) -> Result<(), ConsistencyViolation> {
        let matrix = self.matrix();
        for row in 0..matrix.order() {
            let weight = matrix.get(row, row);
            if weight != 0 {
                return Err(ConsistencyViolation::SelfLoop {
                    vertex: row,
                    weight,
                });
            }
            for column in (row + 1)..matrix.order() {
                if matrix.get(row, column) != matrix.get(column, row) {
                    return Err(ConsistencyViolation::Asymmetric { row, column });
                }
            }
        }
        Ok(())
    }

    fn check_matrix_against_list(&self) -> Result<(), ConsistencyViolation> {
        for (vertex, row) in self.matrix().rows().enumerate() {
            for (neighbour, &weight) in row.iter().enumerate() {
                if weight == 0 {
                    continue;
                }
                let listed = self
                    .neighbours(vertex)
                    .any(|record| record.vertex() == neighbour && record.weight() == weight);
                if !listed {
                    return Err(ConsistencyViolation::MissingRecord {
                        vertex,
                        neighbour,
                        weight,
                    });
                }
            }
        }
        Ok(())
    }

    fn check_list_against_matrix(&self) -> Result<(), ConsistencyViolation> {
        // `listed_by[n] == v` once vertex `v` has shown a record for `n`.
        let mut listed_by = vec![usize::MAX; self.vertex_count()];
        for (vertex, records) in self.adjacency().iter() {
            for record in records {
                match self.matrix().get(vertex, record.vertex()) {
                    0 => {
                        return Err(ConsistencyViolation::OrphanRecord {
                            vertex,
                            neighbour: record.vertex(),
                        });
                    }
                    matrix_weight if matrix_weight != record.weight() => {
                        return Err(ConsistencyViolation::StaleRecord {
                            vertex,
                            neighbour: record.vertex(),
                            weight: record.weight(),
                            matrix_weight,
                        });
                    }
                    _ => {}
                }
                if let Some(owner) = listed_by.get_mut(record.vertex()) {
                    if *owner == vertex {
                        return Err(ConsistencyViolation::DuplicateRecord {
                            vertex,
                            neighbour: record.vertex(),
                        });
                    }
                    *owner = vertex;
                }
            }
        }
        Ok(())
    }
}
