//! Reference spanning forest for MST property verification.
//!
//! Deliberately shares no code with the engines under test: components are
//! tracked with a flat label array that is relabelled on every merge.

/// Spanning forest computed by [`reference_forest`].
#[derive(Clone, Debug)]
pub(super) struct ReferenceForest {
    /// Sum of the accepted weights across all components.
    pub total_weight: u64,
    /// Number of accepted edges.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
    /// Component label of every vertex.
    pub labels: Vec<usize>,
    /// Accepted weight inside the component holding vertex 0.
    pub root_weight: u64,
}

impl ReferenceForest {
    /// Number of vertices sharing vertex 0's component.
    pub(super) fn root_size(&self) -> usize {
        let root = self.labels[0];
        self.labels.iter().filter(|&&label| label == root).count()
    }
}

/// Computes a minimum spanning forest of the given distinct-pair edge set.
pub(super) fn reference_forest(
    vertex_count: usize,
    edges: &[(usize, usize, u32)],
) -> ReferenceForest {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|&(source, target, weight)| (weight, source, target));

    let mut labels: Vec<usize> = (0..vertex_count).collect();
    let mut accepted = Vec::new();
    for (source, target, weight) in sorted {
        let (keep, replace) = (labels[source], labels[target]);
        if keep == replace {
            continue;
        }
        for label in &mut labels {
            if *label == replace {
                *label = keep;
            }
        }
        accepted.push((source, weight));
    }

    let root = labels[0];
    let root_weight = accepted
        .iter()
        .filter(|&&(source, _)| labels[source] == root)
        .map(|&(_, weight)| u64::from(weight))
        .sum();
    let mut distinct = labels.clone();
    distinct.sort_unstable();
    distinct.dedup();

    ReferenceForest {
        total_weight: accepted.iter().map(|&(_, weight)| u64::from(weight)).sum(),
        edge_count: accepted.len(),
        component_count: distinct.len(),
        labels,
        root_weight,
    }
}
