//! Checks that the committed part of an assignment respects the pattern's edges.

use subiso_common::{Graph, VertexId};

use crate::assignment::Assignment;

/// The pattern's edges, extracted once as plain `(pattern, pattern)` pairs.
#[derive(Clone, Debug, Default)]
pub struct EdgeValidator {
    /// Every directed pattern edge.
    edges: Vec<(VertexId, VertexId)>,
}

impl EdgeValidator {
    /// Collects the edges of `pattern`.
    #[must_use]
    pub fn from_pattern(pattern: &Graph) -> Self {
        Self {
            edges: pattern.edges().collect(),
        }
    }

    /// Returns true if every pattern edge whose endpoints are both committed
    /// maps onto a host edge.
    ///
    /// Edges with an uncommitted endpoint are skipped. That includes
    /// endpoints outside the pattern's vertex range, which therefore never
    /// cause a failure.
    #[must_use]
    pub fn committed_edges_exist(&self, host: &Graph, assignment: &Assignment) -> bool {
        self.edges.iter().all(|&(u, w)| {
            match (assignment.get(u), assignment.get(w)) {
                (Some(hu), Some(hw)) => host.has_edge(hu, hw),
                _ => true,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId::from(i)
    }

    fn assignment_of(host_count: usize, images: &[usize]) -> Assignment {
        let mut assignment = Assignment::with_host_size(host_count);
        for &h in images {
            assignment.push(v(h));
        }
        assignment
    }

    #[test]
    fn test_only_committed_edges_are_checked() {
        let host = Graph::from_edges([(0, 1)]);
        let pattern = Graph::from_edges([(0, 1), (1, 2)]);
        let validator = EdgeValidator::from_pattern(&pattern);

        assert!(validator.committed_edges_exist(&host, &assignment_of(3, &[])));
        assert!(validator.committed_edges_exist(&host, &assignment_of(3, &[0, 1])));
        assert!(!validator.committed_edges_exist(&host, &assignment_of(3, &[1, 0])));
        assert!(!validator.committed_edges_exist(&host, &assignment_of(3, &[0, 1, 2])));
    }

    #[test]
    fn test_edge_direction_matters() {
        let host = Graph::from_edges([(1, 0)]);
        let pattern = Graph::from_edges([(0, 1)]);
        let validator = EdgeValidator::from_pattern(&pattern);

        assert!(validator.committed_edges_exist(&host, &assignment_of(2, &[1, 0])));
        assert!(!validator.committed_edges_exist(&host, &assignment_of(2, &[0, 1])));
    }

    #[test]
    fn test_out_of_range_endpoint_is_trivially_satisfied() {
        let host = Graph::with_vertices(2);
        let pattern = Graph::from_adjacency(vec![vec![9], vec![]]);
        let validator = EdgeValidator::from_pattern(&pattern);

        assert!(validator.committed_edges_exist(&host, &assignment_of(2, &[0, 1])));
    }
}
