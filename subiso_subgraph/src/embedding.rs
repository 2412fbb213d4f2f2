//! The result of a successful search.

use std::fmt;

use itertools::Itertools;
use subiso_common::{Graph, VertexId};

/// An injective mapping from pattern vertices to host vertices that carries
/// every pattern edge onto a host edge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Embedding {
    /// `mapping[p]` is the host image of pattern vertex `p`.
    mapping: Vec<VertexId>,
}

impl Embedding {
    /// Wraps a mapping indexed by pattern vertex.
    #[must_use]
    pub const fn new(mapping: Vec<VertexId>) -> Self {
        Self { mapping }
    }

    /// Returns the number of mapped pattern vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Returns true for the embedding of an empty pattern.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Resolves a pattern vertex to its host image.
    #[must_use]
    pub fn get(&self, pattern: VertexId) -> Option<VertexId> {
        self.mapping.get(pattern.as_usize()).copied()
    }

    /// Iterates over `(pattern, host)` pairs in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.mapping
            .iter()
            .enumerate()
            .map(|(p, &h)| (VertexId::from(p), h))
    }

    /// The host images as raw indices, in pattern order.
    #[must_use]
    pub fn as_indices(&self) -> Vec<usize> {
        self.mapping.iter().map(|h| h.as_usize()).collect()
    }

    /// The host images as a slice, in pattern order.
    #[must_use]
    pub fn as_slice(&self) -> &[VertexId] {
        &self.mapping
    }

    /// Sorted host vertices covered by this embedding.
    #[must_use]
    pub fn image_signature(&self) -> Vec<usize> {
        let mut sig = self.as_indices();
        sig.sort_unstable();
        sig
    }

    /// Re-checks the embedding from scratch against both graphs.
    ///
    /// Every pattern vertex must be mapped, no host vertex may be used
    /// twice, and every in-range pattern edge must land on a host edge.
    #[must_use]
    pub fn is_valid_for(&self, host: &Graph, pattern: &Graph) -> bool {
        if self.len() != pattern.vertex_count() {
            return false;
        }
        if !self.mapping.iter().all_unique() {
            return false;
        }
        if self.mapping.iter().any(|h| h.as_usize() >= host.vertex_count()) {
            return false;
        }
        pattern
            .edges()
            .all(|(u, w)| match (self.get(u), self.get(w)) {
                (Some(hu), Some(hw)) => host.has_edge(hu, hw),
                _ => true,
            })
    }
}

impl fmt::Display for Embedding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.iter().map(|(p, h)| format!("{p} -> {h}")).join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedding(images: &[usize]) -> Embedding {
        Embedding::new(images.iter().copied().map(VertexId::from).collect())
    }

    #[test]
    fn test_accessors() {
        let e = embedding(&[3, 1]);
        assert_eq!(e.len(), 2);
        assert_eq!(e.get(VertexId::new(0)), Some(VertexId::new(3)));
        assert_eq!(e.get(VertexId::new(2)), None);
        assert_eq!(e.as_indices(), vec![3, 1]);
        assert_eq!(e.image_signature(), vec![1, 3]);
        assert_eq!(e.to_string(), "[v0 -> v3, v1 -> v1]");
    }

    #[test]
    fn test_is_valid_for_checks_edges_and_injectivity() {
        let host = Graph::from_edges([(0, 1), (1, 2)]);
        let pattern = Graph::from_edges([(0, 1)]);

        assert!(embedding(&[1, 2]).is_valid_for(&host, &pattern));
        assert!(!embedding(&[2, 1]).is_valid_for(&host, &pattern));
        assert!(!embedding(&[1]).is_valid_for(&host, &pattern));

        let isolated = Graph::with_vertices(2);
        assert!(!embedding(&[1, 1]).is_valid_for(&host, &isolated));
        assert!(!embedding(&[0, 5]).is_valid_for(&host, &isolated));
    }

    #[test]
    fn test_empty_embedding_is_valid_for_empty_pattern() {
        assert!(Embedding::default().is_valid_for(&Graph::new(), &Graph::new()));
        assert!(Embedding::default().is_empty());
    }
}
