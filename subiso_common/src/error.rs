use crate::VertexId;

/// Errors produced when checking a graph for structural well-formedness.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge points at a vertex id outside the graph's declared range.
    #[error("Edge {from} -> {to} references a vertex outside 0..{vertex_count}")]
    EdgeOutOfRange {
        /// The edge's tail.
        from: VertexId,
        /// The edge's head.
        to: VertexId,
        /// The number of vertices the graph declares.
        vertex_count: usize,
    },
}
