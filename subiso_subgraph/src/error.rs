use subiso_common::GraphError;

/// Errors reported by [`crate::SubgraphMatcher::find`].
///
/// These only occur under [`subiso_common::MalformedEdgePolicy::Reject`].
/// The search itself has no failure mode other than "no embedding".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The host graph has an edge outside its vertex range.
    #[error("Malformed host graph: {0}")]
    MalformedHost(#[source] GraphError),

    /// The pattern graph has an edge outside its vertex range.
    #[error("Malformed pattern graph: {0}")]
    MalformedPattern(#[source] GraphError),
}
