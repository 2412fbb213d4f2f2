use contracts::*;
use std::fmt;

/// Dense identifier of a vertex inside a single [`crate::Graph`].
///
/// Host and pattern graphs both number their vertices `0..n`, so a
/// `VertexId` only has meaning relative to the graph it was taken from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    /// The underlying raw integer index.
    inner: u32,
}

impl VertexId {
    /// Creates a new vertex identifier from a raw integer.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self { inner: id }
    }

    /// Creates a vertex identifier from an array index.
    #[must_use]
    #[debug_requires(u32::try_from(index).is_ok(), "vertex index exceeds u32 range")]
    #[debug_ensures(ret.as_usize() == index)]
    pub fn from_index(index: usize) -> Self {
        Self {
            inner: index as u32,
        }
    }

    /// Returns the index as a usize for array access.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.inner as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.inner)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        Self::from_index(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(id: VertexId) -> Self {
        id.as_usize()
    }
}

impl From<VertexId> for u32 {
    #[inline]
    fn from(id: VertexId) -> Self {
        id.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id_round_trips_through_usize() {
        let id = VertexId::from(42usize);
        assert_eq!(id.as_usize(), 42);
        assert_eq!(usize::from(id), 42);
        assert_eq!(u32::from(id), 42);
    }

    #[test]
    fn test_vertex_id_ordering_follows_index() {
        assert!(VertexId::new(1) < VertexId::new(2));
        assert_eq!(VertexId::new(7).to_string(), "v7");
    }
}
