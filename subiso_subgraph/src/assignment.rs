//! The committed prefix of a search: pattern vertex `i` maps to `order[i]`.

use contracts::*;
use subiso_common::VertexId;

use crate::Embedding;

/// An injective partial mapping from the first `len()` pattern vertices to
/// host vertices.
#[derive(Clone, Debug, Default)]
pub struct Assignment {
    /// Host vertex chosen for each committed pattern vertex, in pattern order.
    order: Vec<VertexId>,
    /// `used[h]` is true iff host vertex `h` appears in `order`.
    used: Vec<bool>,
}

impl Assignment {
    /// Creates an empty assignment over a host with `host_count` vertices.
    #[must_use]
    pub fn with_host_size(host_count: usize) -> Self {
        Self {
            order: Vec::new(),
            used: vec![false; host_count],
        }
    }

    /// Checks that the host-side bitmap agrees with the committed prefix.
    ///
    /// Holding this means no host vertex is used twice.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let marked = self.used.iter().filter(|&&u| u).count();
        marked == self.order.len() && self.order.iter().all(|&h| self.contains(h))
    }

    /// Commits `host` as the image of the next pattern vertex.
    #[debug_requires(!self.contains(host), "host vertex is already assigned")]
    #[debug_ensures(self.is_consistent())]
    pub fn push(&mut self, host: VertexId) {
        let slot = host.as_usize();
        if slot >= self.used.len() {
            self.used.resize(slot + 1, false);
        }
        self.used[slot] = true;
        self.order.push(host);
    }

    /// Uncommits the most recently committed pattern vertex.
    #[debug_ensures(self.is_consistent())]
    pub fn pop(&mut self) -> Option<VertexId> {
        let host = self.order.pop()?;
        self.used[host.as_usize()] = false;
        Some(host)
    }

    /// Returns true if `host` is already the image of some pattern vertex.
    #[must_use]
    pub fn contains(&self, host: VertexId) -> bool {
        self.used.get(host.as_usize()).copied().unwrap_or(false)
    }

    /// Returns the image of `pattern`, if it has been committed.
    #[must_use]
    pub fn get(&self, pattern: VertexId) -> Option<VertexId> {
        self.order.get(pattern.as_usize()).copied()
    }

    /// Returns the number of committed pattern vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing has been committed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The committed images in pattern-vertex order.
    #[must_use]
    pub fn as_slice(&self) -> &[VertexId] {
        &self.order
    }

    /// Converts the committed prefix into an embedding.
    #[must_use]
    pub fn into_embedding(self) -> Embedding {
        Embedding::new(self.order)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, quickcheck};

    #[derive(Clone, Debug)]
    struct ArbitraryAssignmentOp {
        host: VertexId,
        is_pop: bool,
    }

    impl Arbitrary for ArbitraryAssignmentOp {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                host: VertexId::new(u32::arbitrary(g) % 16),
                is_pop: bool::arbitrary(g),
            }
        }
    }

    quickcheck! {
        fn prop_assignment_ops_maintain_consistency(ops: Vec<ArbitraryAssignmentOp>) -> bool {
            let mut assignment = Assignment::with_host_size(16);
            for op in ops {
                if op.is_pop {
                    assignment.pop();
                } else if !assignment.contains(op.host) {
                    assignment.push(op.host);
                }
                if !assignment.is_consistent() {
                    return false;
                }
            }
            true
        }
    }
}
