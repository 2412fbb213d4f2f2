use subiso_common::VertexId;

use crate::assignment::Assignment;
use crate::domain::{Checkpoint, DomainTable};

/// One branch level of the search: the pattern vertex being decided and the
/// candidates still to try for it.
#[derive(Clone, Debug)]
pub(crate) struct Frame {
    /// The pattern vertex this level commits.
    pub(crate) next: VertexId,
    /// Stable snapshot of the domain of `next`, taken when the level started.
    candidates: Vec<VertexId>,
    /// Index of the next candidate in `candidates` to look at.
    cursor: usize,
    /// The commit currently being explored below this level, if any.
    pub(crate) pending: Option<(VertexId, Checkpoint)>,
}

impl Frame {
    pub(crate) fn new(next: VertexId, domains: &DomainTable) -> Self {
        Self {
            next,
            candidates: domains.domain(next).to_vec(),
            cursor: 0,
            pending: None,
        }
    }

    /// Moves to the next candidate worth trying.
    ///
    /// Host vertices that are already assigned are skipped, as are
    /// candidates that propagation has removed from the live domain since
    /// the snapshot was taken.
    pub(crate) fn advance(
        &mut self,
        assignment: &Assignment,
        domains: &DomainTable,
    ) -> Option<VertexId> {
        while let Some(&candidate) = self.candidates.get(self.cursor) {
            self.cursor += 1;
            if assignment.contains(candidate) || !domains.contains(self.next, candidate) {
                continue;
            }
            return Some(candidate);
        }
        None
    }
}
