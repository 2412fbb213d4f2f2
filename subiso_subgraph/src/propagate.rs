//! Structural pruning of the domain table.
//!
//! A candidate `c` for pattern vertex `x` survives only if every pattern
//! successor `y` of `x` still has some candidate that is a host successor of
//! `c`. This is an arc-consistency style relaxation and it is sound: no
//! candidate that takes part in an embedding extending the committed prefix
//! is ever removed.

use subiso_common::{Graph, PropagationMode, VertexId};

use crate::domain::DomainTable;

/// Prunes domains against the edges of a host and a pattern graph.
#[derive(Clone, Copy, Debug)]
pub struct Propagator<'g> {
    /// The graph being searched in.
    host: &'g Graph,
    /// The graph being searched for.
    pattern: &'g Graph,
}

impl<'g> Propagator<'g> {
    /// Creates a propagator over the given graphs.
    #[must_use]
    pub const fn new(host: &'g Graph, pattern: &'g Graph) -> Self {
        Self { host, pattern }
    }

    /// Runs one sweep over every pattern vertex with successors.
    ///
    /// Removals are visible to the rest of the sweep. Pattern vertices
    /// without successors are left alone, and pattern successors outside
    /// the table are ignored. Returns true if any candidate was removed.
    pub fn pass(&self, domains: &mut DomainTable) -> bool {
        let mut changed = false;
        for x in (0..domains.pattern_count()).map(VertexId::from) {
            let successors = self.pattern.successors(x);
            if successors.is_empty() {
                continue;
            }
            let candidates = domains.domain(x).to_vec();
            for candidate in candidates {
                let supported = successors
                    .iter()
                    .filter(|y| y.as_usize() < domains.pattern_count())
                    .all(|&y| self.has_support(domains, candidate, y));
                if !supported {
                    changed |= domains.remove(x, candidate);
                }
            }
        }
        changed
    }

    /// Repeats [`Propagator::pass`] until nothing more is removed.
    pub fn to_fixpoint(&self, domains: &mut DomainTable) -> bool {
        let mut changed = false;
        while self.pass(domains) {
            changed = true;
        }
        changed
    }

    /// Runs the amount of propagation the mode asks for.
    pub fn run(&self, domains: &mut DomainTable, mode: PropagationMode) -> bool {
        match mode {
            PropagationMode::SinglePass => self.pass(domains),
            PropagationMode::Fixpoint => self.to_fixpoint(domains),
        }
    }

    /// Does some candidate of `neighbor` sit on a host edge out of `host`?
    fn has_support(&self, domains: &DomainTable, host: VertexId, neighbor: VertexId) -> bool {
        self.host
            .successors(host)
            .iter()
            .any(|&succ| domains.contains(neighbor, succ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId::from(i)
    }

    #[test]
    fn test_pass_drops_candidates_without_successors() {
        // host: 0 -> 1 -> 2, pattern: 0 -> 1
        let host = Graph::from_edges([(0, 1), (1, 2)]);
        let pattern = Graph::from_edges([(0, 1)]);
        let mut domains = DomainTable::full(2, 3);

        assert!(Propagator::new(&host, &pattern).pass(&mut domains));
        assert_eq!(domains.domain(v(0)), &[v(0), v(1)]);
        assert_eq!(domains.domain(v(1)), &[v(0), v(1), v(2)]);
    }

    #[test]
    fn test_vertices_without_successors_are_exempt() {
        let host = Graph::with_vertices(3);
        let pattern = Graph::with_vertices(2);
        let mut domains = DomainTable::full(2, 3);

        assert!(!Propagator::new(&host, &pattern).pass(&mut domains));
        assert_eq!(domains, DomainTable::full(2, 3));
    }

    #[test]
    fn test_single_pass_is_not_a_fixpoint() {
        // host: 0 -> 1 -> 2 -> 3, pattern: 0 -> 1 -> 2
        // One sweep handles vertex 0 before vertex 1 has been pruned.
        let host = Graph::from_edges([(0, 1), (1, 2), (2, 3)]);
        let pattern = Graph::from_edges([(0, 1), (1, 2)]);
        let propagator = Propagator::new(&host, &pattern);

        let mut single = DomainTable::full(3, 4);
        propagator.pass(&mut single);
        assert_eq!(single.domain(v(0)), &[v(0), v(1), v(2)]);
        assert_eq!(single.domain(v(1)), &[v(0), v(1), v(2)]);

        let mut fixpoint = DomainTable::full(3, 4);
        assert!(propagator.to_fixpoint(&mut fixpoint));
        assert_eq!(fixpoint.domain(v(0)), &[v(0), v(1)]);
        assert_eq!(fixpoint.domain(v(1)), &[v(0), v(1), v(2)]);
        assert!(!propagator.pass(&mut fixpoint));
    }

    #[test]
    fn test_collapsed_neighbor_restricts_candidates() {
        let host = Graph::from_edges([(0, 1), (2, 3)]);
        let pattern = Graph::from_edges([(0, 1)]);
        let mut domains = DomainTable::full(2, 4);
        domains.collapse(v(1), v(3));

        Propagator::new(&host, &pattern).run(&mut domains, PropagationMode::SinglePass);
        assert_eq!(domains.domain(v(0)), &[v(2)]);
    }

    #[test]
    fn test_out_of_range_pattern_successor_is_ignored() {
        let host = Graph::with_vertices(2);
        let pattern = Graph::from_adjacency(vec![vec![7]]);
        let mut domains = DomainTable::full(1, 2);

        assert!(!Propagator::new(&host, &pattern).pass(&mut domains));
        assert_eq!(domains.domain(v(0)), &[v(0), v(1)]);
    }
}
