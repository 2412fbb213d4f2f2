//! Candidate sets for every pattern vertex, with an undo trail.
//!
//! Each domain is kept sorted ascending so candidates are always tried in
//! host-vertex-id order. Every removal is appended to the trail; restoring a
//! [`Checkpoint`] replays the trail backwards, which is how the engine undoes
//! a failed branch without copying the whole table.

use std::fmt;

use contracts::*;
use itertools::Itertools;
use subiso_common::VertexId;

/// A position in the [`DomainTable`] trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

/// Per-pattern-vertex candidate host vertices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainTable {
    /// `domains[p]` is the ascending candidate list of pattern vertex `p`.
    domains: Vec<Vec<VertexId>>,
    /// Removed `(pattern, host)` pairs, oldest first.
    trail: Vec<(VertexId, VertexId)>,
}

impl DomainTable {
    /// Every pattern vertex may map to every host vertex.
    #[must_use]
    pub fn full(pattern_count: usize, host_count: usize) -> Self {
        let all_hosts: Vec<VertexId> = (0..host_count).map(VertexId::from).collect();
        Self {
            domains: vec![all_hosts; pattern_count],
            trail: Vec::new(),
        }
    }

    /// Number of pattern vertices the table covers.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.domains.len()
    }

    /// The current candidates of `pattern`, ascending.
    #[must_use]
    pub fn domain(&self, pattern: VertexId) -> &[VertexId] {
        self.domains
            .get(pattern.as_usize())
            .map_or(&[], Vec::as_slice)
    }

    /// Returns true if `host` is still a candidate for `pattern`.
    #[must_use]
    pub fn contains(&self, pattern: VertexId, host: VertexId) -> bool {
        self.domain(pattern).binary_search(&host).is_ok()
    }

    /// Returns true if some pattern vertex has no candidates left.
    #[must_use]
    pub fn is_wiped_out(&self) -> bool {
        self.domains.iter().any(Vec::is_empty)
    }

    /// Total number of remaining candidates across all pattern vertices.
    #[must_use]
    pub fn total_candidates(&self) -> usize {
        self.domains.iter().map(Vec::len).sum()
    }

    /// Removes `host` from the domain of `pattern`.
    ///
    /// Returns false if it was not a candidate.
    pub fn remove(&mut self, pattern: VertexId, host: VertexId) -> bool {
        let Some(domain) = self.domains.get_mut(pattern.as_usize()) else {
            return false;
        };
        match domain.binary_search(&host) {
            Ok(pos) => {
                domain.remove(pos);
                self.trail.push((pattern, host));
                true
            }
            Err(_) => false,
        }
    }

    /// Shrinks the domain of `pattern` to the single candidate `host`.
    #[debug_requires(self.contains(pattern, host))]
    #[debug_ensures(self.domain(pattern) == [host])]
    pub fn collapse(&mut self, pattern: VertexId, host: VertexId) {
        let domain = &mut self.domains[pattern.as_usize()];
        let removed = std::mem::replace(domain, vec![host]);
        self.trail.extend(
            removed
                .into_iter()
                .filter(|&other| other != host)
                .map(|other| (pattern, other)),
        );
    }

    /// Marks the current state so it can be restored later.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.trail.len())
    }

    /// Undoes every removal made since `checkpoint` was taken.
    #[debug_requires(checkpoint.0 <= self.trail.len())]
    #[debug_ensures(self.trail.len() == checkpoint.0)]
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        while self.trail.len() > checkpoint.0 {
            let Some((pattern, host)) = self.trail.pop() else {
                break;
            };
            let domain = &mut self.domains[pattern.as_usize()];
            if let Err(pos) = domain.binary_search(&host) {
                domain.insert(pos, host);
            }
        }
    }
}

impl fmt::Display for DomainTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pattern, domain) in self.domains.iter().enumerate() {
            if domain.is_empty() {
                writeln!(f, "{}: none", VertexId::from(pattern))?;
            } else {
                writeln!(
                    f,
                    "{}: {{{}}}",
                    VertexId::from(pattern),
                    domain.iter().join(", ")
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId::from(i)
    }

    #[test]
    fn test_full_table_is_ascending_host_range() {
        let table = DomainTable::full(2, 3);
        assert_eq!(table.pattern_count(), 2);
        assert_eq!(table.domain(v(1)), &[v(0), v(1), v(2)]);
        assert_eq!(table.total_candidates(), 6);
        assert!(!table.is_wiped_out());
    }

    #[test]
    fn test_full_table_over_empty_host_is_wiped_out() {
        let table = DomainTable::full(1, 0);
        assert!(table.is_wiped_out());
        assert!(!DomainTable::full(0, 0).is_wiped_out());
    }

    #[test]
    fn test_remove_reports_membership() {
        let mut table = DomainTable::full(1, 3);
        assert!(table.remove(v(0), v(1)));
        assert!(!table.remove(v(0), v(1)));
        assert!(!table.remove(v(5), v(0)));
        assert_eq!(table.domain(v(0)), &[v(0), v(2)]);
    }

    #[test]
    fn test_collapse_then_restore() {
        let mut table = DomainTable::full(2, 4);
        let checkpoint = table.checkpoint();
        table.collapse(v(0), v(2));
        table.remove(v(1), v(3));
        assert_eq!(table.domain(v(0)), &[v(2)]);

        table.restore(checkpoint);
        assert_eq!(table, DomainTable::full(2, 4));
    }

    #[test]
    fn test_nested_checkpoints_restore_in_order() {
        let mut table = DomainTable::full(1, 4);
        table.remove(v(0), v(0));
        let outer = table.checkpoint();
        table.remove(v(0), v(3));
        let inner = table.checkpoint();
        table.collapse(v(0), v(1));

        table.restore(inner);
        assert_eq!(table.domain(v(0)), &[v(1), v(2)]);
        table.restore(outer);
        assert_eq!(table.domain(v(0)), &[v(1), v(2), v(3)]);
    }

    #[test]
    fn test_display_lists_every_vertex() {
        let mut table = DomainTable::full(2, 2);
        table.remove(v(1), v(0));
        table.remove(v(1), v(1));
        assert_eq!(table.to_string(), "v0: {v0, v1}\nv1: none\n");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use quickcheck::quickcheck;

    quickcheck! {
        fn prop_restore_undoes_removals(removals: Vec<(u8, u8)>, split: usize) -> bool {
            let mut table = DomainTable::full(4, 6);
            let split = if removals.is_empty() { 0 } else { split % removals.len() };
            for &(p, h) in &removals[..split] {
                table.remove(VertexId::from(usize::from(p % 4)), VertexId::from(usize::from(h % 6)));
            }
            let before = table.clone();
            let checkpoint = table.checkpoint();
            for &(p, h) in &removals[split..] {
                table.remove(VertexId::from(usize::from(p % 4)), VertexId::from(usize::from(h % 6)));
            }
            table.restore(checkpoint);
            table == before
        }
    }
}
