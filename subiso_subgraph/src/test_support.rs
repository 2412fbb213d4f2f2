//! Helpers shared by the unit and integration tests.

use std::sync::Once;

use itertools::Itertools;
use subiso_common::{Graph, VertexId};

use crate::domain::DomainTable;
use crate::observer::SearchObserver;

static INIT: Once = Once::new();

/// Configures logging for the test runner.
pub fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Lexicographically first embedding, found by trying every injective map.
///
/// Only usable for tiny graphs. Edges into vertices outside the pattern's
/// range are ignored, matching the search's default policy.
#[must_use]
pub fn brute_force_first(host: &Graph, pattern: &Graph) -> Option<Vec<usize>> {
    let k = pattern.vertex_count();
    if k == 0 {
        return Some(Vec::new());
    }
    (0..host.vertex_count()).permutations(k).find(|images| {
        pattern.edges().all(|(u, w)| {
            match (images.get(u.as_usize()), images.get(w.as_usize())) {
                (Some(&hu), Some(&hw)) => host.has_edge(VertexId::from(hu), VertexId::from(hw)),
                _ => true,
            }
        })
    })
}

/// Returns true if any embedding exists, by exhaustive enumeration.
#[must_use]
pub fn brute_force_exists(host: &Graph, pattern: &Graph) -> bool {
    brute_force_first(host, pattern).is_some()
}

/// A single observer notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// See [`SearchObserver::on_search_start`].
    Start(usize, usize),
    /// Branch on a pattern vertex; carries the candidate count.
    Branch(VertexId, usize),
    /// See [`SearchObserver::on_commit`].
    Commit(VertexId, VertexId, usize),
    /// See [`SearchObserver::on_backtrack`].
    Backtrack(VertexId, VertexId, usize),
    /// See [`SearchObserver::on_propagate`].
    Propagate(bool),
    /// See [`SearchObserver::on_search_end`].
    End(bool),
}

/// Observer that records every notification in order.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    /// Events in the order they were received.
    pub events: Vec<SearchEvent>,
}

impl SearchObserver for EventRecorder {
    fn on_search_start(&mut self, pattern_count: usize, host_count: usize) {
        self.events.push(SearchEvent::Start(pattern_count, host_count));
    }

    fn on_branch(&mut self, next: VertexId, domains: &DomainTable) {
        self.events
            .push(SearchEvent::Branch(next, domains.domain(next).len()));
    }

    fn on_commit(&mut self, pattern: VertexId, host: VertexId, depth: usize) {
        self.events.push(SearchEvent::Commit(pattern, host, depth));
    }

    fn on_backtrack(&mut self, pattern: VertexId, host: VertexId, depth: usize) {
        self.events.push(SearchEvent::Backtrack(pattern, host, depth));
    }

    fn on_propagate(&mut self, removed_any: bool) {
        self.events.push(SearchEvent::Propagate(removed_any));
    }

    fn on_search_end(&mut self, found: bool) {
        self.events.push(SearchEvent::End(found));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_first_is_lexicographic() {
        let host = Graph::from_edges([(2, 1), (0, 3), (1, 0)]);
        let pattern = Graph::from_edges([(0, 1)]);
        assert_eq!(brute_force_first(&host, &pattern), Some(vec![0, 3]));
    }

    #[test]
    fn test_brute_force_empty_pattern() {
        assert_eq!(brute_force_first(&Graph::new(), &Graph::new()), Some(vec![]));
        assert!(!brute_force_exists(&Graph::new(), &Graph::with_vertices(1)));
    }
}
