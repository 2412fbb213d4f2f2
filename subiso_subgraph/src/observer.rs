//! Hooks into the search for logging and statistics.
//!
//! The engine calls a [`SearchObserver`] at fixed points: when a branch level
//! starts, on every commit and backtrack, and after every propagation. All
//! methods default to doing nothing, so the search stays free of side effects
//! unless an observer is injected.

use subiso_common::VertexId;
use tracing::{debug, trace};

use crate::domain::DomainTable;

/// Receives notifications as the engine explores the search tree.
pub trait SearchObserver {
    /// The driver is about to start searching.
    fn on_search_start(&mut self, _pattern_count: usize, _host_count: usize) {}

    /// A branch level for `next` starts, after validation and propagation.
    fn on_branch(&mut self, _next: VertexId, _domains: &DomainTable) {}

    /// `pattern` was tentatively committed to `host`; `depth` counts commits.
    fn on_commit(&mut self, _pattern: VertexId, _host: VertexId, _depth: usize) {}

    /// The commit of `pattern` to `host` failed and was undone.
    fn on_backtrack(&mut self, _pattern: VertexId, _host: VertexId, _depth: usize) {}

    /// A propagation invocation finished.
    fn on_propagate(&mut self, _removed_any: bool) {}

    /// The search finished.
    fn on_search_end(&mut self, _found: bool) {}
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Observer that forwards events to `tracing`.
///
/// Branch events carry a dump of the whole domain table at trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_search_start(&mut self, pattern_count: usize, host_count: usize) {
        debug!(
            "search start: pattern vertices: {}, host vertices: {}",
            pattern_count, host_count
        );
    }

    fn on_branch(&mut self, next: VertexId, domains: &DomainTable) {
        trace!(
            "branching on {} with {} candidates\n{}",
            next,
            domains.domain(next).len(),
            domains
        );
    }

    fn on_commit(&mut self, pattern: VertexId, host: VertexId, depth: usize) {
        trace!("commit {} -> {} (depth {})", pattern, host, depth);
    }

    fn on_backtrack(&mut self, pattern: VertexId, host: VertexId, depth: usize) {
        trace!("backtrack {} -> {} (depth {})", pattern, host, depth);
    }

    fn on_search_end(&mut self, found: bool) {
        debug!("search end: found = {}", found);
    }
}

/// Counters gathered over one or more searches.
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    branches: u64,
    commits: u64,
    backtracks: u64,
    propagations: u64,
    pruning_propagations: u64,
    max_depth: usize,
}

/// A point-in-time copy of [`SearchStats`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Branch levels entered.
    pub branches: u64,
    /// Tentative commits.
    pub commits: u64,
    /// Commits undone after their branch failed.
    pub backtracks: u64,
    /// Propagation invocations.
    pub propagations: u64,
    /// Propagation invocations that removed at least one candidate.
    pub pruning_propagations: u64,
    /// Deepest commit reached.
    pub max_depth: usize,
}

impl SearchStats {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the counters for display/reporting.
    #[must_use]
    pub const fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            branches: self.branches,
            commits: self.commits,
            backtracks: self.backtracks,
            propagations: self.propagations,
            pruning_propagations: self.pruning_propagations,
            max_depth: self.max_depth,
        }
    }
}

impl SearchObserver for SearchStats {
    fn on_branch(&mut self, _next: VertexId, _domains: &DomainTable) {
        self.branches += 1;
    }

    fn on_commit(&mut self, _pattern: VertexId, _host: VertexId, depth: usize) {
        self.commits += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    fn on_backtrack(&mut self, _pattern: VertexId, _host: VertexId, _depth: usize) {
        self.backtracks += 1;
    }

    fn on_propagate(&mut self, removed_any: bool) {
        self.propagations += 1;
        if removed_any {
            self.pruning_propagations += 1;
        }
    }
}
