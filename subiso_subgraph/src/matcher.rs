//! Entry points for subgraph isomorphism searches.
//!
//! [`find_subgraph`] runs a search with the default configuration and no
//! observer. [`SubgraphMatcher`] exposes the configuration and lets callers
//! inject a [`SearchObserver`].
//!
//! There is no cancellation or timeout inside the search. The problem is
//! NP-complete and the worst case is exponential in the pattern size, so
//! callers that need a deadline have to run the search somewhere they can
//! abandon it.

use subiso_common::{Config, Graph, MalformedEdgePolicy};
use tracing::{debug, info};

use crate::assignment::Assignment;
use crate::domain::DomainTable;
use crate::engine::SearchEngine;
use crate::observer::{NoopObserver, SearchObserver};
use crate::{Embedding, SearchError};

/// Finds one embedding of `pattern` in `host`, if any exists.
///
/// Host vertices are tried in ascending order, so the result is the
/// lexicographically smallest embedding and repeated calls agree.
#[must_use]
pub fn find_subgraph(host: &Graph, pattern: &Graph) -> Option<Embedding> {
    // The default policy skips malformed edges, so `find` cannot fail here.
    SubgraphMatcher::new(host, pattern)
        .find()
        .unwrap_or_default()
}

/// A configured search for `pattern` inside `host`.
pub struct SubgraphMatcher<'g, 'o> {
    /// The graph to search in.
    host: &'g Graph,
    /// The graph to search for.
    pattern: &'g Graph,
    /// Configuration settings for the search.
    config: Config,
    /// Optional observer notified as the search progresses.
    observer: Option<&'o mut dyn SearchObserver>,
}

impl<'g, 'o> SubgraphMatcher<'g, 'o> {
    /// Creates a matcher with the default configuration.
    #[must_use]
    pub fn new(host: &'g Graph, pattern: &'g Graph) -> Self {
        Self {
            host,
            pattern,
            config: Config::default(),
            observer: None,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.config = *config;
        self
    }

    /// Attaches an observer.
    #[must_use]
    pub fn with_observer(mut self, observer: &'o mut dyn SearchObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Runs the search.
    ///
    /// Returns `Ok(None)` when no embedding exists.
    ///
    /// # Errors
    ///
    /// Under [`MalformedEdgePolicy::Reject`], returns an error if either
    /// graph has an edge pointing outside its vertex range.
    pub fn find(self) -> Result<Option<Embedding>, SearchError> {
        if self.config.malformed_edges == MalformedEdgePolicy::Reject {
            self.host.validate().map_err(SearchError::MalformedHost)?;
            self.pattern
                .validate()
                .map_err(SearchError::MalformedPattern)?;
        }

        let pattern_count = self.pattern.vertex_count();
        let host_count = self.host.vertex_count();
        info!(
            "starting subgraph search: pattern vertices: {}, host vertices: {}",
            pattern_count, host_count
        );
        debug!(
            "propagation: {:?}, strategy: {:?}",
            self.config.propagation, self.config.strategy
        );

        let mut noop = NoopObserver;
        let observer: &mut dyn SearchObserver = match self.observer {
            Some(observer) => observer,
            None => &mut noop,
        };
        observer.on_search_start(pattern_count, host_count);

        let mut assignment = Assignment::with_host_size(host_count);
        let mut domains = DomainTable::full(pattern_count, host_count);

        let found = {
            let mut engine =
                SearchEngine::new(self.host, self.pattern, self.config.propagation, &mut *observer);
            engine.run(self.config.strategy, &mut assignment, &mut domains)
        };
        observer.on_search_end(found);

        info!("search complete: embedding found: {}", found);

        Ok(found.then(|| assignment.into_embedding()))
    }
}
