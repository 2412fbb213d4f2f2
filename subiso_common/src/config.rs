//! Configuration for the subgraph isomorphism search.
//!
//! The defaults reproduce the plain search: one propagation pass per
//! invocation, a recursive engine, and out-of-range edge endpoints treated
//! as unconstrained.
//!
//! ```
//! use subiso_common::{Config, MalformedEdgePolicy, PropagationMode};
//!
//! let cfg = Config::builder()
//!     .propagation(PropagationMode::Fixpoint)
//!     .malformed_edges(MalformedEdgePolicy::Reject)
//!     .build();
//! assert_eq!(cfg.propagation, PropagationMode::Fixpoint);
//! ```

/// Global search configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// How far each propagation invocation drives the domains.
    pub propagation: PropagationMode,
    /// Whether the engine recurses or runs an explicit frame stack.
    pub strategy: SearchStrategy,
    /// What to do with edges whose endpoints lie outside the vertex range.
    pub malformed_edges: MalformedEdgePolicy,
}

impl Config {
    /// Create a new configuration.
    #[must_use]
    pub const fn new(
        propagation: PropagationMode,
        strategy: SearchStrategy,
        malformed_edges: MalformedEdgePolicy,
    ) -> Self {
        Self {
            propagation,
            strategy,
            malformed_edges,
        }
    }

    /// Starts a builder initialised with the default configuration.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Chained construction of a [`Config`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ConfigBuilder {
    /// The configuration being assembled.
    config: Config,
}

impl ConfigBuilder {
    /// Sets the propagation mode.
    #[must_use]
    pub const fn propagation(mut self, propagation: PropagationMode) -> Self {
        self.config.propagation = propagation;
        self
    }

    /// Sets the search strategy.
    #[must_use]
    pub const fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Sets the policy for malformed edges.
    #[must_use]
    pub const fn malformed_edges(mut self, policy: MalformedEdgePolicy) -> Self {
        self.config.malformed_edges = policy;
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub const fn build(self) -> Config {
        self.config
    }
}

/// Control how much pruning a single propagation invocation performs.
///
/// - SinglePass:
///     One sweep over every pattern vertex. Repeated invocations during the
///     search drive the domains towards arc consistency without
///     guaranteeing it.
/// - Fixpoint:
///     Repeat the sweep until nothing more is removed. Prunes at least as
///     much as SinglePass, at a higher cost per invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PropagationMode {
    /// One sweep per invocation.
    #[default]
    SinglePass,
    /// Sweep until no candidate is removed.
    Fixpoint,
}

/// How the backtracking engine walks the search tree.
///
/// Both strategies visit the same states in the same order and return the
/// same embedding. Iterative keeps its frames on the heap and is not bound
/// by the call stack for very large patterns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// One call frame per committed pattern vertex.
    #[default]
    Recursive,
    /// An explicit stack of search frames.
    Iterative,
}

/// Handling of edges that reference vertex ids outside a graph's range.
///
/// - Skip:
///     Such endpoints are treated as unconstrained. A pattern edge into a
///     missing vertex is never checked, so it can never fail a match.
/// - Reject:
///     Both graphs are validated before the search and malformed input is
///     reported as an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MalformedEdgePolicy {
    /// Treat out-of-range endpoints as always satisfied.
    #[default]
    Skip,
    /// Refuse to search malformed graphs.
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_single_pass_recursive_skip() {
        let cfg = Config::default();
        assert_eq!(cfg.propagation, PropagationMode::SinglePass);
        assert_eq!(cfg.strategy, SearchStrategy::Recursive);
        assert_eq!(cfg.malformed_edges, MalformedEdgePolicy::Skip);
    }

    #[test]
    fn test_builder_overrides_individual_fields() {
        let cfg = Config::builder()
            .strategy(SearchStrategy::Iterative)
            .build();
        assert_eq!(
            cfg,
            Config::new(
                PropagationMode::SinglePass,
                SearchStrategy::Iterative,
                MalformedEdgePolicy::Skip
            )
        );
    }
}
