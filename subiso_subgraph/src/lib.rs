//! Subgraph isomorphism search.
//!
//! Decides whether a pattern graph embeds as a (non-induced) subgraph of a
//! host graph and, if it does, returns one embedding. The search keeps a
//! candidate domain per pattern vertex, prunes it by structural propagation,
//! and commits pattern vertices one at a time in id order, backtracking on
//! failure.
//!
//! ```
//! use subiso_common::Graph;
//! use subiso_subgraph::find_subgraph;
//!
//! let host = Graph::from_edges([(0, 1), (1, 2), (2, 3)]);
//! let pattern = Graph::from_edges([(0, 1), (1, 2)]);
//! let embedding = find_subgraph(&host, &pattern).expect("a path embeds in a longer path");
//! assert_eq!(embedding.as_indices(), vec![0, 1, 2]);
//! ```

mod assignment;
mod domain;
mod embedding;
mod engine;
mod error;
mod matcher;
mod observer;
mod propagate;
mod validate;

pub mod test_support;

pub use assignment::Assignment;
pub use domain::{Checkpoint, DomainTable};
pub use embedding::Embedding;
pub use error::SearchError;
pub use matcher::{SubgraphMatcher, find_subgraph};
pub use observer::{NoopObserver, SearchObserver, SearchStats, StatsSnapshot, TracingObserver};
pub use propagate::Propagator;
pub use validate::EdgeValidator;
