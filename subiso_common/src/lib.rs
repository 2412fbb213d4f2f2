//! Common types shared across the subiso workspace.
//!
//! This crate provides the graph model searched by `subiso_subgraph`, the
//! search configuration, the error type for malformed graphs, and a set of
//! named test cases used by the test suites of the other crates.

mod config;
mod error;
mod graph;
mod test_cases;
mod vertex;

pub use crate::config::*;
pub use crate::error::*;
pub use crate::graph::*;
pub use crate::test_cases::*;
pub use crate::vertex::*;
