//! Named host/pattern pairs shared by the test suites.
//!
//! Each case records the embedding the search is expected to return. When a
//! pattern embeds in several ways the expected mapping is the one reached
//! first by trying host vertices in ascending order.

use crate::Graph;

/// The expected outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// The search succeeds with exactly this mapping (indexed by pattern vertex).
    Embeds(&'static [usize]),
    /// No embedding exists.
    NoEmbedding,
}

impl Expected {
    /// Returns true if the case expects an embedding.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Embeds(_))
    }
}

/// A complete test case definition.
#[derive(Debug, Clone)]
pub struct TestCase {
    /// The name of the test case.
    pub name: &'static str,
    /// The graph to search in.
    pub host: Graph,
    /// The graph to search for.
    pub pattern: Graph,
    /// The expected result.
    pub expected: Expected,
}

impl TestCase {
    /// Looks up a case in [`ALL_TEST_CASES`] by name.
    ///
    /// # Panics
    ///
    /// Panics if no case has the given name.
    #[must_use]
    pub fn named(name: &str) -> &'static Self {
        ALL_TEST_CASES
            .iter()
            .find(|tc| tc.name == name)
            .unwrap_or_else(|| panic!("no test case named '{name}'"))
    }
}

/// A directed path `0 -> 1 -> ... -> len - 1`.
fn directed_path(len: usize) -> Graph {
    let mut graph = Graph::with_vertices(len);
    for i in 1..len {
        graph.add_edge(i - 1, i);
    }
    graph
}

/// A complete undirected graph on `n` vertices.
fn undirected_clique(n: usize) -> Graph {
    let mut graph = Graph::with_vertices(n);
    for a in 0..n {
        for b in (a + 1)..n {
            graph.add_undirected_edge(a, b);
        }
    }
    graph
}

// #####################
// GRAPHS
// #####################
lazy_static::lazy_static! {
    static ref LINE_6: Graph = directed_path(6);
    static ref LINE_4: Graph = directed_path(4);
    static ref LINE_3: Graph = directed_path(3);
    static ref SQUARE: Graph = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
    static ref SQUARE_WITH_DIAGONALS: Graph =
        Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3)]);
    static ref REFLECTION_ORIGINAL: Graph = Graph::from_edges([(0, 1), (1, 2), (1, 3), (2, 3)]);
    static ref REFLECTION: Graph = Graph::from_edges([(3, 2), (2, 1), (2, 0), (1, 0)]);
    static ref SINGLE_EDGE: Graph = Graph::from_edges([(0, 1)]);
    static ref EMPTY: Graph = Graph::new();
    static ref TRIANGLE: Graph = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
    static ref UNDIRECTED_TRIANGLE: Graph = undirected_clique(3);
    static ref UNDIRECTED_LINE_3: Graph = Graph::from_undirected_edges([(0, 1), (1, 2)]);
    static ref UNDIRECTED_LINE_4: Graph = Graph::from_undirected_edges([(0, 1), (1, 2), (2, 3)]);
    static ref UNDIRECTED_STAR_4: Graph = Graph::from_undirected_edges([(0, 1), (0, 2), (0, 3)]);
    static ref K4: Graph = undirected_clique(4);
    static ref TWO_CYCLE: Graph = Graph::from_edges([(0, 1), (1, 0)]);
    static ref SELF_LOOP: Graph = Graph::from_edges([(0, 0)]);
    static ref ISOLATED_3: Graph = Graph::with_vertices(3);
    static ref ISOLATED_2: Graph = Graph::with_vertices(2);
}

// #####################
// TEST CASES
// #####################
lazy_static::lazy_static! {
    /// Every named test case.
    pub static ref ALL_TEST_CASES: Vec<TestCase> = vec![
        TestCase {
            name: "line_4_in_line_6",
            host: LINE_6.clone(),
            pattern: LINE_4.clone(),
            expected: Expected::Embeds(&[0, 1, 2, 3]),
        },
        TestCase {
            name: "square_in_square_with_diagonals",
            host: SQUARE_WITH_DIAGONALS.clone(),
            pattern: SQUARE.clone(),
            expected: Expected::Embeds(&[0, 1, 2, 3]),
        },
        TestCase {
            name: "vertical_reflection",
            host: REFLECTION_ORIGINAL.clone(),
            pattern: REFLECTION.clone(),
            expected: Expected::Embeds(&[3, 2, 1, 0]),
        },
        TestCase {
            name: "empty_in_single_edge",
            host: SINGLE_EDGE.clone(),
            pattern: EMPTY.clone(),
            expected: Expected::Embeds(&[]),
        },
        TestCase {
            name: "empty_in_empty",
            host: EMPTY.clone(),
            pattern: EMPTY.clone(),
            expected: Expected::Embeds(&[]),
        },
        TestCase {
            name: "triangle_in_line_3",
            host: LINE_3.clone(),
            pattern: TRIANGLE.clone(),
            expected: Expected::NoEmbedding,
        },
        TestCase {
            name: "undirected_triangle_in_undirected_line_3",
            host: UNDIRECTED_LINE_3.clone(),
            pattern: UNDIRECTED_TRIANGLE.clone(),
            expected: Expected::NoEmbedding,
        },
        TestCase {
            name: "undirected_triangle_in_k4",
            host: K4.clone(),
            pattern: UNDIRECTED_TRIANGLE.clone(),
            expected: Expected::Embeds(&[0, 1, 2]),
        },
        TestCase {
            name: "undirected_line_4_in_k4",
            host: K4.clone(),
            pattern: UNDIRECTED_LINE_4.clone(),
            expected: Expected::Embeds(&[0, 1, 2, 3]),
        },
        TestCase {
            name: "undirected_star_in_undirected_line_4",
            host: UNDIRECTED_LINE_4.clone(),
            pattern: UNDIRECTED_STAR_4.clone(),
            expected: Expected::NoEmbedding,
        },
        TestCase {
            name: "line_4_in_line_3",
            host: LINE_3.clone(),
            pattern: LINE_4.clone(),
            expected: Expected::NoEmbedding,
        },
        TestCase {
            name: "two_cycle_in_line_6",
            host: LINE_6.clone(),
            pattern: TWO_CYCLE.clone(),
            expected: Expected::NoEmbedding,
        },
        TestCase {
            name: "two_cycle_in_k4",
            host: K4.clone(),
            pattern: TWO_CYCLE.clone(),
            expected: Expected::Embeds(&[0, 1]),
        },
        TestCase {
            name: "self_loop_in_k4",
            host: K4.clone(),
            pattern: SELF_LOOP.clone(),
            expected: Expected::NoEmbedding,
        },
        TestCase {
            name: "isolated_3_in_isolated_3",
            host: ISOLATED_3.clone(),
            pattern: ISOLATED_3.clone(),
            expected: Expected::Embeds(&[0, 1, 2]),
        },
        TestCase {
            name: "isolated_3_in_isolated_2",
            host: ISOLATED_2.clone(),
            pattern: ISOLATED_3.clone(),
            expected: Expected::NoEmbedding,
        },
        TestCase {
            name: "single_edge_in_empty",
            host: EMPTY.clone(),
            pattern: SINGLE_EDGE.clone(),
            expected: Expected::NoEmbedding,
        },
    ];
}
