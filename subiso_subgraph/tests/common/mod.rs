#![allow(dead_code)]

use quickcheck::{Arbitrary, Gen};
use subiso_common::Graph;

/// A small host/pattern pair that brute force can still enumerate.
#[derive(Clone, Debug)]
pub struct SmallInstance {
    pub host: Graph,
    pub pattern: Graph,
}

fn arbitrary_graph(g: &mut Gen, max_vertices: u8, density: u8) -> Graph {
    let vertices = usize::from(u8::arbitrary(g) % (max_vertices + 1));
    let mut graph = Graph::with_vertices(vertices);
    for from in 0..vertices {
        for to in 0..vertices {
            if from != to && u8::arbitrary(g) % density == 0 {
                graph.add_edge(from, to);
            }
        }
    }
    graph
}

impl Arbitrary for SmallInstance {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            host: arbitrary_graph(g, 6, 2),
            pattern: arbitrary_graph(g, 4, 3),
        }
    }
}

/// Asserts that a mapping is injective and preserves every pattern edge.
#[track_caller]
pub fn assert_sound(host: &Graph, pattern: &Graph, mapping: &[usize]) {
    use subiso_common::VertexId;

    assert_eq!(mapping.len(), pattern.vertex_count(), "mapping length");
    let mut seen = std::collections::HashSet::new();
    for &h in mapping {
        assert!(h < host.vertex_count(), "image {h} out of range");
        assert!(seen.insert(h), "host vertex {h} used twice");
    }
    for (u, w) in pattern.edges() {
        let (hu, hw) = (mapping[u.as_usize()], mapping[w.as_usize()]);
        assert!(
            host.has_edge(VertexId::from(hu), VertexId::from(hw)),
            "pattern edge {u} -> {w} not mapped onto host edge {hu} -> {hw}"
        );
    }
}
