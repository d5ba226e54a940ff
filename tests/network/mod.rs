use std::sync::LazyLock;

use waypath::{Distance, RouteGraph};

/// Scenario graph, every route bidirectional with unit weight:
///
/// ```text
///          M
///        /   \
///       C     R
///      / \   / \
///     A   E P   T
/// ```
pub static CITY_GRAPH: LazyLock<RouteGraph> = LazyLock::new(|| {
    let mut graph = RouteGraph::new();
    for name in ["M", "C", "R", "A", "E", "P", "T"] {
        graph.insert_location(name);
    }
    for (origin, destination) in [
        ("M", "C"),
        ("M", "R"),
        ("C", "A"),
        ("C", "E"),
        ("R", "P"),
        ("R", "T"),
    ] {
        graph.establish_route(origin, destination, true).unwrap();
    }
    graph
});

/// Denser graph with cycles, one way routes and a location (Z) nobody can reach.
///
/// ```text
///   A ===> B ===> C ---> D
///   ^      |      ^      |
///   |      v      |      v
///   F <=== E ---> G <=== H      Z ---> A
/// ```
pub static MESH_GRAPH: LazyLock<RouteGraph> = LazyLock::new(|| {
    let mut graph = RouteGraph::new();
    for name in ["A", "B", "C", "D", "E", "F", "G", "H", "Z"] {
        graph.insert_location(name);
    }
    for (origin, destination, weight, bidirectional) in [
        ("A", "B", 2.0, true),
        ("B", "C", 2.0, true),
        ("C", "D", 1.0, false),
        ("B", "E", 1.5, false),
        ("D", "H", 1.0, false),
        ("E", "F", 3.0, true),
        ("F", "A", 1.0, false),
        ("E", "G", 0.5, false),
        ("G", "C", 0.5, false),
        ("H", "G", 2.5, true),
        ("Z", "A", 1.0, false),
    ] {
        graph
            .establish_weighted_route(
                origin,
                destination,
                Distance::from_units(weight),
                bidirectional,
            )
            .unwrap();
    }
    graph
});

/// Deterministic shuffle of `0..n` (linear congruential generator).
pub fn shuffled(n: usize, seed: u64) -> Vec<usize> {
    let mut values: Vec<usize> = (0..n).collect();
    let mut state = seed;
    for i in (1..n).rev() {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let j = (state >> 33) as usize % (i + 1);
        values.swap(i, j);
    }
    values
}

pub fn location_name(i: usize) -> String {
    format!("L{i:04}")
}
