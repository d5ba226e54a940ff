//! Path finding between two locations of a [`RouteNetwork`].
//!
//! Three strategies are available:
//! 1. Exhaustive: enumerates every simple path by backtracking and keeps the one with the fewest
//!    locations. Exponential in the worst case, meant for small networks.
//! 2. Depth-first: returns the first path found by a depth-first walk, which is not necessarily
//!    the shortest.
//! 3. Breadth-first: returns a path with the minimum number of hops.
//!
//! Routes are visited in the order they were established, so all strategies are deterministic.
//! When several paths share the minimum number of hops, which one is returned depends on that
//! order; only the hop count is guaranteed.

mod breadth_first;
mod depth_first;
mod exhaustive;

pub use exhaustive::{SimplePaths, simple_paths};

use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::{Distance, RouteError, RouteNetwork};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Backtracking over every simple path, shortest in number of locations.
    Exhaustive,
    /// First path found by a depth-first walk.
    DepthFirst,
    /// Level order walk, shortest in number of hops.
    BreadthFirst,
}

/// Sequence of locations connected by routes, from origin to destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub locations: Vec<String>,
    /// Sum of the weights of the routes followed by the path.
    pub length: Distance,
}

impl Path {
    /// Builds the path of locations found by a traversal, so connected by construction.
    fn from_locations<G: RouteNetwork>(graph: &G, locations: &[&str]) -> Self {
        debug_assert!(
            is_path_connected(graph, locations),
            "Traversal returned a disconnected path: {locations:?}"
        );

        let length = locations
            .windows(2)
            .filter_map(|w| graph.route_weight(w[0], w[1]))
            .sum();

        Self {
            locations: locations.iter().map(|&l| l.to_owned()).collect(),
            length,
        }
    }

    /// Number of routes followed by the path.
    pub fn hops(&self) -> usize {
        self.locations.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<&str> {
        self.locations.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.locations.last().map(String::as_str)
    }
}

/// Finds a path from origin to destination with the given strategy.
///
/// If origin and destination are the same location the path only contains that location.
pub fn find_path<G: RouteNetwork>(
    graph: &G,
    origin: &str,
    destination: &str,
    strategy: Strategy,
) -> Result<Path, RouteError> {
    debug!("Finding {strategy} path {origin} -> {destination}");

    for name in [origin, destination] {
        if !graph.contains_location(name) {
            return Err(RouteError::LocationNotFound(name.to_owned()));
        }
    }

    let locations = if origin == destination {
        Some(vec![origin])
    } else {
        match strategy {
            Strategy::Exhaustive => exhaustive::exhaustive_path(graph, origin, destination),
            Strategy::DepthFirst => depth_first::depth_first_path(graph, origin, destination),
            Strategy::BreadthFirst => breadth_first::breadth_first_path(graph, origin, destination),
        }
    };

    let Some(locations) = locations else {
        debug!("No {strategy} path {origin} -> {destination}");
        return Err(RouteError::NoRoute {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
        });
    };

    let path = Path::from_locations(graph, &locations);
    debug!("Found {strategy} path with {} hops: {:?}", path.hops(), path.locations);
    Ok(path)
}

/// Returns true only if every location of the path has a direct route to the next one.
pub fn is_path_connected<G: RouteNetwork>(graph: &G, locations: &[impl AsRef<str>]) -> bool {
    locations
        .windows(2)
        .all(|w| graph.route_weight(w[0].as_ref(), w[1].as_ref()).is_some())
}

/// Explicit stack frame of the depth-first traversals: the location and the index of the next of
/// its exiting routes to follow.
#[derive(Debug, Clone, Copy)]
struct Frame<'a> {
    location: &'a str,
    next_route: usize,
}

impl<'a> Frame<'a> {
    const fn new(location: &'a str) -> Self {
        Self {
            location,
            next_route: 0,
        }
    }
}
