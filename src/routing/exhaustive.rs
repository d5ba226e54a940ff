use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::RouteNetwork;
use crate::routing::Frame;

/// Lazy iterator over every simple path (no location repeated) from origin to destination, in the
/// order a backtracking walk over the exiting routes discovers them.
///
/// The walk keeps an explicit stack instead of recursing, so the depth of the network is not
/// bounded by the call stack.
#[derive(Debug)]
pub struct SimplePaths<'a, G> {
    graph: &'a G,
    destination: &'a str,
    /// Locations of the current partial path, each with the next route to try.
    stack: Vec<Frame<'a>>,
    on_path: FxHashSet<&'a str>,
    /// Set when origin and destination are the same location.
    trivial: Option<&'a str>,
}

/// Enumerates every simple path from origin to destination.
/// Yields nothing if the origin doesn't exist or the destination is unreachable.
pub fn simple_paths<'a, G: RouteNetwork>(
    graph: &'a G,
    origin: &'a str,
    destination: &'a str,
) -> SimplePaths<'a, G> {
    let mut paths = SimplePaths {
        graph,
        destination,
        stack: vec![],
        on_path: FxHashSet::default(),
        trivial: None,
    };

    if !graph.contains_location(origin) {
        return paths;
    }

    if origin == destination {
        paths.trivial = Some(origin);
    } else {
        paths.stack.push(Frame::new(origin));
        paths.on_path.insert(origin);
    }

    paths
}

impl<'a, G: RouteNetwork> Iterator for SimplePaths<'a, G> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(origin) = self.trivial.take() {
            return Some(vec![origin]);
        }

        let graph = self.graph;

        while let Some(frame) = self.stack.last_mut() {
            let Some(route) = graph.exiting_routes(frame.location).get(frame.next_route) else {
                // every route explored: backtrack
                let location = frame.location;
                self.stack.pop();
                self.on_path.remove(location);
                continue;
            };
            frame.next_route += 1;

            let neighbor = route.destination.as_str();
            if self.on_path.contains(neighbor) {
                continue;
            }

            if neighbor == self.destination {
                let path: Vec<_> = self
                    .stack
                    .iter()
                    .map(|f| f.location)
                    .chain([neighbor])
                    .collect();
                trace!("Found simple path {path:?}");
                return Some(path);
            }

            self.on_path.insert(neighbor);
            self.stack.push(Frame::new(neighbor));
        }

        None
    }
}

/// Returns the simple path with the fewest locations among all the simple paths from origin to
/// destination. Ties are broken in favor of the path discovered first.
pub fn exhaustive_path<'a, G: RouteNetwork>(
    graph: &'a G,
    origin: &'a str,
    destination: &'a str,
) -> Option<Vec<&'a str>> {
    let mut explored = 0;

    let shortest = simple_paths(graph, origin, destination)
        .inspect(|_| explored += 1)
        .min_by_key(Vec::len);

    debug!("Explored {explored} simple paths {origin} -> {destination}");
    shortest
}
