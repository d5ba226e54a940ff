use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::RouteNetwork;

/// Returns a path from origin to destination with the minimum number of hops.
///
/// The frontier holds each discovered location together with the path that reached it. A location
/// is marked as visited when it is dequeued, and the path returned is the one recorded at the
/// first dequeue of the destination.
pub fn breadth_first_path<'a, G: RouteNetwork>(
    graph: &'a G,
    origin: &'a str,
    destination: &'a str,
) -> Option<Vec<&'a str>> {
    let mut visited = FxHashSet::default();
    let mut frontier = VecDeque::from([(origin, vec![origin])]);

    while let Some((current, path)) = frontier.pop_front() {
        if current == destination {
            return Some(path);
        }

        if !visited.insert(current) {
            // already expanded through a path with no more hops
            continue;
        }

        trace!("Expanding {current} at {} hops", path.len() - 1);

        for route in graph.exiting_routes(current) {
            let neighbor = route.destination.as_str();
            if !visited.contains(neighbor) {
                let mut next = path.clone();
                next.push(neighbor);
                frontier.push_back((neighbor, next));
            }
        }
    }

    None
}
