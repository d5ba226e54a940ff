use rustc_hash::FxHashSet;
use tracing::trace;

use crate::RouteNetwork;
use crate::routing::Frame;

/// Returns the first path from origin to destination found by a depth-first walk over the exiting
/// routes. Visited locations are never entered twice, even after the walk backtracks out of them,
/// so the path is not necessarily the shortest.
pub fn depth_first_path<'a, G: RouteNetwork>(
    graph: &'a G,
    origin: &'a str,
    destination: &'a str,
) -> Option<Vec<&'a str>> {
    if origin == destination {
        return Some(vec![origin]);
    }

    let mut visited = FxHashSet::from_iter([origin]);
    let mut stack = vec![Frame::new(origin)];

    while let Some(frame) = stack.last_mut() {
        let Some(route) = graph.exiting_routes(frame.location).get(frame.next_route) else {
            trace!("Backtracking from {}", frame.location);
            stack.pop();
            continue;
        };
        frame.next_route += 1;

        let neighbor = route.destination.as_str();
        if neighbor == destination {
            return Some(stack.iter().map(|f| f.location).chain([neighbor]).collect());
        }

        if visited.insert(neighbor) {
            stack.push(Frame::new(neighbor));
        }
    }

    None
}
