//! Multi-stop round trips built with a greedy nearest-neighbor heuristic.
//!
//! The tour is feasible under the available routes but not necessarily the shortest one: each
//! step extends the tour to the closest unvisited stop and never reconsiders earlier choices.

use tracing::{debug, trace, warn};

use crate::{Distance, RouteError, RouteNetwork};

#[derive(Debug, Clone, Copy)]
pub struct TourConfig {
    /// Maximum number of stops (the origin excluded) a tour can be planned for.
    pub max_stops: usize,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self { max_stops: 5 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Locations in visiting order, starting from the origin. The origin appears again between
    /// two stops when the tour had to go back through it, and at the end when the tour closes.
    pub locations: Vec<String>,
    /// Sum of the weights of the routes followed by the tour.
    pub length: Distance,
}

impl Tour {
    /// Returns true only if the tour ends back at its origin.
    pub fn is_round_trip(&self) -> bool {
        self.locations.len() > 1 && self.locations.first() == self.locations.last()
    }
}

/// Plans a tour from the origin through every stop and back.
///
/// From the current location the tour moves to the unvisited stop with the cheapest direct route.
/// If none of the unvisited stops is directly reachable, the tour goes back through the origin to
/// the unvisited stop with a route back to the origin and the cheapest origin route. Only the legs
/// of that detour that have a direct route are charged. Once every stop is visited the tour is
/// closed with the route back to the origin, if there is one.
///
/// Stops are considered in the given order when their routes have the same weight. Duplicated
/// stops and the origin itself are ignored.
pub fn plan_tour<I>(
    config: &TourConfig,
    graph: &impl RouteNetwork,
    origin: &str,
    stops: I,
) -> Result<Tour, RouteError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    if !graph.contains_location(origin) {
        return Err(RouteError::LocationNotFound(origin.to_owned()));
    }

    let mut pending: Vec<String> = vec![];
    for stop in stops {
        let stop = stop.as_ref();
        if !graph.contains_location(stop) {
            return Err(RouteError::LocationNotFound(stop.to_owned()));
        }
        if stop != origin && !pending.iter().any(|s| s == stop) {
            pending.push(stop.to_owned());
        }
    }

    if pending.len() > config.max_stops {
        return Err(RouteError::TooManyStops {
            requested: pending.len(),
            max: config.max_stops,
        });
    }

    debug!("Planning tour from {origin} through {pending:?}");

    let mut tour = Tour {
        locations: vec![origin.to_owned()],
        length: Distance::ZERO,
    };
    let mut current = origin.to_owned();

    while !pending.is_empty() {
        let (index, weight) = if let Some(nearest) = nearest_stop(graph, &current, &pending) {
            nearest
        } else {
            let Some(index) = fallback_stop(graph, origin, &pending) else {
                break;
            };

            if current != origin {
                trace!("No stop reachable from {current}, going back through {origin}");
                match graph.route_weight(&current, origin) {
                    Some(back) => tour.length += back,
                    None => warn!("No route from {current} back to {origin}"),
                }
                tour.locations.push(origin.to_owned());
            }
            let weight = graph
                .route_weight(origin, &pending[index])
                .unwrap_or(Distance::ZERO);
            (index, weight)
        };

        let stop = pending.remove(index);
        trace!("Visiting {stop} ({})", weight.units());
        tour.length += weight;
        tour.locations.push(stop.clone());
        current = stop;
    }

    if !pending.is_empty() {
        warn!("Tour from {origin} cannot reach {pending:?}");
        return Err(RouteError::Infeasible {
            missing: pending,
            partial: tour,
        });
    }

    if current != origin {
        match graph.route_weight(&current, origin) {
            Some(weight) => {
                tour.length += weight;
                tour.locations.push(origin.to_owned());
            }
            None => warn!("Tour cannot return from {current} to {origin}"),
        }
    }

    debug!("Planned tour {:?} ({})", tour.locations, tour.length.units());
    Ok(tour)
}

/// Gets the index of the pending stop with the cheapest direct route from the location, and the
/// weight of that route. The first stop wins among routes with the same weight.
fn nearest_stop(
    graph: &impl RouteNetwork,
    from: &str,
    pending: &[String],
) -> Option<(usize, Distance)> {
    pending
        .iter()
        .enumerate()
        .filter_map(|(i, stop)| graph.route_weight(from, stop).map(|w| (i, w)))
        .min_by_key(|&(_, w)| w)
}

/// Gets the index of the pending stop to reach through the origin: among the stops with a direct
/// route back to the origin, the one with the cheapest route from the origin (or back to it when
/// the origin has no route to the stop).
fn fallback_stop(graph: &impl RouteNetwork, origin: &str, pending: &[String]) -> Option<usize> {
    pending
        .iter()
        .enumerate()
        .filter_map(|(i, stop)| {
            let back = graph.route_weight(stop, origin)?;
            Some((i, graph.route_weight(origin, stop).unwrap_or(back)))
        })
        .min_by_key(|&(_, w)| w)
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::RouteGraph;

    fn triangle_graph() -> RouteGraph {
        let mut graph = RouteGraph::new();
        for name in ["O", "A", "B"] {
            graph.insert_location(name);
        }
        for (origin, destination, weight) in [("O", "A", 1.0), ("O", "B", 4.0), ("A", "B", 2.0)] {
            graph
                .establish_weighted_route(origin, destination, Distance::from_units(weight), true)
                .unwrap();
        }
        graph
    }

    #[test]
    fn tour_plan_001() {
        let graph = triangle_graph();

        let tour = plan_tour(&TourConfig::default(), &graph, "O", ["B", "A"]).unwrap();
        assert_eq!(tour.locations, ["O", "A", "B", "O"]);
        assert_eq!(tour.length, Distance::from_units(7.0));
        assert!(tour.is_round_trip());
    }

    #[test]
    fn tour_plan_002() {
        let graph = triangle_graph();

        // duplicates and the origin itself are ignored
        let tour = plan_tour(&TourConfig::default(), &graph, "O", ["A", "O", "A"]).unwrap();
        assert_eq!(tour.locations, ["O", "A", "O"]);
        assert_eq!(tour.length, Distance::from_units(2.0));

        let tour = plan_tour(&TourConfig::default(), &graph, "O", Vec::<String>::new()).unwrap();
        assert_eq!(tour.locations, ["O"]);
        assert!(!tour.is_round_trip());
    }

    #[test]
    fn tour_plan_003() {
        let graph = triangle_graph();
        let config = TourConfig { max_stops: 1 };

        assert_eq!(
            plan_tour(&config, &graph, "O", ["A", "B"]),
            Err(RouteError::TooManyStops {
                requested: 2,
                max: 1
            })
        );
        assert_eq!(
            plan_tour(&config, &graph, "Z", ["A"]),
            Err(RouteError::LocationNotFound("Z".into()))
        );
        assert_eq!(
            plan_tour(&config, &graph, "O", ["Z"]),
            Err(RouteError::LocationNotFound("Z".into()))
        );
    }

    #[test]
    fn tour_plan_004() {
        let mut graph = triangle_graph();
        graph.insert_location("X");

        assert_eq!(
            plan_tour(&TourConfig::default(), &graph, "O", ["X", "A"]),
            Err(RouteError::Infeasible {
                missing: vec!["X".into()],
                partial: Tour {
                    locations: vec!["O".into(), "A".into()],
                    length: Distance::from_units(1.0),
                },
            })
        );
    }

    #[test]
    fn tour_plan_005() {
        // one way routes only: the last stop cannot go back to the origin
        let mut graph = RouteGraph::new();
        for name in ["O", "A", "B"] {
            graph.insert_location(name);
        }
        graph.establish_route("O", "A", false).unwrap();
        graph.establish_route("A", "B", false).unwrap();

        let tour = plan_tour(&TourConfig::default(), &graph, "O", ["A", "B"]).unwrap();
        assert_eq!(tour.locations, ["O", "A", "B"]);
        assert_eq!(tour.length, Distance::from_units(2.0));
        assert!(!tour.is_round_trip());
    }

    #[test]
    fn tour_plan_006() {
        // A is a dead end, B only has a route back to the origin
        let mut graph = RouteGraph::new();
        for name in ["O", "A", "B"] {
            graph.insert_location(name);
        }
        graph
            .establish_weighted_route("O", "A", Distance::from_units(1.0), false)
            .unwrap();
        graph
            .establish_weighted_route("B", "O", Distance::from_units(3.0), false)
            .unwrap();

        let tour = plan_tour(&TourConfig::default(), &graph, "O", ["A", "B"]).unwrap();
        assert_eq!(tour.locations, ["O", "A", "O", "B", "O"]);
        assert_eq!(tour.length, Distance::from_units(4.0));
        assert!(tour.is_round_trip());
    }

    #[test]
    fn tour_fallback_stop_001() {
        let mut graph = triangle_graph();
        graph.insert_location("X");
        graph
            .establish_weighted_route("X", "O", Distance::from_units(0.5), false)
            .unwrap();
        let pending = ["A".to_owned(), "B".to_owned(), "X".to_owned()];

        // X has no route from O, its route back is the cheapest
        assert_eq!(fallback_stop(&graph, "O", &pending), Some(2));
        assert_eq!(fallback_stop(&graph, "O", &pending[..2]), Some(0));
        assert_eq!(fallback_stop(&graph, "X", &pending), None);
    }
}
