use tracing::debug;

use crate::{Distance, GraphError, Insertion, Location, LocationIndex, Route, RouteChange};

/// Read-only view of the routes between locations.
/// Path finding and tour planning only depend on this view and never mutate the graph.
pub trait RouteNetwork {
    /// Returns true only if a location with this name exists.
    fn contains_location(&self, name: &str) -> bool;

    /// Gets the routes exiting the location, in a stable order.
    /// Returns an empty slice if the location doesn't exist.
    fn exiting_routes(&self, name: &str) -> &[Route];

    /// Gets the weight of the direct route between two locations, if any.
    fn route_weight(&self, origin: &str, destination: &str) -> Option<Distance> {
        self.exiting_routes(origin)
            .iter()
            .find(|r| r.destination == destination)
            .map(|r| r.weight)
    }
}

/// Locations and the directed routes between them.
///
/// Routes are stored on the location they exit from. A route may only reference locations that
/// exist in the index: both endpoints must be inserted before a route is established, and removing
/// a location scrubs every route that enters it.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    index: LocationIndex,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    pub const fn len(&self) -> usize {
        self.index.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn insert_location(&mut self, name: &str) -> Insertion {
        self.index.insert(name)
    }

    pub fn find_location(&self, name: &str) -> Result<&Location, GraphError> {
        self.index
            .get(name)
            .ok_or_else(|| GraphError::LocationNotFound(name.to_owned()))
    }

    /// Gets an iterator over all the locations sorted by name.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.index.iter()
    }

    /// Removes the location and every route entering it from other locations.
    pub fn remove_location(&mut self, name: &str) -> Result<Location, GraphError> {
        let removed = self
            .index
            .remove(name)
            .ok_or_else(|| GraphError::LocationNotFound(name.to_owned()))?;

        let mut scrubbed = 0;
        self.index.for_each_mut(|location| {
            if location.remove_route(name) {
                scrubbed += 1;
            }
        });

        debug!("Removed {name} and {scrubbed} routes entering it");
        Ok(removed)
    }

    /// Establishes a route with unit weight, see [`RouteGraph::establish_weighted_route`].
    pub fn establish_route(
        &mut self,
        origin: &str,
        destination: &str,
        bidirectional: bool,
    ) -> Result<RouteChange, GraphError> {
        self.establish_weighted_route(origin, destination, Distance::UNIT, bidirectional)
    }

    /// Establishes a directed route from origin to destination, and also the opposite route if
    /// bidirectional. Both locations must already exist.
    ///
    /// Routes that already exist are left as they are (including their weight), and if none of
    /// the requested routes was missing the returned change is `Unchanged`.
    pub fn establish_weighted_route(
        &mut self,
        origin: &str,
        destination: &str,
        weight: Distance,
        bidirectional: bool,
    ) -> Result<RouteChange, GraphError> {
        if !weight.is_valid() {
            return Err(GraphError::InvalidWeight(weight.units()));
        }
        self.ensure_endpoints(origin, destination)?;

        let mut added = self.add_route(origin, destination, weight);
        if bidirectional {
            added |= self.add_route(destination, origin, weight);
        }

        debug!(
            "Route {origin} {} {destination} ({}): {}",
            if bidirectional { "<->" } else { "->" },
            weight.units(),
            if added { "added" } else { "already present" }
        );

        Ok(if added {
            RouteChange::Added
        } else {
            RouteChange::Unchanged
        })
    }

    /// Removes the directed route from origin to destination, and also the opposite route if
    /// bidirectional. Both locations must exist.
    pub fn remove_route(
        &mut self,
        origin: &str,
        destination: &str,
        bidirectional: bool,
    ) -> Result<RouteChange, GraphError> {
        self.ensure_endpoints(origin, destination)?;

        let mut removed = self.drop_route(origin, destination);
        if bidirectional {
            removed |= self.drop_route(destination, origin);
        }

        Ok(if removed {
            RouteChange::Removed
        } else {
            RouteChange::Unchanged
        })
    }

    /// Gets the routes exiting the location in establishment order.
    pub fn routes(&self, name: &str) -> Result<&[Route], GraphError> {
        self.find_location(name).map(Location::routes)
    }

    pub fn has_route(&self, origin: &str, destination: &str) -> bool {
        self.index
            .get(origin)
            .is_some_and(|l| l.has_route_to(destination))
    }

    /// Suggests the alphabetically first destination directly reachable from the origin.
    /// Returns None if the origin has no routes.
    pub fn suggest_nearest(&self, origin: &str) -> Result<Option<&str>, GraphError> {
        let location = self.find_location(origin)?;
        Ok(location.destinations().min())
    }

    fn ensure_endpoints(&self, origin: &str, destination: &str) -> Result<(), GraphError> {
        for name in [origin, destination] {
            if !self.index.contains(name) {
                return Err(GraphError::LocationNotFound(name.to_owned()));
            }
        }
        Ok(())
    }

    fn add_route(&mut self, origin: &str, destination: &str, weight: Distance) -> bool {
        self.index
            .get_mut(origin)
            .is_some_and(|l| l.add_route(destination, weight))
    }

    fn drop_route(&mut self, origin: &str, destination: &str) -> bool {
        self.index
            .get_mut(origin)
            .is_some_and(|l| l.remove_route(destination))
    }
}

impl RouteNetwork for RouteGraph {
    fn contains_location(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    fn exiting_routes(&self, name: &str) -> &[Route] {
        self.index
            .get(name)
            .map(Location::routes)
            .unwrap_or_default()
    }
}
