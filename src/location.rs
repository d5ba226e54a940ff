use crate::Distance;

/// Directed route from a location to one of its destinations.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub destination: String,
    pub weight: Distance,
}

/// A named location and the routes leaving it.
///
/// The name is the unique identifier of the location and its sort key in the index
/// (case-sensitive, lexicographic). Routes are kept in the order they were established,
/// which makes every traversal over them deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    routes: Vec<Route>,
}

impl Location {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routes: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing routes in establishment order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.destination.as_str())
    }

    pub fn route_to(&self, destination: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.destination == destination)
    }

    pub fn has_route_to(&self, destination: &str) -> bool {
        self.route_to(destination).is_some()
    }

    /// Adds the route unless one to the same destination already exists.
    /// Returns true only if the route was added.
    pub(crate) fn add_route(&mut self, destination: &str, weight: Distance) -> bool {
        if self.has_route_to(destination) {
            return false;
        }

        self.routes.push(Route {
            destination: destination.to_owned(),
            weight,
        });
        true
    }

    /// Returns true only if a route to the destination was removed.
    pub(crate) fn remove_route(&mut self, destination: &str) -> bool {
        let before = self.routes.len();
        self.routes.retain(|r| r.destination != destination);
        self.routes.len() != before
    }
}
