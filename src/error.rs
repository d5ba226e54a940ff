use thiserror::Error;

use crate::Tour;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum GraphError {
    #[error("Location not found: {0}")]
    LocationNotFound(String),
    #[error("Route weight must be finite and not negative: {0}")]
    InvalidWeight(f64),
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum RouteError {
    #[error("Location not found: {0}")]
    LocationNotFound(String),
    #[error("No route available from {origin} to {destination}")]
    NoRoute { origin: String, destination: String },
    /// The tour got stuck; `partial` is the tour built up to that point.
    #[error("Tour cannot reach every stop, missing {missing:?}")]
    Infeasible { missing: Vec<String>, partial: Tour },
    #[error("Tour requested {requested} stops, at most {max} are allowed")]
    TooManyStops { requested: usize, max: usize },
}

