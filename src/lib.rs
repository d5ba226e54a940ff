#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod index;
mod location;
mod model;
mod routing;
mod tour;

pub use error::{GraphError, RouteError};
pub use graph::{RouteGraph, RouteNetwork};
pub use index::{Iter, LocationIndex};
pub use location::{Location, Route};
pub use model::{Distance, Insertion, RouteChange};
pub use routing::{Path, SimplePaths, Strategy, find_path, is_path_connected, simple_paths};
pub use tour::{Tour, TourConfig, plan_tour};
