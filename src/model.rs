use std::iter::Sum;
use std::ops::{Add, AddAssign};

use ordered_float::OrderedFloat;

/// Weight of a directed route, in whatever unit the caller measures travel cost
/// (kilometers, minutes, ...). Totally ordered so that routes can be compared with
/// `min_by_key` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(OrderedFloat<f64>);

impl Distance {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    /// Weight given to routes established without an explicit weight.
    pub const UNIT: Self = Self(OrderedFloat(1.0));

    pub const fn from_units(units: f64) -> Self {
        Self(OrderedFloat(units))
    }

    pub const fn units(&self) -> f64 {
        self.0.0
    }

    /// Returns true only if the weight can be used on a route: finite and not negative.
    pub fn is_valid(&self) -> bool {
        self.units().is_finite() && self.units() >= 0.0
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, d| total + d)
    }
}

/// Outcome of inserting a location into the index.
/// Inserting a name that is already present is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Insertion {
    /// A new location record was created.
    Created,
    /// The name was already present, the existing record was left untouched.
    Existing,
}

impl Insertion {
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Outcome of adding or removing a route between two existing locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteChange {
    Added,
    Removed,
    /// The adjacency already was in the requested state.
    Unchanged,
}
