//! Directed, weighted connections between locations.

use crate::domain::Weight;

/// A direct route from one location to another.
///
/// Edges are created when the network is built and never change afterwards.
/// The origin node owns its outgoing edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<L> {
    origin: L,
    destination: L,
    weight: Weight,
}

impl<L> Edge<L> {
    /// Creates a new edge.
    pub fn new(origin: L, destination: L, weight: Weight) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }

    /// Returns where the edge starts.
    pub fn origin(&self) -> &L {
        &self.origin
    }

    /// Returns where the edge ends.
    pub fn destination(&self) -> &L {
        &self.destination
    }

    /// Returns the time the route takes, in days.
    pub fn weight(&self) -> f64 {
        self.weight.days()
    }
}
