//! Network nodes.

use super::{Edge, RouteError};
use crate::domain::{Location, Weight};

/// A location together with its outgoing routes.
///
/// # Invariants
///
/// - `neighbours[i]` is always `edges[i].destination()`; the lists grow
///   together and never shrink.
/// - Parallel routes to the same destination are all kept, in the order they
///   were added. Weight lookups use the first of them, and `hop_times[i]`
///   caches that weight for `neighbours[i]`.
#[derive(Debug, Clone)]
pub struct Node<L> {
    location: L,
    edges: Vec<Edge<L>>,
    neighbours: Vec<L>,
    hop_times: Vec<f64>,
}

impl<L: Location> Node<L> {
    /// Creates a node with no outgoing routes.
    pub fn new(location: L) -> Self {
        Self {
            location,
            edges: Vec::new(),
            neighbours: Vec::new(),
            hop_times: Vec::new(),
        }
    }

    /// Returns the location this node stands for.
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Adds a route from this node to `destination`.
    ///
    /// The destination does not need a node of its own; a route may lead to
    /// a location that has no onward routes registered.
    pub fn add_edge(&mut self, destination: L, weight: Weight) -> &Edge<L> {
        let hop_time = self.weight_to(&destination).unwrap_or(weight.days());
        self.hop_times.push(hop_time);
        self.neighbours.push(destination.clone());
        self.edges
            .push(Edge::new(self.location.clone(), destination, weight));
        &self.edges[self.edges.len() - 1]
    }

    /// Returns the time of the direct route to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnreachableNeighbor`] if `destination` is not a
    /// neighbour of this node.
    pub fn weight_to(&self, destination: &L) -> Result<f64, RouteError<L>> {
        self.edges
            .iter()
            .find(|edge| edge.destination() == destination)
            .map(Edge::weight)
            .ok_or_else(|| RouteError::UnreachableNeighbor {
                origin: self.location.clone(),
                destination: destination.clone(),
            })
    }

    /// Returns the neighbours in the order their routes were added.
    pub fn neighbours(&self) -> &[L] {
        &self.neighbours
    }

    /// Returns the outgoing routes in the order they were added.
    pub fn edges(&self) -> &[Edge<L>] {
        &self.edges
    }

    /// Returns the number of outgoing routes.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over each neighbour with the time it takes to get there.
    ///
    /// Yields one item per route, in insertion order. The time is the one
    /// [`weight_to`](Self::weight_to) reports, so a parallel route yields the
    /// first route's weight.
    pub fn hops(&self) -> impl Iterator<Item = (&L, f64)> + '_ {
        self.neighbours
            .iter()
            .zip(self.hop_times.iter().copied())
    }
}
