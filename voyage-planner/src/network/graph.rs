//! The network graph.

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use super::{Node, RouteError};
use crate::domain::Location;

/// A directed, weighted graph of locations.
///
/// Holds one [`Node`] per registered location. Nodes are kept in
/// registration order so the network prints the same way every time.
#[derive(Debug, Clone)]
pub struct Network<L> {
    nodes: Vec<Node<L>>,
    /// Map from location to its position in `nodes`.
    index: HashMap<L, usize>,
}

impl<L> Default for Network<L> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<L: Location> Network<L> {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `location` and return its node for adding routes.
    ///
    /// Registering a location twice is not meaningful input. The existing
    /// node is returned, so routes added afterwards extend it, and a warning
    /// is logged.
    pub fn add_node(&mut self, location: L) -> &mut Node<L> {
        if self.index.contains_key(&location) {
            warn!(location = %location, "location registered twice, extending existing node");
        }
        self.node_entry(location)
    }

    /// Return the node for `location`, registering it if needed.
    pub(crate) fn node_entry(&mut self, location: L) -> &mut Node<L> {
        let idx = match self.index.get(&location) {
            Some(&idx) => idx,
            None => {
                let idx = self.nodes.len();
                self.index.insert(location.clone(), idx);
                self.nodes.push(Node::new(location));
                idx
            }
        };
        &mut self.nodes[idx]
    }

    /// Returns the node registered for `location`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownLocation`] if the location was never
    /// registered.
    pub fn lookup(&self, location: &L) -> Result<&Node<L>, RouteError<L>> {
        self.index
            .get(location)
            .map(|&idx| &self.nodes[idx])
            .ok_or_else(|| RouteError::UnknownLocation(location.clone()))
    }

    /// Returns true if `location` has a node.
    pub fn contains(&self, location: &L) -> bool {
        self.index.contains_key(location)
    }

    /// Returns all nodes in registration order.
    pub fn nodes(&self) -> &[Node<L>] {
        &self.nodes
    }

    /// Returns the number of registered locations.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no locations are registered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total time of the journey from `origin` through `stops` in order.
    ///
    /// Every consecutive pair must be joined by a direct route; no other
    /// path is searched for.
    ///
    /// # Errors
    ///
    /// - [`RouteError::UnknownLocation`] if `origin`, or a stop that a later
    ///   hop departs from, has no node.
    /// - [`RouteError::UnreachableNeighbor`] for the first pair without a
    ///   direct route.
    ///
    /// # Examples
    ///
    /// ```
    /// use voyage_planner::network::NetworkBuilder;
    /// use voyage_planner::domain::Port;
    ///
    /// let network = NetworkBuilder::new()
    ///     .route("Buenos Aires", "Casablanca", 5.0)
    ///     .route("Casablanca", "Liverpool", 3.0)
    ///     .build();
    ///
    /// let ba = Port::parse("Buenos Aires").unwrap();
    /// let stops = [
    ///     Port::parse("Casablanca").unwrap(),
    ///     Port::parse("Liverpool").unwrap(),
    /// ];
    /// assert_eq!(network.journey_time(&ba, &stops).unwrap(), 8.0);
    /// ```
    pub fn journey_time(&self, origin: &L, stops: &[L]) -> Result<f64, RouteError<L>> {
        self.lookup(origin)?;

        let departures = std::iter::once(origin).chain(stops);
        let mut total = 0.0;
        for (departure, stop) in departures.zip(stops) {
            total += self.lookup(departure)?.weight_to(stop)?;
        }

        Ok(total)
    }
}

impl<L: Location> fmt::Display for Network<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{}", node.location())?;
            for edge in node.edges() {
                writeln!(f, "--> {} ({})", edge.destination(), edge.weight())?;
            }
            writeln!(f, "{}", "-".repeat(38))?;
        }
        Ok(())
    }
}
