//! Fluent construction of port networks.

use tracing::warn;

use super::Network;
use crate::domain::{Port, Weight};

/// Builder for a network of named ports.
///
/// Ports are registered the first time they are named, as either end of a
/// route, so a port with no routes of its own is still a known dead end.
/// Entries with an invalid port name or weight are skipped with a warning.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network<Port>,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a port with no routes of its own.
    pub fn port(mut self, name: &str) -> Self {
        match Port::parse(name) {
            Ok(port) => {
                self.inner.node_entry(port);
            }
            Err(e) => warn!(port = name, error = %e, "skipping port"),
        }
        self
    }

    /// Add a route from `from` to `to` taking `days`.
    pub fn route(mut self, from: &str, to: &str, days: f64) -> Self {
        let parsed = (Port::parse(from), Port::parse(to), Weight::new(days));
        match parsed {
            (Ok(from), Ok(to), Ok(weight)) => {
                self.inner.node_entry(from).add_edge(to.clone(), weight);
                self.inner.node_entry(to);
            }
            (from_result, to_result, weight_result) => {
                let reason = from_result
                    .err()
                    .map(|e| e.to_string())
                    .or_else(|| to_result.err().map(|e| e.to_string()))
                    .or_else(|| weight_result.err().map(|e| e.to_string()))
                    .unwrap_or_default();
                warn!(from, to, days, %reason, "skipping route");
            }
        }
        self
    }

    /// Build the network.
    pub fn build(self) -> Network<Port> {
        self.inner
    }
}

/// The five-port Atlantic network.
///
/// Times are sailing days between New York, Liverpool, Buenos Aires,
/// Cape Town and Casablanca.
pub fn atlantic_network() -> Network<Port> {
    NetworkBuilder::new()
        .port("New York")
        .port("Liverpool")
        .port("Buenos Aires")
        .port("Cape Town")
        .port("Casablanca")
        .route("New York", "Liverpool", 4.0)
        .route("Liverpool", "Casablanca", 3.0)
        .route("Liverpool", "Cape Town", 6.0)
        .route("Buenos Aires", "New York", 6.0)
        .route("Buenos Aires", "Casablanca", 5.0)
        .route("Buenos Aires", "Cape Town", 4.0)
        .route("Cape Town", "New York", 8.0)
        .route("Casablanca", "Liverpool", 3.0)
        .route("Casablanca", "Cape Town", 6.0)
        .build()
}
