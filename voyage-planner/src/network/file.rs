//! Loading networks from JSON files.
//!
//! A network file lists ports and the routes leaving each one:
//!
//! ```json
//! {
//!   "ports": [
//!     { "name": "New York", "routes": [ { "to": "Liverpool", "days": 4.0 } ] },
//!     { "name": "Liverpool" }
//!   ]
//! }
//! ```
//!
//! Port names and route times are validated while parsing, so a file that
//! loads always yields a well-formed network.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use super::Network;
use crate::domain::{Port, Weight};

/// Errors that can occur when loading a network file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read network file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The contents are not a valid network description
    #[error("invalid network description: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NetworkFile {
    ports: Vec<PortEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PortEntry {
    name: Port,
    #[serde(default)]
    routes: Vec<RouteEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteEntry {
    to: Port,
    days: Weight,
}

/// Parse a network from its JSON description.
pub fn parse_network(json: &str) -> Result<Network<Port>, LoadError> {
    let file: NetworkFile = serde_json::from_str(json)?;

    let mut network = Network::new();
    for entry in file.ports {
        let node = network.add_node(entry.name);
        for route in entry.routes {
            node.add_edge(route.to, route.days);
        }
    }

    Ok(network)
}

/// Read and parse a network file.
pub fn load_network(path: impl AsRef<Path>) -> Result<Network<Port>, LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let network = parse_network(&json)?;
    info!(
        path = %path.display(),
        ports = network.len(),
        "loaded network"
    );

    Ok(network)
}
