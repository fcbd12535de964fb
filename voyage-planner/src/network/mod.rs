//! The port network: nodes, their outgoing routes, and explicit journey
//! timing.
//!
//! A network is built once (by hand, with [`NetworkBuilder`], or from a JSON
//! file) and is read-only while it is being queried.

mod builder;
mod edge;
mod error;
mod file;
mod graph;
mod node;

pub use builder::{NetworkBuilder, atlantic_network};
pub use edge::Edge;
pub use error::RouteError;
pub use file::{LoadError, load_network, parse_network};
pub use graph::Network;
pub use node::Node;
