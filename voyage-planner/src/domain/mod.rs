//! Domain types for the voyage planner.
//!
//! Value types that enforce their invariants at construction time: port
//! names are never empty, route weights are never negative, and journeys
//! only grow by whole hops.

mod journey;
mod location;
mod port;
mod weight;

pub use journey::Journey;
pub use location::Location;
pub use port::{InvalidPort, Port};
pub use weight::{InvalidWeight, Weight};
