//! Route query errors.

/// Errors from querying a network.
///
/// Enumeration queries never report a missing journey as an error: an empty
/// result is the normal "no such journey" answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError<L> {
    /// The location was never registered as a node
    #[error("unknown location: {0}")]
    UnknownLocation(L),

    /// There is no direct route between two consecutive stops
    #[error("journey not valid: no direct route from {origin} to {destination}")]
    UnreachableNeighbor { origin: L, destination: L },
}
