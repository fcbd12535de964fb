//! Journey type.
//!
//! A `Journey` is a route through the network, in progress or complete: the
//! ports visited in order plus the time accumulated along the way.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// An ordered sequence of visited locations plus the accumulated time.
///
/// # Invariants
///
/// - The first element of the route is the origin, the last is the most
///   recent stop.
/// - `journey_time` is the sum of the edge weights between consecutive
///   route elements, and 0 while the route has fewer than two elements.
///
/// Journeys are plain values: the planner clones one at every branch so that
/// sibling branches never observe each other's stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Journey<L> {
    route: Vec<L>,
    journey_time: f64,
}

impl<L> Journey<L> {
    /// Creates an empty journey.
    pub fn new() -> Self {
        Self {
            route: Vec::new(),
            journey_time: 0.0,
        }
    }

    /// Begins the journey at `origin`, discarding anything recorded so far.
    pub(crate) fn start(&mut self, origin: L) {
        self.route.clear();
        self.route.push(origin);
        self.journey_time = 0.0;
    }

    /// Takes one hop to `stop`, a leg lasting `leg_time`.
    pub(crate) fn advance(&mut self, stop: L, leg_time: f64) {
        self.journey_time += leg_time;
        self.route.push(stop);
    }

    /// Returns the visited locations in order.
    pub fn route(&self) -> &[L] {
        &self.route
    }

    /// Returns the accumulated time in days.
    pub fn journey_time(&self) -> f64 {
        self.journey_time
    }

    /// Returns the origin, if the journey has started.
    pub fn origin(&self) -> Option<&L> {
        self.route.first()
    }

    /// Returns the most recent stop, if the journey has started.
    pub fn last_stop(&self) -> Option<&L> {
        self.route.last()
    }

    /// Returns the number of hops taken (route length minus one).
    pub fn stop_count(&self) -> usize {
        self.route.len().saturating_sub(1)
    }

    /// Returns true if the journey has not started.
    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Compares two journeys by accumulated time only.
    ///
    /// Journeys with equal times compare equal whatever their routes.
    pub fn cmp_by_time(&self, other: &Self) -> Ordering {
        self.journey_time.total_cmp(&other.journey_time)
    }
}

impl<L: PartialEq> Journey<L> {
    /// Returns how many times `stop` appears in the route.
    pub fn visits(&self, stop: &L) -> usize {
        self.route.iter().filter(|visited| *visited == stop).count()
    }
}

impl<L> Default for Journey<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: fmt::Display> fmt::Display for Journey<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.route.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{stop}")?;
        }
        write!(f, " ({} days)", self.journey_time)
    }
}
