//! Journey queries on a network.
//!
//! Each query builds the policy for its kind of search, runs the explorer
//! from the origin, and post-processes what it found.

use super::config::{StopLimit, TimeLimit};
use super::explore::explore;
use super::policy::{StopBounded, TimeBounded, Unconstrained};
use super::rank::fastest;
use crate::domain::{Journey, Location};
use crate::network::{Network, RouteError};

impl<L: Location> Network<L> {
    /// Every journey from `origin` to `destination` that repeats no stop.
    ///
    /// The origin may be passed through once more, which is what allows a
    /// round trip when `origin == destination`. Journeys are returned in
    /// discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownLocation`] if `origin`, or a stop the
    /// search has to continue from, has no node.
    pub fn all_journeys(
        &self,
        origin: &L,
        destination: &L,
    ) -> Result<Vec<Journey<L>>, RouteError<L>> {
        let policy = Unconstrained::new(destination);
        Ok(explore(self, origin, &policy)?.journeys)
    }

    /// The quickest journey from `origin` to `destination`.
    ///
    /// When `origin == destination` this is the quickest round trip, never
    /// the empty journey. Returns `Ok(None)` if the destination cannot be
    /// reached. Among equally quick journeys the first one found wins.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownLocation`] if `origin`, or a stop the
    /// search has to continue from, has no node.
    ///
    /// # Examples
    ///
    /// ```
    /// use voyage_planner::network::atlantic_network;
    /// use voyage_planner::domain::Port;
    ///
    /// let network = atlantic_network();
    /// let new_york = Port::parse("New York").unwrap();
    ///
    /// let round_trip = network.fastest_journey(&new_york, &new_york).unwrap().unwrap();
    /// assert_eq!(round_trip.journey_time(), 18.0);
    /// ```
    pub fn fastest_journey(
        &self,
        origin: &L,
        destination: &L,
    ) -> Result<Option<Journey<L>>, RouteError<L>> {
        Ok(fastest(self.all_journeys(origin, destination)?))
    }

    /// Journeys from `origin` to `destination` within a number of stops.
    ///
    /// Stops may be revisited. With [`Bound::AtMost`](super::Bound::AtMost) a
    /// journey that passes through the destination is reported at each
    /// arrival, and exploration continues until the limit.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownLocation`] if `origin`, or a stop the
    /// search has to continue from, has no node.
    pub fn journeys_with_max_stops(
        &self,
        origin: &L,
        destination: &L,
        limit: StopLimit,
    ) -> Result<Vec<Journey<L>>, RouteError<L>> {
        let policy = StopBounded::new(destination, limit);
        Ok(explore(self, origin, &policy)?.journeys)
    }

    /// Journeys from `origin` to `destination` within a time limit.
    ///
    /// Every cycle reachable from `origin` must take a positive number of
    /// days. Zero-weight cycles never terminate: the search keeps extending
    /// the loop without ever exceeding the limit.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownLocation`] if `origin`, or a stop the
    /// search has to continue from, has no node.
    pub fn journeys_with_max_time(
        &self,
        origin: &L,
        destination: &L,
        limit: TimeLimit,
    ) -> Result<Vec<Journey<L>>, RouteError<L>> {
        let policy = TimeBounded::new(destination, limit);
        Ok(explore(self, origin, &policy)?.journeys)
    }
}
