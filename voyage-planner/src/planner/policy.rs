//! Exploration policies.
//!
//! A policy decides, at every stop the explorer reaches, whether the journey
//! so far is a result and whether to keep going. The three query families
//! differ only in their policy.

use super::config::{StopLimit, TimeLimit};
use crate::domain::{Journey, Location};

/// Accept and continue rules for one kind of journey search.
///
/// For each hop the explorer asks, in order:
/// 1. [`admits`](Self::admits), before the hop is taken;
/// 2. [`accepts`](Self::accepts), with the hop appended to the journey;
/// 3. [`continues`](Self::continues), told whether step 2 accepted.
pub trait Policy<L> {
    /// Whether the hop from the journey's last stop to `stop` may be taken.
    fn admits(&self, _journey: &Journey<L>, _stop: &L) -> bool {
        true
    }

    /// Whether the journey, ending at its last stop, is a result.
    fn accepts(&self, journey: &Journey<L>) -> bool;

    /// Whether to explore onwards from the journey's last stop.
    fn continues(&self, journey: &Journey<L>, accepted: bool) -> bool;
}

/// Every journey to the destination that repeats no stop, except that the
/// origin may be passed through once more.
///
/// This is what the fastest-journey query ranks. An arrival at the
/// destination ends its branch, so the origin's single return is what makes
/// round trips possible when origin and destination coincide.
#[derive(Debug, Clone, Copy)]
pub struct Unconstrained<'a, L> {
    destination: &'a L,
}

impl<'a, L> Unconstrained<'a, L> {
    /// Search for journeys ending at `destination`.
    pub fn new(destination: &'a L) -> Self {
        Self { destination }
    }
}

impl<L: Location> Policy<L> for Unconstrained<'_, L> {
    fn admits(&self, journey: &Journey<L>, stop: &L) -> bool {
        if stop == self.destination {
            return true;
        }
        match journey.visits(stop) {
            0 => true,
            1 => journey.origin() == Some(stop),
            _ => false,
        }
    }

    fn accepts(&self, journey: &Journey<L>) -> bool {
        journey.last_stop() == Some(self.destination)
    }

    fn continues(&self, _journey: &Journey<L>, accepted: bool) -> bool {
        !accepted
    }
}

/// Journeys to the destination within a stop limit.
///
/// Stops may be revisited freely; the depth cap is what ends the search.
/// Reaching the destination early does not end a branch, so the at-most
/// search also finds journeys that pass through the destination.
#[derive(Debug, Clone, Copy)]
pub struct StopBounded<'a, L> {
    destination: &'a L,
    limit: StopLimit,
}

impl<'a, L> StopBounded<'a, L> {
    /// Search for journeys ending at `destination` within `limit`.
    pub fn new(destination: &'a L, limit: StopLimit) -> Self {
        Self { destination, limit }
    }
}

impl<L: Location> Policy<L> for StopBounded<'_, L> {
    fn accepts(&self, journey: &Journey<L>) -> bool {
        journey.last_stop() == Some(self.destination)
            && self
                .limit
                .bound
                .holds(journey.stop_count(), self.limit.max_stops)
    }

    fn continues(&self, journey: &Journey<L>, _accepted: bool) -> bool {
        journey.stop_count() < self.limit.max_stops
    }
}

/// Journeys to the destination within a time limit.
///
/// Edge weights are never negative, so a branch that has run over the limit
/// can never come back under it and is pruned.
///
/// Zero-weight cycles never terminate: a branch that loops through routes of
/// zero days never runs over the limit, and the search grows until memory is
/// exhausted. Networks queried this way must have a positive weight on every
/// cycle reachable from the origin.
#[derive(Debug, Clone, Copy)]
pub struct TimeBounded<'a, L> {
    destination: &'a L,
    limit: TimeLimit,
}

impl<'a, L> TimeBounded<'a, L> {
    /// Search for journeys ending at `destination` within `limit`.
    pub fn new(destination: &'a L, limit: TimeLimit) -> Self {
        Self { destination, limit }
    }
}

impl<L: Location> Policy<L> for TimeBounded<'_, L> {
    fn accepts(&self, journey: &Journey<L>) -> bool {
        journey.last_stop() == Some(self.destination)
            && self
                .limit
                .bound
                .holds(journey.journey_time(), self.limit.max_time)
    }

    fn continues(&self, journey: &Journey<L>, accepted: bool) -> bool {
        if journey.journey_time() > self.limit.max_time {
            return false;
        }
        !accepted || self.limit.include_circular
    }
}
