//! Limits for bounded journey searches.

/// How a journey's stop count or time is compared with its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bound {
    /// The value must equal the limit.
    Exactly,
    /// The value may be anything up to and including the limit.
    #[default]
    AtMost,
}

impl Bound {
    /// Returns true if `value` satisfies this bound against `limit`.
    ///
    /// `Exactly` uses plain `==`, so for times this is exact floating-point
    /// equality.
    pub fn holds<T: PartialOrd>(self, value: T, limit: T) -> bool {
        match self {
            Bound::Exactly => value == limit,
            Bound::AtMost => value <= limit,
        }
    }
}

/// Limit on the number of stops in a journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopLimit {
    /// Maximum number of hops. Exploration never goes deeper than this.
    pub max_stops: usize,

    /// Whether journeys must use exactly `max_stops` hops.
    pub bound: Bound,
}

impl StopLimit {
    /// Create a new stop limit.
    pub fn new(max_stops: usize, bound: Bound) -> Self {
        Self { max_stops, bound }
    }

    /// Journeys of exactly `max_stops` hops.
    pub fn exactly(max_stops: usize) -> Self {
        Self::new(max_stops, Bound::Exactly)
    }

    /// Journeys of at most `max_stops` hops.
    pub fn at_most(max_stops: usize) -> Self {
        Self::new(max_stops, Bound::AtMost)
    }
}

/// Limit on the accumulated time of a journey.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeLimit {
    /// Maximum journey time in days.
    /// Branches are pruned as soon as they exceed it.
    pub max_time: f64,

    /// Whether journeys must take exactly `max_time`.
    pub bound: Bound,

    /// Keep exploring after reaching the destination, so journeys that pass
    /// through it and come back are found too.
    pub include_circular: bool,
}

impl TimeLimit {
    /// Create a new time limit.
    pub fn new(max_time: f64, bound: Bound, include_circular: bool) -> Self {
        Self {
            max_time,
            bound,
            include_circular,
        }
    }

    /// Journeys taking exactly `max_time`, stopping at the first arrival.
    pub fn exactly(max_time: f64) -> Self {
        Self::new(max_time, Bound::Exactly, false)
    }

    /// Journeys taking at most `max_time`, stopping at the first arrival.
    pub fn at_most(max_time: f64) -> Self {
        Self::new(max_time, Bound::AtMost, false)
    }

    /// Returns this limit with circular journeys switched on or off.
    pub fn with_circular(mut self, include_circular: bool) -> Self {
        self.include_circular = include_circular;
        self
    }
}
