//! Journey planner using exhaustive depth-first exploration.
//!
//! This module answers three kinds of question about a network: which
//! journey between two ports is fastest, and which journeys fit within a
//! stop limit or a time limit. All three run the same explorer under a
//! different [`Policy`].

mod config;
mod explore;
mod policy;
mod rank;
mod search;

#[cfg(test)]
mod search_tests;

pub use config::{Bound, StopLimit, TimeLimit};
pub use explore::{Exploration, explore};
pub use policy::{Policy, StopBounded, TimeBounded, Unconstrained};
pub use rank::{fastest, rank_by_time};
