//! Location identity.

use std::fmt;
use std::hash::Hash;

/// Anything that can name a place in a network.
///
/// The planner never looks inside a location; it only compares, hashes and
/// clones them, and prints them in diagnostics. Every type with those
/// capabilities is a location, so `&str` works as well as [`Port`](super::Port).
pub trait Location: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> Location for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}
