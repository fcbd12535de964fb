//! Voyage planner.
//!
//! Answers questions about journeys through a network of ports joined by
//! timed shipping routes: how long an explicit voyage takes, which voyage
//! between two ports is fastest, and which voyages fit within a stop or
//! time budget.

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
