//! Depth-first journey exploration.
//!
//! Walks every route out of the origin, depth first, extending a journey one
//! hop at a time and asking a [`Policy`] what to do at each stop. Nothing is
//! memoised: the search is exhaustive, since the bounded queries need every
//! matching journey and not just the best one.
//!
//! Pending branches live on an explicit stack rather than the call stack, so
//! long journeys do not risk overflowing it. Children are pushed in reverse so
//! neighbours are still visited in the order their routes were added, which
//! keeps results deterministic.

use tracing::{debug, trace};

use super::policy::Policy;
use crate::domain::{Journey, Location};
use crate::network::{Network, Node, RouteError};

/// Result of an exploration: the accepted journeys in discovery order.
#[derive(Debug, Clone)]
pub struct Exploration<L> {
    /// Accepted journeys, in the order they were found.
    pub journeys: Vec<Journey<L>>,

    /// Number of hops considered, admitted or not.
    pub branches_explored: usize,
}

/// A hop still to be considered.
struct Branch<'a, L> {
    /// The journey up to, but not including, `stop`.
    journey: Journey<L>,
    stop: &'a L,
    leg_time: f64,
}

/// Explore `network` from `origin` under `policy`.
///
/// The origin itself is never tested against the policy: a journey has to
/// take at least one hop before it can arrive anywhere.
///
/// # Errors
///
/// Returns [`RouteError::UnknownLocation`] if `origin` has no node, or if
/// the policy asks to continue from a stop that has no node.
pub fn explore<L, P>(
    network: &Network<L>,
    origin: &L,
    policy: &P,
) -> Result<Exploration<L>, RouteError<L>>
where
    L: Location,
    P: Policy<L> + ?Sized,
{
    let start = network.lookup(origin)?;

    let mut journey = Journey::new();
    journey.start(origin.clone());

    let mut stack = Vec::new();
    fan_out(&mut stack, start, &journey);

    let mut journeys = Vec::new();
    let mut branches_explored = 0;

    while let Some(Branch {
        mut journey,
        stop,
        leg_time,
    }) = stack.pop()
    {
        branches_explored += 1;

        if !policy.admits(&journey, stop) {
            continue;
        }

        journey.advance(stop.clone(), leg_time);

        let accepted = policy.accepts(&journey);
        if accepted {
            journeys.push(journey.clone());
        }

        if !policy.continues(&journey, accepted) {
            continue;
        }

        trace!(
            stop = %stop,
            stops = journey.stop_count(),
            time = journey.journey_time(),
            "expanding stop"
        );

        let node = network.lookup(stop)?;
        fan_out(&mut stack, node, &journey);
    }

    debug!(
        origin = %origin,
        journeys = journeys.len(),
        branches_explored,
        "exploration complete"
    );

    Ok(Exploration {
        journeys,
        branches_explored,
    })
}

/// Push one branch per route out of `node`, each with its own copy of the
/// journey.
fn fan_out<'a, L: Location>(
    stack: &mut Vec<Branch<'a, L>>,
    node: &'a Node<L>,
    journey: &Journey<L>,
) {
    let hops: Vec<_> = node.hops().collect();
    stack.extend(hops.into_iter().rev().map(|(stop, leg_time)| Branch {
        journey: journey.clone(),
        stop,
        leg_time,
    }));
}
