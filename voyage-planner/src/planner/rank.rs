//! Ordering of search results.

use crate::domain::Journey;

/// Sort journeys by accumulated time, shortest first.
///
/// The sort is stable: journeys with equal times keep the order they were
/// discovered in.
pub fn rank_by_time<L>(mut journeys: Vec<Journey<L>>) -> Vec<Journey<L>> {
    journeys.sort_by(|a, b| a.cmp_by_time(b));
    journeys
}

/// The quickest of `journeys`, or `None` if there are none.
///
/// Ties go to the journey discovered first.
pub fn fastest<L>(journeys: Vec<Journey<L>>) -> Option<Journey<L>> {
    rank_by_time(journeys).into_iter().next()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn journeys_strategy() -> impl Strategy<Value = Vec<Journey<u8>>> {
        prop::collection::vec((0u8..10, 0u32..100), 0..20).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(stop, time)| {
                    let mut journey = Journey::new();
                    journey.start(0);
                    journey.advance(stop, f64::from(time));
                    journey
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn rank_is_sorted(journeys in journeys_strategy()) {
            let ranked = rank_by_time(journeys);

            for window in ranked.windows(2) {
                prop_assert!(window[0].journey_time() <= window[1].journey_time());
            }
        }

        #[test]
        fn rank_preserves_elements(journeys in journeys_strategy()) {
            let count = journeys.len();
            prop_assert_eq!(rank_by_time(journeys).len(), count);
        }

        #[test]
        fn fastest_is_minimum(journeys in journeys_strategy()) {
            let min = journeys
                .iter()
                .map(|j| j.journey_time())
                .fold(None, |acc: Option<f64>, t| Some(acc.map_or(t, |m| m.min(t))));

            prop_assert_eq!(fastest(journeys).map(|j| j.journey_time()), min);
        }
    }
}
