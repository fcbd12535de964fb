//! Unit tests for the journey queries.

use super::{Bound, StopLimit, TimeLimit};
use crate::domain::{Journey, Port, Weight};
use crate::network::{Network, RouteError, atlantic_network};

fn port(name: &str) -> Port {
    Port::parse(name).unwrap()
}

fn ny() -> Port {
    port("New York")
}

fn liverpool() -> Port {
    port("Liverpool")
}

fn ba() -> Port {
    port("Buenos Aires")
}

fn ct() -> Port {
    port("Cape Town")
}

fn casablanca() -> Port {
    port("Casablanca")
}

fn routes(journeys: &[Journey<Port>]) -> Vec<Vec<&str>> {
    journeys
        .iter()
        .map(|j| j.route().iter().map(Port::name).collect())
        .collect()
}

fn times(journeys: &[Journey<Port>]) -> Vec<f64> {
    journeys.iter().map(Journey::journey_time).collect()
}

fn assert_ends(journey: &Journey<Port>, origin: &Port, destination: &Port) {
    assert_eq!(journey.origin(), Some(origin));
    assert_eq!(journey.last_stop(), Some(destination));
}

// ========== Explicit journey times ==========

#[test]
fn nominated_journey_times() {
    let network = atlantic_network();

    assert_eq!(network.journey_time(&ba(), &[ny(), liverpool()]), Ok(10.0));
    assert_eq!(
        network.journey_time(&ba(), &[casablanca(), liverpool()]),
        Ok(8.0)
    );
    assert_eq!(
        network.journey_time(&ba(), &[ct(), ny(), liverpool(), casablanca()]),
        Ok(19.0)
    );
}

#[test]
fn invalid_journey_names_missing_hop() {
    let network = atlantic_network();

    assert_eq!(
        network.journey_time(&ba(), &[ct(), casablanca()]),
        Err(RouteError::UnreachableNeighbor {
            origin: ct(),
            destination: casablanca(),
        })
    );
}

#[test]
fn every_edge_times_itself() {
    let network = atlantic_network();

    for node in network.nodes() {
        for edge in node.edges() {
            assert_eq!(
                network.journey_time(edge.origin(), std::slice::from_ref(edge.destination())),
                Ok(edge.weight())
            );
        }
    }
}

// ========== Fastest journeys ==========

#[test]
fn fastest_ba_to_liverpool() {
    let network = atlantic_network();
    let journey = network
        .fastest_journey(&ba(), &liverpool())
        .unwrap()
        .unwrap();

    assert_eq!(journey.journey_time(), 8.0);
    assert_ends(&journey, &ba(), &liverpool());
    assert_eq!(
        routes(std::slice::from_ref(&journey)),
        vec![vec!["Buenos Aires", "Casablanca", "Liverpool"]]
    );
}

#[test]
fn fastest_round_trip_from_new_york() {
    let network = atlantic_network();
    let journey = network.fastest_journey(&ny(), &ny()).unwrap().unwrap();

    assert_eq!(journey.journey_time(), 18.0);
    assert_ends(&journey, &ny(), &ny());
    assert_eq!(
        journey.route(),
        &[ny(), liverpool(), ct(), ny()]
    );
}

#[test]
fn all_journeys_ba_to_liverpool_in_discovery_order() {
    let network = atlantic_network();
    let journeys = network.all_journeys(&ba(), &liverpool()).unwrap();

    assert_eq!(
        routes(&journeys),
        vec![
            vec!["Buenos Aires", "New York", "Liverpool"],
            vec!["Buenos Aires", "Casablanca", "Liverpool"],
            vec!["Buenos Aires", "Casablanca", "Cape Town", "New York", "Liverpool"],
            vec!["Buenos Aires", "Cape Town", "New York", "Liverpool"],
        ]
    );
    assert_eq!(times(&journeys), vec![10.0, 8.0, 23.0, 16.0]);
}

#[test]
fn all_journeys_never_revisit_interior_stops() {
    let network = atlantic_network();
    let journeys = network.all_journeys(&ny(), &ny()).unwrap();

    assert_eq!(
        routes(&journeys),
        vec![
            vec!["New York", "Liverpool", "Casablanca", "Cape Town", "New York"],
            vec!["New York", "Liverpool", "Cape Town", "New York"],
        ]
    );
}

#[test]
fn fastest_unreachable_is_none() {
    let network = atlantic_network();

    // Nothing sails to Buenos Aires
    assert_eq!(network.fastest_journey(&ny(), &ba()), Ok(None));
}

#[test]
fn fastest_unknown_origin_fails() {
    let network = atlantic_network();
    let atlantis = port("Atlantis");

    assert_eq!(
        network.fastest_journey(&atlantis, &liverpool()),
        Err(RouteError::UnknownLocation(atlantis))
    );
}

#[test]
fn origin_may_be_passed_through_once() {
    let days = |d| Weight::new(d).unwrap();
    let mut network = Network::new();
    let a = network.add_node("A");
    a.add_edge("B", days(1.0));
    a.add_edge("C", days(5.0));
    network.add_node("B").add_edge("A", days(1.0));
    network.add_node("C");

    let journeys = network.all_journeys(&"A", &"C").unwrap();
    let found: Vec<_> = journeys.iter().map(|j| j.route().to_vec()).collect();

    assert_eq!(found, vec![vec!["A", "B", "A", "C"], vec!["A", "C"]]);
    assert_eq!(
        network.fastest_journey(&"A", &"C").unwrap().unwrap().journey_time(),
        5.0
    );
}

// ========== Journeys bounded by stops ==========

#[test]
fn exactly_three_stops_liverpool_round_trip() {
    let network = atlantic_network();
    let journeys = network
        .journeys_with_max_stops(&liverpool(), &liverpool(), StopLimit::exactly(3))
        .unwrap();

    assert!(!journeys.is_empty());
    for journey in &journeys {
        assert_eq!(journey.route().len(), 4);
        assert_ends(journey, &liverpool(), &liverpool());
    }
    assert_eq!(
        routes(&journeys),
        vec![vec!["Liverpool", "Cape Town", "New York", "Liverpool"]]
    );
}

#[test]
fn exactly_four_stops_ba_to_liverpool() {
    let network = atlantic_network();
    let journeys = network
        .journeys_with_max_stops(&ba(), &liverpool(), StopLimit::exactly(4))
        .unwrap();

    for journey in &journeys {
        assert_eq!(journey.route().len(), 5);
        assert_ends(journey, &ba(), &liverpool());
    }
    assert_eq!(
        routes(&journeys),
        vec![
            vec!["Buenos Aires", "New York", "Liverpool", "Casablanca", "Liverpool"],
            vec!["Buenos Aires", "Casablanca", "Liverpool", "Casablanca", "Liverpool"],
            vec!["Buenos Aires", "Casablanca", "Cape Town", "New York", "Liverpool"],
        ]
    );
    assert_eq!(times(&journeys), vec![16.0, 14.0, 23.0]);
}

#[test]
fn at_most_four_stops_passes_through_destination() {
    let network = atlantic_network();
    let journeys = network
        .journeys_with_max_stops(&liverpool(), &liverpool(), StopLimit::at_most(4))
        .unwrap();

    for journey in &journeys {
        assert!(journey.route().len() <= 5);
        assert_ends(journey, &liverpool(), &liverpool());
    }
    assert_eq!(
        routes(&journeys),
        vec![
            vec!["Liverpool", "Casablanca", "Liverpool"],
            vec!["Liverpool", "Casablanca", "Liverpool", "Casablanca", "Liverpool"],
            vec!["Liverpool", "Casablanca", "Cape Town", "New York", "Liverpool"],
            vec!["Liverpool", "Cape Town", "New York", "Liverpool"],
        ]
    );
}

#[test]
fn zero_stops_finds_nothing() {
    let network = atlantic_network();

    for bound in [Bound::Exactly, Bound::AtMost] {
        let journeys = network
            .journeys_with_max_stops(&liverpool(), &liverpool(), StopLimit::new(0, bound))
            .unwrap();
        assert!(journeys.is_empty());
    }
}

#[test]
fn max_stops_unknown_origin_fails() {
    let network = atlantic_network();

    assert!(matches!(
        network.journeys_with_max_stops(&port("Atlantis"), &liverpool(), StopLimit::at_most(3)),
        Err(RouteError::UnknownLocation(_))
    ));
}

// ========== Journeys bounded by time ==========

#[test]
fn up_to_25_days_circular() {
    let network = atlantic_network();
    let journeys = network
        .journeys_with_max_time(
            &liverpool(),
            &liverpool(),
            TimeLimit::at_most(25.0).with_circular(true),
        )
        .unwrap();

    for journey in &journeys {
        assert!(journey.journey_time() <= 25.0);
        assert_ends(journey, &liverpool(), &liverpool());
    }
    assert_eq!(
        routes(&journeys),
        vec![
            vec!["Liverpool", "Casablanca", "Liverpool"],
            vec!["Liverpool", "Casablanca", "Liverpool", "Casablanca", "Liverpool"],
            vec![
                "Liverpool", "Casablanca", "Liverpool", "Casablanca", "Liverpool",
                "Casablanca", "Liverpool",
            ],
            vec![
                "Liverpool", "Casablanca", "Liverpool", "Casablanca", "Liverpool",
                "Casablanca", "Liverpool", "Casablanca", "Liverpool",
            ],
            vec!["Liverpool", "Casablanca", "Liverpool", "Cape Town", "New York", "Liverpool"],
            vec!["Liverpool", "Casablanca", "Cape Town", "New York", "Liverpool"],
            vec!["Liverpool", "Cape Town", "New York", "Liverpool"],
            vec!["Liverpool", "Cape Town", "New York", "Liverpool", "Casablanca", "Liverpool"],
        ]
    );
    assert_eq!(
        times(&journeys),
        vec![6.0, 12.0, 18.0, 24.0, 24.0, 21.0, 18.0, 24.0]
    );

    // Some journeys call at Liverpool on the way round
    assert!(journeys.iter().any(|j| j.visits(&liverpool()) > 2));
}

#[test]
fn up_to_25_days_not_circular_stops_at_first_arrival() {
    let network = atlantic_network();
    let journeys = network
        .journeys_with_max_time(&liverpool(), &liverpool(), TimeLimit::at_most(25.0))
        .unwrap();

    assert_eq!(
        routes(&journeys),
        vec![
            vec!["Liverpool", "Casablanca", "Liverpool"],
            vec!["Liverpool", "Casablanca", "Cape Town", "New York", "Liverpool"],
            vec!["Liverpool", "Cape Town", "New York", "Liverpool"],
        ]
    );
    for journey in &journeys {
        assert_eq!(journey.visits(&liverpool()), 2);
    }
}

#[test]
fn exactly_18_days() {
    let network = atlantic_network();
    let journeys = network
        .journeys_with_max_time(&liverpool(), &liverpool(), TimeLimit::exactly(18.0))
        .unwrap();

    assert_eq!(
        routes(&journeys),
        vec![
            vec![
                "Liverpool", "Casablanca", "Liverpool", "Casablanca", "Liverpool",
                "Casablanca", "Liverpool",
            ],
            vec!["Liverpool", "Cape Town", "New York", "Liverpool"],
        ]
    );
    assert_eq!(times(&journeys), vec![18.0, 18.0]);
}

#[test]
fn exactly_24_days_circular() {
    let network = atlantic_network();
    let journeys = network
        .journeys_with_max_time(
            &liverpool(),
            &liverpool(),
            TimeLimit::exactly(24.0).with_circular(true),
        )
        .unwrap();

    assert_eq!(
        routes(&journeys),
        vec![
            vec![
                "Liverpool", "Casablanca", "Liverpool", "Casablanca", "Liverpool",
                "Casablanca", "Liverpool", "Casablanca", "Liverpool",
            ],
            vec!["Liverpool", "Casablanca", "Liverpool", "Cape Town", "New York", "Liverpool"],
            vec!["Liverpool", "Cape Town", "New York", "Liverpool", "Casablanca", "Liverpool"],
        ]
    );
    assert_eq!(times(&journeys), vec![24.0, 24.0, 24.0]);
    // Every one of them calls at Liverpool on the way round
    for journey in &journeys {
        assert!(journey.visits(&liverpool()) > 2);
    }

    // Arrivals short of the target are never accepted, so with positive
    // weights the circular flag changes nothing for an exact bound
    let non_circular = network
        .journeys_with_max_time(&liverpool(), &liverpool(), TimeLimit::exactly(24.0))
        .unwrap();
    assert_eq!(non_circular, journeys);
}

#[test]
fn time_limit_too_short_finds_nothing() {
    let network = atlantic_network();
    let journeys = network
        .journeys_with_max_time(&ba(), &liverpool(), TimeLimit::at_most(7.0))
        .unwrap();

    assert!(journeys.is_empty());
}

// ========== Properties over random networks ==========

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const PORTS: u8 = 5;

    /// Random networks over ports 0..5 with every port registered.
    fn network_strategy() -> impl Strategy<Value = Network<u8>> {
        prop::collection::vec((0..PORTS, 0..PORTS, 2u32..10), 0..10).prop_map(|edges| {
            let mut network = Network::new();
            for port in 0..PORTS {
                network.node_entry(port);
            }
            for (from, to, days) in edges {
                network
                    .node_entry(from)
                    .add_edge(to, Weight::new(f64::from(days)).unwrap());
            }
            network
        })
    }

    fn retimed(network: &Network<u8>, journey: &Journey<u8>) -> f64 {
        let route = journey.route();
        network.journey_time(&route[0], &route[1..]).unwrap()
    }

    proptest! {
        #[test]
        fn single_hop_time_is_first_edge_weight(network in network_strategy()) {
            for node in network.nodes() {
                for dest in node.neighbours() {
                    let first = node
                        .edges()
                        .iter()
                        .find(|e| e.destination() == dest)
                        .unwrap()
                        .weight();
                    prop_assert_eq!(
                        network.journey_time(node.location(), std::slice::from_ref(dest)),
                        Ok(first)
                    );
                }
            }
        }

        #[test]
        fn exact_stops_have_exact_length(
            network in network_strategy(),
            origin in 0..PORTS,
            destination in 0..PORTS,
            max_stops in 0usize..5,
        ) {
            let journeys = network
                .journeys_with_max_stops(&origin, &destination, StopLimit::exactly(max_stops))
                .unwrap();

            for journey in &journeys {
                prop_assert_eq!(journey.route().len(), max_stops + 1);
                prop_assert_eq!(journey.origin(), Some(&origin));
                prop_assert_eq!(journey.last_stop(), Some(&destination));
                prop_assert_eq!(journey.journey_time(), retimed(&network, journey));
            }
        }

        #[test]
        fn at_most_stops_are_bounded(
            network in network_strategy(),
            origin in 0..PORTS,
            destination in 0..PORTS,
            max_stops in 0usize..5,
        ) {
            let at_most = network
                .journeys_with_max_stops(&origin, &destination, StopLimit::at_most(max_stops))
                .unwrap();
            let exact = network
                .journeys_with_max_stops(&origin, &destination, StopLimit::exactly(max_stops))
                .unwrap();

            for journey in &at_most {
                prop_assert!(journey.route().len() <= max_stops + 1);
                prop_assert!(journey.route().len() >= 2);
                prop_assert_eq!(journey.last_stop(), Some(&destination));
            }
            // Every exact journey is also an at-most journey
            for journey in &exact {
                prop_assert!(at_most.contains(journey));
            }
        }

        #[test]
        fn fastest_is_no_slower_than_any_journey(
            network in network_strategy(),
            origin in 0..PORTS,
            destination in 0..PORTS,
        ) {
            let all = network.all_journeys(&origin, &destination).unwrap();
            let best = network.fastest_journey(&origin, &destination).unwrap();

            match best {
                None => prop_assert!(all.is_empty()),
                Some(best) => {
                    prop_assert_eq!(best.origin(), Some(&origin));
                    prop_assert_eq!(best.last_stop(), Some(&destination));
                    prop_assert!(best.route().len() >= 2);
                    for journey in &all {
                        prop_assert!(best.journey_time() <= journey.journey_time());
                    }
                }
            }
        }

        #[test]
        fn all_journeys_repeat_only_the_origin(
            network in network_strategy(),
            origin in 0..PORTS,
            destination in 0..PORTS,
        ) {
            for journey in network.all_journeys(&origin, &destination).unwrap() {
                let route = journey.route();
                // Interior stops, excluding the origin and the final arrival
                for stop in &route[1..route.len() - 1] {
                    if *stop == origin {
                        prop_assert_eq!(journey.visits(stop), 2 + usize::from(destination == origin));
                    } else {
                        prop_assert_eq!(journey.visits(stop), 1);
                    }
                }
            }
        }

        #[test]
        fn time_bounded_journeys_fit(
            network in network_strategy(),
            origin in 0..PORTS,
            destination in 0..PORTS,
            max_time in 0u32..9,
            include_circular in any::<bool>(),
        ) {
            let max_time = f64::from(max_time);
            let limit = TimeLimit::at_most(max_time).with_circular(include_circular);
            let journeys = network
                .journeys_with_max_time(&origin, &destination, limit)
                .unwrap();

            for journey in &journeys {
                prop_assert!(journey.journey_time() <= max_time);
                prop_assert_eq!(journey.last_stop(), Some(&destination));
                prop_assert_eq!(journey.journey_time(), retimed(&network, journey));
                if !include_circular {
                    // The destination only appears at the end (or also as origin)
                    let expected = 1 + usize::from(destination == origin);
                    prop_assert_eq!(journey.visits(&destination), expected);
                }
            }
        }
    }
}
