use tracing_subscriber::EnvFilter;

use voyage_planner::config::DemoConfig;
use voyage_planner::domain::{Journey, Port};
use voyage_planner::network::{Network, RouteError, atlantic_network, load_network};
use voyage_planner::planner::{StopLimit, TimeLimit};

const SEPARATOR: &str = "-----------------------------------------";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut config = DemoConfig::from_env()?;
    // A path on the command line wins over the environment
    if let Some(path) = std::env::args().nth(1) {
        config.network_path = Some(path.into());
    }

    let network = match &config.network_path {
        Some(path) => load_network(path)?,
        None => atlantic_network(),
    };

    let ny = Port::parse("New York")?;
    let liverpool = Port::parse("Liverpool")?;
    let ba = Port::parse("Buenos Aires")?;
    let ct = Port::parse("Cape Town")?;
    let casablanca = Port::parse("Casablanca")?;

    println!("{network}");

    print_time(&network, &ba, &[ny.clone(), liverpool.clone()]);
    print_time(&network, &ba, &[casablanca.clone(), liverpool.clone()]);
    print_time(
        &network,
        &ba,
        &[ct.clone(), ny.clone(), liverpool.clone(), casablanca.clone()],
    );
    print_time(&network, &ba, &[ct.clone(), casablanca.clone()]);

    print_fastest(&network, &ba, &liverpool);
    println!("{SEPARATOR}");
    print_fastest(&network, &ny, &ny);
    println!("{SEPARATOR}");

    print_journeys(network.journeys_with_max_stops(
        &liverpool,
        &liverpool,
        StopLimit::at_most(config.max_stops),
    ));
    println!("{SEPARATOR}");
    print_journeys(network.journeys_with_max_stops(
        &ba,
        &liverpool,
        StopLimit::exactly(config.max_stops),
    ));
    println!("{SEPARATOR}");
    print_journeys(network.journeys_with_max_time(
        &liverpool,
        &liverpool,
        TimeLimit::at_most(config.max_days).with_circular(true),
    ));

    Ok(())
}

fn print_time(network: &Network<Port>, origin: &Port, stops: &[Port]) {
    let mut label = origin.to_string();
    for stop in stops {
        label.push_str(" --> ");
        label.push_str(stop.name());
    }

    match network.journey_time(origin, stops) {
        Ok(days) => println!("{label}: {days}"),
        Err(e) => println!("{label}: {e}"),
    }
}

fn print_fastest(network: &Network<Port>, origin: &Port, destination: &Port) {
    match network.fastest_journey(origin, destination) {
        Ok(Some(journey)) => println!("{journey}"),
        Ok(None) => println!("No journey from {origin} to {destination}"),
        Err(e) => println!("{e}"),
    }
}

fn print_journeys(result: Result<Vec<Journey<Port>>, RouteError<Port>>) {
    match result {
        Ok(journeys) => {
            for journey in journeys {
                println!("{journey}");
            }
        }
        Err(e) => println!("{e}"),
    }
}
