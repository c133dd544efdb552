//! Common test utilities and network fixtures.
//!
//! Provides the demonstration network and deterministic random networks for
//! property-style checks.

use flightroute_lib::{sample_network, RouteNetwork};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Demonstration network plus an `Isolated` city with no flights at all.
#[allow(dead_code)]
pub fn sample_with_isolated() -> RouteNetwork {
    let mut network = sample_network();
    assert!(network.add_city("Isolated"));
    network
}

/// Name used for the `index`-th city of a generated network.
pub fn city_name(index: usize) -> String {
    format!("C{index}")
}

/// Build a random network with `cities` cities and roughly `density` of all
/// ordered pairs connected, using a fixed seed.
#[allow(dead_code)]
pub fn random_network(seed: u64, cities: usize, density: f64) -> RouteNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = RouteNetwork::with_capacity(cities);
    for index in 0..cities {
        network.add_city(city_name(index));
    }

    for from in 0..cities {
        for to in 0..cities {
            if from == to || !rng.gen_bool(density) {
                continue;
            }
            let cost = rng.gen_range(0..100);
            network
                .add_flight(&city_name(from), &city_name(to), cost)
                .expect("generated costs are non-negative");
        }
    }
    network
}
