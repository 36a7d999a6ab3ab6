use route_core::prelude::*;
use route_core::util::test_graphs::{caribbean_fares, caribbean_visas};

fn main() {
    env_logger::init();

    let fares = caribbean_fares();
    let visas = caribbean_visas();

    for has_visa in [true, false] {
        let allowed = allowed_airports(&visas, has_visa);
        let graph = Graph::build(&fares, &allowed);

        println!(
            "Traveler {} a visa ({} airports usable):",
            if has_visa { "with" } else { "without" },
            graph.num_airports()
        );

        let mut cheapest = CheapestSearch::new(&graph);
        let route = cheapest.search("CCS", "SBH");
        if route.is_reachable() {
            println!("  Cheapest CCS -> SBH: {} (${:.2})", route, route.cost);
        } else {
            println!("  Cheapest CCS -> SBH: no route");
        }

        let mut fewest = FewestHopsSearch::new(&graph);
        let route = fewest.search("POS", "SBH");
        if route.is_reachable() {
            println!(
                "  Fewest hops POS -> SBH: {} ({} flights, ${:.2})",
                route, route.hops, route.cost
            );
        } else {
            println!("  Fewest hops POS -> SBH: no route");
        }
    }
}
