//! Interactive console for Caribbean flight-route queries.
use std::path::{Path, PathBuf};

use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

use route_core::prelude::*;
use route_core::visas::VisaRequirements;

struct Context {
    fares: Vec<Fare>,
    visas: VisaRequirements,
}

impl Context {
    fn new(fares: Vec<Fare>, visas: VisaRequirements) -> Self {
        Self { fares, visas }
    }

    /// Builds the network the traveler is allowed to fly, or explains why
    /// the query cannot be answered.
    fn graph_for(
        &self,
        origin: &str,
        destination: &str,
        has_visa: bool,
    ) -> std::result::Result<Graph, String> {
        for code in [origin, destination] {
            if !self.visas.contains_key(code) {
                return Err(format!("'{}' is not a known airport", code));
            }
        }

        let allowed = allowed_airports(&self.visas, has_visa);
        for code in [origin, destination] {
            if !allowed.contains(code) {
                return Err(format!(
                    "Airport '{}' requires a visa the traveler does not hold",
                    code
                ));
            }
        }

        Ok(Graph::build(&self.fares, &allowed))
    }
}

fn query_args(args: &ArgMatches) -> (String, String, bool) {
    let origin = args.get_one::<String>("src").unwrap().to_uppercase();
    let destination = args.get_one::<String>("dst").unwrap().to_uppercase();
    let has_visa = *args.get_one::<bool>("visa").unwrap_or(&false);
    (origin, destination, has_visa)
}

/// Print fare network info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let visa_free = context.visas.values().filter(|required| !**required).count();
    Ok(Some(format!(
        "{} airports ({} visa-free), {} fares",
        context.visas.len(),
        visa_free,
        context.fares.len()
    )))
}

fn run_cheapest(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (origin, destination, has_visa) = query_args(&args);
    let graph = match context.graph_for(&origin, &destination, has_visa) {
        Ok(graph) => graph,
        Err(message) => return Ok(Some(message)),
    };

    let mut search = CheapestSearch::new(&graph);
    let route = search.search(&origin, &destination);

    if !route.is_reachable() {
        return Ok(Some(format!(
            "No route from {} to {} with the given criteria",
            origin, destination
        )));
    }
    Ok(Some(format!(
        "Route: {}\nTotal cost: ${:.2}\nFlights: {} ({} stopovers)\n{}",
        route,
        route.cost,
        route.hops,
        route.stopovers(),
        search.stats
    )))
}

fn run_fewest_hops(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (origin, destination, has_visa) = query_args(&args);
    let graph = match context.graph_for(&origin, &destination, has_visa) {
        Ok(graph) => graph,
        Err(message) => return Ok(Some(message)),
    };

    let mut search = FewestHopsSearch::new(&graph);
    let route = search.search(&origin, &destination);

    if !route.is_reachable() {
        return Ok(Some(format!(
            "No route from {} to {} with the given criteria",
            origin, destination
        )));
    }

    let mut out = format!(
        "Route: {} ({} flights, {} stopovers)\n",
        route,
        route.hops,
        route.stopovers()
    );
    if let Some(breakdown) = route.breakdown(&graph) {
        for segment in &breakdown.segments {
            out.push_str(&format!(
                "  {} -> {}: ${:.2}\n",
                segment.origin, segment.destination, segment.price
            ));
        }
        out.push_str(&format!(
            "Total: ${:.2}, average per flight: ${:.2}",
            breakdown.total_cost, breakdown.average_cost
        ));
    }
    Ok(Some(out))
}

fn main() -> Result<()> {
    env_logger::init();

    let fares_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/fares.json".to_string());
    let visas_file = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "data/visas.json".to_string());

    let fares = if fares_file.ends_with(".csv") {
        load_fares_csv(Path::new(&fares_file))
    } else {
        load_fares_json(Path::new(&fares_file))
    }
    .unwrap_or_else(|err| {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    });

    let visas = load_visa_requirements(Path::new(&visas_file)).unwrap_or_else(|err| {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    });

    let context = Context::new(fares, visas);

    let mut repl = Repl::new(context)
        .with_name("Metro Travel")
        .with_version("v0.1.0")
        .with_description("Flight route queries over the Caribbean fare network")
        .with_banner("Welcome to the Metro Travel route finder")
        .with_history(PathBuf::from(".history"), 100)
        .with_command(Command::new("info").about("Print fare network info"), info)
        .with_command(
            Command::new("cheapest")
                .arg(Arg::new("src").required(true).help("Origin airport code"))
                .arg(Arg::new("dst").required(true).help("Destination airport code"))
                .arg(
                    Arg::new("visa")
                        .value_parser(value_parser!(bool))
                        .required(false)
                        .help("Whether the traveler holds a visa"),
                )
                .about("Find the cheapest route (fewest flights on price ties)"),
            run_cheapest,
        )
        .with_command(
            Command::new("hops")
                .arg(Arg::new("src").required(true).help("Origin airport code"))
                .arg(Arg::new("dst").required(true).help("Destination airport code"))
                .arg(
                    Arg::new("visa")
                        .value_parser(value_parser!(bool))
                        .required(false)
                        .help("Whether the traveler holds a visa"),
                )
                .about("Find a route with the fewest flights, with a price breakdown"),
            run_fewest_hops,
        );

    repl.run()
}
