//! Flight-route search over a Caribbean fare network.
//!
//! Fares are undirected priced connections between airports. A query is
//! restricted to an allowed set of airports (derived from the traveler's
//! visa situation) and answered by one of two engines: [`CheapestSearch`]
//! minimizes total price and breaks ties by flight count,
//! [`FewestHopsSearch`] minimizes the flight count alone.
//!
//! # Basic usage
//! ```
//! use rustc_hash::FxHashSet;
//! use route_core::prelude::*;
//!
//! let fares = vec![
//!     route_core::fare!("CCS", "AUA", 40.0),
//!     route_core::fare!("AUA", "SXM", 30.0),
//! ];
//! let allowed: FxHashSet<String> =
//!     ["CCS", "AUA", "SXM"].iter().map(|c| c.to_string()).collect();
//!
//! let graph = Graph::build(&fares, &allowed);
//!
//! let mut search = CheapestSearch::new(&graph);
//! let route = search.search("CCS", "SXM");
//!
//! assert_eq!(route.cost, 70.0);
//! assert_eq!(route.stops, vec!["CCS", "AUA", "SXM"]);
//! ```
//!
//! [`CheapestSearch`]: crate::search::cheapest::CheapestSearch
//! [`FewestHopsSearch`]: crate::search::fewest_hops::FewestHopsSearch
pub mod constants;
pub mod fares;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
pub mod visas;
