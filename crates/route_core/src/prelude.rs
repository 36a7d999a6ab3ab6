//! Re-exports of the most commonly used items in `route_core`.
pub use crate::fares::{load_fares_csv, load_fares_json, Fare};
pub use crate::graph::{node_index, Graph, NodeIndex};
pub use crate::search::cheapest::CheapestSearch;
pub use crate::search::fewest_hops::FewestHopsSearch;
pub use crate::search::route::{Route, RouteBreakdown};
pub use crate::visas::{allowed_airports, load_visa_requirements};
