//! The Caribbean fixture network shared by tests and the demo binary.

use rustc_hash::FxHashSet;

use crate::fare;
use crate::fares::Fare;
use crate::graph::Graph;
use crate::visas::{allowed_airports, VisaRequirements};

/// Fare table of the fixture network. SXM is the central hub: CCS and the
/// ABC islands sit west of it, SBH hangs off it, and POS/BGI/PTP form the
/// eastern group that can also reach SBH via PTP.
///
/// Fare order is load-bearing for the level-order engine: adjacency lists
/// keep it, and equal-hop ties resolve to the earliest fare.
pub fn caribbean_fares() -> Vec<Fare> {
    vec![
        fare!("CCS", "AUA", 40.0),
        fare!("CCS", "CUR", 35.0),
        fare!("CCS", "BON", 60.0),
        fare!("CCS", "SXM", 90.0),
        fare!("AUA", "CUR", 15.0),
        fare!("CUR", "BON", 15.0),
        fare!("AUA", "SXM", 30.0),
        fare!("BON", "SXM", 50.0),
        fare!("SXM", "SBH", 20.0),
        fare!("CUR", "SDQ", 80.0),
        fare!("SDQ", "SXM", 45.0),
        fare!("POS", "BGI", 35.0),
        fare!("BGI", "SXM", 70.0),
        fare!("POS", "SXM", 100.0),
        fare!("POS", "PTP", 80.0),
        fare!("PTP", "SBH", 40.0),
    ]
}

/// Visa requirements of the fixture network. The ABC islands and
/// Sint Maarten require a visa; the rest do not.
pub fn caribbean_visas() -> VisaRequirements {
    let mut visas = VisaRequirements::default();
    for (code, requires_visa) in [
        ("CCS", false),
        ("AUA", true),
        ("CUR", true),
        ("BON", true),
        ("SXM", true),
        ("SDQ", false),
        ("SBH", false),
        ("POS", false),
        ("BGI", false),
        ("PTP", false),
    ] {
        visas.insert(code.to_string(), requires_visa);
    }
    visas
}

/// The fixture network as seen by a traveler with or without a visa.
pub fn caribbean_graph(has_visa: bool) -> Graph {
    let fares = caribbean_fares();
    let allowed: FxHashSet<String> = allowed_airports(&caribbean_visas(), has_visa);
    Graph::build(&fares, &allowed)
}
