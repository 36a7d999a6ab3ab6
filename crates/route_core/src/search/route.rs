use std::fmt;

use crate::constants::Weight;
use crate::graph::Graph;

/// Result of a route query: total price, number of flights, and the
/// ordered airport codes from origin to destination.
///
/// "No route" is the sentinel `(inf, 0, [])` from [`Route::no_route`]; a
/// genuine zero-cost self route is `(0.0, 0, [origin])`, so the two are
/// distinguishable by [`Route::is_reachable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub cost: Weight,
    pub hops: usize,
    pub stops: Vec<String>,
}

impl Route {
    pub fn new(stops: Vec<String>, cost: Weight) -> Self {
        let hops = stops.len().saturating_sub(1);
        Route { cost, hops, stops }
    }

    /// The designated unreachable result.
    pub fn no_route() -> Self {
        Route {
            cost: Weight::INFINITY,
            hops: 0,
            stops: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.stops.is_empty()
    }

    /// Intermediate stopovers, the presentation metric shown to travelers.
    /// Zero for direct flights and degenerate routes.
    pub fn stopovers(&self) -> usize {
        self.stops.len().saturating_sub(2)
    }

    /// Per-segment price breakdown of this route, looked up in `graph`.
    ///
    /// Returns `None` for routes with fewer than two stops, or when a
    /// consecutive pair is not connected in `graph` (i.e. the route was
    /// produced against a different network).
    pub fn breakdown(&self, graph: &Graph) -> Option<RouteBreakdown> {
        if self.stops.len() < 2 {
            return None;
        }

        let mut segments = Vec::with_capacity(self.stops.len() - 1);
        for pair in self.stops.windows(2) {
            let from = graph.node_index(&pair[0])?;
            let to = graph.node_index(&pair[1])?;
            let price = graph.connection_price(from, to)?;
            segments.push(Segment {
                origin: pair[0].clone(),
                destination: pair[1].clone(),
                price,
            });
        }

        let total_cost: Weight = segments.iter().map(|s| s.price).sum();
        let average_cost = total_cost / segments.len() as Weight;
        Some(RouteBreakdown {
            flights: segments.len(),
            stopovers: self.stopovers(),
            total_cost,
            average_cost,
            segments,
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stops.is_empty() {
            write!(f, "no route")
        } else {
            write!(f, "{}", self.stops.join(" -> "))
        }
    }
}

/// One flight of a resolved route.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub origin: String,
    pub destination: String,
    pub price: Weight,
}

/// Display-oriented projection over a [`Route`] and the graph it was
/// computed on. Carries no search semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteBreakdown {
    pub segments: Vec<Segment>,
    pub flights: usize,
    pub stopovers: usize,
    pub total_cost: Weight,
    pub average_cost: Weight,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::fare;
    use crate::graph::Graph;

    fn graph() -> Graph {
        let fares = vec![
            fare!("CCS", "AUA", 40.0),
            fare!("AUA", "SXM", 30.0),
            fare!("SXM", "SBH", 20.0),
        ];
        let allowed: FxHashSet<String> = ["CCS", "AUA", "SXM", "SBH"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        Graph::build(&fares, &allowed)
    }

    fn stops(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn sentinel_differs_from_self_route() {
        let unreachable = Route::no_route();
        let stay_put = Route::new(stops(&["CCS"]), 0.0);

        assert!(!unreachable.is_reachable());
        assert!(stay_put.is_reachable());
        assert_eq!(unreachable.hops, 0);
        assert_eq!(stay_put.hops, 0);
        assert!(unreachable.cost.is_infinite());
        assert_eq!(stay_put.cost, 0.0);
    }

    #[test]
    fn breakdown_reports_segments_and_aggregates() {
        let g = graph();
        let route = Route::new(stops(&["CCS", "AUA", "SXM", "SBH"]), 90.0);

        let breakdown = route.breakdown(&g).unwrap();
        assert_eq!(breakdown.flights, 3);
        assert_eq!(breakdown.stopovers, 2);
        assert_eq!(breakdown.segments[0].price, 40.0);
        assert_eq!(breakdown.segments[2].price, 20.0);
        assert_abs_diff_eq!(breakdown.total_cost, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(breakdown.average_cost, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn breakdown_needs_at_least_one_flight() {
        let g = graph();
        assert!(Route::no_route().breakdown(&g).is_none());
        assert!(Route::new(stops(&["CCS"]), 0.0).breakdown(&g).is_none());
    }

    #[test]
    fn breakdown_rejects_unconnected_pairs() {
        let g = graph();
        let route = Route::new(stops(&["CCS", "SBH"]), 0.0);
        assert!(route.breakdown(&g).is_none());
    }

    #[test]
    fn stopover_count() {
        assert_eq!(Route::new(stops(&["CCS", "AUA"]), 40.0).stopovers(), 0);
        assert_eq!(
            Route::new(stops(&["CCS", "AUA", "SXM"]), 70.0).stopovers(),
            1
        );
        assert_eq!(Route::no_route().stopovers(), 0);
    }
}
