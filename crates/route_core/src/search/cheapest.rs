use std::collections::BinaryHeap;

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::graph::{Graph, NodeIndex};
use crate::search::route::Route;
use crate::statistics::SearchStats;

/// A label: the best known `(cost, hops)` pair for reaching a node.
/// Compared lexicographically, lower cost first, fewer hops on ties.
type Label = (Weight, usize);

const UNREACHED: Label = (Weight::INFINITY, usize::MAX);

fn improves(candidate: Label, current: Label) -> bool {
    candidate.0 < current.0 || (candidate.0 == current.0 && candidate.1 < current.1)
}

#[derive(Debug)]
struct Candidate {
    cost: Weight,
    hops: usize,
    node: NodeIndex,
    // Frontier entries carry their full path prefix. Fine for networks of
    // this size; predecessor pointers would be the scalable alternative.
    path: Vec<NodeIndex>,
}

impl Candidate {
    fn new(cost: Weight, hops: usize, node: NodeIndex, path: Vec<NodeIndex>) -> Self {
        Self {
            cost,
            hops,
            node,
            path,
        }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        other.cost == self.cost && other.hops == self.hops
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the cheapest (then shortest) entry is at the top of
        // the max-heap.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| other.hops.cmp(&self.hops))
    }
}

/// Best-first search minimizing total price, breaking ties by flight count.
///
/// Minimizing price alone is not equivalent: among equal-price routes the
/// one with fewer flights must win, so the whole search runs on the
/// composite `(cost, hops)` key.
pub struct CheapestSearch<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> CheapestSearch<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        CheapestSearch {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Returns the cheapest route between two airport codes, or the
    /// no-route sentinel if either code is unknown or no route exists.
    pub fn search(&mut self, origin: &str, destination: &str) -> Route {
        self.stats.init();

        let (src, dst) = match (self.g.node_index(origin), self.g.node_index(destination)) {
            (Some(src), Some(dst)) => (src, dst),
            _ => {
                self.stats.finish();
                return Route::no_route();
            }
        };

        if src == dst {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Route::new(vec![origin.to_string()], 0.0);
        }

        let mut labels: FxHashMap<NodeIndex, Label> = FxHashMap::default();
        labels.insert(src, (0.0, 0));

        let mut frontier = BinaryHeap::new();
        frontier.push(Candidate::new(0.0, 0, src, vec![src]));

        while let Some(Candidate {
            cost,
            hops,
            node,
            path,
        }) = frontier.pop()
        {
            // Stale entry: a strictly better label was settled meanwhile
            let best = *labels.get(&node).unwrap_or(&UNREACHED);
            if improves(best, (cost, hops)) {
                continue;
            }
            self.stats.nodes_settled += 1;

            // First extraction of the destination is optimal under the
            // composite ordering
            if node == dst {
                self.stats.finish();
                let route = self.materialize(path, cost);
                debug!("Route found: {:?}", route);
                info!(
                    "Route found: {:?}/{} nodes settled",
                    self.stats.duration, self.stats.nodes_settled
                );
                return route;
            }

            for (next, price) in self.g.neighbors(node) {
                let candidate = (cost + price, hops + 1);
                if improves(candidate, *labels.get(&next).unwrap_or(&UNREACHED)) {
                    labels.insert(next, candidate);
                    let mut extended = path.clone();
                    extended.push(next);
                    frontier.push(Candidate::new(candidate.0, candidate.1, next, extended));
                }
            }
        }

        self.stats.finish();
        info!(
            "No route found: {:?}/{} nodes settled",
            self.stats.duration, self.stats.nodes_settled
        );
        Route::no_route()
    }

    fn materialize(&self, path: Vec<NodeIndex>, cost: Weight) -> Route {
        let stops = path
            .into_iter()
            .map(|node| self.g.code(node).to_string())
            .collect();
        Route::new(stops, cost)
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::fare;
    use crate::fares::Fare;
    use crate::util::test_graphs::caribbean_graph;

    fn build(fares: Vec<Fare>, codes: &[&str]) -> Graph {
        let allowed: FxHashSet<String> = codes.iter().map(|c| c.to_string()).collect();
        Graph::build(&fares, &allowed)
    }

    fn assert_route(stops: Vec<&str>, cost: Weight, route: Route) {
        assert_eq!(route.stops, stops);
        assert_eq!(route.cost, cost);
        assert_eq!(route.hops, stops.len() - 1);
    }

    fn assert_no_route(route: Route) {
        assert_eq!(route, Route::no_route());
    }

    fn antilles() -> Vec<Fare> {
        vec![
            fare!("CCS", "AUA", 40.0),
            fare!("AUA", "SXM", 30.0),
            fare!("CCS", "SXM", 90.0),
            fare!("SXM", "SBH", 20.0),
        ]
    }

    #[test]
    fn cheaper_multi_leg_route_beats_direct_connection() {
        let g = build(antilles(), &["CCS", "AUA", "SXM", "SBH"]);
        let mut search = CheapestSearch::new(&g);

        // 40 + 30 + 20 beats the 90 + 20 via the direct CCS-SXM leg
        assert_route(
            vec!["CCS", "AUA", "SXM", "SBH"],
            90.0,
            search.search("CCS", "SBH"),
        );
    }

    #[test]
    fn restricted_airport_cuts_the_only_route() {
        // Without SXM every route to SBH is gone
        let g = build(antilles(), &["CCS", "AUA", "SBH"]);
        let mut search = CheapestSearch::new(&g);

        assert_no_route(search.search("CCS", "SBH"));
    }

    #[test]
    fn equal_cost_ties_break_on_fewer_flights() {
        let g = build(
            vec![
                fare!("CCS", "SBH", 10.0),
                fare!("CCS", "AUA", 5.0),
                fare!("AUA", "SBH", 5.0),
            ],
            &["CCS", "AUA", "SBH"],
        );
        let mut search = CheapestSearch::new(&g);

        // Both routes cost 10; the direct flight must win
        assert_route(vec!["CCS", "SBH"], 10.0, search.search("CCS", "SBH"));
    }

    #[test]
    fn same_airport_is_a_zero_cost_route() {
        let g = build(antilles(), &["CCS", "AUA", "SXM", "SBH"]);
        let mut search = CheapestSearch::new(&g);

        assert_route(vec!["CCS"], 0.0, search.search("CCS", "CCS"));
    }

    #[test]
    fn unknown_airports_are_unreachable() {
        let g = build(antilles(), &["CCS", "AUA", "SXM", "SBH"]);
        let mut search = CheapestSearch::new(&g);

        assert_no_route(search.search("CCS", "XXX"));
        assert_no_route(search.search("XXX", "CCS"));
        assert_no_route(search.search("XXX", "YYY"));
    }

    #[test]
    fn disconnected_airports_are_unreachable() {
        let g = build(
            vec![fare!("CCS", "AUA", 40.0), fare!("POS", "BGI", 35.0)],
            &["CCS", "AUA", "POS", "BGI"],
        );
        let mut search = CheapestSearch::new(&g);

        assert_no_route(search.search("CCS", "POS"));
        assert_route(vec!["POS", "BGI"], 35.0, search.search("POS", "BGI"));
    }

    #[test]
    fn full_network_with_visa() {
        let g = caribbean_graph(true);
        let mut search = CheapestSearch::new(&g);

        assert_route(
            vec!["CCS", "AUA", "SXM", "SBH"],
            90.0,
            search.search("CCS", "SBH"),
        );
    }

    #[test]
    fn full_network_without_visa() {
        let g = caribbean_graph(false);
        let mut search = CheapestSearch::new(&g);

        // Every CCS route to SBH passes through a visa airport
        assert_no_route(search.search("CCS", "SBH"));
        // But the eastern islands stay connected
        assert_route(
            vec!["POS", "PTP", "SBH"],
            120.0,
            search.search("POS", "SBH"),
        );
    }
}
