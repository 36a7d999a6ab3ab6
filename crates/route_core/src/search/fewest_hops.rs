use std::collections::VecDeque;

use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::constants::Weight;
use crate::graph::{Graph, NodeIndex};
use crate::search::route::Route;
use crate::statistics::SearchStats;

/// Level-order search minimizing the number of flights.
///
/// The frontier is strictly first-in-first-out; that is what guarantees
/// discovery in non-decreasing hop order. The search stops the instant the
/// destination is discovered, so the reported cost is the accumulated
/// price along the *first-discovered* minimum-hop route. When several
/// minimum-hop routes exist with different prices, which one is found
/// depends on fare-list order; the result is not the cheapest among them,
/// and deliberately so. Use [`CheapestSearch`] when price matters.
///
/// [`CheapestSearch`]: crate::search::cheapest::CheapestSearch
pub struct FewestHopsSearch<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> FewestHopsSearch<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        FewestHopsSearch {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Returns a route with the fewest flights between two airport codes,
    /// or the no-route sentinel if either code is unknown or no route
    /// exists.
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

        let mut visited: FxHashSet<NodeIndex> = FxHashSet::default();
        let mut parents: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
        let mut costs: FxHashMap<NodeIndex, Weight> = FxHashMap::default();

        let mut queue = VecDeque::new();
        visited.insert(src);
        costs.insert(src, 0.0);
        queue.push_back(src);

        let mut found = false;
        'level_order: while let Some(node) = queue.pop_front() {
            self.stats.nodes_settled += 1;
            let cost = *costs.get(&node).unwrap_or(&0.0);

            for (next, price) in self.g.neighbors(node) {
                // A node is claimed at first discovery and never revisited
                if visited.insert(next) {
                    parents.insert(next, node);
                    costs.insert(next, cost + price);

                    if next == dst {
                        found = true;
                        break 'level_order;
                    }
                    queue.push_back(next);
                }
            }
        }
        self.stats.finish();

        if !found {
            info!(
                "No route found: {:?}/{} nodes settled",
                self.stats.duration, self.stats.nodes_settled
            );
            return Route::no_route();
        }

        let route = self.reconstruct(src, dst, &parents, &costs);
        debug!("Route found: {:?}", route);
        info!(
            "Route found: {:?}/{} nodes settled",
            self.stats.duration, self.stats.nodes_settled
        );
        route
    }

    fn reconstruct(
        &self,
        src: NodeIndex,
        dst: NodeIndex,
        parents: &FxHashMap<NodeIndex, NodeIndex>,
        costs: &FxHashMap<NodeIndex, Weight>,
    ) -> Route {
        let mut path = vec![dst];
        let mut current = dst;
        while current != src {
            match parents.get(&current) {
                Some(&parent) => {
                    path.push(parent);
                    current = parent;
                }
                None => return Route::no_route(),
            }
        }
        path.reverse();

        let stops = path
            .into_iter()
            .map(|node| self.g.code(node).to_string())
            .collect();
        Route::new(stops, *costs.get(&dst).unwrap_or(&Weight::INFINITY))
    }
}
