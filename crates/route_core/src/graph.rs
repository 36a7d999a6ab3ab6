use std::fmt;

use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::constants::Weight;
use crate::fares::Fare;

/// Node identifier, an index into the graph's airport table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// An airport, identified by its IATA code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    pub code: String,
}

impl Airport {
    pub fn new(code: impl Into<String>) -> Self {
        Airport { code: code.into() }
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Undirected flight network over a set of allowed airports.
///
/// Built once per query via [`Graph::build`] and never mutated afterwards;
/// searches only read it, so it can be shared freely.
pub struct Graph {
    nodes: Vec<Airport>,
    adjacency: Vec<Vec<(NodeIndex, Weight)>>,
    code_index: FxHashMap<String, NodeIndex>,
    num_connections: usize,
}

impl Graph {
    /// Builds the network from a fare list, restricted to `allowed`.
    ///
    /// Every allowed airport gets an adjacency list, even if no fare
    /// touches it. A fare contributes a connection (in both directions)
    /// only if both of its endpoints are allowed; all other fares are
    /// dropped silently. Airports mentioned by fares but absent from
    /// `allowed` never become nodes.
    pub fn build(fares: &[Fare], allowed: &FxHashSet<String>) -> Self {
        // Sorted insertion keeps node indices stable for a given fare list.
        let mut codes: Vec<&String> = allowed.iter().collect();
        codes.sort();

        let mut nodes = Vec::with_capacity(codes.len());
        let mut code_index =
            FxHashMap::with_capacity_and_hasher(codes.len(), Default::default());
        for (i, code) in codes.iter().enumerate() {
            nodes.push(Airport::new(code.as_str()));
            code_index.insert((*code).clone(), NodeIndex::new(i));
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];
        let mut num_connections = 0;
        let mut dropped = 0;
        for fare in fares {
            match (
                code_index.get(&fare.origin).copied(),
                code_index.get(&fare.destination).copied(),
            ) {
                (Some(a), Some(b)) => {
                    adjacency[a.index()].push((b, fare.price));
                    adjacency[b.index()].push((a, fare.price));
                    num_connections += 1;
                }
                _ => dropped += 1,
            }
        }

        if dropped > 0 {
            debug!("Dropped {} fares with endpoints outside the allowed set", dropped);
        }
        info!(
            "Graph has {} airports and {} connections",
            nodes.len(),
            num_connections
        );

        Graph {
            nodes,
            adjacency,
            code_index,
            num_connections,
        }
    }

    /// Resolves an IATA code to its node index, if the airport is in the graph.
    pub fn node_index(&self, code: &str) -> Option<NodeIndex> {
        self.code_index.get(code).copied()
    }

    pub fn airport(&self, node: NodeIndex) -> &Airport {
        &self.nodes[node.index()]
    }

    pub fn code(&self, node: NodeIndex) -> &str {
        &self.nodes[node.index()].code
    }

    /// Returns an iterator over all airports of the graph
    pub fn airports(&self) -> impl Iterator<Item = &Airport> {
        self.nodes.iter()
    }

    pub fn num_airports(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_connections(&self) -> usize {
        self.num_connections
    }

    /// Neighbors of `node` with the price of the connecting flight, in fare
    /// list order.
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.adjacency[node.index()].iter().copied()
    }

    /// Price of the direct connection `from -> to`, if one exists.
    /// Linear scan over the adjacency list.
    pub fn connection_price(&self, from: NodeIndex, to: NodeIndex) -> Option<Weight> {
        self.adjacency[from.index()]
            .iter()
            .find(|(next, _)| *next == to)
            .map(|(_, price)| *price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fare;

    fn allowed(codes: &[&str]) -> FxHashSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn connections_are_symmetric() {
        let fares = vec![fare!("CCS", "AUA", 40.0), fare!("AUA", "SXM", 30.0)];
        let g = Graph::build(&fares, &allowed(&["CCS", "AUA", "SXM"]));

        let ccs = g.node_index("CCS").unwrap();
        let aua = g.node_index("AUA").unwrap();
        let sxm = g.node_index("SXM").unwrap();

        assert_eq!(g.connection_price(ccs, aua), Some(40.0));
        assert_eq!(g.connection_price(aua, ccs), Some(40.0));
        assert_eq!(g.connection_price(aua, sxm), Some(30.0));
        assert_eq!(g.connection_price(sxm, aua), Some(30.0));
        assert_eq!(g.connection_price(ccs, sxm), None);
        assert_eq!(g.num_connections(), 2);
    }

    #[test]
    fn fares_outside_allowed_set_are_dropped() {
        let fares = vec![
            fare!("CCS", "AUA", 40.0),
            fare!("AUA", "SXM", 30.0),
            fare!("SXM", "SBH", 20.0),
        ];
        let g = Graph::build(&fares, &allowed(&["CCS", "AUA", "SBH"]));

        // SXM is not a node at all
        assert!(g.node_index("SXM").is_none());
        assert_eq!(g.num_airports(), 3);

        // Neither direction of a half-allowed fare survives
        let aua = g.node_index("AUA").unwrap();
        let sbh = g.node_index("SBH").unwrap();
        assert_eq!(g.neighbors(aua).count(), 1); // only CCS
        assert_eq!(g.neighbors(sbh).count(), 0);
        assert_eq!(g.num_connections(), 1);
    }

    #[test]
    fn allowed_airports_without_fares_are_still_nodes() {
        let fares = vec![fare!("CCS", "AUA", 40.0)];
        let g = Graph::build(&fares, &allowed(&["CCS", "AUA", "SDQ"]));

        let sdq = g.node_index("SDQ").unwrap();
        assert_eq!(g.neighbors(sdq).count(), 0);
        assert_eq!(g.num_airports(), 3);
    }

    #[test]
    fn node_indices_are_deterministic() {
        let fares = vec![fare!("CCS", "AUA", 40.0)];
        let g = Graph::build(&fares, &allowed(&["CCS", "AUA", "SBH"]));

        // Codes are inserted in sorted order
        assert_eq!(g.code(node_index(0)), "AUA");
        assert_eq!(g.code(node_index(1)), "CCS");
        assert_eq!(g.code(node_index(2)), "SBH");
    }
}
