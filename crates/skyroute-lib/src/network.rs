use std::path::Path;

use tracing::debug;

use crate::dataset::load_edge_pairs;
use crate::error::Result;
use crate::graph::Graph;
use crate::path::{path_bfs, path_dijkstra, path_landmark_bfs, path_landmark_dijkstra};
use crate::risk::Traveler;
use crate::routing::{plan_route, RoutePlan, RouteRequest};

/// Three-letter IATA airport code.
pub type AirportCode = String;

/// Airline network: airports connected by flight links.
///
/// The graph is weighted and directed. Flight data lists each service
/// direction as its own row and labels are direction-specific (`SRC_DST`),
/// so both directions of a connection are stored as independent edges.
#[derive(Debug, Clone)]
pub struct AirNetwork {
    graph: Graph<AirportCode>,
}

impl Default for AirNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl AirNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(true, true),
        }
    }

    /// Build a network from `(source, destination)` airport pairs.
    ///
    /// Duplicate pairs are ignored, which keeps repeated service listings
    /// harmless. Every stored edge is labelled `SRC_DST`.
    pub fn from_edge_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Result<Self> {
        let mut network = Self::new();
        for (source, destination) in pairs {
            network.graph.insert_edge(source, destination);
        }
        network.init_labels()?;
        Ok(network)
    }

    /// Load a network from a delimited edges file.
    pub fn load(path: &Path) -> Result<Self> {
        let pairs = load_edge_pairs(path)?;
        Self::from_edge_pairs(pairs)
    }

    /// Label every edge with its endpoints, `SRC_DST`.
    pub fn init_labels(&mut self) -> Result<()> {
        for edge in self.graph.edges() {
            let label = format!("{}_{}", edge.source, edge.destination);
            self.graph
                .set_edge_label(&edge.source, &edge.destination, label)?;
        }
        Ok(())
    }

    /// Recompute every edge weight from the traveler risk model.
    ///
    /// An airport's traffic volume is its number of outbound links; the
    /// weight of a link combines the traffic of both endpoints with the
    /// traveler's age. Run before each Dijkstra query so the weights track
    /// the current traveler.
    pub fn apply_risk_weights(&mut self, traveler: &Traveler) -> Result<()> {
        let edges = self.graph.edges();
        debug!(count = edges.len(), "re-weighting network for traveler");
        for edge in edges {
            let source_traffic = self.graph.adjacent(&edge.source).len();
            let destination_traffic = self.graph.adjacent(&edge.destination).len();
            let weight = traveler.link_risk(source_traffic, destination_traffic);
            self.graph
                .set_edge_weight(&edge.source, &edge.destination, weight)?;
        }
        Ok(())
    }

    /// Fewest-hop path, destination-first; empty when no path exists.
    pub fn path_bfs(&self, start: &str, destination: &str) -> Vec<AirportCode> {
        path_bfs(&self.graph, &start.to_string(), &destination.to_string())
    }

    /// Fewest-hop path through a landmark, forward-ordered.
    pub fn path_landmark_bfs(
        &self,
        start: &str,
        landmark: &str,
        destination: &str,
    ) -> Vec<AirportCode> {
        path_landmark_bfs(
            &self.graph,
            &start.to_string(),
            &landmark.to_string(),
            &destination.to_string(),
        )
    }

    /// Minimum-risk path, destination-first; empty when no path exists.
    ///
    /// Weights must have been applied beforehand, e.g. via
    /// [`AirNetwork::apply_risk_weights`].
    pub fn path_dijkstra(&self, start: &str, destination: &str) -> Result<Vec<AirportCode>> {
        path_dijkstra(&self.graph, &start.to_string(), &destination.to_string())
    }

    /// Minimum-risk path through a landmark, forward-ordered.
    pub fn path_landmark_dijkstra(
        &self,
        start: &str,
        landmark: &str,
        destination: &str,
    ) -> Result<Vec<AirportCode>> {
        path_landmark_dijkstra(
            &self.graph,
            &start.to_string(),
            &landmark.to_string(),
            &destination.to_string(),
        )
    }

    /// Plan a route from a high-level request.
    pub fn plan(&self, request: &RouteRequest) -> Result<RoutePlan> {
        plan_route(&self.graph, request)
    }

    /// All airport codes in the network, sorted.
    pub fn airports(&self) -> Vec<AirportCode> {
        self.graph.vertices()
    }

    /// The underlying routing graph.
    pub fn graph(&self) -> &Graph<AirportCode> {
        &self.graph
    }
}
