//! Route planning strategies.
//!
//! The [`RoutePlanner`] trait hides the difference between hop-count and
//! weight-based search from the `plan_route` orchestrator. Planners hand
//! back paths in the destination-first order of the underlying algorithms;
//! landmark paths come back forward-ordered because the composition step
//! already reverses each leg.

use crate::error::Result;
use crate::graph::Graph;
use crate::path::{path_bfs, path_dijkstra, path_landmark_bfs, path_landmark_dijkstra};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Destination-first path between two airports; empty when unreachable.
    fn find_path(&self, graph: &Graph<String>, start: &str, goal: &str) -> Result<Vec<String>>;

    /// Forward-ordered path forced through a landmark airport.
    fn find_via_path(
        &self,
        graph: &Graph<String>,
        start: &str,
        via: &str,
        goal: &str,
    ) -> Result<Vec<String>>;
}

/// Breadth-first search planner for fewest-hop traversal.
#[derive(Debug, Clone, Default)]
pub struct BfsPlanner;

impl RoutePlanner for BfsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_path(&self, graph: &Graph<String>, start: &str, goal: &str) -> Result<Vec<String>> {
        Ok(path_bfs(graph, &start.to_string(), &goal.to_string()))
    }

    fn find_via_path(
        &self,
        graph: &Graph<String>,
        start: &str,
        via: &str,
        goal: &str,
    ) -> Result<Vec<String>> {
        Ok(path_landmark_bfs(
            graph,
            &start.to_string(),
            &via.to_string(),
            &goal.to_string(),
        ))
    }
}

/// Dijkstra planner for minimum-weight traversal.
///
/// Fails with an invariant violation when the graph is unweighted, per the
/// graph's weight-access contract.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &Graph<String>, start: &str, goal: &str) -> Result<Vec<String>> {
        path_dijkstra(graph, &start.to_string(), &goal.to_string())
    }

    fn find_via_path(
        &self,
        graph: &Graph<String>,
        start: &str,
        via: &str,
        goal: &str,
    ) -> Result<Vec<String>> {
        path_landmark_dijkstra(
            graph,
            &start.to_string(),
            &via.to_string(),
            &goal.to_string(),
        )
    }
}

/// Select the appropriate planner for a given algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Bfs => Box::new(BfsPlanner),
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
    }
}
