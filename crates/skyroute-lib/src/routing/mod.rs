//! Route planning for the airline network.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (BFS, Dijkstra)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! Each algorithm is encapsulated in its own planner struct behind the
//! [`RoutePlanner`] trait, so new algorithms slot in without touching the
//! orchestration logic.

mod planner;

pub use planner::{select_planner, BfsPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Breadth-first search: fewest hops, ignores weights.
    #[default]
    Bfs,
    /// Dijkstra's algorithm: minimum cumulative weight.
    Dijkstra,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    /// Mandatory intermediate airport ("landmark"), when set.
    pub via: Option<String>,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for BFS routes.
    pub fn bfs(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            via: None,
            algorithm: RouteAlgorithm::Bfs,
        }
    }

    /// Convenience constructor for Dijkstra routes.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            via: None,
            algorithm: RouteAlgorithm::Dijkstra,
        }
    }

    /// Force the route through a landmark airport.
    pub fn with_via(mut self, via: impl Into<String>) -> Self {
        self.via = Some(via.into());
        self
    }
}

/// Planned route returned by the library.
///
/// `steps` is forward-ordered (source first) for presentation; the
/// lower-level path functions keep their destination-first contract.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
    pub steps: Vec<String>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route using the requested algorithm.
///
/// Callers distinguish "no such airport" from "no path": unknown endpoint
/// codes fail with [`Error::UnknownAirport`] before any traversal runs,
/// while an exhausted search yields [`Error::RouteNotFound`].
pub fn plan_route(graph: &Graph<String>, request: &RouteRequest) -> Result<RoutePlan> {
    for code in [Some(&request.start), Some(&request.goal), request.via.as_ref()]
        .into_iter()
        .flatten()
    {
        if !graph.vertex_exists(code) {
            return Err(Error::UnknownAirport { code: code.clone() });
        }
    }

    let planner = select_planner(request.algorithm);
    debug!(
        algorithm = %request.algorithm,
        start = %request.start,
        goal = %request.goal,
        "planning route"
    );

    let steps = match &request.via {
        Some(via) => planner.find_via_path(graph, &request.start, via, &request.goal)?,
        None => {
            // path functions return destination-first; plans present forward
            let raw = planner.find_path(graph, &request.start, &request.goal)?;
            raw.into_iter().rev().collect()
        }
    };

    if steps.is_empty() {
        return Err(Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        });
    }

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: request.start.clone(),
        goal: request.goal.clone(),
        via: request.via.clone(),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_graph() -> Graph<String> {
        let mut graph = Graph::new(false, false);
        for pair in [("AAA", "BBB"), ("BBB", "CCC")] {
            graph.insert_edge(pair.0.to_string(), pair.1.to_string());
        }
        graph
    }

    #[test]
    fn plan_route_orders_steps_forward() {
        let graph = linear_graph();
        let plan = plan_route(&graph, &RouteRequest::bfs("AAA", "CCC")).expect("route exists");

        assert_eq!(plan.steps, vec!["AAA", "BBB", "CCC"]);
        assert_eq!(plan.hop_count(), 2);
    }

    #[test]
    fn unknown_endpoint_fails_before_traversal() {
        let graph = linear_graph();
        let error = plan_route(&graph, &RouteRequest::bfs("AAA", "ZZZ")).expect_err("unknown code");
        assert!(matches!(error, Error::UnknownAirport { .. }));
    }

    #[test]
    fn disconnected_endpoints_report_route_not_found() {
        let mut graph = linear_graph();
        graph.insert_vertex("ZZZ".to_string());

        let error = plan_route(&graph, &RouteRequest::bfs("AAA", "ZZZ")).expect_err("no path");
        assert!(matches!(error, Error::RouteNotFound { .. }));
    }

    #[test]
    fn via_request_routes_through_the_landmark() {
        let graph = linear_graph();
        let request = RouteRequest::bfs("AAA", "CCC").with_via("BBB");

        let plan = plan_route(&graph, &request).expect("route exists");
        assert_eq!(plan.steps, vec!["AAA", "BBB", "CCC"]);
        assert_eq!(plan.via.as_deref(), Some("BBB"));
    }

    #[test]
    fn route_algorithm_display_matches_serde_rename() {
        assert_eq!(RouteAlgorithm::Bfs.to_string(), "bfs");
        assert_eq!(RouteAlgorithm::Dijkstra.to_string(), "dijkstra");
    }
}
