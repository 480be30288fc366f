//! Skyroute library entry points.
//!
//! This crate models an airline network as a weighted graph, loads flight
//! links from delimited text files, and answers routing queries with
//! breadth-first and Dijkstra traversals, including landmark-constrained
//! variants. Higher-level consumers (the CLI) should only depend on the
//! functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod dot;
pub mod error;
pub mod graph;
pub mod heap;
pub mod network;
pub mod output;
pub mod path;
pub mod risk;
pub mod routing;

pub use dataset::load_edge_pairs;
pub use dot::render_dot;
pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use heap::MinHeap;
pub use network::{AirNetwork, AirportCode};
pub use output::RouteSummary;
pub use path::{path_bfs, path_dijkstra, path_landmark_bfs, path_landmark_dijkstra};
pub use risk::Traveler;
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
