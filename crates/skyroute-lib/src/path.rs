use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::heap::MinHeap;

/// Discovery state of a vertex during a traversal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexState {
    Unvisited,
    Discovered,
    Finished,
}

/// Classification of an edge relative to the traversal tree.
///
/// Informational only; path reconstruction relies on predecessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeClass {
    /// The edge led to a previously unvisited vertex.
    Discovery,
    /// The edge connected two already-discovered vertices.
    Cross,
}

/// Bookkeeping produced by one breadth-first traversal.
#[derive(Debug, Clone)]
pub struct Traversal<V> {
    pub states: HashMap<V, VertexState>,
    pub edge_classes: HashMap<(V, V), EdgeClass>,
    pub predecessors: HashMap<V, V>,
}

/// Distances and predecessors from one source to every reachable vertex.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V> {
    pub distances: HashMap<V, f64>,
    pub predecessors: HashMap<V, V>,
}

/// Run a breadth-first traversal of the component reachable from `start`.
///
/// The scan expands level by level until the queue empties; it never stops
/// early on reaching a particular vertex, so afterwards every reachable
/// vertex has a predecessor chain back to `start`.
pub fn bfs<V>(graph: &Graph<V>, start: &V) -> Traversal<V>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    let mut states: HashMap<V, VertexState> = graph
        .vertices()
        .into_iter()
        .map(|vertex| (vertex, VertexState::Unvisited))
        .collect();
    let mut edge_classes = HashMap::new();
    let mut predecessors = HashMap::new();

    if !graph.vertex_exists(start) {
        return Traversal {
            states,
            edge_classes,
            predecessors,
        };
    }

    let mut queue = VecDeque::new();
    states.insert(start.clone(), VertexState::Discovered);
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        for neighbour in graph.adjacent(&current) {
            if states.get(&neighbour) == Some(&VertexState::Unvisited) {
                predecessors.insert(neighbour.clone(), current.clone());
                edge_classes.insert(
                    (current.clone(), neighbour.clone()),
                    EdgeClass::Discovery,
                );
                states.insert(neighbour.clone(), VertexState::Discovered);
                queue.push_back(neighbour);
            } else {
                edge_classes
                    .entry((current.clone(), neighbour.clone()))
                    .or_insert(EdgeClass::Cross);
            }
        }
        states.insert(current, VertexState::Finished);
    }

    Traversal {
        states,
        edge_classes,
        predecessors,
    }
}

/// Fewest-hop path from `start` to `destination`.
///
/// The returned sequence is ordered destination-first, source-last; this
/// ordering is load-bearing for the landmark composer. Empty when no path
/// exists, including the `destination == start` case, whose zero-length
/// path has no predecessor entries.
pub fn path_bfs<V>(graph: &Graph<V>, start: &V, destination: &V) -> Vec<V>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    let traversal = bfs(graph, start);
    reconstruct(&traversal.predecessors, start, destination)
}

/// Fewest-hop path forced through the `landmark` vertex.
///
/// Composes two independent legs (`start -> landmark`, `landmark ->
/// destination`) and returns the joined route in forward order with the
/// landmark appearing once at the seam. No joint optimisation happens
/// across the split point.
pub fn path_landmark_bfs<V>(graph: &Graph<V>, start: &V, landmark: &V, destination: &V) -> Vec<V>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    let inbound = path_bfs(graph, start, landmark);
    let outbound = path_bfs(graph, landmark, destination);
    join_legs(inbound, outbound)
}

/// Compute the full single-source shortest path tree from `start`.
///
/// Requires a weighted graph. Seeds the frontier with every vertex, then
/// relaxes edges with decrease-key updates until the frontier drains,
/// mirroring the BFS policy of never stopping early.
pub fn dijkstra<V>(graph: &Graph<V>, start: &V) -> Result<ShortestPathTree<V>>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    if !graph.is_weighted() {
        return Err(Error::InvariantViolation {
            message: "dijkstra requires a weighted graph".to_string(),
        });
    }

    let vertices = graph.vertices();
    let mut distances: HashMap<V, f64> = vertices
        .iter()
        .map(|vertex| (vertex.clone(), f64::INFINITY))
        .collect();
    let mut predecessors = HashMap::new();

    if !graph.vertex_exists(start) {
        return Ok(ShortestPathTree {
            distances,
            predecessors,
        });
    }
    distances.insert(start.clone(), 0.0);

    let mut frontier = MinHeap::from_elems(vertices, distances.clone());

    while let Some(current) = frontier.pop() {
        let current_distance = distances
            .get(&current)
            .copied()
            .unwrap_or(f64::INFINITY);
        if current_distance.is_infinite() {
            // the remaining frontier is unreachable from the source
            continue;
        }

        for neighbour in graph.adjacent(&current) {
            let weight = graph.edge_weight(&current, &neighbour)?;
            let candidate = current_distance + weight;
            let best = distances
                .get(&neighbour)
                .copied()
                .unwrap_or(f64::INFINITY);
            if candidate < best {
                distances.insert(neighbour.clone(), candidate);
                predecessors.insert(neighbour.clone(), current.clone());
                frontier.change_weight(neighbour.clone(), candidate);
                if let Some(slot) = frontier.position_of(&neighbour) {
                    frontier.update_elem(slot, neighbour.clone());
                }
            }
        }
    }

    Ok(ShortestPathTree {
        distances,
        predecessors,
    })
}

/// Minimum-cumulative-weight path from `start` to `destination`.
///
/// Same reconstruction and ordering contract as [`path_bfs`]:
/// destination-first, empty when unreachable.
pub fn path_dijkstra<V>(graph: &Graph<V>, start: &V, destination: &V) -> Result<Vec<V>>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    let tree = dijkstra(graph, start)?;
    Ok(reconstruct(&tree.predecessors, start, destination))
}

/// Minimum-weight path forced through the `landmark` vertex.
///
/// Same composition contract as [`path_landmark_bfs`]: forward order,
/// landmark deduplicated at the seam, total cost is the sum of two
/// independent traversals.
pub fn path_landmark_dijkstra<V>(
    graph: &Graph<V>,
    start: &V,
    landmark: &V,
    destination: &V,
) -> Result<Vec<V>>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    let inbound = path_dijkstra(graph, start, landmark)?;
    let outbound = path_dijkstra(graph, landmark, destination)?;
    Ok(join_legs(inbound, outbound))
}

/// Walk predecessors from `destination` back to `start`.
///
/// Produces the destination-first ordering; an empty sequence signals "no
/// path" and is distinguished from "no such vertex" by the caller probing
/// existence beforehand.
fn reconstruct<V>(predecessors: &HashMap<V, V>, start: &V, destination: &V) -> Vec<V>
where
    V: Clone + Eq + Hash,
{
    if !predecessors.contains_key(destination) {
        return Vec::new();
    }

    let mut path = vec![destination.clone()];
    let mut current = destination;
    while let Some(previous) = predecessors.get(current) {
        path.push(previous.clone());
        current = previous;
    }

    if path.last() != Some(start) {
        return Vec::new();
    }
    path
}

/// Join two destination-first legs into one forward route.
///
/// Each leg is reversed to forward order first; the landmark closes the
/// first leg and opens the second, so the second leg drops its boundary
/// element. Either leg being empty empties the whole route.
fn join_legs<V>(inbound: Vec<V>, outbound: Vec<V>) -> Vec<V> {
    if inbound.is_empty() || outbound.is_empty() {
        return Vec::new();
    }

    let mut route: Vec<V> = inbound.into_iter().rev().collect();
    route.extend(outbound.into_iter().rev().skip(1));
    route
}
