use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Weighted, labelled connection between two vertices.
///
/// Edges are immutable value objects: re-weighting or re-labelling an edge
/// replaces the stored value rather than mutating it in place. `weight` is
/// `None` until a weight has been assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V> {
    pub source: V,
    pub destination: V,
    pub weight: Option<f64>,
    pub label: String,
}

impl<V: Clone> Edge<V> {
    fn unweighted(source: V, destination: V) -> Self {
        Self {
            source,
            destination,
            weight: None,
            label: String::new(),
        }
    }

    /// Mirror of this edge with identical weight and label.
    fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
            weight: self.weight,
            label: self.label.clone(),
        }
    }
}

/// Adjacency-map graph generic over an opaque vertex identifier.
///
/// Two flags are fixed at construction: `weighted` controls whether weight
/// queries are legal, `directed` controls whether edges are single-direction.
/// Undirected graphs store a physical mirror edge per logical edge so that
/// neighbour lookup is O(1) in both directions; every mutation applies to
/// both sides through one helper.
#[derive(Debug, Clone, Default)]
pub struct Graph<V> {
    weighted: bool,
    directed: bool,
    adjacency: HashMap<V, HashMap<V, Edge<V>>>,
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + Ord + Debug,
{
    /// Create an empty graph with the given weight/direction flags.
    pub fn new(weighted: bool, directed: bool) -> Self {
        Self {
            weighted,
            directed,
            adjacency: HashMap::new(),
        }
    }

    /// Whether weight queries are legal on this graph.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Whether edges are single-direction.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Insert a vertex, clearing any prior incident edges.
    ///
    /// Idempotent: inserting an existing vertex leaves it present with an
    /// empty adjacency entry.
    pub fn insert_vertex(&mut self, vertex: V) {
        self.remove_vertex(&vertex);
        self.adjacency.insert(vertex, HashMap::new());
    }

    /// Remove a vertex and every edge incident to it.
    ///
    /// Returns the removed identifier, or `None` when the vertex was absent.
    pub fn remove_vertex(&mut self, vertex: &V) -> Option<V> {
        if !self.adjacency.contains_key(vertex) {
            return None;
        }

        if self.directed {
            self.adjacency.remove(vertex);
            for adjacency in self.adjacency.values_mut() {
                adjacency.remove(vertex);
            }
        } else {
            let neighbours: Vec<V> = self
                .adjacency
                .get(vertex)
                .map(|adjacency| adjacency.keys().cloned().collect())
                .unwrap_or_default();
            for neighbour in neighbours {
                if let Some(adjacency) = self.adjacency.get_mut(&neighbour) {
                    adjacency.remove(vertex);
                }
            }
            self.adjacency.remove(vertex);
        }

        Some(vertex.clone())
    }

    /// Insert an edge with default weight and label, auto-creating missing
    /// endpoint vertices.
    ///
    /// Returns `false` when the edge already exists, which keeps bulk
    /// construction from raising on duplicates.
    pub fn insert_edge(&mut self, source: V, destination: V) -> bool {
        if self
            .adjacency
            .get(&source)
            .is_some_and(|adjacency| adjacency.contains_key(&destination))
        {
            return false;
        }

        let edge = Edge::unweighted(source.clone(), destination.clone());
        self.adjacency
            .entry(source.clone())
            .or_default()
            .insert(destination.clone(), edge);

        if !self.directed {
            let mirror = Edge::unweighted(destination.clone(), source.clone());
            self.adjacency
                .entry(destination)
                .or_default()
                .insert(source, mirror);
        } else {
            self.adjacency.entry(destination).or_default();
        }

        true
    }

    /// Remove the edge between two vertices, returning the removed edge.
    pub fn remove_edge(&mut self, source: &V, destination: &V) -> Result<Edge<V>> {
        self.require_edge(source, destination)?;

        let removed = self
            .adjacency
            .get_mut(source)
            .and_then(|adjacency| adjacency.remove(destination));
        if !self.directed {
            if let Some(adjacency) = self.adjacency.get_mut(destination) {
                adjacency.remove(source);
            }
        }

        removed.ok_or_else(|| self.missing_edge(source, destination))
    }

    /// Replace the weight on an edge, returning the replacement edge.
    pub fn set_edge_weight(&mut self, source: &V, destination: &V, weight: f64) -> Result<Edge<V>> {
        let current = self.edge(source, destination)?;
        let replacement = Edge {
            source: source.clone(),
            destination: destination.clone(),
            weight: Some(weight),
            label: current.label.clone(),
        };
        self.store_mirrored(replacement.clone());
        Ok(replacement)
    }

    /// Replace the label on an edge, returning the replacement edge.
    pub fn set_edge_label(
        &mut self,
        source: &V,
        destination: &V,
        label: impl Into<String>,
    ) -> Result<Edge<V>> {
        let current = self.edge(source, destination)?;
        let replacement = Edge {
            source: source.clone(),
            destination: destination.clone(),
            weight: current.weight,
            label: label.into(),
        };
        self.store_mirrored(replacement.clone());
        Ok(replacement)
    }

    /// Look up the edge between two vertices.
    pub fn edge(&self, source: &V, destination: &V) -> Result<&Edge<V>> {
        self.require_edge(source, destination)?;
        self.adjacency
            .get(source)
            .and_then(|adjacency| adjacency.get(destination))
            .ok_or_else(|| self.missing_edge(source, destination))
    }

    /// Weight of the edge between two vertices.
    ///
    /// Weight queries on an unweighted graph are a programmer error and
    /// surface as [`Error::InvariantViolation`], as does reading an edge
    /// that never had a weight assigned.
    pub fn edge_weight(&self, source: &V, destination: &V) -> Result<f64> {
        if !self.weighted {
            return Err(Error::InvariantViolation {
                message: "edge weights are not tracked on an unweighted graph".to_string(),
            });
        }

        let edge = self.edge(source, destination)?;
        edge.weight.ok_or_else(|| Error::InvariantViolation {
            message: format!(
                "edge {:?} -> {:?} has no weight assigned",
                source, destination
            ),
        })
    }

    /// Label of the edge between two vertices.
    pub fn edge_label(&self, source: &V, destination: &V) -> Result<&str> {
        Ok(self.edge(source, destination)?.label.as_str())
    }

    /// Neighbours of a vertex, sorted for deterministic traversal order.
    ///
    /// Returns an empty sequence when the vertex is absent.
    pub fn adjacent(&self, vertex: &V) -> Vec<V> {
        let mut neighbours: Vec<V> = self
            .adjacency
            .get(vertex)
            .map(|adjacency| adjacency.keys().cloned().collect())
            .unwrap_or_default();
        neighbours.sort();
        neighbours
    }

    /// All vertices in the graph, sorted.
    pub fn vertices(&self) -> Vec<V> {
        let mut vertices: Vec<V> = self.adjacency.keys().cloned().collect();
        vertices.sort();
        vertices
    }

    /// All edges in the graph, sorted by endpoints.
    ///
    /// For undirected graphs each logical edge appears exactly once even
    /// though two physical edges are stored.
    pub fn edges(&self) -> Vec<Edge<V>> {
        let mut seen: HashSet<(V, V)> = HashSet::new();
        let mut edges = Vec::new();

        for (source, adjacency) in &self.adjacency {
            for (destination, edge) in adjacency {
                if seen.contains(&(source.clone(), destination.clone())) {
                    continue;
                }
                edges.push(edge.clone());
                seen.insert((source.clone(), destination.clone()));
                if !self.directed {
                    seen.insert((destination.clone(), source.clone()));
                }
            }
        }

        edges.sort_by(|a, b| {
            a.source
                .cmp(&b.source)
                .then_with(|| a.destination.cmp(&b.destination))
        });
        edges
    }

    /// Whether a vertex exists. Never raises.
    pub fn vertex_exists(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Whether an edge exists. Never raises.
    ///
    /// For undirected graphs the mirror edge must exist too: an asymmetric
    /// adjacency is an invariant violation and reads as "edge does not
    /// exist" rather than being silently repaired.
    pub fn edge_exists(&self, source: &V, destination: &V) -> bool {
        self.require_edge(source, destination).is_ok()
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Drop every vertex and edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Write an edge to its forward slot and, for undirected graphs, its
    /// mirror slot. Single mutation point so the two sides cannot diverge.
    fn store_mirrored(&mut self, edge: Edge<V>) {
        if !self.directed {
            let mirror = edge.reversed();
            if let Some(adjacency) = self.adjacency.get_mut(&edge.destination) {
                adjacency.insert(mirror.destination.clone(), mirror);
            }
        }
        let source = edge.source.clone();
        let destination = edge.destination.clone();
        if let Some(adjacency) = self.adjacency.get_mut(&source) {
            adjacency.insert(destination, edge);
        }
    }

    fn require_edge(&self, source: &V, destination: &V) -> Result<()> {
        let Some(adjacency) = self.adjacency.get(source) else {
            return Err(self.missing_vertex(source));
        };
        if !adjacency.contains_key(destination) {
            return Err(self.missing_edge(source, destination));
        }

        if !self.directed {
            let Some(reverse) = self.adjacency.get(destination) else {
                return Err(self.missing_vertex(destination));
            };
            if !reverse.contains_key(source) {
                return Err(self.missing_edge(destination, source));
            }
        }

        Ok(())
    }

    fn missing_vertex(&self, vertex: &V) -> Error {
        Error::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    fn missing_edge(&self, source: &V, destination: &V) -> Error {
        Error::EdgeNotFound {
            origin: format!("{source:?}"),
            destination: format!("{destination:?}"),
        }
    }
}
