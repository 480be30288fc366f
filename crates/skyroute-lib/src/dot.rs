use std::fmt::{Debug, Display, Write};
use std::hash::Hash;

use crate::graph::Graph;

/// Render a graph snapshot as Graphviz DOT source.
///
/// Directed graphs render as `digraph` with `->` connectors, undirected
/// ones as `strict graph` with `--`; undirected mirrors are already
/// deduplicated by [`Graph::edges`], so each connection appears once.
/// Callers decide where the text goes - a file, a pipe into `neato`, or a
/// test assertion.
pub fn render_dot<V>(graph: &Graph<V>) -> String
where
    V: Clone + Eq + Hash + Ord + Debug + Display,
{
    let (keyword, connector) = if graph.is_directed() {
        ("digraph", "->")
    } else {
        ("strict graph", "--")
    };

    let mut source = String::new();
    let _ = writeln!(source, "{keyword} G {{");
    let _ = writeln!(source, "\toverlap=\"false\";");
    let _ = writeln!(source, "\tnode [shape=\"circle\", fontsize=\"7.0\"];");
    let _ = writeln!(source, "\tedge [penwidth=\"1.5\", fontsize=\"7.0\"];");

    for vertex in graph.vertices() {
        let _ = writeln!(source, "\t\"{vertex}\";");
    }

    for edge in graph.edges() {
        let mut attributes = String::new();
        if !edge.label.is_empty() {
            let _ = write!(attributes, "[label=\"{}\"]", edge.label);
        }
        if graph.is_weighted() {
            if let Some(weight) = edge.weight {
                let _ = write!(attributes, "[weight=\"{weight}\"]");
            }
        }
        let _ = writeln!(
            source,
            "\t\"{}\" {} \"{}\"{};",
            edge.source, connector, edge.destination, attributes
        );
    }

    source.push_str("}\n");
    source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_graphs_render_as_digraphs() {
        let mut graph: Graph<&str> = Graph::new(true, true);
        graph.insert_edge("AAA", "BBB");
        graph
            .set_edge_label(&"AAA", &"BBB", "AAA_BBB")
            .expect("edge exists");
        graph
            .set_edge_weight(&"AAA", &"BBB", 2.5)
            .expect("edge exists");

        let dot = render_dot(&graph);
        assert!(dot.starts_with("digraph G {"));
        assert!(dot.contains("\"AAA\" -> \"BBB\"[label=\"AAA_BBB\"][weight=\"2.5\"];"));
    }

    #[test]
    fn undirected_graphs_render_each_connection_once() {
        let mut graph: Graph<&str> = Graph::new(false, false);
        graph.insert_edge("AAA", "BBB");

        let dot = render_dot(&graph);
        assert!(dot.starts_with("strict graph G {"));
        assert_eq!(dot.matches("--").count(), 1);
    }
}
