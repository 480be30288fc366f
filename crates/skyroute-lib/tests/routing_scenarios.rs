use skyroute_lib::{AirNetwork, Error, Graph, RouteRequest, Traveler};

/// Expand `(a, b)` pairs into both service directions, the shape flight
/// data arrives in.
fn bidirectional(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .flat_map(|(a, b)| {
            [
                (a.to_string(), b.to_string()),
                (b.to_string(), a.to_string()),
            ]
        })
        .collect()
}

#[test]
fn bfs_route_comes_back_destination_first() {
    let network = AirNetwork::from_edge_pairs(bidirectional(&[
        ("BDJ", "JOG"),
        ("JOG", "SIN"),
        ("SIN", "FCO"),
        ("FCO", "MPL"),
    ]))
    .expect("network builds");

    let path = network.path_bfs("BDJ", "MPL");
    assert_eq!(path, vec!["MPL", "FCO", "SIN", "JOG", "BDJ"]);
}

#[test]
fn landmark_bfs_route_is_forward_with_one_landmark_at_the_seam() {
    let network = AirNetwork::from_edge_pairs(bidirectional(&[
        ("NTE", "MAD"),
        ("MAD", "GYE"),
        ("MAD", "BKK"),
        ("BKK", "CGK"),
    ]))
    .expect("network builds");

    let route = network.path_landmark_bfs("NTE", "GYE", "CGK");
    assert_eq!(route, vec!["NTE", "MAD", "GYE", "MAD", "BKK", "CGK"]);
}

#[test]
fn edge_labels_follow_their_direction() {
    let network =
        AirNetwork::from_edge_pairs(bidirectional(&[("YCU", "CTU")])).expect("network builds");

    let graph = network.graph();
    assert_eq!(
        graph
            .edge_label(&"YCU".to_string(), &"CTU".to_string())
            .expect("edge exists"),
        "YCU_CTU"
    );
    assert_eq!(
        graph
            .edge_label(&"CTU".to_string(), &"YCU".to_string())
            .expect("edge exists"),
        "CTU_YCU"
    );
}

#[test]
fn dijkstra_route_weight_matches_brute_force_minimum() {
    let mut graph: Graph<String> = Graph::new(true, false);
    let edges = [
        ("ORD", "NRT", 2.0),
        ("ORD", "ATL", 1.0),
        ("ATL", "NRT", 3.5),
        ("NRT", "MNL", 1.5),
        ("ATL", "MNL", 4.0),
        ("ORD", "MNL", 9.0),
    ];
    for (a, b, w) in edges {
        graph.insert_edge(a.to_string(), b.to_string());
        graph
            .set_edge_weight(&a.to_string(), &b.to_string(), w)
            .expect("edge inserted");
    }

    let start = "ORD".to_string();
    let goal = "MNL".to_string();

    let route = skyroute_lib::path_dijkstra(&graph, &start, &goal).expect("weighted graph");
    assert!(!route.is_empty());
    assert_eq!(route.first(), Some(&goal));
    assert_eq!(route.last(), Some(&start));

    let mut visited = vec![start.clone()];
    let mut best = None;
    brute_force_min(&graph, &start, &goal, &mut visited, 0.0, &mut best);

    let routed = route_cost(&graph, &route);
    assert_eq!(Some(routed), best);
}

#[test]
fn landmark_dijkstra_route_contains_the_landmark() {
    let mut network = AirNetwork::from_edge_pairs(bidirectional(&[
        ("YCU", "JOG"),
        ("JOG", "DPS"),
        ("DPS", "ICN"),
        ("ICN", "RUH"),
        ("YCU", "RUH"),
    ]))
    .expect("network builds");
    network
        .apply_risk_weights(&Traveler::new(21.0))
        .expect("weights applied");

    let route = network
        .path_landmark_dijkstra("YCU", "JOG", "RUH")
        .expect("weighted network");

    let landmark_at = route
        .iter()
        .position(|code| code == "JOG")
        .expect("landmark included");
    assert_eq!(route.first().map(String::as_str), Some("YCU"));
    assert_eq!(route.last().map(String::as_str), Some("RUH"));
    assert!(landmark_at > 0 && landmark_at < route.len() - 1);
}

#[test]
fn callers_distinguish_missing_airports_from_missing_routes() {
    // two disconnected components: AAA-BBB and CCC-DDD
    let mut pairs = bidirectional(&[("AAA", "BBB")]);
    pairs.extend(bidirectional(&[("CCC", "DDD")]));
    let network = AirNetwork::from_edge_pairs(pairs).expect("network builds");

    assert!(network.graph().vertex_exists(&"AAA".to_string()));

    let unknown = network
        .plan(&RouteRequest::bfs("AAA", "ZZZ"))
        .expect_err("unknown code");
    assert!(matches!(unknown, Error::UnknownAirport { .. }));

    let no_route = network
        .plan(&RouteRequest::bfs("AAA", "CCC"))
        .expect_err("no path");
    assert!(matches!(no_route, Error::RouteNotFound { .. }));
}

#[test]
fn dijkstra_on_an_unweighted_graph_is_a_precondition_violation() {
    let mut graph: Graph<String> = Graph::new(false, false);
    graph.insert_edge("AAA".to_string(), "BBB".to_string());

    let error = skyroute_lib::path_dijkstra(&graph, &"AAA".to_string(), &"BBB".to_string())
        .expect_err("unweighted graph");
    assert!(matches!(error, Error::InvariantViolation { .. }));
}

/// Enumerate every simple path and track the cheapest total weight.
fn brute_force_min(
    graph: &Graph<String>,
    current: &String,
    goal: &String,
    visited: &mut Vec<String>,
    cost: f64,
    best: &mut Option<f64>,
) {
    if current == goal {
        if best.map_or(true, |b| cost < b) {
            *best = Some(cost);
        }
        return;
    }
    for neighbour in graph.adjacent(current) {
        if visited.contains(&neighbour) {
            continue;
        }
        let weight = graph.edge_weight(current, &neighbour).expect("weighted");
        visited.push(neighbour.clone());
        brute_force_min(graph, &neighbour, goal, visited, cost + weight, best);
        visited.pop();
    }
}

/// Sum the weights along a destination-first route.
fn route_cost(graph: &Graph<String>, route: &[String]) -> f64 {
    route
        .windows(2)
        .map(|pair| graph.edge_weight(&pair[1], &pair[0]).expect("weighted"))
        .sum()
}
