//! CLI command implementations.

use crate::graph::{GraphBuilder, ListGraph};
use crate::types::{Edge, GraphError, GraphResult};

/// A connection parsed from a `FROM,TO,LABEL,WEIGHT` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionArg {
    pub from: String,
    pub to: String,
    pub label: String,
    pub weight: f64,
}

/// Parse a `FROM,TO,LABEL,WEIGHT` connection argument.
pub fn parse_connection(arg: &str) -> GraphResult<ConnectionArg> {
    let parts: Vec<&str> = arg.split(',').map(str::trim).collect();
    let [from, to, label, weight] = parts.as_slice() else {
        return Err(GraphError::InvalidArgument(format!(
            "expected FROM,TO,LABEL,WEIGHT, got {arg:?}"
        )));
    };
    if from.is_empty() || to.is_empty() {
        return Err(GraphError::InvalidArgument(format!(
            "empty node name in {arg:?}"
        )));
    }
    let weight: f64 = weight.parse().map_err(|_| {
        GraphError::InvalidArgument(format!("weight {weight:?} is not a number"))
    })?;
    Ok(ConnectionArg {
        from: from.to_string(),
        to: to.to_string(),
        label: label.to_string(),
        weight,
    })
}

/// Build a string-keyed graph from loose nodes and connection arguments.
pub fn build_graph(nodes: &[String], connections: &[String]) -> GraphResult<ListGraph<String>> {
    let mut builder = GraphBuilder::new();
    for node in nodes {
        builder.node(node.clone());
    }
    for arg in connections {
        let conn = parse_connection(arg)?;
        builder.connect(conn.from, conn.to, conn.label, conn.weight);
    }
    builder.build()
}

/// Print every node with its outgoing edges.
pub fn cmd_show(graph: &ListGraph<String>, json: bool) -> GraphResult<()> {
    let nodes = sorted_nodes(graph);

    if json {
        let mut edges = Vec::new();
        for node in &nodes {
            for edge in sorted_edges(graph, node)? {
                // Each undirected connection once.
                if node.as_str() < edge.destination().as_str() {
                    edges.push(serde_json::json!({
                        "from": node,
                        "to": edge.destination(),
                        "label": edge.label(),
                        "weight": edge.weight(),
                    }));
                }
            }
        }
        let out = serde_json::json!({ "nodes": nodes, "edges": edges });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        for node in &nodes {
            let mut line = node.to_string();
            for edge in sorted_edges(graph, node)? {
                line.push(' ');
                line.push_str(&edge.to_string());
            }
            println!("{}", line);
        }
    }
    Ok(())
}

/// Print node and connection counts.
pub fn cmd_stats(graph: &ListGraph<String>, json: bool) -> GraphResult<()> {
    if json {
        println!(
            "{}",
            serde_json::json!({"nodes": graph.node_count(), "edges": graph.edge_count()})
        );
    } else {
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// Print whether `to` is reachable from `from`.
pub fn cmd_reach(graph: &ListGraph<String>, from: &str, to: &str, json: bool) -> GraphResult<()> {
    let exists = graph.path_exists(&from.to_string(), &to.to_string());
    if json {
        println!(
            "{}",
            serde_json::json!({"from": from, "to": to, "exists": exists})
        );
    } else {
        println!("Path exists from {} to {}: {}", from, to, exists);
    }
    Ok(())
}

/// Print the DFS path from `from` to `to`.
pub fn cmd_path(graph: &ListGraph<String>, from: &str, to: &str, json: bool) -> GraphResult<()> {
    let path = graph.path(&from.to_string(), &to.to_string())?;

    if json {
        let out = match &path {
            Some(edges) => serde_json::json!({
                "from": from,
                "to": to,
                "found": true,
                "hops": edges.len(),
                "total_weight": total_weight(edges),
                "edges": edges,
            }),
            None => serde_json::json!({"from": from, "to": to, "found": false}),
        };
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return Ok(());
    }

    match path {
        Some(edges) => {
            println!(
                "Path from {} to {} ({} hop(s), total weight {}):",
                from,
                to,
                edges.len(),
                total_weight(&edges)
            );
            let mut at = from;
            for edge in &edges {
                println!(
                    "  {} -> {} by {} ({})",
                    at,
                    edge.destination(),
                    edge.label(),
                    edge.weight()
                );
                at = edge.destination().as_str();
            }
        }
        None => println!("No path from {} to {}", from, to),
    }
    Ok(())
}

/// Print the edges leaving `node`.
pub fn cmd_neighbors(graph: &ListGraph<String>, node: &str, json: bool) -> GraphResult<()> {
    let node = node.to_string();
    let edges = sorted_edges(graph, &node)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&edges).unwrap_or_default()
        );
    } else {
        println!("{} ({} connection(s))", node, edges.len());
        for edge in edges {
            println!("  {}", edge);
        }
    }
    Ok(())
}

fn sorted_nodes(graph: &ListGraph<String>) -> Vec<&String> {
    let mut nodes: Vec<&String> = graph.nodes().collect();
    nodes.sort();
    nodes
}

fn sorted_edges<'a>(
    graph: &'a ListGraph<String>,
    node: &String,
) -> GraphResult<Vec<&'a Edge<String>>> {
    let mut edges: Vec<&Edge<String>> = graph.edges_from(node)?.collect();
    edges.sort_by(|a, b| {
        a.destination()
            .cmp(b.destination())
            .then_with(|| a.label().cmp(b.label()))
    });
    Ok(edges)
}

fn total_weight(edges: &[&Edge<String>]) -> f64 {
    edges.iter().map(|e| e.weight()).sum()
}
