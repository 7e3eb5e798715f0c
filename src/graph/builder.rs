//! Fluent API for building ListGraph instances.

use std::fmt::Debug;
use std::hash::Hash;

use crate::types::GraphResult;

use super::ListGraph;

/// A connection queued by the builder.
struct PendingConnection<T> {
    a: T,
    b: T,
    label: String,
    weight: f64,
}

/// Fluent builder for constructing a ListGraph.
///
/// Nodes and connections are collected first and validated on [`build`],
/// which fails on the first connection the graph rejects.
///
/// [`build`]: GraphBuilder::build
pub struct GraphBuilder<T> {
    nodes: Vec<T>,
    connections: Vec<PendingConnection<T>>,
}

impl<T> GraphBuilder<T>
where
    T: Eq + Hash + Clone + Debug,
{
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Add a node, connected or not.
    pub fn node(&mut self, node: T) -> &mut Self {
        self.nodes.push(node);
        self
    }

    /// Queue a connection. Both endpoints are added to the graph if missing.
    pub fn connect(&mut self, a: T, b: T, label: impl Into<String>, weight: f64) -> &mut Self {
        self.connections.push(PendingConnection {
            a,
            b,
            label: label.into(),
            weight,
        });
        self
    }

    /// Number of queued connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Build the final ListGraph.
    pub fn build(self) -> GraphResult<ListGraph<T>> {
        let mut graph = ListGraph::with_capacity(self.nodes.len());
        for node in self.nodes {
            graph.add(node);
        }
        for pending in self.connections {
            graph.add(pending.a.clone());
            graph.add(pending.b.clone());
            graph.connect(&pending.a, &pending.b, pending.label, pending.weight)?;
        }
        log::debug!(
            "Built graph with {} node(s) and {} connection(s)",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T>
where
    T: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
