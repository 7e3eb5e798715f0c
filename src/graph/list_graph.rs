//! Core graph structure: node -> adjacency set of edges.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::types::{
    validate_connect_weight, validate_update_weight, Edge, GraphError, GraphResult,
};

use super::traversal::{depth_first_predecessors, depth_first_visit, gather_path};

/// An undirected, weighted graph over caller-supplied node values.
///
/// Every connection is stored as two [`Edge`] records, one in each endpoint's
/// adjacency set, and both always carry the same label and weight. At most one
/// connection exists per unordered pair of distinct nodes.
///
/// Node values must keep a stable `Eq`/`Hash` while they are in the graph.
/// Changing a node's identity through interior mutability after insertion
/// leaves the graph in an unspecified state.
///
/// The graph is not internally synchronized. It is `Send`/`Sync` whenever `T`
/// is, so shared use across threads goes through a lock the caller owns, e.g.
/// `Mutex<ListGraph<T>>`.
#[derive(Debug, Clone)]
pub struct ListGraph<T> {
    /// Adjacency sets, one per node. A node with no connections maps to an
    /// empty set.
    adjacency: HashMap<T, HashSet<Edge<T>>>,
}

impl<T> Default for ListGraph<T> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<T> ListGraph<T>
where
    T: Eq + Hash + Clone + fmt::Debug,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(capacity),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected connections (each pair counted once).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum::<usize>() / 2
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// True if `node` is in the graph.
    pub fn contains(&self, node: &T) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Add a node with no connections. Returns false if it was already present,
    /// in which case nothing changes.
    pub fn add(&mut self, node: T) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        log::debug!("Adding node {:?}", node);
        self.adjacency.insert(node, HashSet::new());
        true
    }

    /// Remove a node and every connection touching it.
    pub fn remove(&mut self, node: &T) -> GraphResult<()> {
        let edges = self
            .adjacency
            .get(node)
            .ok_or_else(|| GraphError::not_found(node))?;

        let neighbors: Vec<T> = edges.iter().map(|e| e.destination().clone()).collect();
        for neighbor in &neighbors {
            self.unlink(node, neighbor);
        }
        self.adjacency.remove(node);

        log::debug!(
            "Removed node {:?} and {} connection(s)",
            node,
            neighbors.len()
        );
        Ok(())
    }

    /// Connect two distinct nodes with a labelled, weighted edge.
    ///
    /// Fails without changing the graph if either node is missing, the weight
    /// is negative or not finite, the nodes are the same, or the pair is
    /// already connected.
    pub fn connect(
        &mut self,
        a: &T,
        b: &T,
        label: impl Into<String>,
        weight: f64,
    ) -> GraphResult<()> {
        self.require_pair(a, b)?;
        validate_connect_weight(weight)?;
        if a == b {
            log::trace!("Rejected self-connection on {:?}", a);
            return Err(GraphError::InvalidArgument(format!(
                "cannot connect {a:?} to itself"
            )));
        }
        if self.find_edge(a, b).is_some() || self.find_edge(b, a).is_some() {
            log::trace!("Rejected duplicate connection {:?} - {:?}", a, b);
            return Err(GraphError::already_connected(a, b));
        }

        let label = label.into();
        // Both endpoints were checked above, so both inserts happen.
        if let Some(edges) = self.adjacency.get_mut(a) {
            edges.insert(Edge::new(b.clone(), label.clone(), weight));
        }
        if let Some(edges) = self.adjacency.get_mut(b) {
            edges.insert(Edge::new(a.clone(), label.clone(), weight));
        }

        log::debug!("Connected {:?} - {:?} by {} ({})", a, b, label, weight);
        Ok(())
    }

    /// Remove the connection between two nodes.
    pub fn disconnect(&mut self, a: &T, b: &T) -> GraphResult<()> {
        self.require_pair(a, b)?;
        if self.find_edge(a, b).is_none() || self.find_edge(b, a).is_none() {
            return Err(GraphError::no_such_edge(a, b));
        }
        self.unlink(a, b);
        log::debug!("Disconnected {:?} - {:?}", a, b);
        Ok(())
    }

    /// Change the weight of an existing connection, on both sides.
    ///
    /// The two directional records are updated by paired writes after all
    /// checks pass, so either both change or neither does.
    pub fn set_connection_weight(&mut self, a: &T, b: &T, weight: f64) -> GraphResult<()> {
        self.require_pair(a, b)?;
        let forward = self.find_edge(a, b).cloned();
        let backward = self.find_edge(b, a).cloned();
        let (Some(forward), Some(backward)) = (forward, backward) else {
            return Err(GraphError::no_such_edge(a, b));
        };
        validate_update_weight(weight)?;

        Self::rewrite_weight(self.adjacency.get_mut(a), forward, weight);
        Self::rewrite_weight(self.adjacency.get_mut(b), backward, weight);

        log::debug!("Set weight {:?} - {:?} to {}", a, b, weight);
        Ok(())
    }

    /// Iterate over every node in the graph.
    pub fn nodes(&self) -> impl Iterator<Item = &T> + '_ {
        self.adjacency.keys()
    }

    /// Iterate over the edges leaving `node`.
    pub fn edges_from(&self, node: &T) -> GraphResult<impl Iterator<Item = &Edge<T>> + '_> {
        self.adjacency
            .get(node)
            .map(|edges| edges.iter())
            .ok_or_else(|| GraphError::not_found(node))
    }

    /// Iterate over the nodes directly connected to `node`.
    pub fn neighbors(&self, node: &T) -> GraphResult<impl Iterator<Item = &T> + '_> {
        Ok(self.edges_from(node)?.map(Edge::destination))
    }

    /// The edge leading from `a` to `b`.
    ///
    /// Returns `Ok(None)` when both nodes exist but are not connected, and
    /// `NodeNotFound` when either is missing.
    pub fn edge_between(&self, a: &T, b: &T) -> GraphResult<Option<&Edge<T>>> {
        self.require_pair(a, b)?;
        Ok(self.find_edge(a, b))
    }

    /// True if `to` can be reached from `from`. Unknown endpoints are simply
    /// unreachable.
    pub fn path_exists(&self, from: &T, to: &T) -> bool {
        if !self.contains(from) || !self.contains(to) {
            return false;
        }
        depth_first_visit(self, from).contains(to)
    }

    /// The path from `from` to `to` discovered by depth-first search, as the
    /// ordered edges to follow.
    ///
    /// This is the first path the search finds, not the shortest. Returns
    /// `Ok(None)` when `to` is unreachable and an empty path when
    /// `from == to`.
    pub fn path(&self, from: &T, to: &T) -> GraphResult<Option<Vec<&Edge<T>>>> {
        let (Some((from, _)), Some((to, _))) = (
            self.adjacency.get_key_value(from),
            self.adjacency.get_key_value(to),
        ) else {
            let missing = if self.contains(from) { to } else { from };
            return Err(GraphError::not_found(missing));
        };

        let predecessors = depth_first_predecessors(self, from);
        if !predecessors.contains_key(to) {
            return Ok(None);
        }
        Ok(gather_path(self, from, to, &predecessors))
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// The graph-owned copy of `node`, if present.
    pub(crate) fn node_key(&self, node: &T) -> Option<&T> {
        self.adjacency.get_key_value(node).map(|(key, _)| key)
    }

    /// The adjacency set of a node, if present.
    pub(crate) fn adjacent(&self, node: &T) -> Option<&HashSet<Edge<T>>> {
        self.adjacency.get(node)
    }

    /// Edge from `a` to `b` without existence checks on the nodes.
    pub(crate) fn find_edge(&self, a: &T, b: &T) -> Option<&Edge<T>> {
        self.adjacency
            .get(a)?
            .iter()
            .find(|e| e.destination() == b)
    }

    fn require_pair(&self, a: &T, b: &T) -> GraphResult<()> {
        if !self.contains(a) {
            return Err(GraphError::not_found(a));
        }
        if !self.contains(b) {
            return Err(GraphError::not_found(b));
        }
        Ok(())
    }

    /// Drop the records between `a` and `b` from both sides.
    fn unlink(&mut self, a: &T, b: &T) {
        if let Some(edges) = self.adjacency.get_mut(a) {
            edges.retain(|e| e.destination() != b);
        }
        if let Some(edges) = self.adjacency.get_mut(b) {
            edges.retain(|e| e.destination() != a);
        }
    }

    fn rewrite_weight(edges: Option<&mut HashSet<Edge<T>>>, edge: Edge<T>, weight: f64) {
        if let Some(edges) = edges {
            if let Some(mut stored) = edges.take(&edge) {
                stored.set_weight(weight);
                edges.insert(stored);
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for ListGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, edges) in &self.adjacency {
            write!(f, "{node}")?;
            for edge in edges {
                write!(f, " {edge}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
