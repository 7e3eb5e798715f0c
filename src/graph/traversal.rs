//! Graph traversal algorithms (iterative DFS).

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::Edge;

use super::ListGraph;

/// Depth-first traversal from `start`, returning every node reached.
///
/// Uses an explicit work stack, so graph depth is bounded by heap rather than
/// call stack. Neighbor order follows the adjacency set's iteration order.
/// An unknown `start` yields an empty set.
pub fn depth_first_visit<'a, T>(graph: &'a ListGraph<T>, start: &T) -> HashSet<&'a T>
where
    T: Eq + Hash + Clone + Debug,
{
    let mut visited: HashSet<&T> = HashSet::new();
    let mut stack: Vec<&T> = graph.node_key(start).into_iter().collect();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        if let Some(edges) = graph.adjacent(current) {
            for edge in edges {
                if !visited.contains(edge.destination()) {
                    stack.push(edge.destination());
                }
            }
        }
    }

    log::trace!("DFS from {:?} visited {} node(s)", start, visited.len());
    visited
}

/// Depth-first traversal from `start`, recording for each reached node the
/// node it was reached from. `start` maps to `None`; an unknown `start`
/// yields an empty map.
pub fn depth_first_predecessors<'a, T>(
    graph: &'a ListGraph<T>,
    start: &T,
) -> HashMap<&'a T, Option<&'a T>>
where
    T: Eq + Hash + Clone + Debug,
{
    let mut predecessors: HashMap<&T, Option<&T>> = HashMap::new();
    let mut stack: Vec<(&T, Option<&T>)> =
        graph.node_key(start).map(|key| (key, None)).into_iter().collect();

    while let Some((current, via)) = stack.pop() {
        if predecessors.contains_key(current) {
            continue;
        }
        predecessors.insert(current, via);
        if let Some(edges) = graph.adjacent(current) {
            for edge in edges {
                if !predecessors.contains_key(edge.destination()) {
                    stack.push((edge.destination(), Some(current)));
                }
            }
        }
    }

    log::trace!(
        "DFS from {:?} recorded {} predecessor(s)",
        start,
        predecessors.len()
    );
    predecessors
}

/// Walk `predecessors` back from `to` to `from` and collect the edges along
/// the way, in travel order.
///
/// Returns `None` if `to` is not reachable through the map.
pub fn gather_path<'a, T>(
    graph: &'a ListGraph<T>,
    from: &T,
    to: &T,
    predecessors: &HashMap<&'a T, Option<&'a T>>,
) -> Option<Vec<&'a Edge<T>>>
where
    T: Eq + Hash + Clone + Debug,
{
    let mut path = Vec::new();
    let mut current: &T = to;
    while current != from {
        let previous = (*predecessors.get(current)?)?;
        path.push(graph.find_edge(previous, current)?);
        current = previous;
    }
    path.reverse();
    Some(path)
}
