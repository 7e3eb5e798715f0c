//! The undirected graph container, its builder and DFS traversal.

pub mod builder;
pub mod list_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use list_graph::ListGraph;
pub use traversal::{depth_first_predecessors, depth_first_visit, gather_path};
