//! listgraph: an in-memory, undirected, weighted graph.
//!
//! Nodes are caller-supplied values; each connection carries a label and a
//! weight and is stored symmetrically on both endpoints. Reachability and
//! path retrieval use an iterative depth-first search.
//!
//! ```
//! use listgraph::ListGraph;
//!
//! let mut graph = ListGraph::new();
//! for city in ["Kiruna", "Stockholm", "Göteborg"] {
//!     graph.add(city);
//! }
//! graph.connect(&"Kiruna", &"Stockholm", "Tåg", 800.0).unwrap();
//! graph.connect(&"Stockholm", &"Göteborg", "Tåg", 400.0).unwrap();
//!
//! assert!(graph.path_exists(&"Kiruna", &"Göteborg"));
//! let path = graph.path(&"Kiruna", &"Göteborg").unwrap().unwrap();
//! assert_eq!(path.len(), 2);
//! ```

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{GraphBuilder, ListGraph};
pub use types::{Edge, GraphError, GraphResult};
