//! The edge record stored in each node's adjacency set.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// One direction of an undirected connection: where it leads, what it is
/// called and what it costs.
///
/// Identity is the `(label, destination)` pair. The weight is a payload and
/// takes no part in equality or hashing, so updating it never changes which
/// edge a record is.
#[derive(Debug, Clone, Serialize)]
pub struct Edge<T> {
    destination: T,
    label: String,
    weight: f64,
}

impl<T> Edge<T> {
    /// Create a new edge record. Weight validation is the graph's job.
    pub fn new(destination: T, label: impl Into<String>, weight: f64) -> Self {
        Self {
            destination,
            label: label.into(),
            weight,
        }
    }

    /// The node this edge leads to.
    pub fn destination(&self) -> &T {
        &self.destination
    }

    /// The edge label (e.g. the mode of transport).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

impl<T: PartialEq> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.destination == other.destination
    }
}

impl<T: Eq> Eq for Edge<T> {}

impl<T: Hash> Hash for Edge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
        self.destination.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "to {} by {} takes {}",
            self.destination, self.label, self.weight
        )
    }
}
