//! Value types shared by the graph and the CLI.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Validate a weight passed to `connect`: finite and not negative.
pub fn validate_connect_weight(weight: f64) -> GraphResult<()> {
    if weight.is_nan() || weight < 0.0 {
        return Err(GraphError::InvalidArgument(format!(
            "weight must be non-negative, got {weight}"
        )));
    }
    if weight.is_infinite() {
        return Err(GraphError::InvalidArgument(format!(
            "weight must be finite, got {weight}"
        )));
    }
    Ok(())
}

/// Validate a weight passed to a weight update: finite and strictly positive.
pub fn validate_update_weight(weight: f64) -> GraphResult<()> {
    if weight.is_nan() || weight <= 0.0 {
        return Err(GraphError::InvalidArgument(format!(
            "weight must be positive, got {weight}"
        )));
    }
    if weight.is_infinite() {
        return Err(GraphError::InvalidArgument(format!(
            "weight must be finite, got {weight}"
        )));
    }
    Ok(())
}
