//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanarError {
    /// A vector-like value did not hold exactly two components.
    #[error("expected exactly 2 components, got {0}")]
    InvalidComponentCount(usize),
}
