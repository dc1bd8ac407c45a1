use crate::Position;
use thiserror::Error;

/// Result alias for word search operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised for caller contract violations.
///
/// Unplaceable words and invalid selections are ordinary outcomes and never
/// show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A selection path referenced a cell outside the grid
    #[error("position ({}, {}) is outside a {size}x{size} grid", .position.row, .position.col)]
    OutOfBounds { position: Position, size: usize },

    /// Serialized grid data whose cell count does not match its size
    #[error("grid of size {size} cannot hold {cells} cells")]
    MalformedGrid { size: usize, cells: usize },

    /// A difficulty key did not name one of the fixed tiers
    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),
}
