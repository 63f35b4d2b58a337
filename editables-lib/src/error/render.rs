//! Table surface error types

/// Errors raised by a table surface when it refuses an update.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// An update was given no columns.
    #[error("Expected at least 1 column, got: 0")]
    EmptyColumns,

    /// An update was given no rows.
    #[error("Expected at least 1 row, got: 0")]
    EmptyRows,

    /// The surface's lock was poisoned by a panicking writer.
    #[error("Table surface is unavailable")]
    Poisoned,
}
