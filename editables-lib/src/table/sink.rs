//! The rendering target contract.

use super::ColumnSpec;
use super::Row;
use crate::error::RenderError;

/// A table-like surface that accepts columns and rows.
///
/// Methods take `&self` so a surface can be shared between the binding that
/// renders into it and the code that displays it; implementations handle
/// their own interior mutability. Every method rejects an empty update.
pub trait TableSink: Send + Sync {
    /// Replaces the column headers.
    fn set_columns(&self, columns: Vec<ColumnSpec>) -> Result<(), RenderError>;

    /// Appends column headers after the existing ones.
    fn add_columns(&self, columns: Vec<ColumnSpec>) -> Result<(), RenderError>;

    /// Replaces the rows.
    fn set_rows(&self, rows: Vec<Row>) -> Result<(), RenderError>;

    /// Appends rows after the existing ones.
    fn add_rows(&self, rows: Vec<Row>) -> Result<(), RenderError>;

    /// Replaces the rows, and the columns when given, as one update.
    ///
    /// Either both parts are applied or the surface is left unchanged.
    fn render(&self, columns: Option<Vec<ColumnSpec>>, rows: Vec<Row>) -> Result<(), RenderError>;

    /// Reports whether [`render`](Self::render) would accept this update,
    /// without changing anything.
    fn check(&self, columns: Option<&[ColumnSpec]>, rows: &[Row]) -> Result<(), RenderError> {
        if columns.is_some_and(<[ColumnSpec]>::is_empty) {
            return Err(RenderError::EmptyColumns);
        }
        if rows.is_empty() {
            return Err(RenderError::EmptyRows);
        }
        Ok(())
    }
}
