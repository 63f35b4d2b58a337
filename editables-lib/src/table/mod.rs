//! Table surfaces: the rendering side of a binding.
//!
//! A binding renders into anything implementing [`TableSink`]. Surfaces are
//! looked up by identity in a [`Document`]; [`MemoryTable`] is the provided
//! implementation and can lay itself out as plain text.

mod column;
mod document;
mod memory;
mod row;
mod sink;

pub use column::{Column, ColumnSpec, ColumnType};
pub use document::{Document, Surface};
pub use memory::MemoryTable;
pub use row::Row;
pub use sink::TableSink;
