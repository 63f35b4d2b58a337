//! Surface registry used to resolve binding targets.

use std::collections::HashMap;
use std::sync::Arc;

use super::TableSink;
use crate::error::ConfigError;

/// Something registered in a [`Document`].
#[derive(Clone)]
pub enum Surface {
    /// A table-like surface a binding can render into.
    Table(Arc<dyn TableSink>),
    /// Any other element; bindings refuse it.
    Element { tag: String },
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table(_) => f.write_str("Table"),
            Self::Element { tag } => f.debug_struct("Element").field("tag", tag).finish(),
        }
    }
}

/// Maps identities to surfaces.
///
/// # Example
///
/// ```
/// use editables_lib::table::{Document, MemoryTable};
///
/// let table = MemoryTable::new();
/// let mut document = Document::new();
/// document.add_table("my-table", table.clone());
/// document.add_element("container", "div");
///
/// assert!(document.resolve_table("my-table").is_ok());
/// assert!(document.resolve_table("container").is_err());
/// assert!(document.resolve_table("missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    surfaces: HashMap<String, Surface>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table surface, replacing whatever had the same identity.
    pub fn add_table<T: TableSink + 'static>(&mut self, id: impl Into<String>, table: T) {
        self.insert(id, Surface::Table(Arc::new(table)));
    }

    /// Registers a non-table element.
    pub fn add_element(&mut self, id: impl Into<String>, tag: impl Into<String>) {
        self.insert(id, Surface::Element { tag: tag.into() });
    }

    /// Registers a surface.
    pub fn insert(&mut self, id: impl Into<String>, surface: Surface) {
        self.surfaces.insert(id.into(), surface);
    }

    /// Returns the surface registered under `id`.
    pub fn get(&self, id: &str) -> Option<&Surface> {
        self.surfaces.get(id)
    }

    /// Resolves `id` to a table surface.
    ///
    /// Fails with [`ConfigError::InvalidTarget`] when nothing is registered
    /// under `id` or when the surface is not a table.
    pub fn resolve_table(&self, id: &str) -> Result<Arc<dyn TableSink>, ConfigError> {
        match self.surfaces.get(id) {
            Some(Surface::Table(table)) => Ok(Arc::clone(table)),
            Some(Surface::Element { tag }) => Err(ConfigError::not_a_table(id, tag.clone())),
            None => Err(ConfigError::target_not_found(id)),
        }
    }
}
