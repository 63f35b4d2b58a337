//! In-memory table surface.

use std::sync::Arc;
use std::sync::RwLock;

use unicode_width::UnicodeWidthStr;

use super::Column;
use super::ColumnSpec;
use super::Row;
use super::TableSink;
use crate::error::RenderError;

/// A table held in memory.
///
/// Clones share the same contents, so one handle can be registered in a
/// [`Document`](super::Document) while another is kept for reading.
///
/// # Example
///
/// ```
/// use editables_lib::table::{ColumnSpec, MemoryTable, Row, TableSink};
///
/// let table = MemoryTable::new();
/// table.set_columns(vec![ColumnSpec::new("id").key("sku"), ColumnSpec::new("name")]).unwrap();
/// table.set_rows(vec![Row::new(vec!["1".into(), "Lamp".into()])]).unwrap();
///
/// assert_eq!(table.columns()[0].key, "sku-0");
/// assert_eq!(table.row_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    inner: Arc<RwLock<TableInner>>,
}

#[derive(Debug, Default)]
struct TableInner {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the columns.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Returns a snapshot of the rows.
    pub fn rows(&self) -> Vec<Row> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    pub fn row_count(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    pub fn column_count(&self) -> usize {
        self.inner.read().map(|g| g.columns.len()).unwrap_or(0)
    }

    /// Returns `true` if the table has neither columns nor rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 && self.column_count() == 0
    }

    /// Lays the table out as aligned plain text.
    ///
    /// A leading `#` column holds row identities when any row has one.
    pub fn to_text(&self) -> String {
        let Ok(g) = self.inner.read() else {
            return String::new();
        };

        let with_ids = g.rows.iter().any(|row| row.id.is_some());
        let width = g
            .rows
            .iter()
            .map(|row| row.cells.len())
            .chain(std::iter::once(g.columns.len()))
            .max()
            .unwrap_or(0);

        let mut header: Vec<&str> = Vec::with_capacity(width + 1);
        if with_ids {
            header.push("#");
        }
        header.extend((0..width).map(|i| g.columns.get(i).map_or("", |c| c.name.as_str())));

        let body: Vec<Vec<&str>> = g
            .rows
            .iter()
            .map(|row| {
                let mut line = Vec::with_capacity(width + 1);
                if with_ids {
                    line.push(row.id().unwrap_or(""));
                }
                line.extend((0..width).map(|i| row.cells.get(i).map_or("", String::as_str)));
                line
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
        for line in &body {
            for (i, cell) in line.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        let mut out = String::new();
        push_line(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');
        for line in &body {
            push_line(&mut out, line, &widths);
        }
        out
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, TableInner>, RenderError> {
        self.inner.write().map_err(|_| RenderError::Poisoned)
    }
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{}{}", cell, " ".repeat(w - cell.width())))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

impl TableSink for MemoryTable {
    fn set_columns(&self, columns: Vec<ColumnSpec>) -> Result<(), RenderError> {
        if columns.is_empty() {
            return Err(RenderError::EmptyColumns);
        }
        let columns = columns
            .into_iter()
            .enumerate()
            .map(|(i, spec)| spec.resolve(i))
            .collect();
        self.write()?.columns = columns;
        Ok(())
    }

    fn add_columns(&self, columns: Vec<ColumnSpec>) -> Result<(), RenderError> {
        if columns.is_empty() {
            return Err(RenderError::EmptyColumns);
        }
        let mut g = self.write()?;
        let offset = g.columns.len();
        g.columns.extend(
            columns
                .into_iter()
                .enumerate()
                .map(|(i, spec)| spec.resolve(offset + i)),
        );
        Ok(())
    }

    fn set_rows(&self, rows: Vec<Row>) -> Result<(), RenderError> {
        if rows.is_empty() {
            return Err(RenderError::EmptyRows);
        }
        self.write()?.rows = rows;
        Ok(())
    }

    fn add_rows(&self, rows: Vec<Row>) -> Result<(), RenderError> {
        if rows.is_empty() {
            return Err(RenderError::EmptyRows);
        }
        self.write()?.rows.extend(rows);
        Ok(())
    }

    fn render(&self, columns: Option<Vec<ColumnSpec>>, rows: Vec<Row>) -> Result<(), RenderError> {
        self.check(columns.as_deref(), &rows)?;
        let mut g = self.write()?;
        if let Some(columns) = columns {
            g.columns = columns
                .into_iter()
                .enumerate()
                .map(|(i, spec)| spec.resolve(i))
                .collect();
        }
        g.rows = rows;
        Ok(())
    }

    fn check(&self, columns: Option<&[ColumnSpec]>, rows: &[Row]) -> Result<(), RenderError> {
        if self.inner.is_poisoned() {
            return Err(RenderError::Poisoned);
        }
        if columns.is_some_and(<[ColumnSpec]>::is_empty) {
            return Err(RenderError::EmptyColumns);
        }
        if rows.is_empty() {
            return Err(RenderError::EmptyRows);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_set_columns_replaces() {
        let table = MemoryTable::new();
        table.set_columns(vec![ColumnSpec::new("a")]).unwrap();
        table
            .set_columns(vec![ColumnSpec::new("id").key("sku"), ColumnSpec::new("name")])
            .unwrap();

        let columns = table.columns();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].key, "sku-0");
        assert_eq!(columns[1].key, "1");
    }

    #[test]
    fn test_add_columns_appends_with_positions() {
        let table = MemoryTable::new();
        table
            .set_columns(vec![ColumnSpec::new("id").key("sku"), ColumnSpec::new("name")])
            .unwrap();
        table
            .add_columns(vec![ColumnSpec::new("id").key("tag"), ColumnSpec::new("notes")])
            .unwrap();

        let keys: Vec<String> = table.columns().into_iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["sku-0", "1", "tag-2", "3"]);
    }

    #[test]
    fn test_empty_updates_rejected() {
        let table = MemoryTable::new();
        assert_eq!(table.set_columns(vec![]), Err(RenderError::EmptyColumns));
        assert_eq!(table.add_columns(vec![]), Err(RenderError::EmptyColumns));
        assert_eq!(table.set_rows(vec![]), Err(RenderError::EmptyRows));
        assert_eq!(table.add_rows(vec![]), Err(RenderError::EmptyRows));
        assert!(table.is_empty());
    }

    #[test]
    fn test_rows_replace_and_append() {
        let table = MemoryTable::new();
        table.set_rows(vec![Row::new(cells(&["1", "Lamp"]))]).unwrap();
        table
            .set_rows(vec![Row::with_id("2", cells(&["2", "Desk"]))])
            .unwrap();
        table.add_rows(vec![Row::new(cells(&["3", "c"]))]).unwrap();

        let rows = table.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id(), Some("2"));
        assert_eq!(rows[1].cells, cells(&["3", "c"]));
    }

    #[test]
    fn test_render_replaces_both_parts() {
        let table = MemoryTable::new();
        table.set_columns(vec![ColumnSpec::new("old")]).unwrap();
        table
            .render(
                Some(vec![ColumnSpec::new("title").key("title")]),
                vec![Row::with_id("1", cells(&["A"]))],
            )
            .unwrap();

        assert_eq!(table.columns()[0].key, "title-0");
        assert_eq!(table.rows()[0].id(), Some("1"));
    }

    #[test]
    fn test_render_keeps_columns_without_schema() {
        let table = MemoryTable::new();
        table.set_columns(vec![ColumnSpec::new("a")]).unwrap();
        table.render(None, vec![Row::new(cells(&["x"]))]).unwrap();

        assert_eq!(table.column_count(), 1);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_refused_render_changes_nothing() {
        let table = MemoryTable::new();
        table.set_columns(vec![ColumnSpec::new("a")]).unwrap();
        table.set_rows(vec![Row::new(cells(&["x"]))]).unwrap();

        let err = table.render(Some(vec![ColumnSpec::new("b")]), vec![]).unwrap_err();
        assert_eq!(err, RenderError::EmptyRows);
        let err = table.render(Some(vec![]), vec![Row::new(cells(&["y"]))]).unwrap_err();
        assert_eq!(err, RenderError::EmptyColumns);

        assert_eq!(table.columns()[0].name, "a");
        assert_eq!(table.rows()[0].cells, cells(&["x"]));
    }

    #[test]
    fn test_poisoned_table_refuses_render() {
        let table = MemoryTable::new();
        let handle = table.clone();
        let _ = std::thread::spawn(move || {
            let _g = handle.inner.write().unwrap();
            panic!("writer died");
        })
        .join();

        assert_eq!(
            table.check(None, &[Row::new(cells(&["x"]))]),
            Err(RenderError::Poisoned)
        );
        assert_eq!(
            table.render(None, vec![Row::new(cells(&["x"]))]),
            Err(RenderError::Poisoned)
        );
    }

    #[test]
    fn test_clones_share_contents() {
        let table = MemoryTable::new();
        let handle = table.clone();
        table.set_rows(vec![Row::new(cells(&["a"]))]).unwrap();
        assert_eq!(handle.row_count(), 1);
    }

    #[test]
    fn test_to_text() {
        let table = MemoryTable::new();
        table.set_columns(vec![ColumnSpec::new("title")]).unwrap();
        table
            .set_rows(vec![
                Row::with_id("1", cells(&["A"])),
                Row::with_id("20", cells(&["Bravo"])),
            ])
            .unwrap();

        let expected = "\
#  | title
---+------
1  | A
20 | Bravo
";
        assert_eq!(table.to_text(), expected);
    }

    #[test]
    fn test_to_text_without_ids() {
        let table = MemoryTable::new();
        table.set_columns(vec![ColumnSpec::new("a"), ColumnSpec::new("b")]).unwrap();
        table.set_rows(vec![Row::new(cells(&["x", "yy"]))]).unwrap();

        assert_eq!(table.to_text(), "a | b\n--+---\nx | yy\n");
    }
}
