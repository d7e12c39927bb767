//! In-memory tabular model for contact spreadsheets
//!
//! A [`Table`] is an ordered list of column names plus rows holding exactly
//! one [`Value`] per column. Columns are addressed by name; row order is
//! never changed by any operation here.

mod value;

pub use value::Value;

/// Ordered columns and rows read from a single sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table with the given header
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row, padding with nulls or dropping extra cells to fit the header
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at `row` in the named column
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// All cells of the named column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let col = self.column_index(name)?;
        Some(self.rows.iter().map(|r| &r[col]).collect())
    }

    /// Replace the cells of a column, appending the column if it doesn't exist
    ///
    /// `values` must hold one cell per row.
    pub fn set_column(&mut self, name: &str, values: Vec<Value>) {
        debug_assert_eq!(values.len(), self.rows.len(), "column length mismatch");

        let col = match self.column_index(name) {
            Some(col) => col,
            None => {
                self.columns.push(name.to_string());
                for row in &mut self.rows {
                    row.push(Value::Null);
                }
                self.columns.len() - 1
            }
        };

        for (row, value) in self.rows.iter_mut().zip(values) {
            row[col] = value;
        }
    }

    /// Rewrite every cell of a column in place
    ///
    /// Returns `false` (and does nothing) when the column is absent.
    pub fn map_column<F>(&mut self, name: &str, mut f: F) -> bool
    where
        F: FnMut(&Value) -> Value,
    {
        let Some(col) = self.column_index(name) else {
            return false;
        };
        for row in &mut self.rows {
            row[col] = f(&row[col]);
        }
        true
    }

    /// Remove a column, returning its cells
    pub fn drop_column(&mut self, name: &str) -> Option<Vec<Value>> {
        let col = self.column_index(name)?;
        self.columns.remove(col);
        Some(self.rows.iter_mut().map(|r| r.remove(col)).collect())
    }
}
