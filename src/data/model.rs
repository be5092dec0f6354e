use thiserror::Error;

// ---------------------------------------------------------------------------
// TableError – every way a core operation can fail
// ---------------------------------------------------------------------------

/// Failure kinds surfaced by the table core. The UI maps each kind to a
/// status-line notice; none are fatal and none leave the table partially
/// mutated.
#[derive(Debug, Error)]
pub enum TableError {
    /// The input had no lines at all, not even a header.
    #[error("the file is empty")]
    EmptyInput,

    /// A merge source's header width differs from the target table's.
    #[error("expected {expected} columns but the file has {found}")]
    StructureMismatch { expected: usize, found: usize },

    /// A row (or column) index outside the table. Caller precondition
    /// violation – the UI only ever supplies a selected, valid index.
    #[error("index {index} is out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Read/write/decode failure on the underlying file.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Table – ordered columns, string-cell rows
// ---------------------------------------------------------------------------

/// An in-memory CSV table. Column order defines serialization order.
///
/// Invariant: every row holds exactly `columns.len()` cells. The loader
/// drops malformed lines rather than coercing them, and every mutator
/// below preserves the width, so the invariant holds for the table's
/// whole lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Ordered column names, as read from the header line.
    pub columns: Vec<String>,
    /// Ordered records; each is one cell per column.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given columns and no rows.
    pub fn with_columns(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows (it may still have columns).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Remove the row at `index`, shifting subsequent rows down.
    /// Immediate and irreversible; there is no soft delete.
    pub fn delete_row(&mut self, index: usize) -> Result<(), TableError> {
        if index >= self.rows.len() {
            return Err(TableError::IndexOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        self.rows.remove(index);
        Ok(())
    }

    /// Overwrite a single cell. This is the edit-commit path: the grid
    /// widget never owns the data, it hands finished edits to the model.
    pub fn update_cell(
        &mut self,
        row: usize,
        col: usize,
        value: String,
    ) -> Result<(), TableError> {
        if row >= self.rows.len() {
            return Err(TableError::IndexOutOfRange {
                index: row,
                len: self.rows.len(),
            });
        }
        if col >= self.columns.len() {
            return Err(TableError::IndexOutOfRange {
                index: col,
                len: self.columns.len(),
            });
        }
        self.rows[row][col] = value;
        Ok(())
    }

    /// Append a row of empty cells, one per column.
    pub fn push_blank_row(&mut self) {
        self.rows.push(vec![String::new(); self.columns.len()]);
    }
}
