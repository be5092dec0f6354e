use std::path::Path;

use super::model::{Table, TableError};

// ---------------------------------------------------------------------------
// Serialization – the mirror image of the loader
// ---------------------------------------------------------------------------

/// Render a table back to CSV text: header line first, then one line per
/// row, cells joined by `,`, every line terminated by `\n`.
///
/// Cell values are written as-is, with no quoting or escaping. A value
/// containing a comma or a newline will not survive a round-trip through
/// [`parse`](super::loader::parse); that limitation is shared with the
/// loader on purpose rather than fixed on one side only.
pub fn serialize(table: &Table) -> String {
    let mut out = String::new();
    out.push_str(&table.columns.join(","));
    out.push('\n');
    for row in &table.rows {
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Serialize `table` and write it to `path` as UTF-8, replacing whatever
/// was there. Permission and path errors surface as [`TableError::Io`];
/// the file handle is closed before this returns on every path.
pub fn save_path(table: &Table, path: &Path) -> Result<(), TableError> {
    std::fs::write(path, serialize(table))?;
    Ok(())
}
