use std::path::Path;

use super::model::{Table, TableError};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a CSV file and parse it into a fresh [`Table`].
///
/// The file is decoded as UTF-8; read or decode failures surface as
/// [`TableError::Io`]. The table is fully constructed before this returns,
/// so a caller replacing its current table on success never observes a
/// half-loaded state.
pub fn load_path(path: &Path) -> Result<Table, TableError> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Read a CSV file and append its data rows to an existing table.
/// Returns the number of rows actually added.
pub fn merge_path(table: &mut Table, path: &Path) -> Result<usize, TableError> {
    let text = std::fs::read_to_string(path)?;
    append_rows(table, &text)
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse CSV text into a [`Table`].
///
/// Lines are split on `,` with no quote or escape handling, so a comma or
/// newline inside a field is not supported. This is a documented limitation
/// shared with [`serialize`](super::serializer::serialize), not something
/// to patch up here.
///
/// The first line is the header; names are trimmed. Every other line must
/// split into exactly as many cells as there are columns — lines that do
/// not are dropped without an error (they only show up in debug logs).
pub fn parse(text: &str) -> Result<Table, TableError> {
    let mut lines = text.lines();

    let header = lines.next().ok_or(TableError::EmptyInput)?;
    let columns: Vec<String> = header.split(',').map(|h| h.trim().to_string()).collect();

    let mut table = Table::with_columns(columns);
    for (line_no, line) in lines.enumerate() {
        push_if_well_formed(&mut table, line, line_no + 2);
    }
    Ok(table)
}

/// Append the data rows of `text` (a full CSV document, header included)
/// to `table`. Returns how many rows were added.
///
/// The header check is all-or-nothing: a width mismatch fails the whole
/// merge and leaves `table` untouched. Past that check, malformed lines
/// are still skipped one by one — the merge is deliberately not atomic at
/// the row level, matching the header-strict/row-lenient split of the
/// load path.
///
/// An empty or header-only document appends nothing and is not an error;
/// the header is not even inspected in that case.
pub fn append_rows(table: &mut Table, text: &str) -> Result<usize, TableError> {
    let mut lines = text.lines();
    let Some(header) = lines.next() else {
        return Ok(0);
    };

    let mut data_lines = lines.peekable();
    if data_lines.peek().is_none() {
        return Ok(0);
    }

    let incoming = header.split(',').count();
    if incoming != table.column_count() {
        return Err(TableError::StructureMismatch {
            expected: table.column_count(),
            found: incoming,
        });
    }

    let before = table.row_count();
    for (line_no, line) in data_lines.enumerate() {
        push_if_well_formed(table, line, line_no + 2);
    }
    Ok(table.row_count() - before)
}

/// Split one data line; append it if its cell count matches the table
/// width, otherwise drop it. `line_no` is 1-based for the log message.
fn push_if_well_formed(table: &mut Table, line: &str, line_no: usize) {
    let cells: Vec<String> = line.split(',').map(|c| c.trim().to_string()).collect();
    if cells.len() == table.column_count() {
        table.rows.push(cells);
    } else {
        log::debug!(
            "line {line_no}: {} cells, expected {} – skipped",
            cells.len(),
            table.column_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn parse_basic_document() {
        let t = parse("a,b\n1,2\n3,4").unwrap();
        assert_eq!(t.columns, vec!["a", "b"]);
        assert_eq!(
            t.rows,
            vec![
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string(), "4".to_string()],
            ]
        );
    }

    #[test]
    fn parse_trims_header_names_and_cells() {
        let t = parse(" name , age \n Alice , 30 ").unwrap();
        assert_eq!(t.columns, vec!["name", "age"]);
        assert_eq!(t.rows[0], vec!["Alice".to_string(), "30".to_string()]);
    }

    #[test]
    fn parse_drops_malformed_lines() {
        let t = parse("a,b\n1,2\nonly-one-cell\n5,6,7\n3,4").unwrap();
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.rows[1], vec!["3".to_string(), "4".to_string()]);
    }

    #[test]
    fn parse_empty_input_is_reportable() {
        assert!(matches!(parse(""), Err(TableError::EmptyInput)));
    }

    #[test]
    fn parse_header_only_gives_empty_table() {
        let t = parse("a,b,c").unwrap();
        assert_eq!(t.column_count(), 3);
        assert!(t.is_empty());
    }

    #[test]
    fn append_rows_counts_what_it_added() {
        let mut t = parse("a,b\n1,2").unwrap();
        let added = append_rows(&mut t, "a,b\n3,4\n5,6").unwrap();
        assert_eq!(added, 2);
        assert_eq!(t.row_count(), 3);
    }

    #[test]
    fn append_rows_rejects_mismatched_header_and_leaves_table_alone() {
        let mut t = parse("a,b\n1,2").unwrap();
        let original = t.clone();
        let err = append_rows(&mut t, "x,y,z\n1,2,3").unwrap_err();
        assert!(matches!(
            err,
            TableError::StructureMismatch {
                expected: 2,
                found: 3
            }
        ));
        assert_eq!(t, original);
    }

    // Header mismatch is fatal, row mismatch is not. Both halves checked
    // here so neither side of the split gets unified by accident.
    #[test]
    fn append_rows_still_skips_malformed_lines_past_the_header_check() {
        let mut t = parse("a,b\n1,2").unwrap();
        let added = append_rows(&mut t, "a,b\n3,4\nbad line\n5,6").unwrap();
        assert_eq!(added, 2);
        assert_eq!(t.row_count(), 3);
    }

    #[test]
    fn append_rows_header_only_source_adds_nothing() {
        let mut t = parse("a,b\n1,2").unwrap();
        // Width is wrong but there are no data lines, so it is not checked.
        assert_eq!(append_rows(&mut t, "x,y,z").unwrap(), 0);
        assert_eq!(append_rows(&mut t, "").unwrap(), 0);
        assert_eq!(t.row_count(), 1);
    }

    #[test]
    fn load_path_reads_a_real_file() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "a,b\n1,2\n3,4").unwrap();
        let t = load_path(f.path()).unwrap();
        assert_eq!(t.row_count(), 2);
    }

    #[test]
    fn load_path_missing_file_is_io() {
        let err = load_path(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, TableError::Io(_)));
    }

    #[test]
    fn merge_path_appends_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "a,b\n9,9").unwrap();
        let mut t = parse("a,b\n1,2").unwrap();
        assert_eq!(merge_path(&mut t, f.path()).unwrap(), 1);
        assert_eq!(t.rows[1], vec!["9".to_string(), "9".to_string()]);
    }
}
