use super::model::Table;

// ---------------------------------------------------------------------------
// Search: case-insensitive substring match over every cell
// ---------------------------------------------------------------------------

/// Return the indices of rows with at least one cell containing `query`,
/// case-insensitively. An empty or whitespace-only query matches every
/// row, so the UI can feed the search box straight through.
pub fn matching_indices(table: &Table, query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (0..table.row_count()).collect();
    }
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.iter().any(|cell| cell.to_lowercase().contains(&needle)))
        .map(|(i, _)| i)
        .collect()
}

/// Build the filtered view as its own table, sharing the column list.
/// Pure: the source table is not touched. Zero matches is a valid result,
/// not an error.
pub fn filter(table: &Table, query: &str) -> Table {
    let mut view = Table::with_columns(table.columns.clone());
    for idx in matching_indices(table, query) {
        view.rows.push(table.rows[idx].clone());
    }
    view
}

#[cfg(test)]
mod tests {
    use super::super::loader::parse;
    use super::*;

    fn sample() -> Table {
        parse("name,city\nAlice,Oslo\nBob,Lima\nCarol,OSLO").unwrap()
    }

    #[test]
    fn empty_query_is_identity() {
        let t = sample();
        assert_eq!(filter(&t, ""), t);
        assert_eq!(filter(&t, "   "), t);
    }

    #[test]
    fn match_is_case_insensitive_and_substring() {
        let t = sample();
        let v = filter(&t, "oslo");
        assert_eq!(v.row_count(), 2);
        assert_eq!(v.rows[0][0], "Alice");
        assert_eq!(v.rows[1][0], "Carol");
    }

    #[test]
    fn row_included_when_any_cell_matches() {
        let t = sample();
        assert_eq!(matching_indices(&t, "bob"), vec![1]);
        assert_eq!(matching_indices(&t, "li"), vec![0, 1]); // Alice, Lima
    }

    #[test]
    fn result_rows_are_a_subset_of_the_source() {
        let t = sample();
        let v = filter(&t, "o");
        assert_eq!(v.columns, t.columns);
        for row in &v.rows {
            assert!(t.rows.contains(row));
        }
    }

    #[test]
    fn zero_matches_is_an_empty_view_not_an_error() {
        let t = sample();
        let v = filter(&t, "zzz");
        assert!(v.is_empty());
        assert_eq!(v.columns, t.columns);
    }

    #[test]
    fn source_table_is_not_mutated() {
        let t = sample();
        let before = t.clone();
        let _ = filter(&t, "alice");
        assert_eq!(t, before);
    }
}
