use std::path::{Path, PathBuf};

use crate::data::filter::{filter, matching_indices};
use crate::data::loader::{load_path, merge_path};
use crate::data::model::Table;
use crate::data::serializer::save_path;

// ---------------------------------------------------------------------------
// Status notice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line outcome of the last user action, shown in the top bar.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

// ---------------------------------------------------------------------------
// In-flight cell edit
// ---------------------------------------------------------------------------

/// Draft text for the cell currently being edited. The table itself is
/// only touched when the draft is committed.
#[derive(Debug, Clone)]
pub struct CellEdit {
    pub row: usize,
    pub col: usize,
    pub text: String,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The editing session, independent of rendering. All core operations go
/// through here; the UI reads the fields and calls the methods. Row
/// indices (`visible_rows`, `selected_row`, `edit.row`) always refer to
/// the source table, never to the filtered view.
pub struct AppState {
    /// Loaded table (None until the user opens a file).
    pub table: Option<Table>,

    /// Path of the file backing `table`; save targets this.
    pub current_path: Option<PathBuf>,

    /// Live search box contents.
    pub search_query: String,

    /// Indices of rows passing the current search (cached).
    pub visible_rows: Vec<usize>,

    /// Selected source-row index, if any.
    pub selected_row: Option<usize>,

    /// Cell edit in progress, if any.
    pub edit: Option<CellEdit>,

    /// Outcome of the last action.
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            current_path: None,
            search_query: String::new(),
            visible_rows: Vec::new(),
            selected_row: None,
            edit: None,
            notice: None,
        }
    }
}

impl AppState {
    pub fn info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind: NoticeKind::Info,
        });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            kind: NoticeKind::Error,
        });
    }

    /// Install a freshly loaded table, replacing the whole session. Only
    /// called once the new table is fully constructed, so a failed load
    /// never gets here and the previous session survives it.
    fn set_table(&mut self, table: Table, path: PathBuf) {
        self.visible_rows = (0..table.row_count()).collect();
        self.table = Some(table);
        self.current_path = Some(path);
        self.search_query.clear();
        self.selected_row = None;
        self.edit = None;
    }

    /// Recompute `visible_rows` after the query or the table changed, and
    /// drop a selection that no longer points at a row.
    pub fn refilter(&mut self) {
        if let Some(table) = &self.table {
            self.visible_rows = matching_indices(table, &self.search_query);
            if let Some(sel) = self.selected_row {
                if sel >= table.row_count() {
                    self.selected_row = None;
                }
            }
        } else {
            self.visible_rows.clear();
            self.selected_row = None;
        }
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.refilter();
    }

    // -- File actions --------------------------------------------------

    /// Load `path` as the new session table.
    pub fn open(&mut self, path: &Path) {
        match load_path(path) {
            Ok(table) => {
                log::info!(
                    "loaded {} rows x {} columns from {}",
                    table.row_count(),
                    table.column_count(),
                    path.display()
                );
                let rows = table.row_count();
                self.set_table(table, path.to_path_buf());
                self.info(format!("Loaded {rows} rows"));
            }
            Err(e) => {
                log::error!("open {} failed: {e}", path.display());
                self.error(format!("Could not open file: {e}"));
            }
        }
    }

    /// Append rows from `path` into the current table. With no table
    /// loaded this behaves as a fresh open.
    pub fn merge(&mut self, path: &Path) {
        let Some(table) = &mut self.table else {
            self.open(path);
            return;
        };
        match merge_path(table, path) {
            Ok(added) => {
                log::info!("imported {added} rows from {}", path.display());
                self.refilter();
                self.info(format!("Imported {added} rows"));
            }
            Err(e) => {
                log::error!("import {} failed: {e}", path.display());
                self.error(format!("Could not import: {e}"));
            }
        }
    }

    /// Write the table back to `current_path`. Returns false when there
    /// is no current path yet; the caller then prompts for one.
    pub fn save(&mut self) -> bool {
        let Some(path) = self.current_path.clone() else {
            return false;
        };
        self.write_to(&path, "Saved");
        true
    }

    /// Write to a chosen path and make it the session's current file.
    pub fn save_as(&mut self, path: &Path) {
        self.current_path = Some(path.to_path_buf());
        self.write_to(path, "Saved");
    }

    /// Write a copy of what the grid shows to a chosen path, without
    /// retargeting the session. With a search active this exports the
    /// filtered view, not the whole table.
    pub fn export(&mut self, path: &Path) {
        let Some(table) = &self.table else {
            self.error("Nothing to export");
            return;
        };
        let view = filter(table, &self.search_query);
        match save_path(&view, path) {
            Ok(()) => {
                log::info!("exported {} rows to {}", view.row_count(), path.display());
                self.info(format!("Exported {} rows to {}", view.row_count(), path.display()));
            }
            Err(e) => {
                log::error!("export {} failed: {e}", path.display());
                self.error(format!("Could not export: {e}"));
            }
        }
    }

    fn write_to(&mut self, path: &Path, verb: &str) {
        let Some(table) = &self.table else {
            self.error("Nothing to save");
            return;
        };
        match save_path(table, path) {
            Ok(()) => {
                log::info!("wrote {} rows to {}", table.row_count(), path.display());
                self.info(format!("{verb} {}", path.display()));
            }
            Err(e) => {
                log::error!("write {} failed: {e}", path.display());
                self.error(format!("Could not write file: {e}"));
            }
        }
    }

    // -- Row actions ---------------------------------------------------

    /// Append a blank row and select it. Under an active search the new
    /// row will not match and stays hidden until the search is cleared.
    pub fn add_row(&mut self) {
        let Some(table) = &mut self.table else {
            self.error("Open a file first");
            return;
        };
        table.push_blank_row();
        self.selected_row = Some(table.row_count() - 1);
        self.refilter();
        self.info("Row added");
    }

    /// Delete the selected row. The caller has already confirmed with
    /// the user; this just applies it.
    pub fn delete_selected(&mut self) {
        let Some(sel) = self.selected_row else {
            self.error("Select a row to delete");
            return;
        };
        let Some(table) = &mut self.table else {
            return;
        };
        match table.delete_row(sel) {
            Ok(()) => {
                self.selected_row = None;
                self.edit = None;
                self.refilter();
                self.info("Row deleted");
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    /// Apply the in-flight cell edit to the table and drop the draft.
    pub fn commit_edit(&mut self) {
        let Some(edit) = self.edit.take() else {
            return;
        };
        let Some(table) = &mut self.table else {
            return;
        };
        if let Err(e) = table.update_cell(edit.row, edit.col, edit.text) {
            self.error(e.to_string());
            return;
        }
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{tempdir, NamedTempFile};

    use super::*;
    use crate::data::loader::parse;

    fn session_with(text: &str) -> AppState {
        let mut s = AppState::default();
        s.table = Some(parse(text).unwrap());
        s.refilter();
        s
    }

    #[test]
    fn refilter_tracks_the_query() {
        let mut s = session_with("a,b\nfoo,1\nbar,2\nfoobar,3");
        s.search_query = "foo".into();
        s.refilter();
        assert_eq!(s.visible_rows, vec![0, 2]);
        s.clear_search();
        assert_eq!(s.visible_rows, vec![0, 1, 2]);
    }

    #[test]
    fn failed_open_keeps_the_previous_table() {
        let mut s = session_with("a,b\n1,2");
        s.open(Path::new("/no/such/file.csv"));
        assert_eq!(s.table.as_ref().unwrap().row_count(), 1);
        assert_eq!(s.notice.as_ref().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn merge_without_a_table_opens_instead() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "a,b\n1,2").unwrap();
        let mut s = AppState::default();
        s.merge(f.path());
        assert!(s.table.is_some());
        assert_eq!(s.current_path.as_deref(), Some(f.path()));
    }

    #[test]
    fn delete_selected_clears_selection_and_refilters() {
        let mut s = session_with("a,b\n1,2\n3,4");
        s.selected_row = Some(0);
        s.delete_selected();
        let t = s.table.as_ref().unwrap();
        assert_eq!(t.row_count(), 1);
        assert_eq!(t.rows[0], vec!["3".to_string(), "4".to_string()]);
        assert_eq!(s.selected_row, None);
        assert_eq!(s.visible_rows, vec![0]);
    }

    #[test]
    fn commit_edit_writes_through_to_the_table() {
        let mut s = session_with("a,b\n1,2");
        s.edit = Some(CellEdit {
            row: 0,
            col: 1,
            text: "99".into(),
        });
        s.commit_edit();
        assert_eq!(s.table.as_ref().unwrap().rows[0][1], "99");
        assert!(s.edit.is_none());
    }

    #[test]
    fn save_without_a_path_defers_to_the_caller() {
        let mut s = session_with("a,b\n1,2");
        assert!(!s.save());
    }

    #[test]
    fn export_writes_the_filtered_view() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("export.csv");
        let mut s = session_with("a,b\nfoo,1\nbar,2");
        s.search_query = "foo".into();
        s.refilter();
        s.export(&path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\nfoo,1\n");
        // Exporting never retargets the session.
        assert_eq!(s.current_path, None);
    }

    #[test]
    fn add_row_selects_the_new_blank_row() {
        let mut s = session_with("a,b\n1,2");
        s.add_row();
        assert_eq!(s.selected_row, Some(1));
        assert_eq!(s.table.as_ref().unwrap().rows[1], vec!["", ""]);
    }
}
