use eframe::egui::{self, Key, Sense, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::{AppState, CellEdit};

// ---------------------------------------------------------------------------
// Central panel – the editable grid
// ---------------------------------------------------------------------------

/// Render the table as a grid. The leading column shows the source row
/// number and selects the row; clicking a cell opens an inline text edit
/// whose draft is committed through the model on Enter or focus loss, so
/// the widget never becomes the data store.
pub fn csv_grid(ui: &mut Ui, state: &mut AppState) {
    if state.table.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a CSV file to start  (File → Open…)");
        });
        return;
    }

    // The grid body borrows the table, so UI events are collected here
    // and applied to the state afterwards.
    let mut edit = state.edit.take();
    let mut select: Option<usize> = None;
    let mut begin_edit: Option<CellEdit> = None;
    let mut commit = false;
    let mut cancel = false;

    {
        let table = state.table.as_ref().unwrap();
        let n_cols = table.column_count();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .column(Column::auto().at_least(36.0))
            .columns(Column::remainder().at_least(80.0).clip(true), n_cols)
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                for name in &table.columns {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(22.0, state.visible_rows.len(), |mut row| {
                    let src = state.visible_rows[row.index()];
                    let is_selected = state.selected_row == Some(src);

                    row.col(|ui| {
                        if ui
                            .selectable_label(is_selected, (src + 1).to_string())
                            .clicked()
                        {
                            select = Some(src);
                        }
                    });

                    for (col, cell) in table.rows[src].iter().enumerate() {
                        row.col(|ui| {
                            let editing_here = edit
                                .as_ref()
                                .is_some_and(|e| e.row == src && e.col == col);

                            if editing_here {
                                let draft = edit.as_mut().unwrap();
                                let response = ui.add(
                                    TextEdit::singleline(&mut draft.text)
                                        .desired_width(f32::INFINITY),
                                );
                                if ui.input(|i| i.key_pressed(Key::Escape)) {
                                    cancel = true;
                                } else if response.lost_focus() {
                                    commit = true;
                                } else {
                                    response.request_focus();
                                }
                            } else {
                                let label = egui::Label::new(cell)
                                    .truncate()
                                    .sense(Sense::click());
                                if ui.add(label).clicked() {
                                    begin_edit = Some(CellEdit {
                                        row: src,
                                        col,
                                        text: cell.clone(),
                                    });
                                    select = Some(src);
                                }
                            }
                        });
                    }
                });
            });
    }

    state.edit = edit;
    if cancel {
        state.edit = None;
    } else if commit {
        state.commit_edit();
    }
    if let Some(new_edit) = begin_edit {
        // Clicking another cell commits any draft still pending.
        state.commit_edit();
        state.edit = Some(new_edit);
    }
    if let Some(row) = select {
        state.selected_row = Some(row);
    }
}
