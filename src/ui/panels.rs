use eframe::egui::{self, Color32, RichText, TextEdit, Ui};

use crate::state::{AppState, NoticeKind};

// ---------------------------------------------------------------------------
// Top bar – menu, toolbar, search box, status line
// ---------------------------------------------------------------------------

/// Render the top panel: the File menu, the row toolbar, the search box
/// and the status line. All rfd dialog plumbing lives in this module; the
/// state object never opens a dialog itself.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_dialog(state);
                ui.close_menu();
            }

            let has_table = state.table.is_some();
            if ui
                .add_enabled(has_table, egui::Button::new("Save"))
                .clicked()
            {
                save(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(has_table, egui::Button::new("Save As…"))
                .clicked()
            {
                save_as_dialog(state);
                ui.close_menu();
            }

            ui.separator();

            if ui.button("Import…").clicked() {
                import_dialog(state);
                ui.close_menu();
            }
            let has_rows = state.table.as_ref().is_some_and(|t| !t.is_empty());
            if ui
                .add_enabled(has_rows, egui::Button::new("Export…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} rows, {} visible",
                table.row_count(),
                state.visible_rows.len()
            ));
            ui.separator();
        }

        if let Some(notice) = &state.notice {
            let color = match notice.kind {
                NoticeKind::Info => Color32::LIGHT_GREEN,
                NoticeKind::Error => Color32::RED,
            };
            ui.label(RichText::new(&notice.text).color(color));
        }
    });

    // ---- Toolbar: search + row actions ----
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Search:");
        let response = ui.add(
            TextEdit::singleline(&mut state.search_query).desired_width(220.0),
        );
        if response.changed() {
            state.refilter();
        }
        if ui.button("✕").on_hover_text("Clear search").clicked() {
            state.clear_search();
        }

        ui.separator();

        let has_table = state.table.is_some();
        if ui
            .add_enabled(has_table, egui::Button::new("Add Row"))
            .clicked()
        {
            state.add_row();
        }
        if ui
            .add_enabled(state.selected_row.is_some(), egui::Button::new("Delete Row"))
            .clicked()
        {
            confirm_and_delete(state);
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

fn csv_dialog(title: &str) -> rfd::FileDialog {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("CSV files", &["csv"])
}

pub fn open_dialog(state: &mut AppState) {
    if let Some(path) = csv_dialog("Open CSV file").pick_file() {
        state.open(&path);
    }
}

pub fn import_dialog(state: &mut AppState) {
    if let Some(path) = csv_dialog("Import rows from CSV").pick_file() {
        state.merge(&path);
    }
}

/// Save to the current file, falling back to a save-as prompt when the
/// session has no file yet.
pub fn save(state: &mut AppState) {
    if !state.save() {
        save_as_dialog(state);
    }
}

pub fn save_as_dialog(state: &mut AppState) {
    if let Some(path) = csv_dialog("Save CSV file")
        .set_file_name("data.csv")
        .save_file()
    {
        state.save_as(&path);
    }
}

pub fn export_dialog(state: &mut AppState) {
    if let Some(path) = csv_dialog("Export to CSV")
        .set_file_name("export.csv")
        .save_file()
    {
        state.export(&path);
    }
}

// ---------------------------------------------------------------------------
// Delete confirmation
// ---------------------------------------------------------------------------

/// Ask before deleting; deletion at the model level is irreversible.
fn confirm_and_delete(state: &mut AppState) {
    let answer = rfd::MessageDialog::new()
        .set_title("Confirm deletion")
        .set_description("Delete the selected row?")
        .set_buttons(rfd::MessageButtons::YesNo)
        .set_level(rfd::MessageLevel::Warning)
        .show();

    if matches!(answer, rfd::MessageDialogResult::Yes) {
        state.delete_selected();
    }
}
