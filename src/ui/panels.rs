use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – cascading filters
// ---------------------------------------------------------------------------

/// Render the left filter panel: position first, then a player of it.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.table.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ui.strong("Select position:");
    let mut position = state.selected_position.clone();
    egui::ComboBox::from_id_salt("position")
        .width(ui.available_width())
        .selected_text(position.as_deref().unwrap_or("–"))
        .show_ui(ui, |ui: &mut Ui| {
            for pos in &state.positions {
                ui.selectable_value(&mut position, Some(pos.clone()), pos);
            }
        });
    if position != state.selected_position {
        state.select_position(position);
    }

    ui.add_space(8.0);

    ui.strong("Select player:");
    let mut player = state.selected_player.clone();
    egui::ComboBox::from_id_salt("player")
        .width(ui.available_width())
        .selected_text(player.as_deref().unwrap_or("–"))
        .show_ui(ui, |ui: &mut Ui| {
            for name in &state.players {
                ui.selectable_value(&mut player, Some(name.clone()), name);
            }
        });
    if player != state.selected_player {
        if let Some(name) = player {
            state.select_player(name);
        }
    }

    ui.add_space(8.0);
    ui.separator();
    ui.label(format!("{} players in position", state.players.len()));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} players loaded from {}",
                table.len(),
                state.data_path.display()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open player table")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}
