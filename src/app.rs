use eframe::egui::{self, Ui};

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{charts, panels, profile, radar, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PitchsideApp {
    pub state: AppState,
}

impl PitchsideApp {
    /// Build the app and read the configured table.
    pub fn new(config: &DashboardConfig) -> Self {
        let mut state = AppState::new(config);
        state.load(&config.data_path);
        Self { state }
    }
}

impl eframe::App for PitchsideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: profile and overview ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| dashboard(ui, &self.state));
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    ui.heading("Football Player Analysis");
    ui.label(
        "Compare a player's performance against the average of their position \
         and explore the whole dataset.",
    );
    ui.separator();

    if state.table.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a player table to begin  (File → Open…)");
        });
        return;
    }

    ui.heading("Performance profile by position");
    match &state.comparison {
        Some(Ok(cmp)) => {
            ui.columns(2, |cols| {
                profile::player_card(&mut cols[0], &cmp.player);
                cols[1].label(
                    egui::RichText::new(format!(
                        "Player vs {} average ({} players)",
                        cmp.position, cmp.group_size
                    ))
                    .strong(),
                );
                radar::radar_chart(&mut cols[1], cmp);
            });

            ui.add_space(8.0);
            ui.heading("Numeric index comparison");
            table::comparison_table(ui, cmp);
        }
        Some(Err(e)) => {
            ui.label(egui::RichText::new(format!("No data for this selection: {e}")).italics());
        }
        None => {
            ui.label(egui::RichText::new("No data for this selection.").italics());
        }
    }

    ui.add_space(8.0);
    table::index_legend(ui);

    if let Some(overview) = &state.overview {
        ui.add_space(12.0);
        ui.separator();
        ui.heading("Overview");
        charts::age_histogram(ui, &overview.ages);
        ui.add_space(8.0);
        charts::team_value_chart(ui, &overview.team_values);
    }
}
