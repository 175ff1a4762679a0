use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints, uniform_grid_spacer};

use crate::analysis::aggregate::{AgeHistogram, TeamValue};
use crate::color::{DENSITY_COLOR, HISTOGRAM_COLOR, viridis};

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Age distribution
// ---------------------------------------------------------------------------

pub fn age_histogram(ui: &mut Ui, hist: &AgeHistogram) {
    ui.label(RichText::new("Age distribution").strong());
    if hist.bins.is_empty() {
        ui.label("No ages available.");
        return;
    }

    let bars: Vec<Bar> = hist
        .bins
        .iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width())
                .name(format!("{:.1}–{:.1}", bin.start, bin.end))
                .fill(HISTOGRAM_COLOR)
        })
        .collect();

    Plot::new("age_histogram")
        .height(CHART_HEIGHT)
        .x_axis_label("Age")
        .y_axis_label("Number of players")
        .allow_drag(false)
        .allow_scroll(false)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(HISTOGRAM_COLOR).name("Players"));
            if !hist.density.is_empty() {
                let curve: PlotPoints = hist.density.iter().copied().collect();
                plot_ui.line(Line::new(curve).color(DENSITY_COLOR).width(2.0).name("Density"));
            }
        });
}

// ---------------------------------------------------------------------------
// Mean market value per team
// ---------------------------------------------------------------------------

/// Horizontal bars, one per team, so every team name fits on its axis.
pub fn team_value_chart(ui: &mut Ui, teams: &[TeamValue]) {
    ui.label(RichText::new("Average market value by team").strong());
    if teams.is_empty() {
        ui.label("No teams available.");
        return;
    }

    let colors = viridis(teams.len());
    let bars: Vec<Bar> = teams
        .iter()
        .zip(colors)
        .enumerate()
        .filter_map(|(i, (team, color))| {
            let value = team.mean_market_value?;
            Some(
                Bar::new(i as f64, value)
                    .width(0.8)
                    .name(format!("{} ({} players)", team.team, team.players))
                    .fill(color),
            )
        })
        .collect();

    let names: Vec<String> = teams.iter().map(|t| t.team.clone()).collect();
    let height = (teams.len() as f32 * 22.0).clamp(CHART_HEIGHT, 1600.0);

    Plot::new("team_values")
        .height(height)
        .x_axis_label("Average value (M)")
        .y_axis_formatter(move |mark: GridMark, _range| team_label(&names, mark.value))
        .y_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .allow_drag(false)
        .allow_scroll(false)
        .include_x(0.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

/// Category name for an integer grid mark, empty between categories.
fn team_label(names: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    names.get(idx as usize).cloned().unwrap_or_default()
}
