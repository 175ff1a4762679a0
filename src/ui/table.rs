use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::analysis::comparison::PlayerComparison;
use crate::analysis::metrics::MetricVector;
use crate::data::model::Metric;

// ---------------------------------------------------------------------------
// Numeric comparison table
// ---------------------------------------------------------------------------

/// Raw player values against the positional average, two decimals.
pub fn comparison_table(ui: &mut Ui, cmp: &PlayerComparison) {
    let rows: [(&str, &MetricVector); 2] = [
        (cmp.player.name.as_str(), &cmp.player_metrics),
        ("Average", &cmp.average_metrics),
    ];

    egui::ScrollArea::horizontal()
        .id_salt("comparison_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .column(Column::auto().at_least(120.0))
                .columns(Column::auto().at_least(80.0), Metric::ALL.len())
                .header(22.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("");
                    });
                    for metric in Metric::ALL {
                        header.col(|ui| {
                            ui.strong(metric.label());
                        });
                    }
                })
                .body(|mut body| {
                    for (label, values) in rows {
                        body.row(20.0, |mut row| {
                            row.col(|ui| {
                                ui.label(RichText::new(label).strong());
                            });
                            for (_, value) in values.iter() {
                                row.col(|ui| {
                                    ui.monospace(format_cell(value));
                                });
                            }
                        });
                    }
                });
        });
}

pub fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "–".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Index legend
// ---------------------------------------------------------------------------

/// Static description of every index.
pub fn index_legend(ui: &mut Ui) {
    ui.heading("Index descriptions");
    for metric in Metric::ALL {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.label("•");
            ui.strong(format!("{}:", metric.label()));
            ui.label(metric.description());
        });
    }
}
