use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::analysis::comparison::PlayerComparison;
use crate::analysis::radar::{RadarTrace, polar_to_cartesian, radar_angles};
use crate::color::{AVERAGE_COLOR, PLAYER_COLOR, translucent};
use crate::data::model::Metric;

const RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
const LABEL_RADIUS: f64 = 1.18;
const GRID_COLOR: Color32 = Color32::from_gray(120);

// ---------------------------------------------------------------------------
// Radar chart (player vs positional average)
// ---------------------------------------------------------------------------

pub fn radar_chart(ui: &mut Ui, cmp: &PlayerComparison) {
    ui.label(RichText::new("Performance indices").strong());
    match cmp.normalized.scale {
        Some(scale) => ui.small(format!("Scaled by the shared maximum ({scale:.2})")),
        None => ui.small("All indices are zero; nothing to scale"),
    };

    let angles = radar_angles(Metric::ALL.len());
    let size = ui.available_width().min(460.0);

    Plot::new("radar_plot")
        .width(size)
        .height(size)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.45)
        .include_x(1.45)
        .include_y(-1.3)
        .include_y(1.3)
        .legend(Legend::default().position(Corner::RightTop))
        .show(ui, |plot_ui| {
            let grid = Stroke::new(0.5, GRID_COLOR);

            for r in RINGS {
                let ring: PlotPoints = (0..=72)
                    .map(|i| polar_to_cartesian(r, i as f64 / 72.0 * std::f64::consts::TAU))
                    .collect();
                plot_ui.line(Line::new(ring).stroke(grid));
            }

            for (metric, &theta) in Metric::ALL.iter().zip(&angles) {
                let spoke: PlotPoints = vec![[0.0, 0.0], polar_to_cartesian(1.0, theta)].into();
                plot_ui.line(Line::new(spoke).stroke(grid));

                let [x, y] = polar_to_cartesian(LABEL_RADIUS, theta);
                plot_ui.text(
                    Text::new(PlotPoint::new(x, y), RichText::new(metric.label()).size(11.0))
                        .anchor(label_anchor(theta)),
                );
            }

            draw_trace(plot_ui, &cmp.player_trace, "Player", PLAYER_COLOR, 0.3);
            draw_trace(plot_ui, &cmp.average_trace, "Average", AVERAGE_COLOR, 0.2);
        });
}

fn draw_trace(
    plot_ui: &mut egui_plot::PlotUi,
    trace: &RadarTrace,
    name: &str,
    color: Color32,
    fill_alpha: f32,
) {
    let points = trace.points();
    plot_ui.polygon(
        Polygon::new(PlotPoints::from(points.clone()))
            .name(name)
            .fill_color(translucent(color, fill_alpha))
            .stroke(Stroke::new(0.0, color)),
    );
    plot_ui.line(
        Line::new(PlotPoints::from(points))
            .name(name)
            .color(color)
            .width(2.0),
    );
}

/// Anchor axis labels away from the centre so they never overlap the plot.
fn label_anchor(theta: f64) -> Align2 {
    let (x, y) = (theta.cos(), theta.sin());
    let h = if x > 0.2 {
        0
    } else if x < -0.2 {
        2
    } else {
        1
    };
    let v = if y > 0.2 {
        2
    } else if y < -0.2 {
        0
    } else {
        1
    };
    match (h, v) {
        (0, 0) => Align2::LEFT_TOP,
        (0, 1) => Align2::LEFT_CENTER,
        (0, _) => Align2::LEFT_BOTTOM,
        (1, 0) => Align2::CENTER_TOP,
        (1, 1) => Align2::CENTER_CENTER,
        (1, _) => Align2::CENTER_BOTTOM,
        (_, 0) => Align2::RIGHT_TOP,
        (_, 1) => Align2::RIGHT_CENTER,
        _ => Align2::RIGHT_BOTTOM,
    }
}
