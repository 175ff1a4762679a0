use eframe::egui::{self, Ui};

use crate::data::model::PlayerRecord;

const PHOTO_WIDTH: f32 = 150.0;
const NOT_AVAILABLE: &str = "N/D";

/// Photo and attribute list of the selected player.
pub fn player_card(ui: &mut Ui, player: &PlayerRecord) {
    ui.heading(&player.name);
    ui.add_space(4.0);

    if let Some(uri) = player.photo.as_deref().map(photo_uri) {
        ui.add(
            egui::Image::from_uri(uri)
                .max_width(PHOTO_WIDTH)
                .show_loading_spinner(true),
        );
        ui.add_space(4.0);
    }

    let attributes = [
        ("Nationality", text_or_na(&player.nationality)),
        ("Age", number_or_na(player.age, 0)),
        ("Team", text_or_na(&player.team)),
        ("Position", text_or_na(&player.position)),
        ("Profile", text_or_na(&player.profile)),
        (
            "Market value",
            match player.market_value {
                Some(v) => format!("{v} M"),
                None => NOT_AVAILABLE.to_string(),
            },
        ),
    ];
    egui::Grid::new("player_card")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            for (label, value) in attributes {
                ui.strong(label);
                ui.label(value);
                ui.end_row();
            }
        });
}

/// URLs pass through; anything else is treated as a local file path.
pub fn photo_uri(photo: &str) -> String {
    let photo = photo.trim();
    if photo.contains("://") {
        photo.to_string()
    } else {
        format!("file://{photo}")
    }
}

fn text_or_na(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn number_or_na(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_uri_keeps_urls_and_prefixes_paths() {
        assert_eq!(photo_uri("https://img/x.png"), "https://img/x.png");
        assert_eq!(photo_uri(" photos/x.jpg "), "file://photos/x.jpg");
    }

    #[test]
    fn missing_values_render_as_not_available() {
        assert_eq!(text_or_na(&None), "N/D");
        assert_eq!(number_or_na(Some(24.0), 0), "24");
        assert_eq!(number_or_na(None, 0), "N/D");
    }
}
