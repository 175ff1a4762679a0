use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

pub const PLAYER_COLOR: Color32 = Color32::from_rgb(0, 128, 0);
pub const AVERAGE_COLOR: Color32 = Color32::from_rgb(0, 191, 255);
pub const HISTOGRAM_COLOR: Color32 = Color32::from_rgb(135, 206, 235);
pub const DENSITY_COLOR: Color32 = Color32::from_rgb(70, 130, 180);

/// Same hue as `color` with the given opacity.
pub fn translucent(color: Color32, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

// ---------------------------------------------------------------------------
// Viridis palette for categorical bars
// ---------------------------------------------------------------------------

const VIRIDIS_STOPS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// `n` colours sampled evenly along the viridis ramp, dark to bright.
pub fn viridis(n: usize) -> Vec<Color32> {
    match n {
        0 => Vec::new(),
        1 => vec![sample_viridis(0.5)],
        _ => (0..n)
            .map(|i| sample_viridis(i as f32 / (n - 1) as f32))
            .collect(),
    }
}

/// Interpolate in linear RGB between the two stops surrounding `t`.
fn sample_viridis(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let segments = (VIRIDIS_STOPS.len() - 1) as f32;
    let pos = t * segments;
    let lo = (pos.floor() as usize).min(VIRIDIS_STOPS.len() - 2);
    let frac = pos - lo as f32;

    let to_linear = |(r, g, b): (u8, u8, u8)| -> LinSrgb {
        Srgb::new(r, g, b).into_format::<f32>().into_linear()
    };
    let mixed = to_linear(VIRIDIS_STOPS[lo]).mix(to_linear(VIRIDIS_STOPS[lo + 1]), frac);
    let rgb: Srgb<u8> = Srgb::from_linear(mixed);
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}
