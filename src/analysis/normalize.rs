use super::metrics::MetricVector;

/// Player and average vectors scaled by their shared maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPair {
    pub player: MetricVector,
    pub average: MetricVector,
    /// The divisor used, or `None` when the fallback applied.
    pub scale: Option<f64>,
}

/// Divide both vectors by `max(a ++ b)` so every value lies in `[0, 1]`.
///
/// When the maximum is not positive (all zero, all negative, or nothing
/// present) every present value maps to `0.0`. Negative values under a
/// positive maximum clamp to `0.0`. Missing values stay missing.
pub fn normalize(player: &MetricVector, average: &MetricVector) -> NormalizedPair {
    let max = match (player.max_value(), average.max_value()) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    };

    match max {
        Some(m) if m > 0.0 && m.is_finite() => NormalizedPair {
            player: player.map_present(|v| (v / m).clamp(0.0, 1.0)),
            average: average.map_present(|v| (v / m).clamp(0.0, 1.0)),
            scale: Some(m),
        },
        _ => {
            log::warn!("normalization denominator is not positive; plotting zeros");
            NormalizedPair {
                player: player.map_present(|_| 0.0),
                average: average.map_present(|_| 0.0),
                scale: None,
            }
        }
    }
}
