use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::data::model::PlayerTable;

const DENSITY_POINTS: usize = 200;

// ---------------------------------------------------------------------------
// Age histogram with density curve
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgeHistogram {
    pub bins: Vec<HistogramBin>,
    /// Gaussian KDE scaled to counts, as `[age, count]` points.
    pub density: Vec<[f64; 2]>,
}

impl AgeHistogram {
    /// Equal-width bins over `[min, max]`; the last bin includes `max`.
    /// A constant column spans `[v - 0.5, v + 0.5]`.
    pub fn compute(ages: &[f64], bin_count: usize) -> Self {
        let bin_count = bin_count.max(1);
        let Some((min, max)) = min_max(ages) else {
            return Self::default();
        };
        let (lo, hi) = if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };
        let width = (hi - lo) / bin_count as f64;

        let mut counts = vec![0usize; bin_count];
        for &age in ages {
            let idx = (((age - lo) / width).floor() as usize).min(bin_count - 1);
            counts[idx] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                start: lo + i as f64 * width,
                end: lo + (i + 1) as f64 * width,
                count,
            })
            .collect();

        Self {
            bins,
            density: density_curve(ages, min, max, ages.len() as f64 * width),
        }
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Gaussian KDE with Scott's bandwidth, evaluated over `[min, max]` and
/// multiplied by `scale`. Empty for fewer than two samples or zero variance.
fn density_curve(samples: &[f64], min: f64, max: f64, scale: f64) -> Vec<[f64; 2]> {
    let n = samples.len();
    if n < 2 || min == max {
        return Vec::new();
    }
    let mean = samples.iter().sum::<f64>() / n as f64;
    let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let bandwidth = variance.sqrt() * (n as f64).powf(-0.2);
    if bandwidth <= 0.0 || !bandwidth.is_finite() {
        return Vec::new();
    }

    let norm = 1.0 / (n as f64 * bandwidth * (2.0 * PI).sqrt());
    let step = (max - min) / (DENSITY_POINTS - 1) as f64;
    (0..DENSITY_POINTS)
        .map(|i| {
            let x = min + i as f64 * step;
            let pdf: f64 = samples
                .iter()
                .map(|&s| (-0.5 * ((x - s) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            [x, pdf * scale]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Mean market value per team
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TeamValue {
    pub team: String,
    /// Mean over players with a market value; `None` if no player has one.
    pub mean_market_value: Option<f64>,
    pub players: usize,
}

/// Group by team in team-name order and average the market value.
/// Rows without a team are skipped.
pub fn team_market_values(table: &PlayerTable) -> Vec<TeamValue> {
    let mut groups: BTreeMap<&str, (f64, usize, usize)> = BTreeMap::new();
    for p in &table.players {
        let Some(team) = p.team.as_deref() else {
            continue;
        };
        let entry = groups.entry(team).or_default();
        entry.2 += 1;
        if let Some(v) = p.market_value {
            entry.0 += v;
            entry.1 += 1;
        }
    }

    groups
        .into_iter()
        .map(|(team, (sum, valued, players))| TeamValue {
            team: team.to_string(),
            mean_market_value: (valued > 0).then(|| sum / valued as f64),
            players,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Overview – both aggregates, computed once per table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Overview {
    pub ages: AgeHistogram,
    pub team_values: Vec<TeamValue>,
}

impl Overview {
    pub fn compute(table: &PlayerTable, age_bins: usize) -> Self {
        let ages: Vec<f64> = table.players.iter().filter_map(|p| p.age).collect();
        Self {
            ages: AgeHistogram::compute(&ages, age_bins),
            team_values: team_market_values(table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{HEADER, table_from, three_players};

    #[test]
    fn histogram_counts_every_age_once() {
        let ages = [18.0, 20.0, 20.0, 25.0, 30.0, 38.0];
        let hist = AgeHistogram::compute(&ages, 20);
        assert_eq!(hist.bins.len(), 20);
        assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), ages.len());
        assert_eq!(hist.bins[0].start, 18.0);
        assert!((hist.bins[19].end - 38.0).abs() < 1e-9);
        assert_eq!(hist.bins[19].count, 1);
        assert!((hist.bins[0].width() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn constant_ages_use_unit_range() {
        let hist = AgeHistogram::compute(&[25.0, 25.0, 25.0], 4);
        assert_eq!(hist.bins[0].start, 24.5);
        assert_eq!(hist.bins[3].end, 25.5);
        assert_eq!(hist.max_count(), 3);
        assert!(hist.density.is_empty());
    }

    #[test]
    fn density_curve_integrates_to_roughly_the_sample_count() {
        let ages: Vec<f64> = (0..200).map(|i| 18.0 + (i % 20) as f64).collect();
        let hist = AgeHistogram::compute(&ages, 20);
        assert_eq!(hist.density.len(), DENSITY_POINTS);
        let width = hist.bins[0].width();
        let area: f64 = hist
            .density
            .windows(2)
            .map(|w| (w[1][0] - w[0][0]) * (w[0][1] + w[1][1]) / 2.0)
            .sum::<f64>()
            / width;
        // Evaluated on [min, max] only, so some tail mass is cut off.
        assert!(area > 150.0 && area <= 200.0, "area = {area}");
    }

    #[test]
    fn empty_ages_give_empty_histogram() {
        let hist = AgeHistogram::compute(&[], 20);
        assert!(hist.bins.is_empty());
        assert!(hist.density.is_empty());
    }

    #[test]
    fn team_means_in_name_order() {
        let values = team_market_values(&three_players());
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].team, "Blues");
        assert_eq!(values[0].mean_market_value, Some(4.0));
        assert_eq!(values[1].team, "Reds");
        assert_eq!(values[1].mean_market_value, Some(15.0));
        assert_eq!(values[1].players, 2);
    }

    #[test]
    fn missing_market_values_are_excluded() {
        let data = format!(
            "{HEADER}\n\
A,MF,20,Zeta,,,,,1,1,1,1,1,1,1,1,1,1\n\
B,MF,21,Zeta,,,,6,1,1,1,1,1,1,1,1,1,1\n\
C,MF,22,Alpha,,,,,1,1,1,1,1,1,1,1,1,1\n\
D,MF,23,,,,,9,1,1,1,1,1,1,1,1,1,1\n"
        );
        let values = team_market_values(&table_from(&data));
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].team, "Alpha");
        assert_eq!(values[0].mean_market_value, None);
        assert_eq!(values[1].mean_market_value, Some(6.0));
    }

    #[test]
    fn overview_uses_whole_table() {
        let overview = Overview::compute(&three_players(), 5);
        assert_eq!(overview.ages.bins.iter().map(|b| b.count).sum::<usize>(), 3);
        assert_eq!(overview.team_values.len(), 2);
    }
}
