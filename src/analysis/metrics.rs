use crate::data::model::{METRIC_COUNT, Metric, PlayerRecord};

// ---------------------------------------------------------------------------
// MetricVector – ten indices, one slot per Metric
// ---------------------------------------------------------------------------

/// Ordered performance indices; `None` marks a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricVector {
    values: [Option<f64>; METRIC_COUNT],
}

impl MetricVector {
    pub fn new(values: [Option<f64>; METRIC_COUNT]) -> Self {
        Self { values }
    }

    pub fn from_record(record: &PlayerRecord) -> Self {
        Self::new(record.metrics)
    }

    /// Elementwise arithmetic mean over `group`.
    ///
    /// Missing values are excluded from both the sum and the count of their
    /// metric; a metric missing in every row stays missing.
    pub fn mean_of(group: &[&PlayerRecord]) -> Self {
        let mut values = [None; METRIC_COUNT];
        for metric in Metric::ALL {
            let (sum, count) = group
                .iter()
                .filter_map(|p| p.metric(metric))
                .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
            if count > 0 {
                values[metric.index()] = Some(sum / count as f64);
            }
        }
        Self { values }
    }

    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values[metric.index()]
    }

    /// `(metric, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, Option<f64>)> + '_ {
        Metric::ALL.iter().map(move |&m| (m, self.get(m)))
    }

    /// Largest present value.
    pub fn max_value(&self) -> Option<f64> {
        self.values.iter().flatten().copied().reduce(f64::max)
    }

    pub fn map_present(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            values: self.values.map(|v| v.map(&f)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{position_group, select_player};
    use crate::data::fixtures::{HEADER, table_from, three_players};

    const EPS: f64 = 1e-9;

    #[test]
    fn extracts_player_vector_in_order() {
        let table = three_players();
        let v = MetricVector::from_record(select_player(&table, "Fran").unwrap());
        let raw: Vec<f64> = v.iter().map(|(_, x)| x.unwrap()).collect();
        assert_eq!(raw, vec![4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 40.0]);
    }

    #[test]
    fn forward_mean_matches_hand_computed_values() {
        let table = three_players();
        let group = position_group(&table, "FW");
        let mean = MetricVector::mean_of(&group);
        let expected = [3.0, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0, 17.0, 19.0, 30.0];
        for ((_, got), want) in mean.iter().zip(expected) {
            assert!((got.unwrap() - want).abs() < EPS);
        }
    }

    #[test]
    fn single_row_group_mean_equals_player() {
        let table = three_players();
        let group = position_group(&table, "GK");
        let mean = MetricVector::mean_of(&group);
        assert_eq!(mean, MetricVector::from_record(group[0]));
    }

    #[test]
    fn missing_values_are_excluded_not_zeroed() {
        let data = format!(
            "{HEADER}\n\
A,MF,20,X,,,,1,10,,1,1,1,1,1,1,1,1\n\
B,MF,21,X,,,,1,20,,1,1,1,1,1,1,1,1\n\
C,MF,22,X,,,,1,,,1,1,1,1,1,1,1,1\n"
        );
        let table = table_from(&data);
        let mean = MetricVector::mean_of(&position_group(&table, "MF"));
        assert!((mean.get(Metric::Matches).unwrap() - 15.0).abs() < EPS);
        assert_eq!(mean.get(Metric::Conditional), None);
    }

    #[test]
    fn empty_group_has_no_values() {
        let mean = MetricVector::mean_of(&[]);
        assert_eq!(mean.max_value(), None);
    }
}
