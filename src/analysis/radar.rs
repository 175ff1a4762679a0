use std::f64::consts::TAU;

use super::metrics::MetricVector;

/// `n + 1` angles evenly spaced over `[0, 2π)`, the first repeated at the end
/// to close the polygon.
pub fn radar_angles(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let mut angles: Vec<f64> = (0..n).map(|k| k as f64 / n as f64 * TAU).collect();
    angles.push(angles[0]);
    angles
}

// ---------------------------------------------------------------------------
// RadarTrace – one closed polygon on polar axes
// ---------------------------------------------------------------------------

/// A closed polygon in polar coordinates: `angles[i]` pairs with `radii[i]`
/// and the last element of each repeats the first.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarTrace {
    pub angles: Vec<f64>,
    pub radii: Vec<f64>,
}

impl RadarTrace {
    /// Build from a normalized vector; missing values plot at the centre.
    pub fn from_vector(vector: &MetricVector) -> Self {
        let mut radii: Vec<f64> = vector.iter().map(|(_, v)| v.unwrap_or(0.0)).collect();
        let angles = radar_angles(radii.len());
        if let Some(&first) = radii.first() {
            radii.push(first);
        }
        Self { angles, radii }
    }

    /// Cartesian `[x, y]` points, counter-clockwise from the positive x axis.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.angles
            .iter()
            .zip(&self.radii)
            .map(|(&theta, &r)| polar_to_cartesian(r, theta))
            .collect()
    }
}

pub fn polar_to_cartesian(r: f64, theta: f64) -> [f64; 2] {
    [r * theta.cos(), r * theta.sin()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::METRIC_COUNT;

    #[test]
    fn angles_close_the_polygon() {
        let angles = radar_angles(10);
        assert_eq!(angles.len(), 11);
        assert_eq!(angles[0], angles[10]);
        assert!((angles[5] - std::f64::consts::PI).abs() < 1e-12);
        assert!(angles[..10].windows(2).all(|w| w[1] > w[0]));
        assert!(angles[9] < TAU);
    }

    #[test]
    fn trace_is_closed_and_aligned() {
        let mut raw = [Some(0.5); METRIC_COUNT];
        raw[0] = Some(1.0);
        raw[4] = None;
        let trace = RadarTrace::from_vector(&MetricVector::new(raw));
        assert_eq!(trace.radii.len(), METRIC_COUNT + 1);
        assert_eq!(trace.angles.len(), trace.radii.len());
        assert_eq!(trace.radii[0], trace.radii[METRIC_COUNT]);
        assert_eq!(trace.radii[4], 0.0);

        let pts = trace.points();
        assert_eq!(pts.first(), pts.last());
        assert!((pts[0][0] - 1.0).abs() < 1e-12);
        assert!(pts[0][1].abs() < 1e-12);
    }

    #[test]
    fn zero_axes_yield_empty_angles() {
        assert!(radar_angles(0).is_empty());
    }
}
