/// Derived data recomputed on every selection change: metric vectors,
/// normalization, radar geometry and the whole-table aggregates.

pub mod aggregate;
pub mod comparison;
pub mod metrics;
pub mod normalize;
pub mod radar;
