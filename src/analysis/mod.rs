// Series reconciliation and presentation-prep calculations
// Pure functions: no I/O, no UI types beyond plain data

pub mod align;
pub mod derived;

pub use align::{AlignedPoint, align_normalized};
pub use derived::{finite_points, latest_price, pct_change};

/// Upper bound on chart rows, keeping per-frame plotting cost flat.
pub const MAX_CHART_POINTS: usize = 100;

/// The volume histogram shows a shorter tail than the line charts.
pub const MAX_VOLUME_BARS: usize = 50;
