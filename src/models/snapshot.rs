use crate::domain::Bar;
use crate::models::alert::Alert;
use crate::models::pair_metrics::PairMetrics;
use crate::models::pair_series::PairSeries;

/// THE FRONT BUFFER.
///
/// One consistent view of all five data sources from a single poll cycle.
/// The UI reads this every frame; the engine only ever replaces it wholesale
/// with the result of a complete batch, so an observer can never see bars
/// from one cycle next to metrics from another. The one additive exception
/// is the optimistic alert append after a successful creation.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub bars_y: Vec<Bar>,
    pub bars_x: Vec<Bar>,
    pub pair: PairMetrics,
    pub series: PairSeries,
    pub alerts: Vec<Alert>,
}

impl DashboardSnapshot {
    /// True until the first successful poll cycle lands.
    pub fn is_empty(&self) -> bool {
        self.bars_y.is_empty() && self.bars_x.is_empty() && self.series.ts.is_empty()
    }
}
