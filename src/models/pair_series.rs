use serde::{Deserialize, Serialize};

/// Spread / z-score history for the pair: three parallel sequences indexed by
/// position. The backend emits `null` where a sample could not be computed,
/// so the value columns decode to `Option<f64>`; non-finite decoded values are
/// treated the same as absent when preparing chart data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairSeries {
    pub ts: Vec<String>,
    pub spread: Vec<Option<f64>>,
    pub zscore: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_samples_decode_as_absent() {
        let series: PairSeries = serde_json::from_str(
            r#"{"ts": ["t1", "t2"], "spread": [1.0, null], "zscore": [null, -0.5]}"#,
        )
        .unwrap();
        assert_eq!(series.spread, vec![Some(1.0), None]);
        assert_eq!(series.zscore, vec![None, Some(-0.5)]);
    }

    #[test]
    fn empty_object_is_the_empty_series() {
        let series: PairSeries = serde_json::from_str("{}").unwrap();
        assert!(series.ts.is_empty());
        assert!(series.spread.is_empty());
    }
}
