use serde::{Deserialize, Serialize};

/// Derived statistics for the selected pair and window, computed entirely by
/// the backend and consumed here as an opaque payload. Every field is
/// absent-tolerant: a half-warm backend (e.g. still accumulating its rolling
/// window) sends a partial object and the cards render placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairMetrics {
    pub hedge_ratio: Option<f64>,
    pub latest_spread: Option<f64>,
    pub spread_zscore: Option<f64>,
    pub rolling_correlation: Option<f64>,
    pub adf_test: Option<AdfTest>,
    pub decision: Option<TradeDecision>,
}

/// Cointegration (ADF) test result on the spread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdfTest {
    pub p_value: Option<f64>,
    pub stationary: Option<bool>,
}

/// The backend's trading decision for the pair, rendered verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeDecision {
    pub market_bias: String,
    pub trade_signal: String,
    pub confidence: Option<f64>,
    pub reasons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_deserializes_to_all_absent() {
        let metrics: PairMetrics = serde_json::from_str("{}").unwrap();
        assert_eq!(metrics, PairMetrics::default());
        assert!(metrics.spread_zscore.is_none());
        assert!(metrics.decision.is_none());
    }

    #[test]
    fn partial_payload_keeps_present_fields() {
        let metrics: PairMetrics = serde_json::from_str(
            r#"{"spread_zscore": 2.5, "adf_test": {"p_value": 0.03}}"#,
        )
        .unwrap();
        assert_eq!(metrics.spread_zscore, Some(2.5));
        let adf = metrics.adf_test.unwrap();
        assert_eq!(adf.p_value, Some(0.03));
        assert_eq!(adf.stationary, None);
    }

    #[test]
    fn decision_tolerates_missing_reasons() {
        let metrics: PairMetrics = serde_json::from_str(
            r#"{"decision": {"market_bias": "Bullish", "trade_signal": "BUY"}}"#,
        )
        .unwrap();
        let decision = metrics.decision.unwrap();
        assert_eq!(decision.market_bias, "Bullish");
        assert!(decision.reasons.is_empty());
        assert!(decision.confidence.is_none());
    }
}
