use crate::analysis::MAX_CHART_POINTS;
use crate::domain::Bar;

/// Most recent traded price, or 0.0 before any data has arrived.
pub fn latest_price(bars: &[Bar]) -> f64 {
    bars.last().map(|bar| bar.price).unwrap_or(0.0)
}

/// Percentage change between the final two observations. Sequences shorter
/// than two bars have no period-over-period move and report 0.0, which the
/// indicator renders as a flat "increase".
pub fn pct_change(bars: &[Bar]) -> f64 {
    match bars {
        [.., prev, last] => (last.price - prev.price) / prev.price * 100.0,
        _ => 0.0,
    }
}

/// Pair up a timestamp column with a value column, dropping every index whose
/// sample is absent or non-finite, then keep the most recent
/// [`MAX_CHART_POINTS`] entries. Pairing is positional, so a surviving value
/// always keeps its own timestamp; each chart filters independently.
pub fn finite_points<'a>(ts: &'a [String], values: &[Option<f64>]) -> Vec<(&'a str, f64)> {
    let mut points: Vec<(&str, f64)> = ts
        .iter()
        .zip(values)
        .filter_map(|(t, v)| v.filter(|v| v.is_finite()).map(|v| (t.as_str(), v)))
        .collect();

    let overflow = points.len().saturating_sub(MAX_CHART_POINTS);
    if overflow > 0 {
        points.drain(..overflow);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(ts: &str, price: f64) -> Bar {
        Bar::new(ts, price, 0.0)
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn short_sequences_report_zero_change() {
        assert_eq!(pct_change(&[]), 0.0);
        assert_eq!(pct_change(&[bar("t1", 42.0)]), 0.0);
    }

    #[test]
    fn change_is_relative_to_the_previous_bar() {
        let bars = vec![bar("t1", 100.0), bar("t2", 200.0), bar("t3", 210.0)];
        assert!(approx_eq(pct_change(&bars), 5.0));

        let falling = vec![bar("t1", 200.0), bar("t2", 150.0)];
        assert!(approx_eq(pct_change(&falling), -25.0));
    }

    #[test]
    fn latest_price_is_zero_for_empty_sequences() {
        assert_eq!(latest_price(&[]), 0.0);
        assert_eq!(latest_price(&[bar("t1", 99.5)]), 99.5);
    }

    #[test]
    fn filter_removes_all_and_only_non_finite_samples() {
        let ts: Vec<String> = ["t1", "t2", "t3", "t4", "t5"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let values = vec![
            Some(1.0),
            None,
            Some(f64::NAN),
            Some(f64::INFINITY),
            Some(-2.0),
        ];

        let points = finite_points(&ts, &values);

        assert_eq!(points, vec![("t1", 1.0), ("t5", -2.0)]);
    }

    #[test]
    fn filter_keeps_only_the_latest_hundred() {
        let ts: Vec<String> = (0..150).map(|i| format!("t{i:03}")).collect();
        let values: Vec<Option<f64>> = (0..150).map(|i| Some(i as f64)).collect();

        let points = finite_points(&ts, &values);

        assert_eq!(points.len(), MAX_CHART_POINTS);
        assert_eq!(points.first().unwrap().0, "t050");
        assert_eq!(points.last().unwrap().0, "t149");
    }
}
