use std::collections::HashMap;

use crate::analysis::MAX_CHART_POINTS;
use crate::domain::Bar;

/// One row of the comparison chart: both legs rebased to 100 at their own
/// first observation, sharing one exact timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPoint {
    pub ts: String,
    pub y: f64,
    pub x: f64,
}

/// Merge two independently-sampled bar sequences onto a common timestamp
/// axis for visual comparison.
///
/// Each leg is normalized to a base-100 index against its own first price,
/// and a row is emitted only where both legs have a sample at the exact same
/// timestamp; missing timestamps are dropped, never interpolated. The
/// result keeps the Y leg's chronological order and is truncated to the most
/// recent [`MAX_CHART_POINTS`] rows to bound rendering cost.
///
/// Precondition: first prices are positive (backend contract), so the
/// rebasing is well defined. A zero first price is out of the input domain
/// and is not guarded here.
pub fn align_normalized(bars_y: &[Bar], bars_x: &[Bar]) -> Vec<AlignedPoint> {
    let (Some(first_y), Some(first_x)) = (bars_y.first(), bars_x.first()) else {
        return Vec::new();
    };
    let base_y = first_y.price;
    let base_x = first_x.price;

    let x_by_ts: HashMap<&str, f64> = bars_x
        .iter()
        .map(|bar| (bar.ts.as_str(), bar.price / base_x * 100.0))
        .collect();

    let mut rows: Vec<AlignedPoint> = bars_y
        .iter()
        .filter_map(|bar| {
            x_by_ts.get(bar.ts.as_str()).map(|&x| AlignedPoint {
                ts: bar.ts.clone(),
                y: bar.price / base_y * 100.0,
                x,
            })
        })
        .collect();

    let overflow = rows.len().saturating_sub(MAX_CHART_POINTS);
    if overflow > 0 {
        rows.drain(..overflow);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(ts: impl Into<String>, price: f64) -> Bar {
        Bar::new(ts, price, 0.0)
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn either_input_empty_yields_empty_output() {
        let some = vec![bar("t1", 100.0)];
        assert!(align_normalized(&[], &some).is_empty());
        assert!(align_normalized(&some, &[]).is_empty());
        assert!(align_normalized(&[], &[]).is_empty());
    }

    #[test]
    fn both_legs_rebase_to_their_own_first_price() {
        let rows = align_normalized(&[bar("t1", 100.0)], &[bar("t1", 50.0)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ts, "t1");
        assert!(approx_eq(rows[0].y, 100.0));
        assert!(approx_eq(rows[0].x, 100.0));
    }

    #[test]
    fn rows_require_an_exact_timestamp_match_on_both_legs() {
        let ys = vec![bar("t1", 100.0), bar("t2", 110.0), bar("t4", 120.0)];
        let xs = vec![bar("t1", 50.0), bar("t3", 55.0), bar("t4", 60.0)];

        let rows = align_normalized(&ys, &xs);

        // t2 and t3 exist on only one leg each and are dropped, not filled in
        let stamps: Vec<&str> = rows.iter().map(|r| r.ts.as_str()).collect();
        assert_eq!(stamps, vec!["t1", "t4"]);
        assert!(approx_eq(rows[1].y, 120.0));
        assert!(approx_eq(rows[1].x, 120.0));
    }

    #[test]
    fn output_is_the_chronologically_latest_suffix_capped_at_100() {
        let ys: Vec<Bar> = (0..250).map(|i| bar(format!("t{i:03}"), 100.0 + i as f64)).collect();
        let xs: Vec<Bar> = (0..250).map(|i| bar(format!("t{i:03}"), 50.0 + i as f64)).collect();

        let rows = align_normalized(&ys, &xs);

        assert_eq!(rows.len(), MAX_CHART_POINTS);
        assert_eq!(rows.first().unwrap().ts, "t150");
        assert_eq!(rows.last().unwrap().ts, "t249");
        // Normalization still uses the very first bar as the base
        assert!(approx_eq(rows.last().unwrap().y, 349.0));
    }
}
