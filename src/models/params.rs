use serde::{Deserialize, Serialize};

use crate::domain::{Symbol, Timeframe};

/// The five operator-controlled inputs. Symbols, timeframe and window drive
/// the poll queries; the threshold only shapes the next alert submission.
///
/// Implements PartialEq to enable change detection, and serde so the last
/// selection survives an app restart via eframe storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardParams {
    pub symbol_y: Symbol,
    pub symbol_x: Symbol,
    pub timeframe: Timeframe,
    pub window: u32,
    pub threshold: f64,
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self {
            symbol_y: Symbol::EthUsdt,
            symbol_x: Symbol::BtcUsdt,
            timeframe: Timeframe::M1,
            window: 200,
            threshold: 1.5,
        }
    }
}

impl DashboardParams {
    pub const WINDOW_MIN: u32 = 50;
    pub const WINDOW_MAX: u32 = 500;
    pub const WINDOW_STEP: u32 = 50;

    /// True when `other` queries the same data: same symbols, timeframe and
    /// window. The threshold is deliberately excluded: changing it must not
    /// invalidate an in-flight batch or force a refetch.
    pub fn same_query(&self, other: &DashboardParams) -> bool {
        self.symbol_y == other.symbol_y
            && self.symbol_x == other.symbol_x
            && self.timeframe == other.timeframe
            && self.window == other.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_changes_do_not_change_the_query() {
        let a = DashboardParams::default();
        let b = DashboardParams {
            threshold: 2.5,
            ..a.clone()
        };
        assert!(a.same_query(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn symbol_window_and_timeframe_changes_change_the_query() {
        let base = DashboardParams::default();
        let swapped = DashboardParams {
            symbol_y: Symbol::SolUsdt,
            ..base.clone()
        };
        let widened = DashboardParams {
            window: 500,
            ..base.clone()
        };
        let retimed = DashboardParams {
            timeframe: Timeframe::M5,
            ..base.clone()
        };
        assert!(!base.same_query(&swapped));
        assert!(!base.same_query(&widened));
        assert!(!base.same_query(&retimed));
    }
}
