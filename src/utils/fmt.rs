use eframe::egui::Color32;

use crate::ui::config::UI_CONFIG;

/// Render a possibly-absent metric as a fixed-precision decimal string.
/// Absent values become the literal placeholder rather than an error, so a
/// half-populated payload still produces a legible card.
pub fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "N/A".to_string(),
    }
}

/// Severity band of a trend magnitude (z-score style), by absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    Nominal,
    Elevated,
    Critical,
}

impl SeverityTier {
    /// |v| < 1 is Nominal, |v| in [1, 2] is Elevated, |v| > 2 is Critical.
    pub fn from_magnitude(value: f64) -> Self {
        let magnitude = value.abs();
        if magnitude > 2.0 {
            SeverityTier::Critical
        } else if magnitude >= 1.0 {
            SeverityTier::Elevated
        } else {
            SeverityTier::Nominal
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            SeverityTier::Nominal => UI_CONFIG.colors.severity_nominal,
            SeverityTier::Elevated => UI_CONFIG.colors.severity_elevated,
            SeverityTier::Critical => UI_CONFIG.colors.severity_critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::Nominal => "Nominal",
            SeverityTier::Elevated => "Elevated",
            SeverityTier::Critical => "Critical",
        }
    }
}

/// Color for a trend value that may be missing entirely.
pub fn trend_color(trend: Option<f64>) -> Color32 {
    match trend {
        Some(value) => SeverityTier::from_magnitude(value).color(),
        None => UI_CONFIG.colors.label,
    }
}

/// Label for an optional stationarity verdict from the ADF test.
pub fn stationarity_label(stationary: Option<bool>) -> &'static str {
    match stationary {
        Some(true) => "Stationary",
        Some(false) => "Non-stationary",
        None => "N/A",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_format_as_placeholder() {
        assert_eq!(fmt_opt(None, 2), "N/A");
        assert_eq!(fmt_opt(None, 4), "N/A");
    }

    #[test]
    fn finite_values_format_at_requested_precision() {
        assert_eq!(fmt_opt(Some(2.5), 2), "2.50");
        assert_eq!(fmt_opt(Some(0.98765), 3), "0.988");
        assert_eq!(fmt_opt(Some(0.04321), 4), "0.0432");
        assert_eq!(fmt_opt(Some(-1.5), 0), "-2");
    }

    #[test]
    fn severity_tiers_split_on_absolute_value() {
        assert_eq!(SeverityTier::from_magnitude(0.0), SeverityTier::Nominal);
        assert_eq!(SeverityTier::from_magnitude(0.99), SeverityTier::Nominal);
        assert_eq!(SeverityTier::from_magnitude(1.0), SeverityTier::Elevated);
        assert_eq!(SeverityTier::from_magnitude(-1.5), SeverityTier::Elevated);
        assert_eq!(SeverityTier::from_magnitude(2.0), SeverityTier::Elevated);
        assert_eq!(SeverityTier::from_magnitude(2.5), SeverityTier::Critical);
        assert_eq!(SeverityTier::from_magnitude(-3.0), SeverityTier::Critical);
    }

    #[test]
    fn severity_tiers_carry_fixed_labels() {
        assert_eq!(SeverityTier::from_magnitude(0.5).label(), "Nominal");
        assert_eq!(SeverityTier::from_magnitude(1.5).label(), "Elevated");
        assert_eq!(SeverityTier::from_magnitude(2.5).label(), "Critical");
    }

    #[test]
    fn stationarity_labels_cover_absent_flag() {
        assert_eq!(stationarity_label(Some(true)), "Stationary");
        assert_eq!(stationarity_label(Some(false)), "Non-stationary");
        assert_eq!(stationarity_label(None), "N/A");
    }
}
