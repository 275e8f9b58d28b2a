use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,

    // Chart series
    pub line_y: Color32,
    pub line_x: Color32,
    pub spread_line: Color32,
    pub zscore_line: Color32,
    pub volume_bar: Color32,
    pub band_line: Color32,
    pub zero_line: Color32,

    // Severity tiers and signal coloring
    pub severity_nominal: Color32,
    pub severity_elevated: Color32,
    pub severity_critical: Color32,
    pub bullish: Color32,
    pub bearish: Color32,
    pub neutral: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub chart_height: f32,
    pub small_chart_height: f32,
    pub volume_chart_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(156, 163, 175),
        heading: Color32::from_rgb(249, 250, 251),
        subsection_heading: Color32::from_rgb(209, 213, 219),
        central_panel: Color32::from_rgb(17, 24, 39),
        side_panel: Color32::from_rgb(31, 41, 55),

        line_y: Color32::from_rgb(6, 182, 212),     // cyan
        line_x: Color32::from_rgb(132, 204, 22),    // lime
        spread_line: Color32::from_rgb(251, 146, 60),
        zscore_line: Color32::from_rgb(236, 72, 153),
        volume_bar: Color32::from_rgb(168, 85, 247),
        band_line: Color32::from_rgb(239, 68, 68),
        zero_line: Color32::from_rgb(107, 114, 128),

        severity_nominal: Color32::from_rgb(16, 185, 129),  // emerald
        severity_elevated: Color32::from_rgb(245, 158, 11), // amber
        severity_critical: Color32::from_rgb(239, 68, 68),  // red
        bullish: Color32::from_rgb(16, 185, 129),
        bearish: Color32::from_rgb(239, 68, 68),
        neutral: Color32::from_rgb(156, 163, 175),
    },
    chart_height: 320.0,
    small_chart_height: 240.0,
    volume_chart_height: 180.0,
};

/// Static UI text
pub struct UiText {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub live_badge: &'static str,
    pub fetching_badge: &'static str,

    pub controls_heading: &'static str,
    pub label_asset_y: &'static str,
    pub label_asset_x: &'static str,
    pub label_timeframe: &'static str,
    pub label_window: &'static str,

    pub price_chart_heading: &'static str,
    pub volume_heading: &'static str,
    pub analytics_heading: &'static str,
    pub spread_heading: &'static str,
    pub zscore_heading: &'static str,
    pub alert_engine_heading: &'static str,
    pub active_alerts_heading: &'static str,
    pub export_heading: &'static str,
    pub export_helper: &'static str,

    pub label_hedge_ratio: &'static str,
    pub label_spread: &'static str,
    pub label_zscore: &'static str,
    pub label_correlation: &'static str,
    pub label_adf: &'static str,
    pub label_market_bias: &'static str,
    pub label_trade_signal: &'static str,
    pub label_confidence: &'static str,
    pub label_reasoning: &'static str,
    pub label_threshold: &'static str,
    pub create_alert: &'static str,
    pub creating_alert: &'static str,

    pub waiting_for_data: &'static str,
    pub waiting_for_spread: &'static str,
    pub waiting_for_zscore: &'static str,
    pub no_volume_data: &'static str,
    pub no_active_alerts: &'static str,
    pub never_triggered: &'static str,
    pub placeholder_dash: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Pairboard",
    app_subtitle: "Pair Trading Analytics",
    live_badge: "● Live",
    fetching_badge: "⟳ Refreshing…",

    controls_heading: "Controls",
    label_asset_y: "Asset Y",
    label_asset_x: "Asset X",
    label_timeframe: "Timeframe",
    label_window: "Window",

    price_chart_heading: "Price Chart",
    volume_heading: "Volume",
    analytics_heading: "Pair Trading Analytics",
    spread_heading: "Spread Time Series",
    zscore_heading: "Z-Score with Bands",
    alert_engine_heading: "Alert Engine",
    active_alerts_heading: "Active Alerts",
    export_heading: "Export Market Data",
    export_helper: "Download OHLCV data for offline analysis",

    label_hedge_ratio: "Hedge Ratio",
    label_spread: "Spread",
    label_zscore: "Z-Score",
    label_correlation: "Correlation",
    label_adf: "ADF p-value",
    label_market_bias: "Market Bias",
    label_trade_signal: "Trade Signal",
    label_confidence: "Confidence",
    label_reasoning: "Reasoning",
    label_threshold: "Z-Score Threshold",
    create_alert: "⚡ Create Alert",
    creating_alert: "Creating…",

    waiting_for_data: "Waiting for data…",
    waiting_for_spread: "Waiting for spread data…",
    waiting_for_zscore: "Waiting for z-score data…",
    no_volume_data: "No data available",
    no_active_alerts: "No active alerts",
    never_triggered: "Never",
    placeholder_dash: "—",
};
