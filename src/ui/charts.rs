use eframe::egui::{RichText, Ui, vec2};
use egui_plot::{
    AxisHints, Bar as PlotBar, BarChart, Corner, HLine, Legend, Line, LineStyle, Plot, PlotPoints,
};
use itertools::Itertools;

use crate::analysis::{AlignedPoint, MAX_VOLUME_BARS};
use crate::domain::Bar;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::utils::time_utils::clock_label;

/// Charts plot against the sample index; the x axis renders each index as
/// the clock label of the sample it belongs to.
fn time_axis(labels: Vec<String>) -> AxisHints<'static> {
    AxisHints::new_x().formatter(move |grid_mark, _range| {
        let idx = grid_mark.value.round();
        if idx >= 0.0 && (grid_mark.value - idx).abs() < 1e-6 {
            labels.get(idx as usize).cloned().unwrap_or_default()
        } else {
            String::new()
        }
    })
}

/// Centered "waiting" placeholder filling the same footprint as the chart it
/// stands in for, so the layout doesn't jump when data arrives.
fn waiting_placeholder(ui: &mut Ui, height: f32, text: &str) {
    ui.allocate_ui(vec2(ui.available_width(), height), |ui| {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new(text).color(UI_CONFIG.colors.label));
        });
    });
}

/// Both legs rebased to 100, drawn over the shared timestamp axis.
pub fn price_comparison_chart(ui: &mut Ui, rows: &[AlignedPoint], label_y: &str, label_x: &str) {
    if rows.is_empty() {
        waiting_placeholder(ui, UI_CONFIG.chart_height, UI_TEXT.waiting_for_data);
        return;
    }

    let labels = rows.iter().map(|r| clock_label(&r.ts)).collect_vec();
    let y_points = rows
        .iter()
        .enumerate()
        .map(|(i, r)| [i as f64, r.y])
        .collect_vec();
    let x_points = rows
        .iter()
        .enumerate()
        .map(|(i, r)| [i as f64, r.x])
        .collect_vec();

    Plot::new("price_comparison")
        .height(UI_CONFIG.chart_height)
        .legend(Legend::default().position(Corner::LeftTop))
        .custom_x_axes(vec![time_axis(labels)])
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(
                    format!("{label_y} (Normalized)"),
                    PlotPoints::new(y_points),
                )
                .color(UI_CONFIG.colors.line_y)
                .width(2.0),
            );
            plot_ui.line(
                Line::new(
                    format!("{label_x} (Normalized)"),
                    PlotPoints::new(x_points),
                )
                .color(UI_CONFIG.colors.line_x)
                .width(2.0),
            );
        });
}

/// Traded volume of the Y leg, most recent bars only.
pub fn volume_chart(ui: &mut Ui, bars: &[Bar]) {
    let start = bars.len().saturating_sub(MAX_VOLUME_BARS);
    let tail = &bars[start..];

    if tail.is_empty() {
        waiting_placeholder(ui, UI_CONFIG.volume_chart_height, UI_TEXT.no_volume_data);
        return;
    }

    let labels = tail.iter().map(|b| clock_label(&b.ts)).collect_vec();
    let chart_bars = tail
        .iter()
        .enumerate()
        .map(|(i, b)| PlotBar::new(i as f64, b.volume).width(0.8))
        .collect_vec();

    Plot::new("volume")
        .height(UI_CONFIG.volume_chart_height)
        .custom_x_axes(vec![time_axis(labels)])
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(UI_TEXT.volume_heading, chart_bars)
                    .color(UI_CONFIG.colors.volume_bar),
            );
        });
}

/// Spread history. `points` is already filtered to finite samples.
pub fn spread_chart(ui: &mut Ui, points: &[(&str, f64)]) {
    if points.is_empty() {
        waiting_placeholder(ui, UI_CONFIG.small_chart_height, UI_TEXT.waiting_for_spread);
        return;
    }

    let labels = points.iter().map(|(ts, _)| clock_label(ts)).collect_vec();
    let line_points = points
        .iter()
        .enumerate()
        .map(|(i, (_, v))| [i as f64, *v])
        .collect_vec();

    Plot::new("spread_series")
        .height(UI_CONFIG.small_chart_height)
        .custom_x_axes(vec![time_axis(labels)])
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(UI_TEXT.label_spread, PlotPoints::new(line_points))
                    .color(UI_CONFIG.colors.spread_line)
                    .width(2.0),
            );
        });
}

/// Z-score history with the ±2σ mean-reversion bands and the zero line.
pub fn zscore_chart(ui: &mut Ui, points: &[(&str, f64)]) {
    if points.is_empty() {
        waiting_placeholder(ui, UI_CONFIG.small_chart_height, UI_TEXT.waiting_for_zscore);
        return;
    }

    let labels = points.iter().map(|(ts, _)| clock_label(ts)).collect_vec();
    let line_points = points
        .iter()
        .enumerate()
        .map(|(i, (_, v))| [i as f64, *v])
        .collect_vec();

    Plot::new("zscore_series")
        .height(UI_CONFIG.small_chart_height)
        .custom_x_axes(vec![time_axis(labels)])
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.hline(
                HLine::new("+2σ", 2.0)
                    .color(UI_CONFIG.colors.band_line)
                    .style(LineStyle::dashed_loose()),
            );
            plot_ui.hline(
                HLine::new("-2σ", -2.0)
                    .color(UI_CONFIG.colors.band_line)
                    .style(LineStyle::dashed_loose()),
            );
            plot_ui.hline(HLine::new("mean", 0.0).color(UI_CONFIG.colors.zero_line));

            plot_ui.line(
                Line::new(UI_TEXT.label_zscore, PlotPoints::new(line_points))
                    .color(UI_CONFIG.colors.zscore_line)
                    .width(2.0),
            );
        });
}
