use eframe::egui::{
    Align, CentralPanel, Color32, Context, Frame, Layout, Margin, OpenUrl, RichText, ScrollArea,
    TopBottomPanel, Ui,
};

use crate::analysis::{align_normalized, finite_points, latest_price, pct_change};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::Bar;
use crate::models::{PairMetrics, TradeDecision};
use crate::ui::charts;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    AlertEvent, AlertPanel, ControlsEvent, ControlsPanel, Panel, render_alerts_table,
};
use crate::ui::utils::{format_price, section_heading};
use crate::utils::fmt::{SeverityTier, fmt_opt, stationarity_label, trend_color};

use super::app::DashboardApp;

impl DashboardApp {
    pub(super) fn render_header_panel(&mut self, ctx: &Context) {
        let header_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(12, 8));

        TopBottomPanel::top("header").frame(header_frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(
                    RichText::new(UI_TEXT.app_title)
                        .color(UI_CONFIG.colors.heading)
                        .strong(),
                );
                ui.label_subdued(UI_TEXT.app_subtitle);

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if self.engine.is_fetching() {
                        ui.label_warning(UI_TEXT.fetching_badge);
                    } else {
                        ui.label(
                            RichText::new(UI_TEXT.live_badge)
                                .small()
                                .color(UI_CONFIG.colors.severity_nominal),
                        );
                    }
                });
            });
        });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));

        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.metric(
                        "Backend",
                        self.client.base_url(),
                        UI_CONFIG.colors.subsection_heading,
                    );
                    ui.separator();

                    ui.metric(
                        "Cycle",
                        &self.engine.published_cycle().to_string(),
                        UI_CONFIG.colors.subsection_heading,
                    );

                    if let Some(ms) = self.engine.last_cycle_ms() {
                        ui.separator();
                        ui.metric(
                            "Last fetch",
                            &format!("{ms}ms"),
                            UI_CONFIG.colors.subsection_heading,
                        );
                    }

                    if let Some(error) = self.engine.last_error() {
                        ui.separator();
                        ui.label_warning(format!("⚠ {error}"));
                    }
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::symmetric(16, 8));

        CentralPanel::default().frame(central_frame).show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                self.render_controls(ui);
                self.render_price_cards(ui);

                section_heading(ui, UI_TEXT.price_chart_heading);
                {
                    let params = self.engine.params().clone();
                    let snapshot = self.engine.snapshot();
                    let rows = align_normalized(&snapshot.bars_y, &snapshot.bars_x);
                    charts::price_comparison_chart(
                        ui,
                        &rows,
                        params.symbol_y.label(),
                        params.symbol_x.label(),
                    );
                }

                section_heading(ui, UI_TEXT.volume_heading);
                charts::volume_chart(ui, &self.engine.snapshot().bars_y);

                section_heading(ui, UI_TEXT.analytics_heading);
                render_metric_cards(ui, &self.engine.snapshot().pair);
                if let Some(decision) = &self.engine.snapshot().pair.decision {
                    ui.add_space(8.0);
                    render_decision_row(ui, decision);
                }

                ui.add_space(10.0);
                {
                    let snapshot = self.engine.snapshot();
                    ui.columns(2, |cols| {
                        cols[0].label(RichText::new(UI_TEXT.spread_heading).strong());
                        charts::spread_chart(
                            &mut cols[0],
                            &finite_points(&snapshot.series.ts, &snapshot.series.spread),
                        );

                        cols[1].label(RichText::new(UI_TEXT.zscore_heading).strong());
                        charts::zscore_chart(
                            &mut cols[1],
                            &finite_points(&snapshot.series.ts, &snapshot.series.zscore),
                        );
                    });
                }

                section_heading(ui, UI_TEXT.alert_engine_heading);
                self.render_alert_engine(ui);

                section_heading(ui, UI_TEXT.active_alerts_heading);
                render_alerts_table(ui, &self.engine.snapshot().alerts);

                section_heading(ui, UI_TEXT.export_heading);
                self.render_export_row(ui);
                ui.add_space(20.0);
            });
        });
    }

    fn render_controls(&mut self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.controls_heading);
        let mut panel = ControlsPanel::new(self.engine.params());
        let events = panel.render(ui);
        if events.is_empty() {
            return;
        }

        let mut params = self.engine.params().clone();
        for event in events {
            match event {
                ControlsEvent::SymbolY(symbol) => params.symbol_y = symbol,
                ControlsEvent::SymbolX(symbol) => params.symbol_x = symbol,
                ControlsEvent::Timeframe(timeframe) => params.timeframe = timeframe,
                ControlsEvent::Window(window) => params.window = window,
            }
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Controls changed: {:?}", params);
        }
        self.engine.set_params(params);
    }

    fn render_price_cards(&mut self, ui: &mut Ui) {
        let params = self.engine.params().clone();
        ui.add_space(10.0);
        let snapshot = self.engine.snapshot();
        ui.columns(2, |cols| {
            price_card(&mut cols[0], params.symbol_y.label(), &snapshot.bars_y);
            price_card(&mut cols[1], params.symbol_x.label(), &snapshot.bars_x);
        });
    }

    fn render_alert_engine(&mut self, ui: &mut Ui) {
        let mut panel = AlertPanel::new(
            self.engine.params().threshold,
            self.engine.alert_in_flight(),
        );

        for event in panel.render(ui) {
            match event {
                AlertEvent::Threshold(threshold) => {
                    // Only shapes the next submission; never triggers a refetch
                    let mut params = self.engine.params().clone();
                    params.threshold = threshold;
                    self.engine.set_params(params);
                }
                AlertEvent::Create => {
                    self.engine.submit_alert();
                }
            }
        }
    }

    fn render_export_row(&mut self, ui: &mut Ui) {
        ui.label_subdued(UI_TEXT.export_helper);
        let params = self.engine.params().clone();

        ui.horizontal(|ui| {
            for (idx, symbol) in [params.symbol_y, params.symbol_x].into_iter().enumerate() {
                ui.push_id(idx, |ui| {
                    if ui.button(format!("⬇ {} CSV", symbol.label())).clicked() {
                        let url = self.client.export_url(symbol, params.timeframe);
                        // The CSV is a browser download; this client never parses it
                        ui.ctx().open_url(OpenUrl::new_tab(url));
                    }
                });
            }
        });
    }
}

fn price_card(ui: &mut Ui, label: &str, bars: &[Bar]) {
    ui.group(|ui| {
        ui.label_subdued(label);
        ui.big_value(format_price(latest_price(bars)), UI_CONFIG.colors.heading);

        let change = pct_change(bars);
        // Zero counts as an increase for the indicator glyph
        let (glyph, color) = if change >= 0.0 {
            ("⬆", UI_CONFIG.colors.bullish)
        } else {
            ("⬇", UI_CONFIG.colors.bearish)
        };
        ui.label(
            RichText::new(format!("{glyph} {:.2}%", change.abs()))
                .small()
                .color(color),
        );
    });
}

fn metric_card(ui: &mut Ui, title: &str, value: &str, subtitle: Option<&str>, color: Color32) {
    ui.group(|ui| {
        ui.label_subdued(title);
        ui.big_value(value, color);
        if let Some(subtitle) = subtitle {
            ui.label_subdued(subtitle);
        }
    });
}

fn render_metric_cards(ui: &mut Ui, pair: &PairMetrics) {
    let adf = pair.adf_test.as_ref();
    let p_value = adf.and_then(|a| a.p_value);
    let stationary = adf.and_then(|a| a.stationary);

    ui.columns(5, |cols| {
        metric_card(
            &mut cols[0],
            UI_TEXT.label_hedge_ratio,
            &fmt_opt(pair.hedge_ratio, 3),
            None,
            UI_CONFIG.colors.heading,
        );
        metric_card(
            &mut cols[1],
            UI_TEXT.label_spread,
            &fmt_opt(pair.latest_spread, 2),
            None,
            UI_CONFIG.colors.heading,
        );
        metric_card(
            &mut cols[2],
            UI_TEXT.label_zscore,
            &fmt_opt(pair.spread_zscore, 2),
            pair.spread_zscore
                .map(|z| SeverityTier::from_magnitude(z).label()),
            trend_color(pair.spread_zscore),
        );
        metric_card(
            &mut cols[3],
            UI_TEXT.label_correlation,
            &fmt_opt(pair.rolling_correlation, 2),
            None,
            UI_CONFIG.colors.heading,
        );
        metric_card(
            &mut cols[4],
            UI_TEXT.label_adf,
            &fmt_opt(p_value, 4),
            Some(stationarity_label(stationary)),
            UI_CONFIG.colors.heading,
        );
    });
}

fn render_decision_row(ui: &mut Ui, decision: &TradeDecision) {
    let bias_color = match decision.market_bias.as_str() {
        "Bullish" => UI_CONFIG.colors.bullish,
        "Bearish" => UI_CONFIG.colors.bearish,
        _ => UI_CONFIG.colors.neutral,
    };
    let signal_color = match decision.trade_signal.as_str() {
        "BUY" => UI_CONFIG.colors.bullish,
        "SELL" => UI_CONFIG.colors.bearish,
        _ => UI_CONFIG.colors.neutral,
    };
    let confidence = decision
        .confidence
        .map(|c| format!("{c:.0}%"))
        .unwrap_or_else(|| "N/A".to_string());

    ui.columns(4, |cols| {
        metric_card(
            &mut cols[0],
            UI_TEXT.label_market_bias,
            &decision.market_bias,
            None,
            bias_color,
        );
        metric_card(
            &mut cols[1],
            UI_TEXT.label_trade_signal,
            &decision.trade_signal,
            None,
            signal_color,
        );
        metric_card(
            &mut cols[2],
            UI_TEXT.label_confidence,
            &confidence,
            None,
            UI_CONFIG.colors.heading,
        );
        cols[3].group(|ui| {
            ui.label_subdued(UI_TEXT.label_reasoning);
            for reason in &decision.reasons {
                ui.label_subdued(format!("• {reason}"));
            }
        });
    });
}
