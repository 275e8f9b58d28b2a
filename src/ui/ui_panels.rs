use eframe::egui::{Button, ComboBox, DragValue, Grid, Slider, Ui};
use strum::IntoEnumIterator;

use crate::domain::{Symbol, Timeframe};
use crate::models::{Alert, DashboardParams};
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::colored_subsection_heading;
use crate::utils::time_utils::datetime_label;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug)]
pub enum ControlsEvent {
    SymbolY(Symbol),
    SymbolX(Symbol),
    Timeframe(Timeframe),
    Window(u32),
}

/// The four query-driving inputs, laid out as one horizontal strip.
pub struct ControlsPanel {
    symbol_y: Symbol,
    symbol_x: Symbol,
    timeframe: Timeframe,
    window: u32,
}

impl ControlsPanel {
    pub fn new(params: &DashboardParams) -> Self {
        Self {
            symbol_y: params.symbol_y,
            symbol_x: params.symbol_x,
            timeframe: params.timeframe,
            window: params.window,
        }
    }

    fn symbol_combo(ui: &mut Ui, id: &str, label: &str, current: &mut Symbol) -> Option<Symbol> {
        let mut changed = None;

        ui.vertical(|ui| {
            ui.label(colored_subsection_heading(label));
            ComboBox::from_id_salt(id)
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for symbol in Symbol::iter() {
                        if ui
                            .selectable_value(current, symbol, symbol.label())
                            .clicked()
                        {
                            changed = Some(symbol);
                        }
                    }
                });
        });

        changed
    }

    fn timeframe_combo(ui: &mut Ui, current: &mut Timeframe) -> Option<Timeframe> {
        let mut changed = None;

        ui.vertical(|ui| {
            ui.label(colored_subsection_heading(UI_TEXT.label_timeframe));
            ComboBox::from_id_salt("timeframe")
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for timeframe in Timeframe::iter() {
                        if ui
                            .selectable_value(current, timeframe, timeframe.label())
                            .clicked()
                        {
                            changed = Some(timeframe);
                        }
                    }
                });
        });

        changed
    }

    fn window_slider(ui: &mut Ui, window: &mut u32) -> Option<u32> {
        let mut changed = None;

        ui.vertical(|ui| {
            ui.label(colored_subsection_heading(format!(
                "{}: {}",
                UI_TEXT.label_window, window
            )));

            let mut value = *window as f64;
            let response = ui.add(
                Slider::new(
                    &mut value,
                    DashboardParams::WINDOW_MIN as f64..=DashboardParams::WINDOW_MAX as f64,
                )
                .step_by(DashboardParams::WINDOW_STEP as f64)
                .integer(),
            );

            let new_value = value.round() as u32;
            *window = new_value;
            if response.changed() {
                changed = Some(new_value);
            }
        });

        changed
    }
}

impl Panel for ControlsPanel {
    type Event = ControlsEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            if let Some(symbol) =
                Self::symbol_combo(ui, "symbol_y", UI_TEXT.label_asset_y, &mut self.symbol_y)
            {
                events.push(ControlsEvent::SymbolY(symbol));
            }
            ui.add_space(16.0);

            if let Some(symbol) =
                Self::symbol_combo(ui, "symbol_x", UI_TEXT.label_asset_x, &mut self.symbol_x)
            {
                events.push(ControlsEvent::SymbolX(symbol));
            }
            ui.add_space(16.0);

            if let Some(timeframe) = Self::timeframe_combo(ui, &mut self.timeframe) {
                events.push(ControlsEvent::Timeframe(timeframe));
            }
            ui.add_space(16.0);

            if let Some(window) = Self::window_slider(ui, &mut self.window) {
                events.push(ControlsEvent::Window(window));
            }
        });

        events
    }
}

#[derive(Debug)]
pub enum AlertEvent {
    Threshold(f64),
    Create,
}

/// Threshold input plus the submission button. The button is disabled while
/// a creation request is in flight.
pub struct AlertPanel {
    threshold: f64,
    busy: bool,
}

impl AlertPanel {
    pub fn new(threshold: f64, busy: bool) -> Self {
        Self { threshold, busy }
    }
}

impl Panel for AlertPanel {
    type Event = AlertEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(colored_subsection_heading(UI_TEXT.label_threshold));
                let response = ui.add(
                    DragValue::new(&mut self.threshold)
                        .speed(0.1)
                        .range(0.1..=10.0)
                        .fixed_decimals(1),
                );
                if response.changed() {
                    events.push(AlertEvent::Threshold(self.threshold));
                }
            });
            ui.add_space(16.0);

            let label = if self.busy {
                UI_TEXT.creating_alert
            } else {
                UI_TEXT.create_alert
            };
            if ui.add_enabled(!self.busy, Button::new(label)).clicked() {
                events.push(AlertEvent::Create);
            }
        });

        events
    }
}

/// The authoritative alert list as of the last poll, plus any optimistic
/// entry the engine appended after a successful creation.
pub fn render_alerts_table(ui: &mut Ui, alerts: &[Alert]) {
    if alerts.is_empty() {
        ui.label_subdued(UI_TEXT.no_active_alerts);
        return;
    }

    let dash = || UI_TEXT.placeholder_dash.to_string();

    Grid::new("alerts_table")
        .num_columns(5)
        .spacing([24.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            for head in ["Asset Y", "Asset X", "Window", "Threshold", "Last Triggered"] {
                ui.label(colored_subsection_heading(head));
            }
            ui.end_row();

            for alert in alerts {
                ui.label(
                    alert
                        .y
                        .as_deref()
                        .map(str::to_uppercase)
                        .unwrap_or_else(dash),
                );
                ui.label(
                    alert
                        .x
                        .as_deref()
                        .map(str::to_uppercase)
                        .unwrap_or_else(dash),
                );
                ui.label(alert.window.map(|w| w.to_string()).unwrap_or_else(dash));
                ui.label(
                    alert
                        .threshold
                        .map(|t| format!("{t:.2}"))
                        .unwrap_or_else(dash),
                );
                ui.label_subdued(
                    alert
                        .last_triggered
                        .as_deref()
                        .map(datetime_label)
                        .unwrap_or_else(|| UI_TEXT.never_triggered.to_string()),
                );
                ui.end_row();
            }
        });
}
