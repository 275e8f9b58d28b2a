use std::time::Duration;

use eframe::{Frame, egui};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::AnalyticsClient;
use crate::engine::DashEngine;
use crate::models::DashboardParams;
use crate::ui::utils::setup_custom_visuals;

/// The dashboard shell: owns the engine and renders whatever snapshot it has
/// published. All data access goes through the engine; the UI itself holds
/// no fetch state.
pub struct DashboardApp {
    pub(super) engine: DashEngine,
    pub(super) client: AnalyticsClient,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        client: AnalyticsClient,
        poll_period: Duration,
    ) -> Self {
        // Restore the operator's last parameter selection, if any
        let params: DashboardParams = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Restored dashboard parameters: {:?}", params);
        }

        let engine = DashEngine::new(client.clone(), params).with_poll_period(poll_period);

        Self { engine, client }
    }
}

impl eframe::App for DashboardApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.engine.params());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Pump the refresh loop before rendering so this frame already sees
        // the newest published snapshot
        let busy = self.engine.update();

        self.render_header_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        // Keep repainting while work is in flight; otherwise sleep until the
        // next poll tick is due
        if busy {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(self.engine.until_next_poll());
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }
}
