use std::path::PathBuf;

use eframe::egui;

use crate::state::Session;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    data_path: PathBuf,
    pub session: Session,
}

impl DashboardApp {
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            data_path,
            session: Session::Loading,
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The load settles on the first frame; afterwards the session only
        // ever self-transitions inside Ready on filter changes.
        if matches!(self.session, Session::Loading) {
            self.session = Session::load(&self.data_path);
        }

        // ---- Top panel: title and record counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.session);
        });

        // ---- Central panel: the dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| match &mut self.session {
            Session::Loading => {
                ui.label("Loading…");
            }
            Session::Failed(msg) => {
                ui.colored_label(egui::Color32::RED, msg.as_str());
            }
            Session::Ready(state) => panels::dashboard(ui, state),
        });
    }
}
