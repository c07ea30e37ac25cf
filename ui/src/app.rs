use crate::{state::State, widgets};

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = if self.state.table.view().dark_mode() {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        };
        ctx.set_theme(theme);

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::roster_table(ui, &mut self.state);
        });
    }
}
