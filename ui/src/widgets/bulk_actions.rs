use egui::{RichText, Ui};
use roster_business::TableState;

use crate::state::Intent;
use crate::utils::colors::COLOR_RED;

const BULK_ACTIONS: [&str; 2] = ["Export", "Bulk Edit"];

/// Shown while at least one row is selected.
pub fn bulk_actions_bar(table: &TableState, ui: &mut Ui, intents: &mut Vec<Intent>) {
    let selection = table.selection();

    ui.horizontal(|ui| {
        ui.strong(format!(
            "{} of {} members selected",
            selection.len(),
            table.records().len()
        ));
        ui.separator();

        for action in BULK_ACTIONS {
            if ui.button(action).clicked() {
                log::info!("{action} requested for {:?}", selection.selected_ids());
            }
        }
        if ui
            .button(RichText::new("Remove").color(COLOR_RED))
            .clicked()
        {
            log::info!("Remove requested for {:?}", selection.selected_ids());
        }

        if ui.button("✖").on_hover_text("Clear selection").clicked() {
            intents.push(Intent::ClearSelection);
        }
    });
}
