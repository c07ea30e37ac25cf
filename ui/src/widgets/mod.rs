mod bulk_actions;
mod filters;
mod overlays;
mod pagination;
mod table;
mod toolbar;

use egui::{CentralPanel, TopBottomPanel, Ui};

pub use bulk_actions::bulk_actions_bar;
pub use filters::filter_bar;
pub use overlays::overlays;
pub use pagination::pagination_footer;
pub use table::members_table;
pub use toolbar::toolbar;

use crate::state::{Intent, State};

/// Draws the members table with its toolbar, footer and overlays, then
/// applies whatever the user did this frame.
pub fn roster_table(ui: &mut Ui, state: &mut State) {
    let mut intents: Vec<Intent> = Vec::new();
    let table = &state.table;

    TopBottomPanel::top("roster_toolbar").show_inside(ui, |ui| {
        toolbar(table, ui, &mut intents);
        ui.separator();
        filter_bar(table, ui, &mut intents);
    });

    TopBottomPanel::bottom("roster_pagination").show_inside(ui, |ui| {
        pagination_footer(table, ui, &mut intents);
    });

    if !table.selection().is_empty() {
        TopBottomPanel::bottom("roster_bulk_actions").show_inside(ui, |ui| {
            bulk_actions_bar(table, ui, &mut intents);
        });
    }

    CentralPanel::default().show_inside(ui, |ui| {
        members_table(table, ui, &mut intents);
    });

    overlays(table, ui.ctx(), &mut intents);

    state.apply(intents);
}
