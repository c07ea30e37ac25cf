//! Title row: search, density, column customization and theme toggle.

use egui::{Align, ComboBox, Layout, RichText, TextEdit, Ui};
use roster_business::{Overlay, TableState, UserField};

use crate::state::Intent;
use crate::utils::colors::COLOR_GRAY;

const SEARCH_WIDTH: f32 = 220.0;

pub fn toolbar(table: &TableState, ui: &mut Ui, intents: &mut Vec<Intent>) {
    ui.horizontal(|ui| {
        ui.heading("Team members");
        ui.label(
            RichText::new(format!("{} members", table.records().len())).color(COLOR_GRAY),
        );

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let theme_label = if table.view().dark_mode() {
                "☀ Light"
            } else {
                "🌙 Dark"
            };
            if ui.button(theme_label).clicked() {
                intents.push(Intent::ToggleDarkMode);
            }

            if ui.button("⚙ Customize").clicked() {
                intents.push(Intent::ToggleOverlay(Overlay::ColumnConfig));
            }

            let density = format!("Density: {}", table.view().density().label());
            if ui.button(density).clicked() {
                intents.push(Intent::ToggleOverlay(Overlay::DensityMenu));
            }

            search_box(table, ui, intents);
        });
    });
}

fn search_box(table: &TableState, ui: &mut Ui, intents: &mut Vec<Intent>) {
    let query = table.query();

    let mut text = query.search_text.clone();
    let response = ui.add(
        TextEdit::singleline(&mut text)
            .hint_text("Search members")
            .desired_width(SEARCH_WIDTH),
    );
    if response.changed() {
        intents.push(Intent::SetSearchText(text));
    }

    let mut field = query.search_field;
    ComboBox::from_id_salt("search_field")
        .selected_text(field.key())
        .show_ui(ui, |ui| {
            for option in UserField::ALL {
                ui.selectable_value(&mut field, option, option.key());
            }
        });
    if field != query.search_field {
        intents.push(Intent::SetSearchField(field));
    }
}
