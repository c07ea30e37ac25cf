//! Filter chips under the toolbar.
//!
//! Only the status chip filters rows. Role, city, department and joined date
//! are shown as fixed chips.

use egui::{Button, RichText, Ui};
use roster_business::{Overlay, TableState};

use crate::state::Intent;

/// Chips that display a preset selection and do nothing.
const STATIC_FILTERS: [(&str, &[&str]); 3] = [
    ("Role", &[]),
    ("City", &["São Paulo"]),
    ("Department", &["Eng", "Prod", "Sales", "HR"]),
];

/// Chip text for a selection: up to two values are listed, more are counted.
fn chip_text(label: &str, selected: &[&str]) -> String {
    match selected {
        [] => format!("{label} ⏷"),
        [one] => format!("{label} | {one}"),
        [one, two] => format!("{label} | {one}, {two}"),
        many => format!("{label} | {} selected", many.len()),
    }
}

pub fn filter_bar(table: &TableState, ui: &mut Ui, intents: &mut Vec<Intent>) {
    ui.horizontal_wrapped(|ui| {
        for (label, selected) in STATIC_FILTERS {
            ui.add_enabled(false, Button::new(chip_text(label, selected)));
        }

        status_chip(table, ui, intents);

        let date_open = table.view().is_open(Overlay::DateFilter);
        if ui
            .add(Button::new("📅 Joined date").selected(date_open))
            .clicked()
        {
            intents.push(Intent::ToggleOverlay(Overlay::DateFilter));
        }
    });
}

fn status_chip(table: &TableState, ui: &mut Ui, intents: &mut Vec<Intent>) {
    let statuses = &table.query().status_filter;
    let labels: Vec<&str> = statuses.iter().map(|s| s.label()).collect();
    let open = table.view().is_open(Overlay::StatusFilter);

    if !statuses.is_empty()
        && ui
            .small_button(RichText::new("✖"))
            .on_hover_text("Clear status filter")
            .clicked()
    {
        intents.push(Intent::ClearStatusFilter);
    }

    if ui
        .add(Button::new(chip_text("Status", &labels)).selected(open))
        .clicked()
    {
        intents.push(Intent::ToggleOverlay(Overlay::StatusFilter));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_text_lists_or_counts() {
        assert_eq!(chip_text("Role", &[]), "Role ⏷");
        assert_eq!(chip_text("City", &["São Paulo"]), "City | São Paulo");
        assert_eq!(chip_text("Status", &["Active", "Vacation"]), "Status | Active, Vacation");
        assert_eq!(
            chip_text("Department", &["Eng", "Prod", "Sales"]),
            "Department | 3 selected"
        );
    }
}
