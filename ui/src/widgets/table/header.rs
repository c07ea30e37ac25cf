//! Header row of the members table.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use roster_business::{ColumnDescriptor, Overlay, TableState};

use crate::state::Intent;

/// Renders the select-all checkbox followed by one clickable label per
/// column. Clicking a label opens that column's menu.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    table: &TableState,
    columns: &[&ColumnDescriptor],
    intents: &mut Vec<Intent>,
) {
    header.col(|ui| {
        let mut all = table.all_on_page_selected();
        if ui.checkbox(&mut all, "").changed() {
            intents.push(Intent::ToggleSelectAllOnPage);
        }
    });

    for column in columns {
        header.col(|ui| {
            if render_header_cell(ui, column) {
                intents.push(Intent::ToggleOverlay(Overlay::ColumnMenu(column.key)));
            }
        });
    }
}

/// Returns `true` when the label was clicked.
#[inline]
fn render_header_cell(ui: &mut Ui, column: &ColumnDescriptor) -> bool {
    let text = if column.sticky.is_some() {
        format!("📌 {}", column.label)
    } else {
        column.label.clone()
    };
    ui.add(Button::new(RichText::new(text).strong()).frame(false))
        .clicked()
}
