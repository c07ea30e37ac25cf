//! The members table.
//!
//! - `columns`: column sizing
//! - `header`: header row with the select-all checkbox and column menus
//! - `cells`: per-field cell rendering

mod cells;
mod columns;
mod header;

use egui::{Align, Color32, Layout, RichText, Ui};
use egui_extras::TableBuilder;
use roster_business::TableState;

pub(crate) use cells::render_status_tag;

use crate::state::Intent;
use columns::{CHECKBOX_WIDTH, HEADER_HEIGHT, column_spec};

pub fn members_table(table: &TableState, ui: &mut Ui, intents: &mut Vec<Intent>) {
    let columns = table.column_layout();
    let rows = table.page_rows();

    if columns.is_empty() {
        ui.label(RichText::new("All columns are hidden").color(Color32::GRAY).italics());
        return;
    }

    let row_height = table.view().density().row_height();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(egui_extras::Column::exact(CHECKBOX_WIDTH))
        .min_scrolled_height(0.0);
    for column in &columns {
        builder = builder.column(column_spec(column));
    }

    builder
        .header(HEADER_HEIGHT, |mut row| {
            header::render_table_header(&mut row, table, &columns, intents);
        })
        .body(|body| {
            body.rows(row_height, rows.len(), |mut row| {
                let Some(user) = rows.get(row.index()) else {
                    return;
                };
                let selected = table.is_selected(&user.id);
                row.set_selected(selected);

                row.col(|ui| {
                    let mut checked = selected;
                    if ui.checkbox(&mut checked, "").changed() {
                        intents.push(Intent::ToggleSelection(user.id));
                    }
                });

                for column in &columns {
                    row.col(|ui| {
                        if let Some(intent) = cells::render_cell(ui, user, column.key) {
                            intents.push(intent);
                        }
                    });
                }
            });
        });

    if rows.is_empty() {
        ui.add_space(8.0);
        ui.label(
            RichText::new("No members match the current filters")
                .color(Color32::GRAY)
                .italics(),
        );
    }
}
