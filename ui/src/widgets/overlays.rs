//! Popovers, menus and the customize-columns modal.
//!
//! At most one is open at a time; which one is decided by the view state's
//! [`Overlay`].

use egui::{Button, Context, Ui, Window};
use roster_business::{ColumnKey, Density, Overlay, StickySide, TableState, UserStatus};
use ustr::Ustr;

use crate::state::Intent;
use crate::widgets::table::render_status_tag;

const ROW_ACTIONS: [&str; 4] = ["View details", "Duplicate", "Assign project", "Archive user"];

pub fn overlays(table: &TableState, ctx: &Context, intents: &mut Vec<Intent>) {
    let overlay = table.view().overlay();
    let title = match overlay {
        Overlay::None => return,
        Overlay::DensityMenu => "Density".to_owned(),
        Overlay::StatusFilter => "Filter by status".to_owned(),
        Overlay::DateFilter => "Joined date".to_owned(),
        Overlay::ColumnMenu(key) => table
            .columns()
            .get(key)
            .map(|c| c.label.clone())
            .unwrap_or_else(|| key.to_string()),
        Overlay::RowActions(id) => row_title(table, id),
        Overlay::ColumnConfig => "Customize columns".to_owned(),
    };

    let mut open = true;
    Window::new(title)
        .id(egui::Id::new("roster_overlay"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| match overlay {
            Overlay::None => {}
            Overlay::DensityMenu => density_menu(table, ui, intents),
            Overlay::StatusFilter => status_popover(table, ui, intents),
            Overlay::DateFilter => {
                ui.label("Any time");
            }
            Overlay::ColumnMenu(key) => column_menu(table, key, ui, intents),
            Overlay::RowActions(id) => row_actions_menu(id, ui, intents),
            Overlay::ColumnConfig => column_config_modal(table, ui, intents),
        });

    if !open {
        intents.push(Intent::CloseOverlay);
    }
}

fn row_title(table: &TableState, id: Ustr) -> String {
    table
        .records()
        .iter()
        .find(|u| u.id == id)
        .map(|u| u.full_name())
        .unwrap_or_else(|| id.to_string())
}

fn density_menu(table: &TableState, ui: &mut Ui, intents: &mut Vec<Intent>) {
    let current = table.view().density();
    for density in Density::ALL {
        if ui
            .add(Button::new(density.label()).selected(density == current))
            .clicked()
        {
            intents.push(Intent::SetDensity(density));
        }
    }
}

fn status_popover(table: &TableState, ui: &mut Ui, intents: &mut Vec<Intent>) {
    let selected = &table.query().status_filter;
    for status in UserStatus::ALL {
        ui.horizontal(|ui| {
            let mut checked = selected.contains(&status);
            if ui.checkbox(&mut checked, "").changed() {
                intents.push(Intent::ToggleStatus(status));
            }
            render_status_tag(ui, status);
        });
    }
    ui.separator();
    if ui
        .add_enabled(!selected.is_empty(), Button::new("Clear"))
        .clicked()
    {
        intents.push(Intent::ClearStatusFilter);
    }
}

fn column_menu(table: &TableState, key: ColumnKey, ui: &mut Ui, intents: &mut Vec<Intent>) {
    let sticky = table.columns().get(key).and_then(|c| c.sticky);

    if sticky != Some(StickySide::Left) && ui.button("Pin left").clicked() {
        intents.push(Intent::PinColumn(key, Some(StickySide::Left)));
    }
    if sticky != Some(StickySide::Right) && ui.button("Pin right").clicked() {
        intents.push(Intent::PinColumn(key, Some(StickySide::Right)));
    }
    if sticky.is_some() && ui.button("Unpin").clicked() {
        intents.push(Intent::PinColumn(key, None));
    }
    ui.separator();
    if ui.button("Hide column").clicked() {
        intents.push(Intent::HideColumn(key));
    }
}

fn row_actions_menu(id: Ustr, ui: &mut Ui, intents: &mut Vec<Intent>) {
    for action in ROW_ACTIONS {
        if ui.button(action).clicked() {
            log::info!("{action} requested for {id}");
            intents.push(Intent::CloseOverlay);
        }
    }
}

fn column_config_modal(table: &TableState, ui: &mut Ui, intents: &mut Vec<Intent>) {
    let columns = table.columns().columns();
    let last = columns.len().saturating_sub(1);

    egui::ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
        for (index, column) in columns.iter().enumerate() {
            ui.horizontal(|ui| {
                let mut visible = column.visible;
                if ui.checkbox(&mut visible, column.label.as_str()).changed() {
                    intents.push(Intent::ToggleColumn(column.key));
                }
                if ui.add_enabled(index > 0, Button::new("⬆")).clicked() {
                    intents.push(Intent::MoveColumn(column.key, index - 1));
                }
                if ui.add_enabled(index < last, Button::new("⬇")).clicked() {
                    intents.push(Intent::MoveColumn(column.key, index + 1));
                }
            });
        }
    });

    ui.separator();
    ui.label(format!(
        "{} of {} columns visible",
        table.columns().visible_count(),
        columns.len()
    ));
    if ui.button("Done").clicked() {
        intents.push(Intent::CloseOverlay);
    }
}
