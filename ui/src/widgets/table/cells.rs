//! Cell rendering for each kind of column.

use egui::{RichText, Ui};
use roster_business::{ColumnKey, Overlay, User, UserField, UserStatus};

use crate::state::Intent;
use crate::utils::colors::{COLOR_GRAY, status_color};

/// Renders one cell. Returns the intent of a clicked control, if any.
#[inline]
pub fn render_cell(ui: &mut Ui, user: &User, key: ColumnKey) -> Option<Intent> {
    match key {
        ColumnKey::Actions => render_actions_cell(ui, user),
        ColumnKey::Field(UserField::FirstName) => {
            render_name_cell(ui, user);
            None
        }
        ColumnKey::Field(UserField::Status) => {
            render_status_tag(ui, user.status);
            None
        }
        ColumnKey::Field(UserField::Role) => {
            ui.label(RichText::new(&user.role).small().strong());
            None
        }
        ColumnKey::Field(field) if field.is_currency() => {
            ui.label(RichText::new(user.display_text(field)).strong());
            None
        }
        ColumnKey::Field(UserField::JoinedDate) => {
            ui.label(format!("📅 {}", user.display_text(UserField::JoinedDate)));
            None
        }
        ColumnKey::Field(field) => {
            ui.label(RichText::new(user.display_text(field)).color(COLOR_GRAY));
            None
        }
    }
}

#[inline]
fn render_name_cell(ui: &mut Ui, user: &User) {
    ui.vertical(|ui| {
        ui.strong(user.full_name());
        ui.label(RichText::new(&user.email).small().color(COLOR_GRAY));
    });
}

/// Colored dot followed by the status label.
#[inline]
pub fn render_status_tag(ui: &mut Ui, status: UserStatus) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("●").color(status_color(status)));
        ui.label(status.label());
    });
}

#[inline]
fn render_actions_cell(ui: &mut Ui, user: &User) -> Option<Intent> {
    let mut intent = None;
    ui.horizontal(|ui| {
        if ui.small_button("✏").on_hover_text("Edit").clicked() {
            log::info!("edit requested for {}", user.id);
        }
        if ui.small_button("🗑").on_hover_text("Delete").clicked() {
            log::info!("delete requested for {}", user.id);
        }
        if ui.small_button("⋮").on_hover_text("More actions").clicked() {
            intent = Some(Intent::ToggleOverlay(Overlay::RowActions(user.id)));
        }
    });
    intent
}
