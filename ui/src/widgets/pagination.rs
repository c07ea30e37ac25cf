//! Footer: summary, page size, page buttons and go-to-page.

use egui::{Button, ComboBox, Key, TextEdit, Ui};
use roster_business::{PageItem, PageSize, TableState};

use crate::state::Intent;

const GO_TO_WIDTH: f32 = 44.0;

pub fn pagination_footer(table: &TableState, ui: &mut Ui, intents: &mut Vec<Intent>) {
    let pagination = table.pagination();

    ui.horizontal(|ui| {
        ui.label(table.summary().to_string());
        ui.separator();

        ui.label("Rows per page");
        let mut size = pagination.page_size();
        ComboBox::from_id_salt("page_size")
            .selected_text(size.to_string())
            .show_ui(ui, |ui| {
                for option in PageSize::ALL {
                    ui.selectable_value(&mut size, option, option.to_string());
                }
            });
        if size != pagination.page_size() {
            intents.push(Intent::SetPageSize(size));
        }
        ui.separator();

        if ui
            .add_enabled(pagination.can_prev(), Button::new("Previous"))
            .clicked()
        {
            intents.push(Intent::PrevPage);
        }

        for item in table.page_items() {
            match item {
                PageItem::Page(page) => {
                    let current = page == pagination.page();
                    if ui
                        .add(Button::new(page.to_string()).selected(current))
                        .clicked()
                        && !current
                    {
                        intents.push(Intent::GoToPage(page));
                    }
                }
                PageItem::Ellipsis => {
                    ui.label("…");
                }
            }
        }

        if ui
            .add_enabled(pagination.can_next(), Button::new("Next"))
            .clicked()
        {
            intents.push(Intent::NextPage);
        }
        ui.separator();

        ui.label(format!(
            "Page {} of {}",
            pagination.page(),
            pagination.last_page()
        ));
        ui.separator();

        go_to_page(table, ui, intents);
    });
}

fn go_to_page(table: &TableState, ui: &mut Ui, intents: &mut Vec<Intent>) {
    ui.label("Go to page");

    let mut text = table.view().go_to_input().to_owned();
    let response = ui.add(TextEdit::singleline(&mut text).desired_width(GO_TO_WIDTH));
    if response.changed() {
        intents.push(Intent::SetGoToInput(text));
    }
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

    if ui.button("Go ›").clicked() || submitted {
        intents.push(Intent::SubmitGoTo);
    }
}
