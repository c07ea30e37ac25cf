use roster_business::{
    ColumnKey, Density, Overlay, PageSize, StickySide, TableConfig, TableSlot, TableState,
    TopologyError, UserField, UserStatus,
};
use ustr::Ustr;

/// Something the user asked for during a frame.
///
/// Widgets only read the table while drawing and push intents; they are
/// applied once the frame's widgets are done.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetSearchText(String),
    SetSearchField(UserField),
    ToggleStatus(UserStatus),
    ClearStatusFilter,
    ToggleColumn(ColumnKey),
    HideColumn(ColumnKey),
    PinColumn(ColumnKey, Option<StickySide>),
    MoveColumn(ColumnKey, usize),
    SetPageSize(PageSize),
    GoToPage(usize),
    NextPage,
    PrevPage,
    SetGoToInput(String),
    SubmitGoTo,
    ToggleSelection(Ustr),
    ToggleSelectAllOnPage,
    ClearSelection,
    ToggleOverlay(Overlay),
    CloseOverlay,
    SetDensity(Density),
    ToggleDarkMode,
}

impl Intent {
    pub fn apply(self, table: &mut TableState) {
        log::trace!("applying {self:?}");
        match self {
            Self::SetSearchText(text) => table.set_search_text(text),
            Self::SetSearchField(field) => table.set_search_field(field),
            Self::ToggleStatus(status) => table.toggle_status(status),
            Self::ClearStatusFilter => table.clear_status_filter(),
            Self::ToggleColumn(key) => table.toggle_column_visibility(key),
            Self::HideColumn(key) => table.hide_column(key),
            Self::PinColumn(key, side) => table.pin_column(key, side),
            Self::MoveColumn(key, to) => table.move_column(key, to),
            Self::SetPageSize(size) => table.set_page_size(size),
            Self::GoToPage(page) => {
                table.go_to_page(page);
            }
            Self::NextPage => {
                table.next_page();
            }
            Self::PrevPage => {
                table.prev_page();
            }
            Self::SetGoToInput(text) => table.set_go_to_input(&text),
            Self::SubmitGoTo => {
                table.submit_go_to();
            }
            Self::ToggleSelection(id) => table.toggle_selection(id),
            Self::ToggleSelectAllOnPage => table.toggle_select_all_on_page(),
            Self::ClearSelection => table.clear_selection(),
            Self::ToggleOverlay(overlay) => table.toggle_overlay(overlay),
            Self::CloseOverlay => table.close_overlay(),
            Self::SetDensity(density) => table.set_density(density),
            Self::ToggleDarkMode => table.toggle_dark_mode(),
        }
    }
}

/// The main application state.
#[derive(Debug)]
pub struct State {
    pub table: TableState,
}

impl State {
    pub fn new(config: &TableConfig) -> Result<Self, TopologyError<TableSlot>> {
        Ok(Self {
            table: TableState::from_config(config)?,
        })
    }

    pub fn apply(&mut self, intents: impl IntoIterator<Item = Intent>) {
        for intent in intents {
            intent.apply(&mut self.table);
        }
    }
}
