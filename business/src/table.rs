//! The table facade: explicit state, memoized derived views, and the intent
//! functions a renderer calls.
//!
//! Every intent updates one input slot, then [`TableState::sync`] recomputes
//! the derived slots downstream of it in dependency order. Readers only look
//! at the cached values.

use std::{collections::BTreeSet, ops::Range};

use roster_states::{Graph, Memo, SyncPlan, TopologyError};
use ustr::Ustr;

use crate::{
    ColumnDescriptor, ColumnKey, ColumnRegistry, Density, Overlay, PageItem, PageSize,
    PageSummary, PaginationController, Selection, StickySide, TableConfig, User, UserField,
    UserStatus, ViewState, fixture, parse_page_input,
    query::{self, Query},
    sanitize_page_input,
};

/// Nodes of the table's dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableSlot {
    Records,
    Query,
    Pagination,
    /// Store positions of the records passing the query.
    Filtered,
    /// Positions within `Filtered` shown on the current page.
    PageRange,
}

fn table_graph() -> Graph<TableSlot> {
    use TableSlot as S;

    let mut graph = Graph::new();
    graph.add_edge(S::Records, S::Filtered);
    graph.add_edge(S::Query, S::Filtered);
    graph.add_edge(S::Filtered, S::PageRange);
    graph.add_edge(S::Pagination, S::PageRange);
    graph
}

#[derive(Debug)]
pub struct TableState {
    records: Vec<User>,
    query: Query,
    pagination: PaginationController,
    selection: Selection,
    columns: ColumnRegistry,
    view: ViewState,

    plan: SyncPlan<TableSlot>,
    filtered: Memo<Vec<usize>>,
    page_range: Memo<Range<usize>>,
}

impl TableState {
    pub fn new(
        records: Vec<User>,
        config: &TableConfig,
    ) -> Result<Self, TopologyError<TableSlot>> {
        let mut state = Self {
            records,
            query: Query {
                search_text: String::new(),
                search_field: config.search_field,
                status_filter: config.status_filter.clone(),
            },
            pagination: PaginationController::new(config.page_size, config.page_policy),
            selection: Selection::new(),
            columns: ColumnRegistry::default(),
            view: ViewState::new(config.density, config.dark_mode),
            plan: SyncPlan::new(table_graph())?,
            filtered: Memo::default(),
            page_range: Memo::default(),
        };
        state.sync();
        Ok(state)
    }

    /// A table over the built-in fixture.
    pub fn from_config(config: &TableConfig) -> Result<Self, TopologyError<TableSlot>> {
        Self::new(fixture::users(), config)
    }

    fn invalidate(&mut self, changed: TableSlot) {
        for slot in self.plan.affected(changed) {
            match slot {
                TableSlot::Filtered => self.filtered.mark_dirty(),
                TableSlot::PageRange => self.page_range.mark_dirty(),
                TableSlot::Records | TableSlot::Query | TableSlot::Pagination => {}
            }
        }
        self.sync();
    }

    /// Recomputes stale derived slots in dependency order.
    fn sync(&mut self) {
        let Self {
            records,
            query: current,
            pagination,
            plan,
            filtered,
            page_range,
            ..
        } = self;

        for slot in plan.order() {
            match slot {
                TableSlot::Filtered => {
                    if filtered.refresh(|| query::filter_indices(&*records, &*current)) {
                        log::debug!("filtered view now has {} rows", filtered.get().len());
                        pagination.set_filtered_len(filtered.get().len());
                    }
                }
                TableSlot::PageRange => {
                    page_range.refresh(|| pagination.range());
                }
                TableSlot::Records | TableSlot::Query | TableSlot::Pagination => {}
            }
        }
    }

    // Readers

    pub fn records(&self) -> &[User] {
        &self.records
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pagination
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn columns(&self) -> &ColumnRegistry {
        &self.columns
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The filtered records, in store order.
    pub fn filtered_rows(&self) -> Vec<&User> {
        self.filtered.get().iter().map(|&i| &self.records[i]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.get().len()
    }

    /// Records on the current page.
    pub fn page_rows(&self) -> Vec<&User> {
        self.page_indices()
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    pub fn page_ids(&self) -> Vec<Ustr> {
        self.page_indices()
            .iter()
            .map(|&i| self.records[i].id)
            .collect()
    }

    fn page_indices(&self) -> &[usize] {
        let filtered = self.filtered.get();
        let range = self.page_range.get();
        filtered.get(range.clone()).unwrap_or_default()
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn page_size(&self) -> PageSize {
        self.pagination.page_size()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    pub fn last_page(&self) -> usize {
        self.pagination.last_page()
    }

    pub fn summary(&self) -> PageSummary {
        self.pagination.summary()
    }

    pub fn page_items(&self) -> Vec<PageItem> {
        self.pagination.page_items()
    }

    pub fn visible_columns(&self) -> Vec<&ColumnDescriptor> {
        self.columns.visible_columns()
    }

    /// Visible columns with pinned ones moved to their side.
    pub fn column_layout(&self) -> Vec<&ColumnDescriptor> {
        self.columns.layout()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Header checkbox state for the current page.
    pub fn all_on_page_selected(&self) -> bool {
        self.selection.all_selected(&self.page_ids())
    }

    /// Recomputation counts of the derived slots, `(filtered, page_range)`.
    pub fn revisions(&self) -> (u64, u64) {
        (self.filtered.revision(), self.page_range.revision())
    }

    // Query intents

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.query.search_text == text {
            return;
        }
        self.query.search_text = text;
        self.invalidate(TableSlot::Query);
    }

    pub fn set_search_field(&mut self, field: UserField) {
        if self.query.search_field == field {
            return;
        }
        self.query.search_field = field;
        self.invalidate(TableSlot::Query);
    }

    pub fn set_status_filter(&mut self, statuses: impl IntoIterator<Item = UserStatus>) {
        let statuses: BTreeSet<UserStatus> = statuses.into_iter().collect();
        if self.query.status_filter == statuses {
            return;
        }
        self.query.status_filter = statuses;
        self.invalidate(TableSlot::Query);
    }

    pub fn toggle_status(&mut self, status: UserStatus) {
        if !self.query.status_filter.remove(&status) {
            self.query.status_filter.insert(status);
        }
        self.invalidate(TableSlot::Query);
    }

    pub fn clear_status_filter(&mut self) {
        self.set_status_filter(BTreeSet::<UserStatus>::new());
    }

    // Column intents

    pub fn toggle_column_visibility(&mut self, key: ColumnKey) {
        self.columns.toggle_visibility(key);
    }

    /// Hides a column from its header menu and closes the menu.
    pub fn hide_column(&mut self, key: ColumnKey) {
        self.columns.hide(key);
        if self.view.overlay() == Overlay::ColumnMenu(key) {
            self.view.close_overlay();
        }
    }

    pub fn pin_column(&mut self, key: ColumnKey, side: Option<StickySide>) {
        self.columns.pin(key, side);
        if self.view.overlay() == Overlay::ColumnMenu(key) {
            self.view.close_overlay();
        }
    }

    pub fn move_column(&mut self, key: ColumnKey, to_index: usize) {
        self.columns.move_column(key, to_index);
    }

    // Pagination intents

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.pagination.set_page_size(page_size);
        self.invalidate(TableSlot::Pagination);
    }

    /// Returns whether the page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let moved = self.pagination.go_to(page);
        if moved {
            self.invalidate(TableSlot::Pagination);
        }
        moved
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.pagination.next();
        if moved {
            self.invalidate(TableSlot::Pagination);
        }
        moved
    }

    pub fn prev_page(&mut self) -> bool {
        let moved = self.pagination.prev();
        if moved {
            self.invalidate(TableSlot::Pagination);
        }
        moved
    }

    /// Stores the go-to-page text, keeping digits only.
    pub fn set_go_to_input(&mut self, raw: &str) {
        *self.view.go_to_input_mut() = sanitize_page_input(raw);
    }

    /// Jumps to the typed page. The input is cleared only when the jump is
    /// accepted.
    pub fn submit_go_to(&mut self) -> bool {
        let Some(page) = parse_page_input(self.view.go_to_input()) else {
            log::debug!("ignoring go-to input {:?}", self.view.go_to_input());
            return false;
        };
        let moved = self.go_to_page(page);
        if moved {
            self.view.go_to_input_mut().clear();
        }
        moved
    }

    // Selection intents

    pub fn toggle_selection(&mut self, id: Ustr) {
        self.selection.toggle(id);
    }

    /// Replaces the selection with the rows of the current page.
    pub fn select_all_on_page(&mut self) {
        let ids = self.page_ids();
        self.selection.select_all(ids);
    }

    pub fn toggle_select_all_on_page(&mut self) {
        let ids = self.page_ids();
        self.selection.toggle_all(&ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // View intents

    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        self.view.toggle_overlay(overlay);
    }

    pub fn close_overlay(&mut self) {
        self.view.close_overlay();
    }

    pub fn set_density(&mut self, density: Density) {
        self.view.set_density(density);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.view.toggle_dark_mode();
    }
}
