//! Row selection.

use std::collections::HashSet;

use ustr::Ustr;

/// Identifiers of the selected records.
///
/// Membership survives filtering and paging, so the set may name records
/// that are not currently visible. Only "select all" is scoped to a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<Ustr>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`.
    pub fn toggle(&mut self, id: Ustr) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Replaces the selection with exactly `page_ids`.
    pub fn select_all(&mut self, page_ids: impl IntoIterator<Item = Ustr>) {
        self.ids = page_ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(&Ustr::from(id))
    }

    pub fn contains(&self, id: Ustr) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Header checkbox state: the page has rows and all of them are selected.
    pub fn all_selected(&self, page_ids: &[Ustr]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.ids.contains(id))
    }

    /// Header checkbox click: selects the page unless it is already fully
    /// selected, in which case the selection is cleared.
    pub fn toggle_all(&mut self, page_ids: &[Ustr]) {
        if self.all_selected(page_ids) {
            self.clear();
        } else {
            self.select_all(page_ids.iter().copied());
        }
    }

    /// Selected ids in a stable order, for bulk actions.
    pub fn selected_ids(&self) -> Vec<Ustr> {
        let mut ids: Vec<Ustr> = self.ids.iter().copied().collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids
    }
}
