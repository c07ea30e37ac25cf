//! Page navigation over the filtered view.

use std::{fmt, ops::Range};

use serde::Deserialize;

use crate::{ParseError, query};

/// Rows per page. Only these sizes are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PageSize {
    #[default]
    Twelve,
    TwentyFour,
    FortyEight,
}

impl PageSize {
    pub const ALL: [Self; 3] = [Self::Twelve, Self::TwentyFour, Self::FortyEight];

    pub fn get(self) -> usize {
        match self {
            Self::Twelve => 12,
            Self::TwentyFour => 24,
            Self::FortyEight => 48,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ParseError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(ParseError::UnsupportedPageSize(value))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// What happens to the current page when filtering shrinks the view below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagePolicy {
    /// Move back to the last page that still has rows.
    #[default]
    Clamp,
    /// Keep the stale page; it shows no rows until the user navigates.
    Preserve,
}

/// The "Showing X to Y of Z members" numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} members",
            self.from, self.to, self.total
        )
    }
}

/// One entry of the footer's page buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Footers with this many pages or fewer list every page.
const FULL_LIST_PAGES: usize = 7;

/// Current page and page size, bounded by the filtered row count.
///
/// Pages are 1-based. The navigation bound is [`Self::last_page`], which is
/// at least 1 even when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationController {
    page: usize,
    page_size: PageSize,
    filtered_len: usize,
    policy: PagePolicy,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(PageSize::default(), PagePolicy::default())
    }
}

impl PaginationController {
    pub fn new(page_size: PageSize, policy: PagePolicy) -> Self {
        Self {
            page: 1,
            page_size,
            filtered_len: 0,
            policy,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn policy(&self) -> PagePolicy {
        self.policy
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered_len
    }

    /// `ceil(filtered_len / page_size)`, zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        query::total_pages(self.filtered_len, self.page_size.get())
    }

    pub fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Whether the current page lies past the filtered rows. Only possible
    /// under [`PagePolicy::Preserve`].
    pub fn is_stale(&self) -> bool {
        self.page > self.last_page()
    }

    /// Accepts `page` only within `1..=last_page`. Returns whether it moved.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.last_page() {
            log::debug!("rejecting page {page}, last page is {}", self.last_page());
            return false;
        }
        self.page = page;
        true
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.last_page()
    }

    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Steps back one page. From a stale page this lands on `page - 1`,
    /// which may still be stale.
    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Records a new filtered row count and applies the stale-page policy.
    pub fn set_filtered_len(&mut self, filtered_len: usize) {
        self.filtered_len = filtered_len;
        if self.policy == PagePolicy::Clamp && self.is_stale() {
            log::debug!("clamping page {} to {}", self.page, self.last_page());
            self.page = self.last_page();
        }
    }

    /// Positions of the current page within the filtered rows.
    pub fn range(&self) -> Range<usize> {
        query::page_range(self.filtered_len, self.page, self.page_size.get())
    }

    pub fn summary(&self) -> PageSummary {
        let size = self.page_size.get();
        let total = self.filtered_len;
        PageSummary {
            from: ((self.page - 1) * size + 1).min(total),
            to: (self.page * size).min(total),
            total,
        }
    }

    /// Page buttons for the footer: first, last and the neighbours of the
    /// current page, with gaps shown as ellipses.
    pub fn page_items(&self) -> Vec<PageItem> {
        let last = self.last_page();
        if last <= FULL_LIST_PAGES {
            return (1..=last).map(PageItem::Page).collect();
        }

        let current = self.page.min(last);
        let mut pages = vec![1, last];
        for page in [current.saturating_sub(1), current, current + 1] {
            if (1..=last).contains(&page) {
                pages.push(page);
            }
        }
        pages.sort_unstable();
        pages.dedup();

        let mut items = Vec::with_capacity(pages.len() * 2);
        let mut previous = 0;
        for page in pages {
            match page - previous {
                1 => {}
                // a single missing page is shown rather than elided
                2 => items.push(PageItem::Page(page - 1)),
                _ => items.push(PageItem::Ellipsis),
            }
            items.push(PageItem::Page(page));
            previous = page;
        }
        items
    }
}

/// Strips everything but ASCII digits from go-to-page text as it is typed.
pub fn sanitize_page_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Parses go-to-page text. Empty or overflowing input yields `None`.
pub fn parse_page_input(raw: &str) -> Option<usize> {
    sanitize_page_input(raw).parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(filtered_len: usize, policy: PagePolicy) -> PaginationController {
        let mut controller = PaginationController::new(PageSize::Twelve, policy);
        controller.set_filtered_len(filtered_len);
        controller
    }

    #[test]
    fn page_size_accepts_only_known_sizes() {
        assert_eq!(PageSize::try_from(24), Ok(PageSize::TwentyFour));
        assert_eq!(PageSize::try_from(10), Err(ParseError::UnsupportedPageSize(10)));
        assert_eq!(PageSize::default().get(), 12);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut pages = controller(100, PagePolicy::Clamp);
        assert_eq!(pages.total_pages(), 9);

        assert!(!pages.go_to(999));
        assert!(!pages.go_to(0));
        assert_eq!(pages.page(), 1);

        assert!(pages.go_to(9));
        assert_eq!(pages.page(), 9);
    }

    #[test]
    fn next_and_prev_clamp_at_bounds() {
        let mut pages = controller(30, PagePolicy::Clamp);
        assert!(!pages.prev());
        assert!(pages.next());
        assert!(pages.next());
        assert!(!pages.next());
        assert_eq!(pages.page(), 3);
        assert!(pages.prev());
        assert_eq!(pages.page(), 2);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut pages = controller(100, PagePolicy::Clamp);
        pages.go_to(3);
        pages.set_page_size(PageSize::TwentyFour);
        assert_eq!(pages.page(), 1);
        assert_eq!(pages.total_pages(), 5);
    }

    #[test]
    fn empty_view_has_one_navigable_page() {
        let mut pages = controller(0, PagePolicy::Clamp);
        assert_eq!(pages.total_pages(), 0);
        assert_eq!(pages.last_page(), 1);
        assert!(pages.go_to(1));
        assert!(!pages.can_next());
        assert_eq!(
            pages.summary(),
            PageSummary {
                from: 0,
                to: 0,
                total: 0
            }
        );
        assert_eq!(pages.page_items(), vec![PageItem::Page(1)]);
    }

    #[test]
    fn shrinking_view_clamps_page() {
        let mut pages = controller(100, PagePolicy::Clamp);
        pages.go_to(8);
        pages.set_filtered_len(25);
        assert_eq!(pages.page(), 3);
        assert!(!pages.is_stale());
    }

    #[test]
    fn shrinking_view_can_preserve_stale_page() {
        let mut pages = controller(100, PagePolicy::Preserve);
        pages.go_to(8);
        pages.set_filtered_len(25);
        assert_eq!(pages.page(), 8);
        assert!(pages.is_stale());
        assert!(pages.range().is_empty());
        assert!(!pages.can_next());
        assert!(pages.prev());
        assert_eq!(pages.page(), 7);
    }

    #[test]
    fn summary_matches_footer_text() {
        let mut pages = controller(50, PagePolicy::Clamp);
        assert_eq!(pages.summary().to_string(), "Showing 1 to 12 of 50 members");
        pages.go_to(5);
        assert_eq!(pages.summary().to_string(), "Showing 49 to 50 of 50 members");
    }

    #[test]
    fn page_items_list_short_footers_in_full() {
        let pages = controller(60, PagePolicy::Clamp);
        let expected: Vec<PageItem> = (1..=5).map(PageItem::Page).collect();
        assert_eq!(pages.page_items(), expected);
    }

    #[test]
    fn page_items_elide_long_footers() {
        use PageItem::{Ellipsis, Page};

        let mut pages = controller(200, PagePolicy::Clamp);
        assert_eq!(pages.last_page(), 17);
        assert_eq!(pages.page_items(), vec![Page(1), Page(2), Ellipsis, Page(17)]);

        pages.go_to(3);
        assert_eq!(
            pages.page_items(),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(17)]
        );

        pages.go_to(9);
        assert_eq!(
            pages.page_items(),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Ellipsis, Page(17)]
        );

        pages.go_to(17);
        assert_eq!(pages.page_items(), vec![Page(1), Ellipsis, Page(16), Page(17)]);
    }

    #[test]
    fn page_input_keeps_digits_only() {
        assert_eq!(sanitize_page_input("1a2-3 "), "123");
        assert_eq!(parse_page_input("4x"), Some(4));
        assert_eq!(parse_page_input("abc"), None);
        assert_eq!(parse_page_input(""), None);
        assert_eq!(parse_page_input("99999999999999999999999999"), None);
    }
}
