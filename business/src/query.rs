//! Derivation of the filtered and paged views of the record store.
//!
//! Everything here is a pure function of its arguments; caching lives in
//! [`crate::TableState`].

use std::collections::BTreeSet;

use crate::{User, UserField, UserStatus};

/// Current search text, search field and status filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub search_text: String,
    pub search_field: UserField,
    /// Empty means no status filtering.
    pub status_filter: BTreeSet<UserStatus>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            search_field: UserField::FirstName,
            status_filter: BTreeSet::new(),
        }
    }
}

impl Query {
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty() && self.status_filter.is_empty()
    }

    pub fn matches(&self, user: &User) -> bool {
        self.matcher().matches(user)
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            needle: self.search_text.to_lowercase(),
            query: self,
        }
    }
}

/// A query with its search text lowered once, instead of once per record.
struct Matcher<'a> {
    needle: String,
    query: &'a Query,
}

impl Matcher<'_> {
    fn matches(&self, user: &User) -> bool {
        let text_ok = self.needle.is_empty()
            || user
                .field_text(self.query.search_field)
                .to_lowercase()
                .contains(&self.needle);
        let status_ok =
            self.query.status_filter.is_empty() || self.query.status_filter.contains(&user.status);
        text_ok && status_ok
    }
}

/// Records passing `query`, in store order.
pub fn filter<'a>(records: &'a [User], query: &Query) -> Vec<&'a User> {
    let matcher = query.matcher();
    records.iter().filter(|user| matcher.matches(user)).collect()
}

/// Store positions of the records passing `query`, in store order.
pub fn filter_indices(records: &[User], query: &Query) -> Vec<usize> {
    let matcher = query.matcher();
    records
        .iter()
        .enumerate()
        .filter(|(_, user)| matcher.matches(user))
        .map(|(index, _)| index)
        .collect()
}

/// The 1-based `page` of `items`. Pages outside the range, including page
/// 0, are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

/// Index range of `page` within a sequence of `len` items, clamped to `len`.
pub fn page_range(len: usize, page: usize, page_size: usize) -> std::ops::Range<usize> {
    let Some(first) = page.checked_sub(1) else {
        return 0..0;
    };
    let start = first.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// `ceil(count / page_size)`. An empty sequence has zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;

    #[test]
    fn empty_query_matches_everything() {
        let users = fixture::users();
        let query = Query::default();
        assert!(query.is_unfiltered());
        assert_eq!(filter(&users, &query).len(), users.len());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let users = fixture::users();
        let query = Query {
            search_text: "MIL".to_owned(),
            ..Query::default()
        };
        let found = filter(&users, &query);
        // only "Emily" contains "mil"
        assert_eq!(found.len(), 10);
        assert!(found.iter().all(|u| u.first_name == "Emily"));
    }

    #[test]
    fn search_uses_selected_field() {
        let users = fixture::users();
        let query = Query {
            search_text: "45500".to_owned(),
            search_field: UserField::Salary,
            ..Query::default()
        };
        let found = filter(&users, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "user-1");
    }

    #[test]
    fn filter_preserves_store_order() {
        let users = fixture::users();
        let query = Query {
            status_filter: BTreeSet::from([UserStatus::Danger]),
            ..Query::default()
        };
        let indices = filter_indices(&users, &query);
        assert_eq!(indices.len(), 25);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        assert!(indices.iter().all(|i| i % 4 == 2));
    }

    #[test]
    fn search_and_status_combine() {
        let users = fixture::users();
        let query = Query {
            search_text: "emily".to_owned(),
            search_field: UserField::FirstName,
            status_filter: BTreeSet::from([UserStatus::Active, UserStatus::Warning]),
        };
        // Emily sits at multiples of 10, which are Active when divisible by 20
        let found = filter(&users, &query);
        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|u| u.status == UserStatus::Active));
    }

    #[test]
    fn no_match_is_an_empty_view() {
        let users = fixture::users();
        let query = Query {
            search_text: "zzz".to_owned(),
            ..Query::default()
        };
        assert!(filter(&users, &query).is_empty());
    }

    #[test]
    fn paginate_slices_and_clamps() {
        let items: Vec<u32> = (0..30).collect();
        assert_eq!(paginate(&items, 1, 12), &items[0..12]);
        assert_eq!(paginate(&items, 3, 12), &items[24..30]);
        assert!(paginate(&items, 4, 12).is_empty());
        assert!(paginate(&items, 0, 12).is_empty());
        assert!(paginate(&items, usize::MAX, 48).is_empty());
    }

    #[test]
    fn pages_reconstruct_the_sequence() {
        let items: Vec<u32> = (0..101).collect();
        for size in [12, 24, 48] {
            let pages = total_pages(items.len(), size);
            let mut joined = Vec::new();
            for page in 1..=pages {
                let slice = paginate(&items, page, size);
                assert!(slice.len() <= size);
                joined.extend_from_slice(slice);
            }
            assert_eq!(joined, items);
        }
    }

    #[test]
    fn total_pages_is_ceiling() {
        for size in [12, 24, 48] {
            assert_eq!(total_pages(0, size), 0);
            assert_eq!(total_pages(1, size), 1);
            assert_eq!(total_pages(size, size), 1);
            assert_eq!(total_pages(size + 1, size), 2);
            assert_eq!(total_pages(100, size), 100_usize.div_ceil(size));
        }
        assert_eq!(total_pages(100, 12), 9);
        assert_eq!(total_pages(5, 0), 0);
    }
}
