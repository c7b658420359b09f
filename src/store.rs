//! Loaded Page State
//!
//! Accumulated list state behind the "load more" affordances. Pure logic,
//! no web APIs, so it stays testable on the host target.

use std::collections::HashSet;

use crate::models::{Game, GamesPage};

/// Display-only ordering applied on top of the accumulated list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// API arrival order
    #[default]
    Api,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    /// Toggle cycle: API order only appears before the first click
    pub fn next(self) -> SortOrder {
        match self {
            SortOrder::Api => SortOrder::NameAsc,
            SortOrder::NameAsc => SortOrder::NameDesc,
            SortOrder::NameDesc => SortOrder::NameAsc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Api | SortOrder::NameAsc => "Sort By A–Z",
            SortOrder::NameDesc => "Sort By Z–A",
        }
    }
}

/// Accumulated games plus pagination bookkeeping.
///
/// Invariants: no duplicate ids; `cursor` is one past the highest requested
/// end offset; merged rows keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameList {
    items: Vec<Game>,
    total: Option<u64>,
    cursor: u32,
    exhausted: bool,
}

impl GameList {
    pub fn new() -> Self {
        GameList {
            items: Vec::new(),
            total: None,
            cursor: 1,
            exhausted: false,
        }
    }

    pub fn items(&self) -> &[Game] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Running total as reported by the API, if known
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Next unfetched 1-based range start
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Count for the "Showing X of Y" label: highest fetched offset capped
    /// by the reported total
    pub fn shown(&self) -> u64 {
        let end = u64::from(self.cursor.saturating_sub(1));
        match self.total {
            Some(total) => end.min(total),
            None => end,
        }
    }

    /// Whether "load more" should still be offered
    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    /// Merge one fetched page covering offsets up to `end` (inclusive),
    /// where `requested` rows were asked for.
    ///
    /// Append-only, first-write-wins on id; the cursor advances even for an
    /// empty page so an empty range is never refetched forever. A short page
    /// or a reached total marks the list exhausted.
    pub fn merge_page(&mut self, requested: u32, end: u32, page: GamesPage) {
        if let Some(total) = page.total {
            if total > 0 {
                self.total = Some(total);
            }
        }

        let received = page.rows.len() as u32;
        let mut seen: HashSet<u32> = self.items.iter().map(|g| g.id).collect();
        for row in page.rows {
            if seen.insert(row.id) {
                self.items.push(row);
            }
        }

        self.cursor = end + 1;

        if received < requested {
            self.exhausted = true;
        }
        if let Some(total) = self.total {
            if self.items.len() as u64 >= total {
                self.exhausted = true;
            }
        }
    }

    /// Items in the given display order; never mutates the underlying list
    pub fn display(&self, order: SortOrder) -> Vec<Game> {
        let mut out = self.items.clone();
        match order {
            SortOrder::Api => {}
            SortOrder::NameAsc => {
                out.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            }
            SortOrder::NameDesc => {
                out.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()))
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u32, name: &str) -> Game {
        Game {
            id,
            name: name.to_string(),
            image_url: None,
            average_rating: None,
            players_min: None,
            players_max: None,
            time_min: None,
            time_max: None,
            age_plus: None,
            category: None,
            description: None,
        }
    }

    fn page(total: Option<u64>, ids: &[u32]) -> GamesPage {
        GamesPage {
            total,
            rows: ids.iter().map(|&id| game(id, &format!("game {id}"))).collect(),
        }
    }

    #[test]
    fn merge_dedupes_and_keeps_first_seen_order() {
        let mut list = GameList::new();
        list.merge_page(3, 3, page(None, &[1, 2, 3]));
        list.merge_page(3, 6, page(None, &[3, 4, 2]));
        let ids: Vec<u32> = list.items().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn overlapping_second_page_counts_unique_items_only() {
        // 20 rows, then 20 rows of which 3 ids overlap: 37 unique, cursor 41
        let first: Vec<u32> = (1..=20).collect();
        let mut second: Vec<u32> = (21..=37).collect();
        second.extend([1, 10, 20]);

        let mut list = GameList::new();
        list.merge_page(20, 20, page(Some(57), &first));
        list.merge_page(20, 40, page(None, &second));

        assert_eq!(list.len(), 37);
        assert_eq!(list.cursor(), 41);
        assert_eq!(list.total(), Some(57));
        assert!(list.has_more());
    }

    #[test]
    fn empty_page_advances_cursor_and_exhausts() {
        let mut list = GameList::new();
        list.merge_page(20, 20, page(None, &[]));
        assert_eq!(list.cursor(), 21);
        assert!(list.is_empty());
        assert!(!list.has_more());
    }

    #[test]
    fn zero_total_stays_unknown() {
        let mut list = GameList::new();
        list.merge_page(2, 2, page(Some(0), &[1, 2]));
        assert_eq!(list.total(), None);
        assert!(list.has_more());
    }

    #[test]
    fn short_page_exhausts_even_without_total() {
        let mut list = GameList::new();
        list.merge_page(20, 20, page(None, &[1, 2, 3]));
        assert!(!list.has_more());
        assert_eq!(list.cursor(), 21);
    }

    #[test]
    fn reaching_total_exhausts() {
        let mut list = GameList::new();
        list.merge_page(2, 2, page(Some(4), &[1, 2]));
        assert!(list.has_more());
        list.merge_page(2, 4, page(None, &[3, 4]));
        assert!(!list.has_more());
    }

    #[test]
    fn display_sort_leaves_underlying_order_alone() {
        let mut list = GameList::new();
        list.merge_page(
            3,
            3,
            GamesPage {
                total: None,
                rows: vec![game(1, "Zombicide"), game(2, "Azul"), game(3, "Brass")],
            },
        );

        let asc: Vec<String> = list
            .display(SortOrder::NameAsc)
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(asc, vec!["Azul", "Brass", "Zombicide"]);

        let api: Vec<u32> = list.display(SortOrder::Api).iter().map(|g| g.id).collect();
        assert_eq!(api, vec![1, 2, 3]);
        // underlying order untouched
        let ids: Vec<u32> = list.items().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn sort_toggle_cycle_never_returns_to_api_order() {
        let order = SortOrder::Api;
        let order = order.next();
        assert_eq!(order, SortOrder::NameAsc);
        let order = order.next();
        assert_eq!(order, SortOrder::NameDesc);
        assert_eq!(order.next(), SortOrder::NameAsc);
    }
}
