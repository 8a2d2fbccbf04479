use std::cmp::Ordering;

use crate::models::Product;

use super::LOW_STOCK_THRESHOLD;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Code,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort and pagination state over the in-memory collection. The view never
/// touches the network and never stores products of its own; it computes a
/// window over whatever collection the session hands it.
#[derive(Debug, Clone)]
pub struct ListView {
    sort: Option<(SortField, SortDirection)>,
    items_per_page: usize,
    current_page: usize,
}

impl Default for ListView {
    fn default() -> Self {
        ListView::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        ListView {
            sort: None,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            current_page: 1,
        }
    }

    pub fn sort(&self) -> Option<(SortField, SortDirection)> {
        self.sort
    }

    /// Selects the sort field. Re-selecting the active field flips the
    /// direction; switching to another field resets it to ascending.
    pub fn sort_on(&mut self, field: SortField) {
        self.sort = match self.sort {
            Some((current, direction)) if current == field => Some((field, direction.flipped())),
            _ => Some((field, SortDirection::Ascending)),
        };
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Changes the page size and snaps back to the first page.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.items_per_page)
    }

    /// Navigates to `page`, clamped to the valid range for a collection of
    /// `len` items. An empty collection pins the view to page 1.
    pub fn go_to_page(&mut self, page: usize, len: usize) {
        self.current_page = page.clamp(1, self.total_pages(len).max(1));
    }

    pub fn next_page(&mut self, len: usize) {
        self.go_to_page(self.current_page + 1, len);
    }

    pub fn previous_page(&mut self, len: usize) {
        self.go_to_page(self.current_page.saturating_sub(1), len);
    }

    /// The full collection in display order: a stable sort on the selected
    /// field, or the collection's own order when no field is selected.
    /// String fields compare case-insensitively, the count numerically.
    pub fn ordered<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut rows: Vec<&Product> = products.iter().collect();

        if let Some((field, direction)) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = match field {
                    SortField::Name => compare_text(&a.name, &b.name),
                    SortField::Code => compare_text(&a.code, &b.code),
                    SortField::Count => a.count.cmp(&b.count),
                };

                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        rows
    }

    /// The currently visible window: sorted, then sliced to
    /// `[(page - 1) * k, page * k)`. A page left dangling past the end of a
    /// shrunken collection is clamped before slicing.
    pub fn visible<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let rows = self.ordered(products);
        let page = self.current_page.clamp(1, self.total_pages(rows.len()).max(1));

        rows.into_iter()
            .skip((page - 1) * self.items_per_page)
            .take(self.items_per_page)
            .collect()
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Aggregates over the full collection, regardless of the current page,
/// sort or edit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockTotals {
    /// Sum of the stock counts of every product.
    pub units: u64,
    /// Number of products at or below the low-stock threshold.
    pub low_stock: usize,
}

impl StockTotals {
    pub fn of(products: &[Product]) -> StockTotals {
        StockTotals {
            units: products.iter().map(|p| u64::from(p.count)).sum(),
            low_stock: products
                .iter()
                .filter(|p| p.count <= LOW_STOCK_THRESHOLD)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(name: &str, code: &str, count: u32) -> Product {
        let now = Utc::now();

        Product {
            id: format!("{}-{}", name, code),
            name: name.to_owned(),
            code: code.to_owned(),
            count,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn names(rows: &[&Product]) -> Vec<String> {
        rows.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn unsorted_view_keeps_collection_order() {
        let products = vec![product("b", "2", 1), product("a", "1", 2)];
        let view = ListView::new();

        assert_eq!(names(&view.ordered(&products)), ["b", "a"]);
    }

    #[test]
    fn sorts_names_case_insensitively() {
        let products = vec![
            product("banana", "3", 1),
            product("Apple", "1", 2),
            product("cherry", "2", 3),
        ];
        let mut view = ListView::new();
        view.sort_on(SortField::Name);

        assert_eq!(names(&view.ordered(&products)), ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn reselecting_the_field_flips_direction() {
        let mut view = ListView::new();
        view.sort_on(SortField::Count);
        assert_eq!(view.sort(), Some((SortField::Count, SortDirection::Ascending)));

        view.sort_on(SortField::Count);
        assert_eq!(view.sort(), Some((SortField::Count, SortDirection::Descending)));

        view.sort_on(SortField::Count);
        assert_eq!(view.sort(), Some((SortField::Count, SortDirection::Ascending)));
    }

    #[test]
    fn switching_fields_resets_to_ascending() {
        let mut view = ListView::new();
        view.sort_on(SortField::Name);
        view.sort_on(SortField::Name);
        view.sort_on(SortField::Code);

        assert_eq!(view.sort(), Some((SortField::Code, SortDirection::Ascending)));
    }

    #[test]
    fn equal_keys_keep_their_relative_order() {
        let products = vec![
            product("first", "A", 3),
            product("second", "A", 3),
            product("third", "A", 3),
        ];
        let mut view = ListView::new();
        view.sort_on(SortField::Code);

        assert_eq!(names(&view.ordered(&products)), ["first", "second", "third"]);

        view.sort_on(SortField::Code); // descending, still stable
        assert_eq!(names(&view.ordered(&products)), ["first", "second", "third"]);
    }

    #[test]
    fn descending_count_sort() {
        let products = vec![product("a", "1", 1), product("b", "2", 9), product("c", "3", 4)];
        let mut view = ListView::new();
        view.sort_on(SortField::Count);
        view.sort_on(SortField::Count);

        assert_eq!(names(&view.ordered(&products)), ["b", "c", "a"]);
    }

    #[test]
    fn total_pages_is_the_ceiling() {
        let view = ListView::new(); // 10 per page
        assert_eq!(view.total_pages(0), 0);
        assert_eq!(view.total_pages(10), 1);
        assert_eq!(view.total_pages(11), 2);
        assert_eq!(view.total_pages(25), 3);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let products: Vec<Product> = (0..23)
            .map(|i| product(&format!("p{:02}", i), &format!("c{:02}", i), 1))
            .collect();
        let mut view = ListView::new();

        assert_eq!(view.visible(&products).len(), 10);

        view.go_to_page(3, products.len());
        assert_eq!(view.visible(&products).len(), 3);
    }

    #[test]
    fn first_page_shows_the_first_window() {
        let products: Vec<Product> = (0..15)
            .map(|i| product(&format!("p{:02}", i), &format!("c{:02}", i), 1))
            .collect();
        let view = ListView::new();

        assert_eq!(names(&view.visible(&products))[0], "p00");
        assert_eq!(names(&view.visible(&products))[9], "p09");
    }

    #[test]
    fn changing_page_size_resets_to_page_one() {
        let mut view = ListView::new();
        view.go_to_page(3, 40);
        assert_eq!(view.current_page(), 3);

        view.set_items_per_page(20);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.items_per_page(), 20);
    }

    #[test]
    fn navigation_clamps_to_the_valid_range() {
        let mut view = ListView::new();
        view.go_to_page(99, 25);
        assert_eq!(view.current_page(), 3);

        view.previous_page(25);
        assert_eq!(view.current_page(), 2);

        view.go_to_page(0, 25);
        assert_eq!(view.current_page(), 1);

        view.previous_page(25);
        assert_eq!(view.current_page(), 1);

        let mut empty = ListView::new();
        empty.next_page(0);
        assert_eq!(empty.current_page(), 1);
    }

    #[test]
    fn dangling_page_is_clamped_after_the_collection_shrinks() {
        let products: Vec<Product> = (0..11)
            .map(|i| product(&format!("p{:02}", i), &format!("c{:02}", i), 1))
            .collect();
        let mut view = ListView::new();
        view.go_to_page(2, products.len());

        let shrunk: Vec<Product> = products[..5].to_vec();
        assert_eq!(view.visible(&shrunk).len(), 5);
    }

    #[test]
    fn totals_cover_the_whole_collection() {
        let products = vec![
            product("a", "1", 0),
            product("b", "2", 5),
            product("c", "3", 12),
            product("d", "4", 3),
        ];
        let mut view = ListView::new();
        view.set_items_per_page(2);
        view.sort_on(SortField::Count);

        // page/sort state must not affect the aggregates
        let totals = StockTotals::of(&products);
        assert_eq!(totals.units, 20);
        assert_eq!(totals.low_stock, 3);
        assert_eq!(view.visible(&products).len(), 2);
    }
}
