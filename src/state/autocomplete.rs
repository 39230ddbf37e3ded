//! Autocomplete View-Model
//!
//! Holds a query string and a fixed list of suggestions, exposing the
//! subset matching the query. Filtering is recomputed on every read so the
//! view stays consistent with whatever signal holds the model.

/// Anything that can be suggested by name
pub trait Named {
    fn name(&self) -> &str;
}

/// Query + fixed suggestion list + last explicit selection
#[derive(Clone, Debug)]
pub struct Autocomplete<T> {
    query: String,
    selected: Option<T>,
    items: Vec<T>,
}

impl<T: Named + Clone> Autocomplete<T> {
    /// Create a model over a fixed item list, with an empty query and
    /// nothing selected. The list is never mutated by the widget.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            query: String::new(),
            selected: None,
            items,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the query (bound to the text input)
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Items matching the current query, in original list order.
    ///
    /// An empty query matches everything. Otherwise a case-insensitive
    /// substring match on the item name; lowercasing is codepoint-wise.
    pub fn filtered(&self) -> Vec<T> {
        if self.query.is_empty() {
            return self.items.clone();
        }

        let needle = self.query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Record an explicit selection: the query becomes the item name and
    /// the item is remembered. Membership in the source list is not
    /// checked; callers may pass arbitrary items.
    pub fn select(&mut self, item: T) {
        self.query = item.name().to_string();
        self.selected = Some(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Entry(&'static str);

    impl Named for Entry {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn catalog() -> Vec<Entry> {
        vec![
            Entry("Electronics"),
            Entry("Office Supplies"),
            Entry("Electrical Tools"),
            Entry("Furniture"),
        ]
    }

    #[test]
    fn empty_query_returns_all_items_in_order() {
        let model = Autocomplete::new(catalog());
        assert_eq!(model.filtered(), catalog());
    }

    #[test]
    fn filter_is_case_insensitive() {
        let mut model = Autocomplete::new(catalog());

        model.set_query("ELECTR".to_string());
        let upper = model.filtered();
        model.set_query("electr".to_string());
        let lower = model.filtered();

        assert_eq!(upper, lower);
        assert_eq!(upper, vec![Entry("Electronics"), Entry("Electrical Tools")]);
    }

    #[test]
    fn filter_matches_substrings_anywhere() {
        let mut model = Autocomplete::new(catalog());
        model.set_query("supp".to_string());
        assert_eq!(model.filtered(), vec![Entry("Office Supplies")]);
    }

    #[test]
    fn longer_query_refines_the_shorter_one() {
        let mut model = Autocomplete::new(catalog());

        model.set_query("el".to_string());
        let broad = model.filtered();
        model.set_query("elect".to_string());
        let narrow = model.filtered();

        // Every narrow match appears in the broad result, in the same order.
        let mut broad_iter = broad.iter();
        for item in &narrow {
            assert!(broad_iter.any(|b| b == item));
        }
    }

    #[test]
    fn filtered_preserves_source_order() {
        let mut model = Autocomplete::new(catalog());
        model.set_query("e".to_string());
        let result = model.filtered();

        let positions: Vec<usize> = result
            .iter()
            .map(|r| catalog().iter().position(|c| c == r).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn filtered_is_pure_and_repeatable() {
        let mut model = Autocomplete::new(catalog());
        model.set_query("office".to_string());
        assert_eq!(model.filtered(), model.filtered());
        assert_eq!(model.query(), "office");
    }

    #[test]
    fn select_sets_query_and_selection() {
        let mut model = Autocomplete::new(catalog());
        model.select(Entry("Furniture"));

        assert_eq!(model.query(), "Furniture");
        assert_eq!(model.selected(), Some(&Entry("Furniture")));
    }

    #[test]
    fn select_accepts_items_outside_the_list() {
        // Observed behavior: membership is not validated.
        let mut model = Autocomplete::new(catalog());
        model.select(Entry("Not A Category"));

        assert_eq!(model.query(), "Not A Category");
        assert_eq!(model.selected(), Some(&Entry("Not A Category")));
    }

    #[test]
    fn no_matches_yields_empty_view() {
        let mut model = Autocomplete::new(catalog());
        model.set_query("zzz".to_string());
        assert!(model.filtered().is_empty());
    }
}
