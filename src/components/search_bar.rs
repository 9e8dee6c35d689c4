use serde::Serialize;

use crate::breakpoint::{Layout, Viewport};
use crate::domain::types::SearchQuery;
use crate::view::ListEvent;

/// Name of the query-string parameter carrying the search text.
pub const SEARCH_PARAM: &str = "search";

/// Free-text search form above the results table.
pub struct SearchBar<'a> {
    query: &'a SearchQuery,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchBarView {
    pub query: String,
    pub param: &'static str,
    pub placeholder: &'static str,
    /// `stacked` puts the submit button under the input at narrow widths.
    pub layout: Layout,
}

impl<'a> SearchBar<'a> {
    pub fn new(query: &'a SearchQuery) -> Self {
        Self { query }
    }

    /// Turns the raw input into a search event; the text is trimmed.
    ///
    /// Submitting the same text again is still an event: it re-runs the
    /// search from the first page.
    pub fn submit(&self, input: &str) -> ListEvent {
        ListEvent::Search(SearchQuery::new(input))
    }

    pub fn view(&self, viewport: Viewport) -> SearchBarView {
        SearchBarView {
            query: self.query.to_string(),
            param: SEARCH_PARAM,
            placeholder: "جستجو بر اساس نام، شناسه بیمار یا کد ملی",
            layout: viewport.layout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_trims_input() {
        let current = SearchQuery::default();
        let bar = SearchBar::new(&current);

        assert_eq!(
            bar.submit("  smith  "),
            ListEvent::Search(SearchQuery::new("smith"))
        );
    }

    #[test]
    fn layout_follows_breakpoint() {
        let current = SearchQuery::new("ali");
        let bar = SearchBar::new(&current);

        assert_eq!(bar.view(Viewport::new(768)).layout, Layout::Stacked);
        assert_eq!(bar.view(Viewport::new(1024)).layout, Layout::Inline);
        assert_eq!(bar.view(Viewport::new(1024)).query, "ali");
    }
}
