use serde::Serialize;

use crate::view::ListEvent;

/// Row of numbered page links under the results table.
#[derive(Debug, Clone, Copy)]
pub struct PaginationControl {
    current_page: usize,
    total_pages: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub number: usize,
    /// The page on screen; rendered highlighted and without a link.
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaginationView {
    pub links: Vec<PageLink>,
}

impl PaginationControl {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Links for pages `1..=total_pages`; none when there are no pages.
    pub fn links(&self) -> Vec<PageLink> {
        (1..=self.total_pages)
            .map(|number| PageLink {
                number,
                active: number == self.current_page,
            })
            .collect()
    }

    /// Emits a page change unless `page` is the active page or not rendered.
    pub fn click(&self, page: usize) -> Option<ListEvent> {
        if page == self.current_page || page == 0 || page > self.total_pages {
            return None;
        }
        Some(ListEvent::ChangePage(page))
    }

    pub fn view(&self) -> PaginationView {
        PaginationView {
            links: self.links(),
        }
    }
}
