use serde::Serialize;

use crate::domain::types::PageSize;

/// Number of pages needed to show `total` rows; zero when there are no rows.
pub fn total_pages(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.get())
}

/// Clamps `page` into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Pagination facts derived from the result count; never stored on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    pub total: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub page: usize,
}

impl PageDescriptor {
    pub fn new(total: usize, page_size: PageSize, current_page: usize) -> Self {
        let total_pages = total_pages(total, page_size);

        Self {
            total,
            page_size: page_size.get(),
            total_pages,
            page: clamp_page(current_page, total_pages),
        }
    }
}
