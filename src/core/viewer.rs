use crate::models::{Trip, TripTable};

/// Walks a table `page_size` rows at a time.
pub struct RawPager<'a> {
    table: &'a TripTable,
    offset: usize,
    page_size: usize,
}

impl<'a> RawPager<'a> {
    pub fn new(table: &'a TripTable, page_size: usize) -> Self {
        Self {
            table,
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    /// Next slice of rows; empty once the table is exhausted.
    pub fn next_page(&mut self) -> &'a [Trip] {
        let page = self.table.slice(self.offset, self.page_size);
        self.offset = self.offset.saturating_add(self.page_size);
        page
    }

    /// Index of the first row the next page will show.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
