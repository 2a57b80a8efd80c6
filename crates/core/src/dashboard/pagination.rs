/// Selectable table page sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 5] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    #[must_use]
    pub fn value(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Maps a raw size back to a variant; sizes outside the set are rejected.
    #[must_use]
    pub fn from_value(value: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.value() == value)
    }
}

/// Number of pages for `len` items, never less than one.
#[must_use]
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.value()).max(1)
}

/// Table pagination state: 1-indexed current page, page size and the
/// uncommitted "go to page" input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: PageSize,
    jump_input: String,
}

/// Resolved page bounds for a given item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl Pagination {
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page: 1,
            page_size,
            jump_input: String::new(),
        }
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub fn jump_input(&self) -> &str {
        &self.jump_input
    }

    /// Back to the first page, e.g. after a criteria change.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Clamps the current page into `[1, total_pages(len)]`.
    pub fn clamp(&mut self, len: usize) {
        let total = total_pages(len, self.page_size);
        self.page = self.page.clamp(1, total);
    }

    pub fn first(&mut self) {
        self.page = 1;
    }

    pub fn previous(&mut self) {
        self.page = self.page().saturating_sub(1).max(1);
    }

    pub fn next(&mut self, len: usize) {
        let total = total_pages(len, self.page_size);
        self.page = (self.page() + 1).min(total);
    }

    pub fn last(&mut self, len: usize) {
        self.page = total_pages(len, self.page_size);
    }

    pub fn set_jump_input(&mut self, input: impl Into<String>) {
        self.jump_input = input.into();
    }

    /// Commits the pending jump input if it names a page in range.
    ///
    /// On success the input is cleared and `true` returned. Otherwise the
    /// state is left untouched.
    pub fn confirm_jump(&mut self, len: usize) -> bool {
        let total = total_pages(len, self.page_size);
        match self.jump_input.trim().parse::<usize>() {
            Ok(target) if (1..=total).contains(&target) => {
                self.page = target;
                self.jump_input.clear();
                true
            }
            _ => false,
        }
    }

    /// Page bounds for `len` items, with the current page clamped.
    #[must_use]
    pub fn window(&self, len: usize) -> PageWindow {
        let total = total_pages(len, self.page_size);
        let page = self.page().min(total);
        let start = ((page - 1) * self.page_size.value()).min(len);
        let end = (start + self.page_size.value()).min(len);
        PageWindow {
            page,
            total_pages: total,
            start,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_has_minimum_of_one() {
        assert_eq!(total_pages(0, PageSize::Ten), 1);
        assert_eq!(total_pages(10, PageSize::Ten), 1);
        assert_eq!(total_pages(11, PageSize::Ten), 2);
        assert_eq!(total_pages(25, PageSize::Ten), 3);
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut pagination = Pagination::new(PageSize::Ten);
        pagination.set_jump_input("4");
        assert!(!pagination.confirm_jump(25));
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.jump_input(), "4");

        pagination.set_jump_input(" 3 ");
        assert!(pagination.confirm_jump(25));
        assert_eq!(pagination.page(), 3);
        assert_eq!(pagination.jump_input(), "");
    }

    #[test]
    fn jump_rejects_garbage_and_zero() {
        let mut pagination = Pagination::new(PageSize::Ten);
        for input in ["", "abc", "0", "-1", "2.5"] {
            pagination.set_jump_input(input);
            assert!(!pagination.confirm_jump(25), "accepted {input}");
            assert_eq!(pagination.page(), 1);
        }
    }

    #[test]
    fn navigation_saturates() {
        let mut pagination = Pagination::new(PageSize::Ten);
        pagination.previous();
        assert_eq!(pagination.page(), 1);

        pagination.next(25);
        pagination.next(25);
        pagination.next(25);
        assert_eq!(pagination.page(), 3);

        pagination.first();
        assert_eq!(pagination.page(), 1);
        pagination.last(25);
        assert_eq!(pagination.page(), 3);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut pagination = Pagination::new(PageSize::Five);
        pagination.last(25);
        assert_eq!(pagination.page(), 5);

        pagination.set_page_size(PageSize::Twenty);
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn clamp_keeps_page_in_range_when_items_shrink() {
        let mut pagination = Pagination::new(PageSize::Ten);
        pagination.last(95);
        assert_eq!(pagination.page(), 10);

        pagination.clamp(12);
        assert_eq!(pagination.page(), 2);

        pagination.clamp(0);
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn window_bounds_follow_current_page() {
        let mut pagination = Pagination::new(PageSize::Ten);
        let window = pagination.window(25);
        assert_eq!((window.start, window.end), (0, 10));

        pagination.last(25);
        let window = pagination.window(25);
        assert_eq!((window.start, window.end), (20, 25));
        assert!(window.has_previous());
        assert!(!window.has_next());
    }

    #[test]
    fn window_on_empty_list_is_single_empty_page() {
        let pagination = Pagination::new(PageSize::Ten);
        let window = pagination.window(0);
        assert_eq!(window.page, 1);
        assert_eq!(window.total_pages, 1);
        assert_eq!((window.start, window.end), (0, 0));
        assert!(!window.has_previous() && !window.has_next());
    }

    #[test]
    fn page_size_from_value_only_accepts_known_sizes() {
        assert_eq!(PageSize::from_value(50), Some(PageSize::Fifty));
        assert_eq!(PageSize::from_value(7), None);
    }
}
