//! Paged list state shared by the content and user list screens
//!
//! Sorting and paging are the server's job: this only remembers the last page,
//! the choices the server offered, and which row is highlighted.

use skyadmin_core::{parse_options, parse_pager, ListPage, PagerLink, SelectOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView<T> {
    pub page: ListPage<T>,
    pub sort_options: Vec<SelectOption>,
    pub pager: Vec<PagerLink>,
    pub selected: usize,
    pub loading: bool,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            page: ListPage::default(),
            sort_options: Vec::new(),
            pager: Vec::new(),
            selected: 0,
            loading: false,
        }
    }
}

impl<T> ListView<T> {
    /// Replace the displayed page and re-read the server's sort/pager markup
    pub fn apply_page(&mut self, page: ListPage<T>) {
        self.sort_options = parse_options(&page.sort_output);
        self.pager = parse_pager(&page.pager_output);
        self.page = page;
        self.loading = false;
        if self.selected >= self.page.results.len() {
            self.selected = self.page.results.len().saturating_sub(1);
        }
    }

    pub fn records(&self) -> &[T] {
        &self.page.results
    }

    pub fn selected_record(&self) -> Option<&T> {
        self.page.results.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.page.results.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.page.results.len().saturating_sub(1);
    }

    /// Sort value following `current` among the server's options (wraps)
    ///
    /// An unknown current value starts from the option the server marked
    /// selected.
    pub fn next_sort(&self, current: &str) -> Option<String> {
        if self.sort_options.is_empty() {
            return None;
        }
        let position = self
            .sort_options
            .iter()
            .position(|o| o.value == current)
            .or_else(|| self.sort_options.iter().position(|o| o.selected));
        let next = match position {
            Some(i) => (i + 1) % self.sort_options.len(),
            None => 0,
        };
        Some(self.sort_options[next].value.clone())
    }

    /// Label of the active sort
    pub fn sort_label(&self, current: &str) -> String {
        self.sort_options
            .iter()
            .find(|o| o.value == current)
            .or_else(|| self.sort_options.iter().find(|o| o.selected))
            .map(|o| o.label.clone())
            .unwrap_or_default()
    }

    /// Whether the pager links to `page`
    pub fn has_page(&self, page: u32) -> bool {
        self.pager.iter().any(|link| link.page == page)
    }

    /// Highest page number the pager mentions (at least `current`)
    pub fn last_page(&self, current: u32) -> u32 {
        self.pager
            .iter()
            .map(|link| link.page)
            .max()
            .unwrap_or(current)
            .max(current)
    }
}
