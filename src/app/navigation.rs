//! Page cursor and selection handling.

use super::App;
use crate::models::Post;
use crate::pagination::{page_count, page_slice, PageControl};

impl App {
    /// Number of pages for the current collection. Never less than 1.
    pub fn page_count(&self) -> usize {
        page_count(self.store.total(), self.page_size)
    }

    /// Posts shown on the current page.
    pub fn visible_posts(&self) -> &[Post] {
        page_slice(self.store.posts(), self.page_size, self.current_page)
    }

    /// The highlighted post on the current page.
    pub fn selected_post(&self) -> Option<&Post> {
        self.visible_posts().get(self.selected)
    }

    /// Move the cursor to `page`, clamped into `[1, pages]`.
    ///
    /// Selection resets to the first post when the page actually changes.
    pub fn go_to_page(&mut self, page: usize) {
        let target = page.clamp(1, self.page_count());
        if target != page {
            tracing::debug!(requested = page, clamped = target, "page request out of range");
        }
        if target != self.current_page {
            self.current_page = target;
            self.selected = 0;
            self.mark_dirty();
        }
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    pub fn last_page(&mut self) {
        self.go_to_page(self.page_count());
    }

    /// Activate a navigation-bar control. Disabled controls do nothing.
    pub fn activate_control(&mut self, control: PageControl) {
        if !control.is_enabled() {
            return;
        }
        if let Some(target) = control.target(self.current_page) {
            self.go_to_page(target);
        }
    }

    /// Clamp the cursor after the number of posts changed.
    ///
    /// Only moves the cursor down: a cursor inside the valid range is left
    /// alone even if pages were added.
    pub fn reconcile_page(&mut self) {
        let pages = self.page_count();
        if self.current_page > pages {
            tracing::debug!(from = self.current_page, to = pages, "clamping page cursor");
            self.current_page = pages;
            self.mark_dirty();
        }
        if self.current_page == 0 {
            self.current_page = 1;
        }
        self.clamp_selection();
    }

    /// Keep the selection on an existing post of the current page.
    pub fn clamp_selection(&mut self) {
        let visible = self.visible_posts().len();
        self.selected = self.selected.min(visible.saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        let visible = self.visible_posts().len();
        if self.selected + 1 < visible {
            self.selected += 1;
            self.mark_dirty();
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.mark_dirty();
        }
    }
}
