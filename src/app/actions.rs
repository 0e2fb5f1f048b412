//! User actions: store mutations and the feedback modal.

use std::time::Instant;

use super::App;
use crate::feedback::FeedbackForm;
use crate::pagination::page_count;
use crate::state::PostsAction;

impl App {
    /// Run an action through the post store and reconcile the page cursor.
    pub fn dispatch(&mut self, action: PostsAction) {
        self.store.dispatch(action);
        self.reconcile_page();
        self.mark_dirty();
    }

    /// Remove a post locally.
    ///
    /// If the deletion empties the trailing page, the cursor steps back to
    /// the new last page. Returns `false` when no post has that id.
    pub fn delete_post(&mut self, id: i64) -> bool {
        if !self.store.state().contains(id) {
            tracing::debug!(id, "delete ignored: no such post");
            return false;
        }

        let total_before = self.store.total();
        self.store.dispatch(PostsAction::DeletePost(id));

        let last_page_after = page_count(total_before.saturating_sub(1), self.page_size);
        if self.current_page > last_page_after {
            self.current_page = last_page_after;
        }
        self.reconcile_page();
        self.mark_dirty();

        tracing::debug!(id, remaining = self.store.total(), "post deleted");
        true
    }

    /// Delete the highlighted post, if any.
    pub fn delete_selected(&mut self) -> bool {
        match self.selected_post().map(|p| p.id) {
            Some(id) => self.delete_post(id),
            None => false,
        }
    }

    pub fn toggle_view(&mut self) {
        self.dispatch(PostsAction::ToggleView);
        tracing::debug!(mode = self.store.view_mode().label(), "view toggled");
    }

    /// Open the highlighted post's thumbnail in the system browser.
    pub fn open_selected_thumbnail(&mut self) {
        let Some(url) = self.selected_post().map(|p| p.thumbnail_url()) else {
            return;
        };
        match open::that_detached(&url) {
            Ok(()) => {
                tracing::debug!(%url, "opened thumbnail");
                self.set_status(format!("Opened {}", url));
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "failed to open thumbnail");
                self.set_status(format!("Could not open {}", url));
            }
        }
    }

    /// Open a fresh feedback form, discarding any previous one.
    pub fn open_feedback(&mut self) {
        self.feedback = Some(FeedbackForm::new());
        self.feedback_dismiss_at = None;
        self.mark_dirty();
    }

    /// Close the feedback modal and drop everything typed into it.
    pub fn close_feedback(&mut self) {
        if self.feedback.take().is_some() {
            self.mark_dirty();
        }
        self.feedback_dismiss_at = None;
    }

    pub fn is_feedback_open(&self) -> bool {
        self.feedback.is_some()
    }

    pub fn feedback_input(&mut self, c: char) {
        if let Some(form) = self.feedback.as_mut() {
            form.insert_char(c);
            self.needs_redraw = true;
        }
    }

    pub fn feedback_backspace(&mut self) {
        if let Some(form) = self.feedback.as_mut() {
            form.backspace();
            self.needs_redraw = true;
        }
    }

    pub fn feedback_focus_next(&mut self) {
        if let Some(form) = self.feedback.as_mut() {
            form.focus_next();
            self.needs_redraw = true;
        }
    }

    pub fn feedback_focus_prev(&mut self) {
        if let Some(form) = self.feedback.as_mut() {
            form.focus_prev();
            self.needs_redraw = true;
        }
    }

    /// Validate and submit the open form.
    ///
    /// On success the confirmation is shown and the modal is scheduled to
    /// close after the dismiss delay, measured from `now`.
    pub fn submit_feedback(&mut self, now: Instant) -> bool {
        let Some(form) = self.feedback.as_mut() else {
            return false;
        };
        let already_submitted = form.submitted;
        let accepted = form.submit();
        let error_count = form.errors.len();
        self.mark_dirty();

        if accepted && !already_submitted {
            tracing::info!("feedback submitted");
            self.feedback_dismiss_at = Some(now + self.feedback_dismiss_delay);
        } else if !accepted {
            tracing::debug!(errors = error_count, "feedback rejected");
        }
        accepted
    }

    /// Close a submitted form once its dismiss deadline has passed.
    ///
    /// Returns `true` if the modal was closed.
    pub fn check_feedback_dismiss(&mut self, now: Instant) -> bool {
        match self.feedback_dismiss_at {
            Some(deadline) if now >= deadline => {
                self.close_feedback();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackField;
    use crate::models::{Post, ViewMode};
    use std::time::Duration;

    fn app_with_posts(n: i64) -> App {
        let mut app = App::new();
        let posts = (1..=n)
            .map(|i| Post::new(i, format!("Title {}", i), "body"))
            .collect();
        app.dispatch(PostsAction::SetPosts(posts));
        app
    }

    fn fill_valid(app: &mut App) {
        let form = app.feedback.as_mut().unwrap();
        form.set_value(FeedbackField::FirstName, "John");
        form.set_value(FeedbackField::LastName, "Doe");
        form.set_value(FeedbackField::Email, "john@example.com");
        form.set_value(FeedbackField::Phone, "+14155551234");
        form.set_value(FeedbackField::Address, "1 Main St");
        form.set_value(FeedbackField::Country, "US");
    }

    #[test]
    fn test_deleting_only_post_on_last_page_steps_back() {
        let mut app = app_with_posts(13);
        app.last_page();
        assert_eq!(app.current_page, 3);

        assert!(app.delete_post(13));
        assert_eq!(app.current_page, 2);
        assert_eq!(app.visible_posts().len(), 6);
    }

    #[test]
    fn test_delete_on_earlier_page_keeps_cursor() {
        let mut app = app_with_posts(13);
        app.go_to_page(2);
        assert!(app.delete_post(1));
        assert_eq!(app.current_page, 2);
        assert_eq!(app.visible_posts()[0].id, 8);
    }

    #[test]
    fn test_delete_unknown_id_changes_nothing() {
        let mut app = app_with_posts(7);
        app.last_page();
        assert!(!app.delete_post(42));
        assert_eq!(app.store.total(), 7);
        assert_eq!(app.current_page, 2);
    }

    #[test]
    fn test_delete_last_remaining_post() {
        let mut app = app_with_posts(1);
        assert!(app.delete_post(1));
        assert_eq!(app.current_page, 1);
        assert!(app.visible_posts().is_empty());
        assert!(!app.delete_selected());
    }

    #[test]
    fn test_delete_selected_clamps_selection() {
        let mut app = app_with_posts(8);
        app.go_to_page(2);
        app.select_next();
        assert_eq!(app.selected_post().map(|p| p.id), Some(8));
        assert!(app.delete_selected());
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_post().map(|p| p.id), Some(7));
    }

    #[test]
    fn test_toggle_view_keeps_page_and_posts() {
        let mut app = app_with_posts(14);
        app.go_to_page(2);
        app.toggle_view();
        assert_eq!(app.store.view_mode(), ViewMode::List);
        assert_eq!(app.current_page, 2);
        assert_eq!(app.store.total(), 14);
    }

    #[test]
    fn test_set_posts_with_fewer_items_clamps_cursor() {
        let mut app = app_with_posts(30);
        app.last_page();
        app.dispatch(PostsAction::SetPosts(vec![Post::new(1, "a", "b")]));
        assert_eq!(app.current_page, 1);
    }

    #[test]
    fn test_feedback_open_is_fresh_each_time() {
        let mut app = App::new();
        app.open_feedback();
        app.feedback_input('x');
        app.close_feedback();
        assert!(!app.is_feedback_open());

        app.open_feedback();
        let form = app.feedback.as_ref().unwrap();
        assert_eq!(form.value(FeedbackField::FirstName), "");
        assert!(form.errors.is_empty());
        assert!(!form.submitted);
    }

    #[test]
    fn test_invalid_submit_keeps_modal_open() {
        let mut app = App::new();
        app.open_feedback();
        assert!(!app.submit_feedback(Instant::now()));
        assert_eq!(app.feedback.as_ref().unwrap().errors.len(), 6);
        assert!(app.feedback_dismiss_at.is_none());
    }

    #[test]
    fn test_valid_submit_dismisses_after_delay() {
        let mut app = App::new();
        app.open_feedback();
        fill_valid(&mut app);

        let now = Instant::now();
        assert!(app.submit_feedback(now));
        assert!(app.feedback.as_ref().unwrap().submitted);

        assert!(!app.check_feedback_dismiss(now + Duration::from_millis(1199)));
        assert!(app.is_feedback_open());
        assert!(app.check_feedback_dismiss(now + Duration::from_millis(1200)));
        assert!(!app.is_feedback_open());
    }

    #[test]
    fn test_closing_early_cancels_pending_dismiss() {
        let mut app = App::new();
        app.open_feedback();
        fill_valid(&mut app);
        let now = Instant::now();
        app.submit_feedback(now);
        app.close_feedback();
        app.open_feedback();

        assert!(!app.check_feedback_dismiss(now + Duration::from_secs(5)));
        assert!(app.is_feedback_open());
    }

    #[test]
    fn test_feedback_commands_without_modal_are_noops() {
        let mut app = App::new();
        app.feedback_input('a');
        app.feedback_backspace();
        app.feedback_focus_next();
        assert!(!app.submit_feedback(Instant::now()));
        assert!(!app.is_feedback_open());
    }
}
