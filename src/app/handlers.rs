//! Message and command handling for the App.

use std::time::Instant;

use super::{App, AppMessage, LoadTrigger};
use crate::input::Command;
use crate::state::PostsAction;

impl App {
    /// Apply a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::PostsLoaded(posts) => {
                self.dispatch(PostsAction::SetPosts(posts));
                self.finish_loading(LoadTrigger::FetchSettled);
            }
            AppMessage::PostsLoadFailed { error } => {
                // already logged by the loader; the store keeps what it had
                tracing::debug!(%error, "load failed, continuing with current posts");
                self.finish_loading(LoadTrigger::FetchSettled);
            }
            AppMessage::LoadingTimedOut => {
                self.finish_loading(LoadTrigger::TimedOut);
            }
        }
    }

    /// Resolve the loading gate. Later triggers are ignored.
    pub fn finish_loading(&mut self, trigger: LoadTrigger) {
        if self.load_gate.resolve(trigger) {
            tracing::info!(?trigger, posts = self.store.total(), "loading finished");
            self.mark_dirty();
        }
    }

    /// Execute a command produced by the input registry.
    pub fn execute_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.quit(),
            Command::ToggleView => self.toggle_view(),
            Command::NextPage => self.next_page(),
            Command::PrevPage => self.prev_page(),
            Command::FirstPage => self.first_page(),
            Command::LastPage => self.last_page(),
            Command::GoToPage(page) => self.go_to_page(page),
            Command::SelectNext => self.select_next(),
            Command::SelectPrev => self.select_prev(),
            Command::DeleteSelected => {
                self.delete_selected();
            }
            Command::OpenThumbnail => self.open_selected_thumbnail(),
            Command::OpenFeedback => self.open_feedback(),
            Command::CloseFeedback => self.close_feedback(),
            Command::SubmitFeedback => {
                self.submit_feedback(Instant::now());
            }
            Command::FeedbackChar(c) => self.feedback_input(c),
            Command::FeedbackBackspace => self.feedback_backspace(),
            Command::FeedbackNextField => self.feedback_focus_next(),
            Command::FeedbackPrevField => self.feedback_focus_prev(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LoadPhase;
    use crate::models::{Post, ViewMode};

    fn posts(n: i64) -> Vec<Post> {
        (1..=n).map(|i| Post::new(i, format!("t{}", i), "b")).collect()
    }

    #[test]
    fn test_posts_loaded_ends_loading_and_fills_store() {
        let mut app = App::new();
        app.handle_message(AppMessage::PostsLoaded(posts(10)));
        assert_eq!(app.load_gate.phase(), LoadPhase::Ready);
        assert_eq!(app.load_gate.resolved_by(), Some(LoadTrigger::FetchSettled));
        assert_eq!(app.store.total(), 10);
    }

    #[test]
    fn test_timeout_then_late_posts_still_applied() {
        let mut app = App::new();
        app.handle_message(AppMessage::LoadingTimedOut);
        assert!(!app.load_gate.is_loading());
        assert_eq!(app.store.total(), 0);

        app.handle_message(AppMessage::PostsLoaded(posts(3)));
        assert_eq!(app.store.total(), 3);
        assert_eq!(app.load_gate.resolved_by(), Some(LoadTrigger::TimedOut));
    }

    #[test]
    fn test_failed_fetch_ends_loading_with_empty_store() {
        let mut app = App::new();
        app.handle_message(AppMessage::PostsLoadFailed {
            error: "boom".to_string(),
        });
        assert!(!app.load_gate.is_loading());
        assert_eq!(app.store.total(), 0);
        assert_eq!(app.page_count(), 1);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_execute_navigation_commands() {
        let mut app = App::new();
        app.handle_message(AppMessage::PostsLoaded(posts(30)));

        app.execute_command(Command::NextPage);
        assert_eq!(app.current_page, 2);
        app.execute_command(Command::LastPage);
        assert_eq!(app.current_page, 5);
        app.execute_command(Command::NextPage);
        assert_eq!(app.current_page, 5);
        app.execute_command(Command::GoToPage(3));
        assert_eq!(app.current_page, 3);
        app.execute_command(Command::FirstPage);
        app.execute_command(Command::PrevPage);
        assert_eq!(app.current_page, 1);
    }

    #[test]
    fn test_execute_toggle_and_quit() {
        let mut app = App::new();
        app.execute_command(Command::ToggleView);
        assert_eq!(app.store.view_mode(), ViewMode::List);
        app.execute_command(Command::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_execute_feedback_typing() {
        let mut app = App::new();
        app.execute_command(Command::OpenFeedback);
        app.execute_command(Command::FeedbackChar('J'));
        app.execute_command(Command::FeedbackNextField);
        app.execute_command(Command::FeedbackChar('D'));
        app.execute_command(Command::FeedbackBackspace);

        let form = app.feedback.as_ref().unwrap();
        assert_eq!(form.values.first_name, "J");
        assert_eq!(form.values.last_name, "");

        app.execute_command(Command::CloseFeedback);
        assert!(app.feedback.is_none());
    }
}
