//! Input context for determining which commands are available.
//!
//! The [`InputContext`] captures the parts of the application state that
//! change how a key is interpreted.

use crate::app::App;

/// The overlay currently capturing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    /// Browsing posts
    #[default]
    None,
    /// Loading screen is up; only quitting is possible
    Loading,
    /// Feedback form is open
    Feedback,
}

/// Context information for input handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputContext {
    /// Current modal type (if any)
    pub modal: ModalType,
    /// Whether the open feedback form was already submitted
    pub feedback_submitted: bool,
    /// Number of pages, for digit jumps
    pub page_count: usize,
}

impl InputContext {
    /// Capture the input-relevant state of `app`.
    pub fn from_app(app: &App) -> Self {
        let modal = if app.load_gate.is_loading() {
            ModalType::Loading
        } else if app.feedback.is_some() {
            ModalType::Feedback
        } else {
            ModalType::None
        };
        Self {
            modal,
            feedback_submitted: app.feedback.as_ref().is_some_and(|f| f.submitted),
            page_count: app.page_count(),
        }
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppMessage;

    #[test]
    fn test_fresh_app_is_loading() {
        let app = App::new();
        let ctx = InputContext::from_app(&app);
        assert_eq!(ctx.modal, ModalType::Loading);
        assert!(ctx.is_modal_active());
    }

    #[test]
    fn test_feedback_modal_detected_after_loading() {
        let mut app = App::new();
        app.handle_message(AppMessage::LoadingTimedOut);
        assert_eq!(InputContext::from_app(&app).modal, ModalType::None);

        app.open_feedback();
        let ctx = InputContext::from_app(&app);
        assert_eq!(ctx.modal, ModalType::Feedback);
        assert!(!ctx.feedback_submitted);
        assert_eq!(ctx.page_count, 1);
    }
}
