//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects on the
//! [`App`](crate::app::App).

/// Every action the user can trigger from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (q, Ctrl+C)
    Quit,
    /// Switch between grid and list layout (v)
    ToggleView,

    // =========================================================================
    // Pagination
    // =========================================================================
    /// Next page (Right, ])
    NextPage,
    /// Previous page (Left, [)
    PrevPage,
    /// First page (Home)
    FirstPage,
    /// Last page (End)
    LastPage,
    /// Jump to a page number (1-9)
    GoToPage(usize),

    // =========================================================================
    // Posts
    // =========================================================================
    /// Highlight the next post (Down, j)
    SelectNext,
    /// Highlight the previous post (Up, k)
    SelectPrev,
    /// Delete the highlighted post (d, Delete)
    DeleteSelected,
    /// Open the highlighted post's thumbnail (o, Enter)
    OpenThumbnail,

    // =========================================================================
    // Feedback modal
    // =========================================================================
    /// Open the feedback form (f)
    OpenFeedback,
    /// Close the form without submitting (Esc)
    CloseFeedback,
    /// Validate and submit (Enter)
    SubmitFeedback,
    /// Type into the focused field
    FeedbackChar(char),
    /// Delete the last character of the focused field
    FeedbackBackspace,
    /// Focus the next field (Tab, Down)
    FeedbackNextField,
    /// Focus the previous field (Shift+Tab, Up)
    FeedbackPrevField,
}

impl Command {
    /// Short description for the key hint footer.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::ToggleView => "grid/list",
            Command::NextPage => "next page",
            Command::PrevPage => "prev page",
            Command::FirstPage => "first page",
            Command::LastPage => "last page",
            Command::GoToPage(_) => "go to page",
            Command::SelectNext | Command::SelectPrev => "select",
            Command::DeleteSelected => "delete",
            Command::OpenThumbnail => "open image",
            Command::OpenFeedback => "feedback",
            Command::CloseFeedback => "cancel",
            Command::SubmitFeedback => "submit",
            Command::FeedbackChar(_) | Command::FeedbackBackspace => "type",
            Command::FeedbackNextField | Command::FeedbackPrevField => "next field",
        }
    }

    /// Whether this command only makes sense inside the feedback modal.
    pub fn is_feedback_command(&self) -> bool {
        matches!(
            self,
            Command::CloseFeedback
                | Command::SubmitFeedback
                | Command::FeedbackChar(_)
                | Command::FeedbackBackspace
                | Command::FeedbackNextField
                | Command::FeedbackPrevField
        )
    }
}
