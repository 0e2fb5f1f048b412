//! Maps key events to commands for the current input context.
//!
//! Priority order:
//! 1. Ctrl+C always quits
//! 2. An active modal takes all input; a submitted feedback form only closes
//! 3. Digit keys jump to a page
//! 4. Global bindings

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, ModalType};
use super::keybindings::{KeyCombo, KeybindingConfig};

#[derive(Debug, Clone)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Registry over custom bindings.
    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Command for `key` in `context`, or `None` if the key does nothing here.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::new(key.code, key.modifiers);

        if context.is_modal_active() {
            return self.dispatch_modal(key, &combo, context);
        }

        if let KeyCode::Char(c @ '1'..='9') = key.code {
            if key.modifiers.is_empty() {
                let page = c.to_digit(10).map(|d| d as usize)?;
                return (page <= context.page_count).then_some(Command::GoToPage(page));
            }
        }

        self.config.get_global(&combo).copied()
    }

    fn dispatch_modal(
        &self,
        key: KeyEvent,
        combo: &KeyCombo,
        context: &InputContext,
    ) -> Option<Command> {
        // a submitted form only shows the thank-you view; it can just be closed
        if context.modal == ModalType::Feedback && context.feedback_submitted {
            return self
                .config
                .get_modal(context.modal, combo)
                .filter(|cmd| **cmd == Command::CloseFeedback)
                .copied();
        }

        if let Some(cmd) = self.config.get_modal(context.modal, combo) {
            return Some(*cmd);
        }

        match (context.modal, key.code) {
            (ModalType::Feedback, KeyCode::Char(c))
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Command::FeedbackChar(c))
            }
            _ => None,
        }
    }

    pub fn config(&self) -> &KeybindingConfig {
        &self.config
    }
}
