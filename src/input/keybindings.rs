//! Default key bindings for browsing, loading and the feedback modal.
//!
//! Maps key combinations to commands, per modal. Digit jumps and typing into
//! the feedback form are handled by the registry since they carry the key's
//! character.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;

/// Key code plus exact modifier set; lookups match both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Key-to-command tables: one for browsing, one per modal.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Bindings active while browsing
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// The default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        let g = &mut self.global;

        g.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        g.insert(KeyCombo::plain(KeyCode::Char('v')), Command::ToggleView);

        g.insert(KeyCombo::plain(KeyCode::Right), Command::NextPage);
        g.insert(KeyCombo::plain(KeyCode::Char(']')), Command::NextPage);
        g.insert(KeyCombo::plain(KeyCode::Left), Command::PrevPage);
        g.insert(KeyCombo::plain(KeyCode::Char('[')), Command::PrevPage);
        g.insert(KeyCombo::plain(KeyCode::Home), Command::FirstPage);
        g.insert(KeyCombo::plain(KeyCode::End), Command::LastPage);

        g.insert(KeyCombo::plain(KeyCode::Down), Command::SelectNext);
        g.insert(KeyCombo::plain(KeyCode::Char('j')), Command::SelectNext);
        g.insert(KeyCombo::plain(KeyCode::Up), Command::SelectPrev);
        g.insert(KeyCombo::plain(KeyCode::Char('k')), Command::SelectPrev);

        g.insert(KeyCombo::plain(KeyCode::Char('d')), Command::DeleteSelected);
        g.insert(KeyCombo::plain(KeyCode::Delete), Command::DeleteSelected);
        g.insert(KeyCombo::plain(KeyCode::Char('o')), Command::OpenThumbnail);
        g.insert(KeyCombo::plain(KeyCode::Enter), Command::OpenThumbnail);
        g.insert(KeyCombo::plain(KeyCode::Char('f')), Command::OpenFeedback);
    }

    fn setup_modal_bindings(&mut self) {
        let mut loading = HashMap::new();
        loading.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        loading.insert(KeyCombo::plain(KeyCode::Esc), Command::Quit);
        self.modal.insert(ModalType::Loading, loading);

        let mut feedback = HashMap::new();
        feedback.insert(KeyCombo::plain(KeyCode::Esc), Command::CloseFeedback);
        feedback.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitFeedback);
        feedback.insert(KeyCombo::plain(KeyCode::Backspace), Command::FeedbackBackspace);
        feedback.insert(KeyCombo::plain(KeyCode::Tab), Command::FeedbackNextField);
        feedback.insert(KeyCombo::plain(KeyCode::Down), Command::FeedbackNextField);
        feedback.insert(KeyCombo::plain(KeyCode::Up), Command::FeedbackPrevField);
        // terminals disagree on whether BackTab carries SHIFT
        feedback.insert(KeyCombo::plain(KeyCode::BackTab), Command::FeedbackPrevField);
        feedback.insert(KeyCombo::shift(KeyCode::BackTab), Command::FeedbackPrevField);
        self.modal.insert(ModalType::Feedback, feedback);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }
}

/// Key hints shown in the footer for each modal.
pub fn key_hints(modal: ModalType) -> &'static [(&'static str, &'static str)] {
    match modal {
        ModalType::None => &[
            ("←/→", "page"),
            ("↑/↓", "select"),
            ("v", "grid/list"),
            ("d", "delete"),
            ("o", "open image"),
            ("f", "feedback"),
            ("q", "quit"),
        ],
        ModalType::Loading => &[("q", "quit")],
        ModalType::Feedback => &[
            ("Tab", "next field"),
            ("Enter", "submit"),
            ("Esc", "cancel"),
        ],
    }
}
