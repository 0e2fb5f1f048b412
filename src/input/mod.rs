//! Input handling module for keyboard and command processing.
//!
//! All keyboard input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Executed by [`App::execute_command`](crate::app::App::execute_command)
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App mutation
//! ```
//!
//! # Example
//!
//! ```
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use newsdeck::app::App;
//! use newsdeck::input::{CommandRegistry, InputContext};
//!
//! let mut app = App::new();
//! let registry = CommandRegistry::new();
//! let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
//!
//! if let Some(cmd) = registry.dispatch(key, &InputContext::from_app(&app)) {
//!     app.execute_command(cmd);
//! }
//! assert!(app.should_quit);
//! ```

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{key_hints, KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::KeyEvent;

use crate::app::App;

/// Route a key event through `registry` into `app`.
///
/// Returns `true` if the key mapped to a command.
pub fn handle_key_event(app: &mut App, registry: &CommandRegistry, key: KeyEvent) -> bool {
    let context = InputContext::from_app(app);
    match registry.dispatch(key, &context) {
        Some(cmd) => {
            tracing::trace!(?cmd, "key dispatched");
            app.execute_command(cmd);
            true
        }
        None => false,
    }
}
