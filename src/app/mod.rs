//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`LoadGate`] / [`LoadPhase`] - The loading screen latch
//! - [`AppMessage`] - Messages from background tasks
//! - [`LoadHandle`] - Handles to the initial load tasks
//!
//! `App` owns the post store, the page cursor and the feedback modal. Every
//! mutation that can change the number of posts ends with a page
//! reconciliation so the cursor never points past the last page.

mod actions;
mod handlers;
mod loader;
mod messages;
mod navigation;
mod state_methods;
mod types;

pub use loader::{spawn_initial_load, LoadHandle};
pub use messages::AppMessage;
pub use types::{LoadGate, LoadPhase, LoadTrigger};

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::client::PostSource;
use crate::config::{BrowserConfig, FEEDBACK_DISMISS_DELAY};
use crate::feedback::FeedbackForm;
use crate::pagination::PAGE_SIZE;
use crate::state::PostStore;

/// Main application state
pub struct App {
    /// Loaded posts and the view mode
    pub store: PostStore,
    /// 1-indexed page cursor
    pub current_page: usize,
    /// Posts per page
    pub page_size: usize,
    /// Index of the selected post within the current page
    pub selected: usize,
    /// Loading screen latch
    pub load_gate: LoadGate,
    /// Open feedback modal, if any
    pub feedback: Option<FeedbackForm>,
    /// When the submitted feedback modal closes itself
    pub feedback_dismiss_at: Option<Instant>,
    /// Delay between a successful submit and the modal closing
    pub feedback_dismiss_delay: Duration,
    /// One-line notice shown in the footer
    pub status_message: Option<String>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn.
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Current terminal width in columns
    pub terminal_width: u16,
    /// Current terminal height in rows
    pub terminal_height: u16,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create an app with the default page size and dismiss delay.
    pub fn new() -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            store: PostStore::new(),
            current_page: 1,
            page_size: PAGE_SIZE,
            selected: 0,
            load_gate: LoadGate::new(),
            feedback: None,
            feedback_dismiss_at: None,
            feedback_dismiss_delay: FEEDBACK_DISMISS_DELAY,
            status_message: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    /// Create an app using the page size and delays from `config`.
    pub fn with_config(config: &BrowserConfig) -> Self {
        let mut app = Self::new();
        app.page_size = config.page_size.max(1);
        app.feedback_dismiss_delay = config.feedback_dismiss;
        app
    }

    /// Kick off the one-shot load of the post collection.
    ///
    /// Results arrive on the message channel and are applied by
    /// [`App::handle_message`]. Keep the returned handle alive for the session;
    /// dropping it cancels the loading timer.
    pub fn start_loading(&self, source: Arc<dyn PostSource>, ceiling: Duration) -> LoadHandle {
        tracing::info!(?ceiling, "starting initial load");
        spawn_initial_load(source, self.message_sender(), ceiling)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
