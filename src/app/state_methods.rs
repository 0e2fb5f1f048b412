//! Housekeeping methods for the App: redraw tracking, ticks and sizing.

use std::time::Instant;

use tokio::sync::mpsc;

use super::{App, AppMessage};

impl App {
    /// Get a sender for async messages
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Show a one-line notice in the footer.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.mark_dirty();
    }

    pub fn clear_status(&mut self) {
        if self.status_message.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Advance the tick counter.
    ///
    /// Called from the event loop about every 16ms. Keeps the spinner moving
    /// while loading and closes a submitted feedback modal once its delay ran
    /// out.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// [`App::tick`] with an explicit clock.
    pub fn tick_at(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.load_gate.is_loading() {
            self.mark_dirty();
        }
        self.check_feedback_dismiss(now);
    }

    /// Record a terminal resize.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        if self.terminal_width != width || self.terminal_height != height {
            self.terminal_width = width;
            self.terminal_height = height;
            self.mark_dirty();
        }
    }

    pub fn terminal_width(&self) -> u16 {
        self.terminal_width
    }

    pub fn terminal_height(&self) -> u16 {
        self.terminal_height
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }
}
