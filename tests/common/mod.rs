//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use newsdeck::app::{App, AppMessage};
use newsdeck::client::{FetchError, PostSource};
use newsdeck::models::Post;
use newsdeck::ui;

/// `n` posts with ids `1..=n`.
pub fn sample_posts(n: i64) -> Vec<Post> {
    (1..=n)
        .map(|i| Post::new(i, format!("Title {}", i), format!("Body of post {}", i)))
        .collect()
}

/// An app that has finished loading with `n` sample posts.
pub fn loaded_app(n: i64) -> App {
    let mut app = App::new();
    app.handle_message(AppMessage::PostsLoaded(sample_posts(n)));
    app
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Source that answers after a delay, either with posts or a server error.
pub struct MockSource {
    delay: Duration,
    result: Result<Vec<Post>, u16>,
}

impl MockSource {
    pub fn ok(posts: Vec<Post>, delay: Duration) -> Self {
        Self {
            delay,
            result: Ok(posts),
        }
    }

    pub fn failing(status: u16, delay: Duration) -> Self {
        Self {
            delay,
            result: Err(status),
        }
    }
}

#[async_trait]
impl PostSource for MockSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        tokio::time::sleep(self.delay).await;
        match &self.result {
            Ok(posts) => Ok(posts.clone()),
            Err(status) => Err(FetchError::ServerError {
                status: *status,
                message: "mock failure".to_string(),
            }),
        }
    }
}

/// Every cell symbol of the buffer, one line per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::with_capacity((area.width as usize + 1) * area.height as usize);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Render `app` into a test terminal of the given size.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}
