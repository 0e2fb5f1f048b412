//! Tests for the initial load race between the fetch and the loading ceiling.
//!
//! Time is paused so the ceiling can be crossed without real waiting.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{sample_posts, MockSource};
use newsdeck::app::{spawn_initial_load, App, AppMessage, LoadTrigger};
use tokio::sync::mpsc;

const CEILING: Duration = Duration::from_secs(5);

#[tokio::test(start_paused = true)]
async fn test_fast_fetch_ends_loading_before_ceiling() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let source = Arc::new(MockSource::ok(sample_posts(12), Duration::from_millis(200)));
    let _handle = spawn_initial_load(source, tx, CEILING);

    let first = rx.recv().await.unwrap();
    assert!(matches!(first, AppMessage::PostsLoaded(ref posts) if posts.len() == 12));

    let mut app = App::new();
    app.handle_message(first);
    assert!(!app.load_gate.is_loading());
    assert_eq!(app.load_gate.resolved_by(), Some(LoadTrigger::FetchSettled));

    // the timer still fires later but changes nothing
    let second = rx.recv().await.unwrap();
    assert_eq!(second, AppMessage::LoadingTimedOut);
    app.handle_message(second);
    assert_eq!(app.load_gate.resolved_by(), Some(LoadTrigger::FetchSettled));
    assert_eq!(app.store.total(), 12);
}

#[tokio::test(start_paused = true)]
async fn test_slow_fetch_times_out_and_is_still_applied() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let source = Arc::new(MockSource::ok(sample_posts(7), Duration::from_secs(12)));
    let _handle = spawn_initial_load(source, tx, CEILING);

    let mut app = App::new();

    let first = rx.recv().await.unwrap();
    assert_eq!(first, AppMessage::LoadingTimedOut);
    app.handle_message(first);
    assert!(!app.load_gate.is_loading());
    assert_eq!(app.store.total(), 0);

    let second = rx.recv().await.unwrap();
    app.handle_message(second);
    assert_eq!(app.load_gate.resolved_by(), Some(LoadTrigger::TimedOut));
    assert_eq!(app.store.total(), 7);
    assert_eq!(app.page_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_failed_fetch_ends_loading_with_empty_store() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let source = Arc::new(MockSource::failing(503, Duration::from_millis(50)));
    let _handle = spawn_initial_load(source, tx, CEILING);

    let msg = rx.recv().await.unwrap();
    assert!(matches!(msg, AppMessage::PostsLoadFailed { ref error } if error.contains("503")));

    let mut app = App::new();
    app.handle_message(msg);
    assert!(!app.load_gate.is_loading());
    assert_eq!(app.store.total(), 0);
    assert_eq!(app.page_count(), 1);
    assert!(app.status_message.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handle_cancels_timer() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let source = Arc::new(MockSource::ok(sample_posts(3), Duration::from_millis(10)));
    let handle = spawn_initial_load(source, tx, CEILING);

    let first = rx.recv().await.unwrap();
    assert!(matches!(first, AppMessage::PostsLoaded(_)));
    drop(handle);

    // with the timer gone the channel closes instead of delivering a timeout
    let next = tokio::time::timeout(CEILING * 2, rx.recv()).await;
    assert!(!matches!(next, Ok(Some(_))), "unexpected message: {:?}", next);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_timer_leaves_fetch_running() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let source = Arc::new(MockSource::ok(sample_posts(4), Duration::from_secs(12)));
    let handle = spawn_initial_load(source, tx, CEILING);
    handle.cancel_timer();

    // no timeout arrives at the ceiling, only the slow fetch result
    let first = rx.recv().await.unwrap();
    assert!(matches!(first, AppMessage::PostsLoaded(ref posts) if posts.len() == 4));
}

#[tokio::test(start_paused = true)]
async fn test_start_loading_drives_app_to_ready() {
    let mut app = App::new();
    let mut rx = app.message_rx.take().unwrap();
    let source = Arc::new(MockSource::ok(sample_posts(20), Duration::from_millis(300)));
    let _handle = app.start_loading(source, CEILING);

    assert!(app.load_gate.is_loading());
    while app.load_gate.is_loading() {
        let msg = rx.recv().await.unwrap();
        app.handle_message(msg);
    }

    assert_eq!(app.store.total(), 20);
    assert_eq!(app.current_page, 1);
    assert_eq!(app.visible_posts().len(), 6);
}
