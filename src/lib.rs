//! newsdeck - browse a news feed in the terminal
//!
//! The whole post collection is fetched once at startup and then paged,
//! toggled between grid and list layouts, and pruned locally. A feedback
//! form with client-side validation rounds it off.
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod feedback;
pub mod input;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod validators;
