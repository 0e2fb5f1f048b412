//! Session state containers.

pub mod posts;

pub use posts::{reduce, PostStore, PostsAction, PostsState};
