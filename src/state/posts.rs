//! Post store: the list of loaded posts and the current view mode.
//!
//! All changes go through [`reduce`], a pure transition from one
//! [`PostsState`] to the next. [`PostStore`] owns the current state and
//! swaps it for the reduced value on every dispatch.

use crate::models::{Post, ViewMode};

/// Snapshot of the post collection and how it is displayed.
///
/// `posts` keeps the order of the most recent load; deletions never reorder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsState {
    pub posts: Vec<Post>,
    pub view_mode: ViewMode,
}

impl PostsState {
    pub fn total(&self) -> usize {
        self.posts.len()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.posts.iter().any(|p| p.id == id)
    }
}

/// Mutations accepted by the post store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostsAction {
    /// Replace the whole collection, keeping the given order
    SetPosts(Vec<Post>),
    /// Remove the post with this id (local only, never sent anywhere)
    DeletePost(i64),
    /// Flip between grid and list
    ToggleView,
}

/// Apply `action` to `state`, producing a fresh state.
///
/// Deleting an id that is not present yields a state equal to the input.
pub fn reduce(state: &PostsState, action: PostsAction) -> PostsState {
    match action {
        PostsAction::SetPosts(posts) => PostsState {
            posts,
            view_mode: state.view_mode,
        },
        PostsAction::DeletePost(id) => PostsState {
            posts: state.posts.iter().filter(|p| p.id != id).cloned().collect(),
            view_mode: state.view_mode,
        },
        PostsAction::ToggleView => PostsState {
            posts: state.posts.clone(),
            view_mode: state.view_mode.toggled(),
        },
    }
}

/// Owner of the session's [`PostsState`].
#[derive(Debug, Default)]
pub struct PostStore {
    state: PostsState,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PostsState {
        &self.state
    }

    pub fn posts(&self) -> &[Post] {
        &self.state.posts
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    pub fn total(&self) -> usize {
        self.state.total()
    }

    /// Run `action` through the reducer and keep the result.
    pub fn dispatch(&mut self, action: PostsAction) {
        tracing::trace!(?action, "dispatch");
        self.state = reduce(&self.state, action);
    }
}
