//! AppMessage enum for async communication within the application.

use crate::models::Post;

/// Messages received from background tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The posts fetch delivered a collection
    PostsLoaded(Vec<Post>),
    /// The posts fetch failed; already logged by the loader
    PostsLoadFailed { error: String },
    /// The loading ceiling elapsed
    LoadingTimedOut,
}
