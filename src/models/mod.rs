//! Data models shared by the store, the HTTP client and the renderers.

mod post;

pub use post::{thumbnail_url, Post, ViewMode, THUMBNAIL_BASE_URL};
