use serde::{Deserialize, Serialize};

/// Base URL of the placeholder image service used for card thumbnails
pub const THUMBNAIL_BASE_URL: &str = "https://picsum.photos/seed";

/// A single article as delivered by the posts endpoint.
///
/// Extra fields in the payload (such as `userId`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Thumbnail image URL for this post.
    pub fn thumbnail_url(&self) -> String {
        thumbnail_url(self.id)
    }
}

/// Derive the thumbnail URL for a post id.
///
/// The URL is a pure function of the id so the same post always shows the
/// same picture. It is never fetched or validated by the browser itself.
pub fn thumbnail_url(id: i64) -> String {
    format!("{}/post{}/400/220", THUMBNAIL_BASE_URL, id)
}

/// How the current page of posts is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }
}
