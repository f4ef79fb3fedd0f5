//! `[posts]` section configuration.
//!
//! Where the post summary manifest lives and how it is ordered.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Listing order applied once when the collection is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostOrder {
    /// Keep the order the build pipeline wrote (default).
    #[default]
    Source,
    /// Date descending, ties broken by title.
    Newest,
}

/// `[posts]` section in notes.toml.
///
/// # Example
/// ```toml
/// [posts]
/// source = "public/posts.json"
/// order = "newest"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PostsConfig {
    /// JSON manifest of post summaries (relative to root).
    #[serde(default = "defaults::posts::source")]
    #[educe(Default = defaults::posts::source())]
    pub source: PathBuf,

    /// Listing order.
    #[serde(default = "defaults::posts::order")]
    #[educe(Default = defaults::posts::order())]
    pub order: PostOrder,
}
