//! Loading and validating the post summary collection.
//!
//! Invalid records fail the whole load: the filter engine only ever sees
//! posts with a title, a date, and unique `id`/`path` values.

use super::types::{PostSummary, RawEntry, RawPost};
use crate::config::PostOrder;
use rustc_hash::FxHashSet;
use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised at the collection boundary.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Post manifest parsing error")]
    Json(#[from] serde_json::Error),

    #[error("post #{index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("post #{index} has a duplicate {field} `{value}`")]
    Duplicate {
        index: usize,
        field: &'static str,
        value: String,
    },
}

/// The full, validated, immutable post collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostCollection {
    posts: Vec<PostSummary>,
}

impl PostCollection {
    /// Validate raw records and apply the listing order.
    pub fn new(raw: Vec<RawPost>, order: PostOrder) -> Result<Self, PostError> {
        let mut ids = FxHashSet::default();
        let mut paths = FxHashSet::default();
        let mut posts = Vec::with_capacity(raw.len());

        for (index, raw) in raw.into_iter().enumerate() {
            let post = validate(index, raw)?;

            if !ids.insert(post.id.clone()) {
                return Err(PostError::Duplicate {
                    index,
                    field: "id",
                    value: post.id,
                });
            }
            if !paths.insert(post.path.clone()) {
                return Err(PostError::Duplicate {
                    index,
                    field: "path",
                    value: post.path,
                });
            }

            posts.push(post);
        }

        if order == PostOrder::Newest {
            posts.sort_by(compare_newest);
        }

        Ok(Self { posts })
    }

    /// Parse a JSON manifest (array of flat records or GraphQL edges).
    pub fn from_json(content: &str, order: PostOrder) -> Result<Self, PostError> {
        let entries: Vec<RawEntry> = serde_json::from_str(content)?;
        Self::new(entries.into_iter().map(RawPost::from).collect(), order)
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[PostSummary] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PostSummary> {
        self.posts.iter()
    }
}

impl<'a> IntoIterator for &'a PostCollection {
    type Item = &'a PostSummary;
    type IntoIter = std::slice::Iter<'a, PostSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Read the manifest at `path`.
pub fn load_posts(path: &Path, order: PostOrder) -> Result<PostCollection, PostError> {
    let content =
        fs::read_to_string(path).map_err(|err| PostError::Io(path.to_path_buf(), err))?;
    PostCollection::from_json(&content, order)
}

fn validate(index: usize, raw: RawPost) -> Result<PostSummary, PostError> {
    let missing = |field| PostError::MissingField { index, field };

    let id = raw.id.filter(|s| !s.is_empty()).ok_or_else(|| missing("id"))?;
    let title = raw
        .title
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| missing("title"))?;
    let date = raw.date.ok_or_else(|| missing("date"))?;
    let path = raw
        .path
        .filter(|s| !s.is_empty())
        .ok_or_else(|| missing("path"))?;

    Ok(PostSummary {
        id,
        title,
        date,
        path,
        cover_image: raw.cover_image,
    })
}

/// Newest first; same date falls back to title.
fn compare_newest(a: &PostSummary, b: &PostSummary) -> Ordering {
    b.date.cmp(&a.date).then_with(|| a.title.cmp(&b.title))
}
