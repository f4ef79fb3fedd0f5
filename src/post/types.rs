//! Post summary records.
//!
//! `RawPost` is what the build pipeline writes; `PostSummary` is what the
//! search view sees once the collection boundary has validated it.

use serde::{Deserialize, Serialize};

/// Listing metadata for one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    /// Opaque identifier, unique across the collection
    pub id: String,

    /// Post title (never empty)
    pub title: String,

    /// Publication date as displayed (e.g., "2023-01-01")
    pub date: String,

    /// Route segment, unique across the collection
    pub path: String,

    /// Cover image reference, passed through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl PostSummary {
    pub fn preview(&self) -> PostPreview<'_> {
        PostPreview {
            title: &self.title,
            date: &self.date,
            path: &self.path,
            cover_image: self.cover_image.as_deref(),
        }
    }
}

/// What the presentation layer receives for each visible post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPreview<'a> {
    pub title: &'a str,
    pub date: &'a str,
    pub path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<&'a str>,
}

// ============================================================================
// Manifest Records
// ============================================================================

/// A manifest entry before validation.
///
/// Two shapes are accepted:
///
/// ```json
/// [
///   { "id": "1", "title": "Rust Notes", "date": "2023-01-01", "path": "/rust-notes" },
///   { "node": { "id": "2", "frontmatter": { "title": "Go Basics", "date": "2022-05-10", "path": "/go-basics" } } }
/// ]
/// ```
///
/// The second is the edge shape of a GraphQL `allMdx` query result.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    Edge { node: RawNode },
    Flat(RawPost),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    pub id: Option<String>,
    pub frontmatter: RawFrontmatter,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFrontmatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub path: Option<String>,
    #[serde(default, deserialize_with = "cover_image")]
    pub cover_image: Option<String>,
}

/// Flat manifest record. Every field is optional here so that a broken
/// record is reported with its position instead of as a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    pub id: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub path: Option<String>,
    #[serde(default, deserialize_with = "cover_image")]
    pub cover_image: Option<String>,
}

impl From<RawEntry> for RawPost {
    fn from(entry: RawEntry) -> Self {
        match entry {
            RawEntry::Flat(post) => post,
            RawEntry::Edge { node } => RawPost {
                id: node.id,
                title: node.frontmatter.title,
                date: node.frontmatter.date,
                path: node.frontmatter.path,
                cover_image: node.frontmatter.cover_image,
            },
        }
    }
}

/// Cover images come either as a plain reference or as an image object
/// (`{ "publicURL": ... }` / `{ "src": ... }`); both collapse to a string.
fn cover_image<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde_json::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Object(map)) => ["publicURL", "src", "url"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_owned),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_entry() {
        let entry: RawEntry = serde_json::from_str(
            r#"{"id":"1","title":"Rust Notes","date":"2023-01-01","path":"/rust-notes","coverImage":"rust.png"}"#,
        )
        .unwrap();
        let post = RawPost::from(entry);

        assert_eq!(post.id.as_deref(), Some("1"));
        assert_eq!(post.title.as_deref(), Some("Rust Notes"));
        assert_eq!(post.cover_image.as_deref(), Some("rust.png"));
    }

    #[test]
    fn test_edge_entry() {
        let entry: RawEntry = serde_json::from_str(
            r#"{"node":{"id":"2","frontmatter":{"title":"Go Basics","date":"2022-05-10","path":"/go-basics","coverImage":{"publicURL":"/static/go.png"}}}}"#,
        )
        .unwrap();
        let post = RawPost::from(entry);

        assert_eq!(post.id.as_deref(), Some("2"));
        assert_eq!(post.path.as_deref(), Some("/go-basics"));
        assert_eq!(post.cover_image.as_deref(), Some("/static/go.png"));
    }

    #[test]
    fn test_missing_fields_parse_as_none() {
        let entry: RawEntry = serde_json::from_str(r#"{"id":"3","path":"/untitled"}"#).unwrap();
        let post = RawPost::from(entry);

        assert!(post.title.is_none());
        assert!(post.date.is_none());
        assert!(post.cover_image.is_none());
    }

    #[test]
    fn test_null_cover_image() {
        let entry: RawEntry = serde_json::from_str(
            r#"{"id":"1","title":"T","date":"2023","path":"/t","coverImage":null}"#,
        )
        .unwrap();
        assert!(RawPost::from(entry).cover_image.is_none());
    }

    #[test]
    fn test_preview_borrows_fields() {
        let post = PostSummary {
            id: "1".into(),
            title: "Rust Notes".into(),
            date: "2023-01-01".into(),
            path: "/rust-notes".into(),
            cover_image: None,
        };
        let preview = post.preview();

        assert_eq!(preview.title, "Rust Notes");
        assert_eq!(preview.path, "/rust-notes");
        assert_eq!(
            serde_json::to_string(&preview).unwrap(),
            r#"{"title":"Rust Notes","date":"2023-01-01","path":"/rust-notes"}"#
        );
    }
}
