//! Post summaries consumed by the listing.
//!
//! The build pipeline writes a JSON manifest of post summaries; this module
//! turns it into an immutable [`PostCollection`] that every search view
//! borrows.
//!
//! ```text
//! posts.json ──► load_posts() ──► validate ──► order ──► PostCollection
//!                                   │
//!                                   └── PostError (missing title/date,
//!                                       duplicate id/path)
//! ```

mod source;
mod types;

pub use source::{PostCollection, load_posts};
pub use types::{PostPreview, PostSummary};

#[cfg(test)]
pub use types::RawPost;
