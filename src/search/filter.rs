//! Filter engine: the full collection plus a query gives the visible posts.
//!
//! A post matches when the query is a case-insensitive substring of its
//! title or of its date. An empty query matches everything. The result keeps
//! the collection's order and is always computed from the full collection,
//! never from a previous result.

use crate::post::PostSummary;

/// Compute the visible posts for `query`.
pub fn filter_posts<'a, I>(posts: I, query: &str) -> Vec<&'a PostSummary>
where
    I: IntoIterator<Item = &'a PostSummary>,
{
    if query.is_empty() {
        return posts.into_iter().collect();
    }

    let needle = query.to_lowercase();
    posts
        .into_iter()
        .filter(|post| matches_folded(post, &needle))
        .collect()
}

/// Whether a single post matches `query`.
#[cfg(test)]
pub fn matches(post: &PostSummary, query: &str) -> bool {
    query.is_empty() || matches_folded(post, &query.to_lowercase())
}

#[inline]
fn matches_folded(post: &PostSummary, needle: &str) -> bool {
    post.title.to_lowercase().contains(needle) || post.date.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, title: &str, date: &str) -> PostSummary {
        PostSummary {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            path: format!("/{id}"),
            cover_image: None,
        }
    }

    fn sample() -> Vec<PostSummary> {
        vec![
            post("rust-notes", "Rust Notes", "2023-01-01"),
            post("go-basics", "Go Basics", "2022-05-10"),
            post("async-rust", "Async RUST in Practice", "2023-06-15"),
            post("zig", "Zig Comptime", "May 2022"),
        ]
    }

    fn ids<'a>(posts: &[&'a PostSummary]) -> Vec<&'a str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let all = sample();
        let visible = filter_posts(&all, "");

        assert_eq!(visible.len(), all.len());
        assert!(visible.iter().zip(&all).all(|(v, a)| std::ptr::eq(*v, a)));
    }

    #[test]
    fn test_title_match() {
        let all = sample();
        assert_eq!(ids(&filter_posts(&all, "rust")), ["rust-notes", "async-rust"]);
    }

    #[test]
    fn test_date_match() {
        let all = sample();
        assert_eq!(ids(&filter_posts(&all, "2022")), ["go-basics", "zig"]);
        assert_eq!(ids(&filter_posts(&all, "-06-")), ["async-rust"]);
    }

    #[test]
    fn test_date_match_is_case_insensitive() {
        let all = sample();
        assert_eq!(ids(&filter_posts(&all, "may")), ["zig"]);
        assert_eq!(ids(&filter_posts(&all, "MAY 2022")), ["zig"]);
    }

    #[test]
    fn test_case_insensitive_variants_agree() {
        let all = sample();
        for query in ["Rust", "basics", "Comptime", "2023-0"] {
            let base = ids(&filter_posts(&all, query));
            assert_eq!(ids(&filter_posts(&all, &query.to_uppercase())), base);
            assert_eq!(ids(&filter_posts(&all, &query.to_lowercase())), base);
        }
    }

    #[test]
    fn test_no_match() {
        let all = sample();
        assert!(filter_posts(&all, "xyz").is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let all = sample();
        for query in ["r", "2", "a", "o", " "] {
            let visible = filter_posts(&all, query);
            let mut positions = visible
                .iter()
                .map(|v| all.iter().position(|a| std::ptr::eq(a, *v)).unwrap());
            let mut last = positions.next();
            for pos in positions {
                assert!(Some(pos) > last, "order broken for {query:?}");
                last = Some(pos);
            }
        }
    }

    #[test]
    fn test_always_filters_full_collection() {
        let all = sample();
        let narrowed = filter_posts(&all, "rust notes");
        assert_eq!(ids(&narrowed), ["rust-notes"]);

        // Widening again must bring back posts the previous query dropped.
        assert_eq!(ids(&filter_posts(&all, "rust")), ["rust-notes", "async-rust"]);
    }

    #[test]
    fn test_matches_single_post() {
        let p = post("rust-notes", "Rust Notes", "2023-01-01");
        assert!(matches(&p, ""));
        assert!(matches(&p, "NOTES"));
        assert!(matches(&p, "01-01"));
        assert!(!matches(&p, "go"));
    }

    #[test]
    fn test_unicode_titles() {
        let all = vec![post("cafe", "Café Ölçek", "2024-02-02")];
        assert_eq!(ids(&filter_posts(&all, "CAFÉ")), ["cafe"]);
        assert_eq!(ids(&filter_posts(&all, "ölç")), ["cafe"]);
    }
}
