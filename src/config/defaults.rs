//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "notes".into()
    }

    pub fn url() -> Option<String> {
        None
    }

    pub fn path_prefix() -> String {
        "".into()
    }
}

// ============================================================================
// [posts] Section Defaults
// ============================================================================

pub mod posts {
    use super::super::PostOrder;
    use std::path::PathBuf;

    pub fn source() -> PathBuf {
        "posts.json".into()
    }

    pub fn order() -> PostOrder {
        PostOrder::default()
    }
}

// ============================================================================
// [search] Section Defaults
// ============================================================================

pub mod search {
    pub fn param() -> String {
        "search".into()
    }

    pub fn placeholder() -> String {
        "Search...".into()
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        5277
    }
}
