//! `[base]` section configuration.
//!
//! Contains basic site information and the route the listing lives under.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in notes.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "nm42"
/// description = "personal notes"
/// url = "https://nm42.dev"
/// path_prefix = "notes"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title shown above the listing.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Site description for the listing page meta tag.
    #[serde(default)]
    pub description: String,

    /// Public URL of the deployed site. Informational; addresses stay relative.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Sub-path the site is hosted under (e.g. "notes" → `/notes/`).
    #[serde(default = "defaults::base::path_prefix")]
    #[educe(Default = defaults::base::path_prefix())]
    pub path_prefix: String,
}

impl BaseConfig {
    /// The bare listing route: always starts and ends with `/`.
    ///
    /// | path_prefix | route |
    /// |-------------|-------|
    /// | `""` | `/` |
    /// | `"notes"` | `/notes/` |
    /// | `"/a/b/"` | `/a/b/` |
    pub fn base_route(&self) -> String {
        let trimmed = self.path_prefix.trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        }
    }
}
