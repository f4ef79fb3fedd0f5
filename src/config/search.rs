//! `[search]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[search]` section in notes.toml - search box and address behavior.
///
/// # Example
/// ```toml
/// [search]
/// param = "q"
/// placeholder = "Filter posts..."
/// seed_from_address = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Query parameter that mirrors the search text (`?search=rust`).
    #[serde(default = "defaults::search::param")]
    #[educe(Default = defaults::search::param())]
    pub param: String,

    /// Placeholder text of the search box.
    #[serde(default = "defaults::search::placeholder")]
    #[educe(Default = defaults::search::placeholder())]
    pub placeholder: String,

    /// Start the view with the query found in the current address
    /// instead of an empty one.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub seed_from_address: bool,
}

impl SearchConfig {
    /// Param names are embedded in addresses unescaped.
    pub fn is_valid_param(&self) -> bool {
        !self.param.is_empty()
            && self
                .param
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    }
}
