//! HTML listing page.
//!
//! Fills the embedded `listing.html` template with the search box (prefilled
//! with the current query) and one `<li>` per visible post.

use super::PreviewRenderer;
use crate::{config::SiteConfig, post::PostPreview};
use std::borrow::Cow;

/// Listing page template (embedded at compile time)
const LISTING_TEMPLATE: &str = include_str!("../embed/listing.html");

/// Renders the listing as a complete HTML page.
///
/// The last rendered page is kept in [`HtmlListing::page`].
#[derive(Debug, Clone)]
pub struct HtmlListing {
    title: String,
    description: String,
    base_route: String,
    param: String,
    placeholder: String,
    page: String,
}

impl HtmlListing {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            title: config.base.title.clone(),
            description: config.base.description.clone(),
            base_route: config.base_route(),
            param: config.search.param.clone(),
            placeholder: config.search.placeholder.clone(),
            page: String::new(),
        }
    }

    /// The most recently rendered page.
    #[cfg(test)]
    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn into_page(self) -> String {
        self.page
    }

    fn entry(&self, preview: &PostPreview<'_>) -> String {
        let href = post_href(&self.base_route, preview.path);
        let cover = preview
            .cover_image
            .map(|src| {
                format!(
                    r#"<img src="{}" alt="{}" loading="lazy">"#,
                    html_escape(src),
                    html_escape(preview.title)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<li class="preview">{cover}<a href="{}">{}</a><time>{}</time></li>"#,
            html_escape(&href),
            html_escape(preview.title),
            html_escape(preview.date),
        )
    }
}

impl PreviewRenderer for HtmlListing {
    fn render(&mut self, query: &str, previews: &[PostPreview<'_>]) {
        let entries: Vec<String> = previews.iter().map(|p| self.entry(p)).collect();
        let count = match (previews.len(), query.is_empty()) {
            (1, _) => "1 post".to_string(),
            (n, true) => format!("{n} posts"),
            (n, false) => format!("{n} posts matching"),
        };

        let entries = entries.join("\n        ");

        self.page = fill_template(
            LISTING_TEMPLATE,
            &[
                ("title", &*html_escape(&self.title)),
                ("description", &*html_escape(&self.description)),
                ("action", &*html_escape(&self.base_route)),
                ("param", &*html_escape(&self.param)),
                ("placeholder", &*html_escape(&self.placeholder)),
                ("query", &*html_escape(query)),
                ("count", count.as_str()),
                ("entries", entries.as_str()),
            ],
        );
    }
}

/// Link target for a post path under the listing route.
///
/// | base_route | path | href |
/// |------------|------|------|
/// | `/` | `/rust-notes` | `/rust-notes` |
/// | `/notes/` | `/rust-notes` | `/notes/rust-notes` |
/// | `/notes/` | `rust-notes` | `/notes/rust-notes` |
pub fn post_href(base_route: &str, path: &str) -> String {
    format!("{base_route}{}", path.trim_start_matches('/'))
}

/// Substitute `{key}` placeholders in a single pass.
///
/// Values are inserted verbatim and never rescanned, so a title that happens
/// to contain `{entries}` stays as typed.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let key = after.find('}').map(|end| &after[..end]);

        match key.and_then(|key| values.iter().find(|(k, _)| *k == key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &after[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Escape HTML special characters.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>', '&', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
