//! Search view: the stateful controller behind the search box.
//!
//! One view lives for one page view. It owns the query text and the visible
//! posts, and borrows the collection. Every input event runs one synchronous
//! transition:
//!
//! ```text
//! on_input(text)
//!   1. visible = filter_posts(all, text)
//!   2. bridge.navigate_to(address for text)   (exactly once; failure tolerated)
//!   3. query = text
//!   4. renderer.render(query, previews)
//! ```

use super::{
    filter::filter_posts,
    navigation::{NavigationBridge, search_address},
};
use crate::{
    config::SiteConfig,
    log,
    post::{PostCollection, PostPreview, PostSummary},
    render::PreviewRenderer,
};

/// Address settings a view needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    /// Bare listing route, e.g. `/` or `/notes/`
    pub base_route: String,
    /// Query parameter mirroring the text
    pub param: String,
    /// Start from the query in the current address instead of empty
    pub seed_from_address: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            base_route: "/".into(),
            param: "search".into(),
            seed_from_address: false,
        }
    }
}

impl ViewOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            base_route: config.base_route(),
            param: config.search.param.clone(),
            seed_from_address: config.search.seed_from_address,
        }
    }
}

pub struct SearchView<'a, B, R> {
    posts: &'a PostCollection,
    bridge: B,
    renderer: R,
    options: ViewOptions,
    query: String,
    visible: Vec<&'a PostSummary>,
}

impl<'a, B, R> SearchView<'a, B, R>
where
    B: NavigationBridge,
    R: PreviewRenderer,
{
    /// Create the view and render its initial state.
    ///
    /// The initial query is empty unless `seed_from_address` is set, in which
    /// case it is read from the bridge. Mounting never navigates.
    pub fn mount(posts: &'a PostCollection, bridge: B, renderer: R, options: ViewOptions) -> Self {
        let query = if options.seed_from_address {
            bridge.read_current_query().unwrap_or_default()
        } else {
            String::new()
        };
        let visible = filter_posts(posts, &query);

        let mut view = Self {
            posts,
            bridge,
            renderer,
            options,
            query,
            visible,
        };
        view.render();
        view
    }

    /// Handle one input event carrying the full new text of the search box.
    pub fn on_input(&mut self, text: &str) {
        let visible = filter_posts(self.posts, text);

        let address = self.address_for(text);
        if let Err(err) = self.bridge.navigate_to(&address) {
            log!("nav"; "address not updated to {address}: {err}");
        }

        self.query = text.to_string();
        self.visible = visible;
        self.render();
    }

    /// The address mirroring `text`.
    pub fn address_for(&self, text: &str) -> String {
        search_address(&self.options.base_route, &self.options.param, text)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> &[&'a PostSummary] {
        &self.visible
    }

    pub fn previews(&self) -> Vec<PostPreview<'a>> {
        self.visible.iter().map(|post| post.preview()).collect()
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Tear the view down, handing back its collaborators.
    pub fn into_parts(self) -> (B, R) {
        (self.bridge, self.renderer)
    }

    fn render(&mut self) {
        let previews = self.previews();
        self.renderer.render(&self.query, &previews);
    }
}
