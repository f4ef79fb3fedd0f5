//! Incremental post search.
//!
//! ```text
//! keystroke ──► SearchView::on_input(text)
//!                 │
//!                 ├── filter_posts(all, text) ──► visible posts
//!                 ├── NavigationBridge::navigate_to("/?search=text" | "/")
//!                 └── PreviewRenderer::render(text, previews)
//! ```
//!
//! The filter is a pure function; the view is the only stateful part and
//! every front-end (terminal, HTTP, one-shot CLI) drives the same view.

pub mod filter;
pub mod navigation;
pub mod view;

pub use navigation::{HistoryBridge, RequestBridge, address_path};
pub use view::{SearchView, ViewOptions};
