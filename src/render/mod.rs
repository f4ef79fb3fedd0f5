//! Presentation of the visible posts.
//!
//! The search view calls [`PreviewRenderer::render`] after mounting and after
//! every input; renderers only format what they are given.

mod html;
mod terminal;

pub use html::HtmlListing;
pub use terminal::TerminalListing;

use crate::post::PostPreview;

/// Receives the full list of previews after each view transition.
pub trait PreviewRenderer {
    fn render(&mut self, query: &str, previews: &[PostPreview<'_>]);
}

impl<R: PreviewRenderer + ?Sized> PreviewRenderer for &mut R {
    fn render(&mut self, query: &str, previews: &[PostPreview<'_>]) {
        (**self).render(query, previews)
    }
}

/// Drops every frame; for views whose result is read back directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRender;

impl PreviewRenderer for NoRender {
    fn render(&mut self, _query: &str, _previews: &[PostPreview<'_>]) {}
}
