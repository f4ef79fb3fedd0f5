//! Terminal listing.

use super::PreviewRenderer;
use crate::post::PostPreview;
use colored::Colorize;
use std::io::Write;

/// Writes one line per preview: bold title, dimmed date and path.
///
/// Lines end in `\r\n` so the output stays aligned in raw mode.
pub struct TerminalListing<W: Write> {
    out: W,
}

impl<W: Write> TerminalListing<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PreviewRenderer for TerminalListing<W> {
    fn render(&mut self, query: &str, previews: &[PostPreview<'_>]) {
        let header = if query.is_empty() {
            format!("{} posts", previews.len())
        } else {
            format!("{} posts matching \"{query}\"", previews.len())
        };
        write!(self.out, "{}\r\n", header.dimmed()).ok();

        for preview in previews {
            let cover = if preview.cover_image.is_some() { " ▣" } else { "" };
            write!(
                self.out,
                "  {}{}  {}  {}\r\n",
                preview.title.bold(),
                cover,
                preview.date.dimmed(),
                preview.path.bright_blue(),
            )
            .ok();
        }
        self.out.flush().ok();
    }
}
