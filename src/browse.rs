//! Interactive terminal search.
//!
//! Puts the terminal in raw mode and feeds every edit of the search line to
//! the search view as one input event, so the listing narrows keystroke by
//! keystroke. The "address bar" is an in-memory [`HistoryBridge`] shown on the
//! status line.
//!
//! Keys: printable characters type, `Backspace` deletes, `Ctrl+U` clears,
//! `Esc`/`Ctrl+C`/`Ctrl+D` quit.

use crate::{
    config::SiteConfig,
    log,
    post::{PostCollection, PostPreview},
    render::{PreviewRenderer, TerminalListing},
    search::{HistoryBridge, SearchView, ViewOptions},
};
use anyhow::{Context, Result};
use colored::Colorize;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, terminal,
};
use std::io::{Stdout, Write, stdout};

/// What a key press does to the search line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyAction {
    /// The search line changed to this text
    Input(String),
    Quit,
    Ignore,
}

/// Map a key press onto the current search text.
///
/// Only edits that change the text produce an input, matching a text box
/// whose change event fires on actual changes.
fn apply_key(text: &str, key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c' | 'd') if ctrl => KeyAction::Quit,
        KeyCode::Char('u') if ctrl => {
            if text.is_empty() {
                KeyAction::Ignore
            } else {
                KeyAction::Input(String::new())
            }
        }
        KeyCode::Char(_) if ctrl => KeyAction::Ignore,
        KeyCode::Char(c) => {
            let mut next = text.to_string();
            next.push(c);
            KeyAction::Input(next)
        }
        KeyCode::Backspace => {
            let mut next = text.to_string();
            match next.pop() {
                Some(_) => KeyAction::Input(next),
                None => KeyAction::Ignore,
            }
        }
        _ => KeyAction::Ignore,
    }
}

/// Full-screen renderer: title, prompt line, then the listing.
struct Screen {
    title: String,
    placeholder: String,
    listing: TerminalListing<Stdout>,
}

impl PreviewRenderer for Screen {
    fn render(&mut self, query: &str, previews: &[PostPreview<'_>]) {
        let mut out = stdout();
        execute!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )
        .ok();

        let prompt = if query.is_empty() {
            self.placeholder.dimmed().to_string()
        } else {
            query.to_string()
        };
        write!(out, "{}\r\n> {prompt}\r\n\r\n", self.title.bold()).ok();
        out.flush().ok();

        self.listing.render(query, previews);
    }
}

/// Leaves raw mode when dropped, including on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        terminal::disable_raw_mode().ok();
    }
}

/// Run the interactive search until the user quits.
pub fn browse_posts(config: &SiteConfig, posts: &PostCollection) -> Result<()> {
    let options = ViewOptions::from_config(config);
    let bridge = HistoryBridge::new(config.base_route(), &config.search.param);
    let screen = Screen {
        title: config.base.title.clone(),
        placeholder: config.search.placeholder.clone(),
        listing: TerminalListing::new(stdout()),
    };

    let guard = RawModeGuard::enable()?;
    let mut view = SearchView::mount(posts, bridge, screen, options);
    draw_status(view.bridge().current());

    loop {
        let Event::Key(key) = event::read().context("Failed to read terminal event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match apply_key(view.query(), key) {
            KeyAction::Input(text) => {
                view.on_input(&text);
                draw_status(view.bridge().current());
            }
            KeyAction::Quit => break,
            KeyAction::Ignore => {}
        }
    }

    drop(guard);
    let (bridge, _) = view.into_parts();
    log!(
        "browse";
        "{} address updates, last: {}",
        bridge.history().len() - 1,
        bridge.current()
    );
    Ok(())
}

fn draw_status(address: &str) {
    let mut out = stdout();
    write!(out, "\r\n{}\r\n", address.bright_magenta()).ok();
    out.flush().ok();
}
