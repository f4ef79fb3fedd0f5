//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Post listing and incremental search for a notes site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root; config and manifest paths are resolved against it
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: notes.toml)
    #[arg(short = 'C', long, default_value = "notes.toml")]
    pub config: PathBuf,

    /// Post summary manifest (overrides `[posts].source`)
    #[arg(short = 'P', long)]
    pub posts: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Filter the listing once and print the matching posts
    Search {
        /// Text matched against titles and dates (empty shows everything)
        #[arg(default_value = "")]
        query: String,

        /// Print the previews as JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Search interactively; the listing narrows on every keystroke
    Browse,

    /// Serve the listing page; the query lives in the address
    Serve {
        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_search(&self) -> bool {
        matches!(self.command, Commands::Search { .. })
    }
    pub const fn is_browse(&self) -> bool {
        matches!(self.command, Commands::Browse)
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
}
