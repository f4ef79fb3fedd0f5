//! Site configuration management for `notes.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Site metadata and the listing route prefix       |
//! | `[posts]`   | Post summary manifest location and order         |
//! | `[search]`  | Query parameter, placeholder, address seeding    |
//! | `[serve]`   | Listing server (interface, port)                 |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "nm42"
//! path_prefix = "notes"
//!
//! [posts]
//! source = "public/posts.json"
//!
//! [search]
//! param = "search"
//!
//! [serve]
//! port = 5277
//! ```
//!
//! The file is optional: without it every section takes its defaults.

mod base;
pub mod defaults;
mod error;
mod posts;
mod search;
mod serve;

pub use error::ConfigError;
pub use posts::PostOrder;

use base::BaseConfig;
use posts::PostsConfig;
use search::SearchConfig;
use serve::ServeConfig;

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing notes.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root (set after loading)
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Post summary manifest
    #[serde(default)]
    pub posts: PostsConfig,

    /// Search box and address behavior
    #[serde(default)]
    pub search: SearchConfig,

    /// Listing server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load, apply CLI overrides and validate.
    ///
    /// A missing config file is not an error; defaults are used instead.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            log!("config"; "{} not found, using defaults", config_path.display());
            Self::default()
        };
        config.config_path = Self::normalize_path(&config_path);
        config.update_with_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = Some(path.to_path_buf())
    }

    /// The bare listing route derived from `[base].path_prefix`.
    pub fn base_route(&self) -> String {
        self.base.base_route()
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = Self::normalize_path(&root);
        self.set_root(&root);

        Self::update_option(&mut self.posts.source, cli.posts.as_ref());
        self.posts.source = Self::normalize_path(&root.join(&self.posts.source));

        if let Commands::Serve { interface, port } = &cli.command {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values that serde can't check on its own
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.base.path_prefix.contains(['?', '#']) {
            bail!(ConfigError::Validation(
                "[base.path_prefix] must not contain `?` or `#`".into()
            ));
        }

        if !self.search.is_valid_param() {
            bail!(ConfigError::Validation(
                "[search.param] must be a non-empty name of letters, digits, `-`, `_` or `.`"
                    .into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "nm42"
            path_prefix = "notes"
        "#,
        )
        .unwrap();

        assert_eq!(config.base.title, "nm42");
        assert_eq!(config.base_route(), "/notes/");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str(
            r#"
            [base
            title = "My Blog"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new("./"));
        assert_eq!(config.base_route(), "/");
        assert_eq!(config.posts.source, PathBuf::from("posts.json"));
        assert_eq!(config.search.param, "search");
        assert_eq!(config.serve.port, 5277);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            url = "nm42.dev"
        "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[base.url]"));
    }

    #[test]
    fn test_validate_rejects_query_in_prefix() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            path_prefix = "notes?x=1"
        "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_param() {
        let config = SiteConfig::from_str(
            r#"
            [search]
            param = "a b"
        "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[search.param]"));
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result = SiteConfig::from_str(
            r#"
            [build]
            minify = true
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = Cli::parse_from(["notes", "-r", root, "search", "rust"]);

        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.base.title, "notes");
        assert!(config.posts.source.is_absolute());
        assert!(config.posts.source.ends_with("posts.json"));
    }

    #[test]
    fn test_load_applies_cli_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("notes.toml"),
            r#"
            [posts]
            source = "public/posts.json"

            [serve]
            port = 3000
        "#,
        )
        .unwrap();
        let root = dir.path().to_str().unwrap();

        let cli = Cli::parse_from(["notes", "-r", root, "serve", "-p", "8080"]);
        let config = SiteConfig::load(&cli).unwrap();
        assert_eq!(config.serve.port, 8080);
        assert!(config.posts.source.ends_with("public/posts.json"));

        let cli = Cli::parse_from(["notes", "-r", root, "-P", "other.json", "browse"]);
        let config = SiteConfig::load(&cli).unwrap();
        assert_eq!(config.serve.port, 3000);
        assert!(config.posts.source.ends_with("other.json"));
    }

    #[test]
    fn test_load_reports_invalid_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.toml"), "[search]\nparam = \"\"\n").unwrap();
        let root = dir.path().to_str().unwrap();

        let cli = Cli::parse_from(["notes", "-r", root, "browse"]);
        assert!(SiteConfig::load(&cli).is_err());
    }
}
