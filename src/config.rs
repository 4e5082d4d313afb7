//! Configuration file support
//!
//! Loads settings from ~/.hilite.toml (or %USERPROFILE%\.hilite.toml on Windows)
//!
//! Example:
//! ```toml
//! # hilite configuration
//! default_language = "cpp"
//! recompute_batch = 500
//!
//! [aliases]
//! ino = "cpp"
//! mjs = "js"
//!
//! [theme.Keyword]
//! fg = "#c586c0"
//! bold = true
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::syntax::{ProfileRegistry, StyleId};
use crate::theme::{FormatOverride, Theme};

/// Configuration settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Language used when a file's extension is not recognized
    pub default_language: Option<String>,
    /// Lines recomputed per step of a full recompute (0 = all at once)
    pub recompute_batch: usize,
    /// Extra tags resolved to existing profiles
    pub aliases: HashMap<String, String>,
    /// Theme overrides per style
    pub theme: HashMap<StyleId, FormatOverride>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".hilite.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".hilite.toml"))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Register the configured aliases
    pub fn apply_aliases(&self, registry: &mut ProfileRegistry) -> Result<()> {
        for (tag, id) in &self.aliases {
            registry.add_alias(tag, id)?;
        }
        Ok(())
    }

    /// Default theme with the configured overrides applied
    pub fn theme(&self) -> Theme {
        let mut theme = Theme::default();
        theme.apply(&self.theme);
        theme
    }
}
