//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration
//!   merging: seeded base, default file, environment overlay file,
//!   explicit environment bindings, automatic environment capture.
//! - Build the final `Config` facade from the merged delegate state.
//!
//! Does NOT handle:
//! - File parsing or nested-key merge semantics (delegated to figment).
//! - Environment variable name filtering for automatic capture
//!   (delegated to figment's `Env` provider).
//!
//! Invariants / Assumptions:
//! - The default file must exist and parse, or `load` fails.
//! - A missing overlay file is tolerated; an invalid one is fatal.
//! - Environment values take precedence over both file sources.
//! - `with_bind_keys` replaces the bind list rather than appending.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Serialized};
use figment::value::Dict;

use super::env::{EnvLookup, env_var_name, env_var_or_none};
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_AUTOMATIC_ENV, DEFAULT_BASENAME, DEFAULT_FILE_PREFIX, DEFAULT_SELECTOR_VAR,
};
use crate::facade::Config;
use crate::format::FileFormat;

/// Builder for the [`Config`] facade.
///
/// Accumulates load settings and drives the loading sequence: the
/// default file is merged first, then the overlay file selected by the
/// overlay-selector environment variable, then explicitly bound
/// environment variables, then automatic environment capture. Later
/// sources win on conflicting keys.
pub struct ConfigLoader {
    file_format: FileFormat,
    file_prefix: String,
    selector_var: String,
    automatic_env: bool,
    env_prefix: Option<String>,
    bind_keys: Vec<String>,
    base: Option<Figment>,
    env_lookup: EnvLookup,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader with the default settings: TOML files under
    /// `config/`, overlay selected by `ENV`, automatic environment
    /// capture enabled, no environment prefix, no explicit bindings.
    pub fn new() -> Self {
        Self {
            file_format: FileFormat::default(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            selector_var: DEFAULT_SELECTOR_VAR.to_string(),
            automatic_env: DEFAULT_AUTOMATIC_ENV,
            env_prefix: None,
            bind_keys: Vec::new(),
            base: None,
            env_lookup: Box::new(env_var_or_none),
        }
    }

    /// Set the configuration file format.
    pub fn with_file_format(mut self, format: FileFormat) -> Self {
        self.file_format = format;
        self
    }

    /// Set the prefix prepended to configuration file names.
    ///
    /// The prefix is a raw string prefix, not a directory: `"config/"`
    /// and `"config/app-"` are both valid.
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Set the name of the environment variable that selects the
    /// overlay file.
    pub fn with_selector_var(mut self, name: impl Into<String>) -> Self {
        self.selector_var = name.into();
        self
    }

    /// Enable or disable automatic environment capture.
    ///
    /// When enabled, every lookup additionally consults a
    /// correspondingly-named environment variable, which overrides both
    /// file sources. Pair with [`with_env_prefix`](Self::with_env_prefix)
    /// to avoid collisions.
    pub fn with_automatic_env(mut self, enabled: bool) -> Self {
        self.automatic_env = enabled;
        self
    }

    /// Set the prefix for environment variables, applied to both
    /// automatic capture and explicit bindings.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Set the configuration keys to bind to environment variables
    /// explicitly, replacing any previously configured list.
    ///
    /// Binding uses the standard naming convention (`database.host`
    /// binds to `DATABASE_HOST`, or `APP_DATABASE_HOST` with prefix
    /// `APP`) and works with or without automatic capture.
    pub fn with_bind_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bind_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Seed the delegate store with pre-loaded configuration.
    ///
    /// The seed is merged before any file, so every other source
    /// overrides it. This is the escape hatch for callers that need to
    /// apply arbitrary configuration to the delegate up front.
    pub fn with_base(mut self, base: Figment) -> Self {
        self.base = Some(base);
        self
    }

    /// Inject the environment lookup used for the overlay selector and
    /// explicit bindings (primarily for testing).
    ///
    /// Defaults to a process-environment lookup that treats empty and
    /// whitespace-only values as unset.
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.env_lookup = Box::new(lookup);
        self
    }

    /// Load the configuration and return the facade.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] if the default file does
    /// not exist, [`ConfigError::FileLoad`] if the default file or a
    /// present overlay file cannot be parsed, and
    /// [`ConfigError::EnvBind`] if a bind key is rejected.
    pub fn load(self) -> Result<Config, ConfigError> {
        let extension = self.file_format.extension();
        let mut figment = self.base.unwrap_or_else(Figment::new);

        let default_path =
            PathBuf::from(format!("{}{}.{}", self.file_prefix, DEFAULT_BASENAME, extension));
        if !default_path.exists() {
            return Err(ConfigError::FileNotFound { path: default_path });
        }
        tracing::debug!(path = %default_path.display(), "loading default config file");
        figment = self.file_format.merge_file(figment, &default_path);
        ensure_loaded(&figment, &default_path)?;

        if let Some(selected) = (self.env_lookup)(&self.selector_var) {
            let overlay_path = PathBuf::from(format!(
                "{}{}.{}",
                self.file_prefix,
                selected.to_lowercase(),
                extension
            ));
            if overlay_path.exists() {
                tracing::debug!(path = %overlay_path.display(), "merging overlay config file");
                figment = self.file_format.merge_file(figment, &overlay_path);
                ensure_loaded(&figment, &overlay_path)?;
            } else {
                tracing::debug!(path = %overlay_path.display(), "overlay config file not found, skipping");
            }
        }

        for key in &self.bind_keys {
            if key.trim().is_empty() {
                return Err(ConfigError::EnvBind {
                    key: key.clone(),
                    reason: "bind key must not be empty".to_string(),
                });
            }
            let name = env_var_name(self.env_prefix.as_deref(), key);
            if let Some(value) = (self.env_lookup)(&name) {
                tracing::debug!(var = %name, key = %key, "binding environment variable");
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        if self.automatic_env {
            figment = match &self.env_prefix {
                Some(prefix) => {
                    let prefix = format!("{}_", prefix.to_uppercase());
                    figment.merge(Env::prefixed(&prefix).split("_"))
                }
                None => figment.merge(Env::raw().split("_")),
            };
        }

        Ok(Config::new(figment))
    }
}

/// Force evaluation of the merged state so file errors surface now,
/// attributed to the file merged last.
fn ensure_loaded(figment: &Figment, path: &Path) -> Result<(), ConfigError> {
    figment
        .extract::<Dict>()
        .map(|_| ())
        .map_err(|source| ConfigError::FileLoad {
            path: path.to_path_buf(),
            source,
        })
}
