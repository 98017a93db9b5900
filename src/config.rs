//! Resolver configuration and the loader for on-disk configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

/// Configuration file names tried by [`ResolverConfig::discover`], in order.
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
    ["vite.config.json", "vite.config.yaml", "vite.config.yml"];

/// Construction parameters for [`crate::ViteManifest`].
///
/// Every field is optional in configuration files; missing keys fall back to the
/// [`Default`] values, which describe a static-mode resolver with no prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Location of Vite's `manifest.json`. Unused when the dev server is enabled.
    pub manifest_path: PathBuf,
    /// Public base path prepended to every resolved asset. May point at a CDN.
    pub base_path: String,
    /// Dev server origin including port, e.g. `http://localhost:5173/`.
    pub server_url: String,
    /// Resolve against the Vite dev server instead of the manifest.
    pub dev_enabled: bool,
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// Failed to parse a JSON configuration file.
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
    /// Failed to parse a YAML configuration file.
    #[error("failed to parse {}: {source}", path.display())]
    Yaml {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_yaml::Error,
    },
    /// The file extension does not name a supported format.
    #[error("unsupported configuration format for {}", path.display())]
    UnsupportedFormat {
        /// Path that caused the error.
        path: PathBuf,
    },
}

impl ResolverConfig {
    /// Static-mode configuration reading the manifest at `manifest_path`.
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            ..Self::default()
        }
    }

    /// Replace the manifest location.
    pub fn with_manifest_path(mut self, manifest_path: impl Into<PathBuf>) -> Self {
        self.manifest_path = manifest_path.into();
        self
    }

    /// Replace the public base path.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Replace the dev server origin.
    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = server_url.into();
        self
    }

    /// Toggle dev server mode.
    pub fn with_dev_enabled(mut self, dev_enabled: bool) -> Self {
        self.dev_enabled = dev_enabled;
        self
    }

    /// Read configuration from a JSON or YAML file, chosen by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = Format::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match format {
            Format::Json => serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            }),
            Format::Yaml => serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Look for a configuration file in `dir` and load the first one found.
    ///
    /// Falls back to [`ResolverConfig::default`] when no candidate exists. A candidate
    /// that exists but cannot be parsed is an error rather than a silent default.
    pub fn discover(dir: &Path) -> anyhow::Result<Self> {
        let Some(candidate) = CONFIG_FILE_CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
        else {
            log::debug!("no resolver configuration in {}, using defaults", dir.display());
            return Ok(Self::default());
        };

        log::debug!("loading resolver configuration from {}", candidate.display());
        Self::from_path(&candidate)
            .with_context(|| format!("invalid resolver configuration in {}", dir.display()))
    }
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}
