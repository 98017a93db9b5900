//! Resolve entry points into the asset paths and tags a page must emit.
//!
//! [`ViteManifest`] reads the build manifest in static mode and talks in terms of source
//! entry names in dev mode, where the Vite dev server serves modules unbundled.

pub mod walker;

use std::fmt;
use std::sync::Arc;

use crate::asset_paths::{PathPrefix, is_stylesheet, unique_in_order};
use crate::config::ResolverConfig;
use crate::error::Result;
use crate::manifest::{Manifest, ManifestStore};
use crate::render::{Markup, preload_tag, render_all, script_tag, stylesheet_tag};

/// Client module injected first in dev mode to enable hot module replacement.
pub const DEV_CLIENT_ENTRY: &str = "@vite/client";

/// Operations a template integration needs from a resolver.
///
/// The `render_*` methods are provided in terms of the path getters.
pub trait AssetResolver {
  /// Script paths for `entries`, prefixed and deduplicated.
  fn scripts(&self, entries: &[&str]) -> Result<Vec<String>>;

  /// Stylesheet paths for `entries`, prefixed and deduplicated.
  fn styles(&self, entries: &[&str]) -> Result<Vec<String>>;

  /// Module preload paths for `entries`, prefixed and deduplicated.
  fn preloads(&self, entries: &[&str]) -> Result<Vec<String>>;

  /// `<script type="module">` tags for `entries`.
  fn render_scripts(&self, entries: &[&str]) -> Result<Markup> {
    Ok(render_all(&self.scripts(entries)?, script_tag))
  }

  /// `<link rel="stylesheet">` tags for `entries`.
  fn render_styles(&self, entries: &[&str]) -> Result<Markup> {
    Ok(render_all(&self.styles(entries)?, stylesheet_tag))
  }

  /// `<link rel="modulepreload">` tags for `entries`.
  fn render_preloads(&self, entries: &[&str]) -> Result<Markup> {
    Ok(render_all(&self.preloads(entries)?, preload_tag))
  }
}

impl<T: AssetResolver + ?Sized> AssetResolver for Arc<T> {
  fn scripts(&self, entries: &[&str]) -> Result<Vec<String>> {
    (**self).scripts(entries)
  }

  fn styles(&self, entries: &[&str]) -> Result<Vec<String>> {
    (**self).styles(entries)
  }

  fn preloads(&self, entries: &[&str]) -> Result<Vec<String>> {
    (**self).preloads(entries)
  }
}

/// Where resolved paths come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  /// Hashed files listed in the build manifest.
  Static,
  /// Source entries served by the Vite dev server.
  Dev,
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Static => f.write_str("static"),
      Self::Dev => f.write_str("dev"),
    }
  }
}

/// Manifest-backed resolver. Owns its configuration and the cached manifest.
#[derive(Debug)]
pub struct ViteManifest {
  config: ResolverConfig,
  prefix: PathPrefix,
  store: ManifestStore,
}

type Walk = fn(&Manifest, &str) -> Result<Vec<String>>;

impl ViteManifest {
  /// Create a resolver. The manifest is not read until a static-mode lookup needs it.
  pub fn new(config: ResolverConfig) -> Self {
    Self {
      prefix: PathPrefix::from_config(&config),
      store: ManifestStore::new(config.manifest_path.clone()),
      config,
    }
  }

  /// Configuration the resolver was built with.
  pub fn config(&self) -> &ResolverConfig {
    &self.config
  }

  /// Resolution mode selected by the configuration.
  pub fn mode(&self) -> Mode {
    if self.config.dev_enabled {
      Mode::Dev
    } else {
      Mode::Static
    }
  }

  /// The parsed manifest, loading it on first use.
  pub fn manifest(&self) -> Result<&Manifest> {
    self.store.load()
  }

  fn collect(&self, entries: &[&str], walk: Walk) -> Result<Vec<String>> {
    if entries.is_empty() {
      return Ok(Vec::new());
    }

    let manifest = self.store.load()?;
    let mut files = Vec::new();
    for entry in entries.iter().copied() {
      files.extend(walk(manifest, entry)?);
    }
    Ok(self.finish(files))
  }

  fn finish<I, S>(&self, files: I) -> Vec<String>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.prefix.apply_all(unique_in_order(files))
  }
}

impl AssetResolver for ViteManifest {
  fn scripts(&self, entries: &[&str]) -> Result<Vec<String>> {
    log::trace!("resolving scripts for {} entries ({})", entries.len(), self.mode());
    match self.mode() {
      Mode::Dev => Ok(self.finish(
        std::iter::once(DEV_CLIENT_ENTRY).chain(entries.iter().copied()),
      )),
      Mode::Static => self.collect(entries, walker::script_files),
    }
  }

  fn styles(&self, entries: &[&str]) -> Result<Vec<String>> {
    log::trace!("resolving styles for {} entries ({})", entries.len(), self.mode());
    match self.mode() {
      // The dev server injects styles imported by modules; only standalone
      // stylesheet entries need a link tag.
      Mode::Dev => Ok(self.finish(
        entries.iter().copied().filter(|entry| is_stylesheet(entry)),
      )),
      Mode::Static => self.collect(entries, walker::style_files),
    }
  }

  fn preloads(&self, entries: &[&str]) -> Result<Vec<String>> {
    log::trace!("resolving preloads for {} entries ({})", entries.len(), self.mode());
    match self.mode() {
      Mode::Dev => Ok(Vec::new()),
      Mode::Static => self.collect(entries, walker::preload_files),
    }
  }
}
