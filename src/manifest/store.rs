//! Lazy, memoized loading of the manifest file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{Result, ViteError};
use crate::manifest::Manifest;

/// Owns the manifest location and, after the first successful load, its parsed content.
///
/// The cached value is written once and only read afterwards, so a store shared between
/// threads needs no locking. Two threads racing on the very first load may both read the
/// file; only one result is kept.
#[derive(Debug)]
pub struct ManifestStore {
  path: PathBuf,
  manifest: OnceLock<Manifest>,
}

impl ManifestStore {
  /// Create a store for the manifest at `path`. Nothing is read yet.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self {
      path: path.into(),
      manifest: OnceLock::new(),
    }
  }

  /// Configured manifest location.
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Returns `true` once the manifest has been read and cached.
  pub fn is_loaded(&self) -> bool {
    self.manifest.get().is_some()
  }

  /// Return the manifest, reading and parsing it on first use.
  ///
  /// Failed loads are not cached; the next call tries again.
  pub fn load(&self) -> Result<&Manifest> {
    if let Some(manifest) = self.manifest.get() {
      log::trace!("reusing cached manifest {}", self.path.display());
      return Ok(manifest);
    }

    let manifest = read_manifest(&self.path)?;
    Ok(self.manifest.get_or_init(|| manifest))
  }
}

fn read_manifest(path: &Path) -> Result<Manifest> {
  let content = match fs::read_to_string(path) {
    Ok(content) => content,
    // A regular file in place of a parent directory also means there is no manifest.
    Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
      return Err(ViteError::ManifestNotFound {
        path: path.to_path_buf(),
      });
    }
    Err(source) => {
      return Err(ViteError::ManifestRead {
        path: path.to_path_buf(),
        source,
      });
    }
  };

  let manifest = Manifest::from_json(&content).map_err(|source| ViteError::ManifestParse {
    path: path.to_path_buf(),
    source,
  })?;
  log::debug!(
    "loaded manifest {} ({} chunks)",
    path.display(),
    manifest.len()
  );
  Ok(manifest)
}
