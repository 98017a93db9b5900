//! Error taxonomy shared by manifest loading, entry resolution and the template glue.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, ViteError>;

/// Failures surfaced by a resolver call.
///
/// Every variant is fatal to the call that triggered it. The resolver only swallows
/// [`ViteError::EntrypointNotFound`] for names reached while following `imports`.
#[derive(Debug, Error)]
pub enum ViteError {
  /// The configured manifest file does not exist.
  #[error("Manifest `{}` not found.", path.display())]
  ManifestNotFound {
    /// Configured manifest location.
    path: PathBuf,
  },

  /// The manifest exists but could not be read.
  #[error("failed to read manifest `{}`: {source}", path.display())]
  ManifestRead {
    /// Configured manifest location.
    path: PathBuf,
    /// Underlying I/O error.
    source: std::io::Error,
  },

  /// The manifest content is not a well-formed manifest document.
  #[error("failed to parse manifest `{}`: {source}", path.display())]
  ManifestParse {
    /// Configured manifest location.
    path: PathBuf,
    /// Underlying JSON error.
    source: serde_json::Error,
  },

  /// A requested entry point is missing from the manifest.
  #[error("Entry `{entry}` not found in manifest")]
  EntrypointNotFound {
    /// Entry name as supplied by the caller.
    entry: String,
  },

  /// A template function name that the extension does not provide.
  #[error("unknown template function `{name}`")]
  UnknownFunction {
    /// Requested function name.
    name: String,
  },
}
