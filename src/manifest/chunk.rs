//! Typed view of Vite's `manifest.json`.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::asset_paths::is_stylesheet;

/// One record of the manifest, keyed by its entry name.
///
/// Every key is optional. Absent keys stay `None` so that traversal can tell
/// "no `css` key" apart from "an empty `css` list". Only `file`, `css` and `imports`
/// are type checked; the informational keys read as `None` when they hold anything
/// unexpected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
  /// Built output path, relative to the build output directory.
  pub file: Option<String>,
  /// Source path the chunk was built from.
  #[serde(default, deserialize_with = "lenient")]
  pub src: Option<String>,
  /// Whether the chunk is a declared build entry point.
  #[serde(default, deserialize_with = "lenient")]
  pub is_entry: Option<bool>,
  /// Stylesheets emitted for this chunk, in order.
  pub css: Option<Vec<String>>,
  /// Entry names of statically imported chunks, in order.
  pub imports: Option<Vec<String>>,
  /// Entry names of dynamically imported chunks.
  #[serde(default, deserialize_with = "lenient")]
  pub dynamic_imports: Option<Vec<String>>,
  /// Static assets (images, fonts) referenced by the chunk.
  #[serde(default, deserialize_with = "lenient")]
  pub assets: Option<Vec<String>>,
}

impl Chunk {
  /// The chunk's own output file when it is itself a stylesheet.
  pub fn stylesheet_file(&self) -> Option<&str> {
    self.file.as_deref().filter(|file| is_stylesheet(file))
  }

  /// Statically imported entry names, empty when the key is absent.
  pub fn import_names(&self) -> &[String] {
    self.imports.as_deref().unwrap_or_default()
  }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned,
{
  let value = serde_json::Value::deserialize(deserializer)?;
  Ok(serde_json::from_value(value).ok())
}

/// Parsed manifest: entry name to chunk, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
  chunks: IndexMap<String, Chunk>,
}

impl Manifest {
  /// Parse a manifest from its JSON text.
  pub fn from_json(content: &str) -> serde_json::Result<Self> {
    serde_json::from_str(content)
  }

  /// Look up a chunk by entry name.
  pub fn get(&self, name: &str) -> Option<&Chunk> {
    self.chunks.get(name)
  }

  /// Number of chunks in the manifest.
  pub fn len(&self) -> usize {
    self.chunks.len()
  }

  /// Returns `true` when the manifest holds no chunks.
  pub fn is_empty(&self) -> bool {
    self.chunks.is_empty()
  }

  /// Iterate over `(entry name, chunk)` pairs in document order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &Chunk)> {
    self.chunks.iter().map(|(name, chunk)| (name.as_str(), chunk))
  }

  /// Names of chunks flagged with `isEntry: true`, in document order.
  pub fn entry_points(&self) -> impl Iterator<Item = &str> {
    self
      .iter()
      .filter(|(_, chunk)| chunk.is_entry == Some(true))
      .map(|(name, _)| name)
  }
}

impl FromIterator<(String, Chunk)> for Manifest {
  fn from_iter<I: IntoIterator<Item = (String, Chunk)>>(iter: I) -> Self {
    Self {
      chunks: iter.into_iter().collect(),
    }
  }
}
