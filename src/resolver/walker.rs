//! Chunk graph traversal for static (manifest-backed) resolution.
//!
//! Entry names supplied by the caller go through [`resolve_entry`] and fail hard when
//! absent. Names reached by following `imports` go through [`lookup_import`] and are
//! skipped when absent, since import lists may reference chunks published elsewhere.
//! All functions return bare manifest paths; deduplication and prefixing happen once in
//! the resolver.

use std::collections::HashSet;

use crate::error::{Result, ViteError};
use crate::manifest::{Chunk, Manifest};

/// Strict lookup for a caller-supplied entry name.
pub fn resolve_entry<'m>(manifest: &'m Manifest, name: &str) -> Result<&'m Chunk> {
  manifest
    .get(name)
    .ok_or_else(|| ViteError::EntrypointNotFound {
      entry: name.to_string(),
    })
}

/// Lenient lookup for a name found in an `imports` list.
pub fn lookup_import<'m>(manifest: &'m Manifest, name: &str) -> Option<&'m Chunk> {
  let chunk = manifest.get(name);
  if chunk.is_none() {
    log::debug!("skipping import `{name}` missing from manifest");
  }
  chunk
}

/// The entry chunk's own output file, if it has one. Imports are not followed.
pub fn script_files(manifest: &Manifest, entry: &str) -> Result<Vec<String>> {
  let chunk = resolve_entry(manifest, entry)?;
  Ok(chunk.file.iter().cloned().collect())
}

/// Stylesheets of the entry chunk and of every chunk reachable through `imports`.
///
/// Chunks are visited depth first in import order and each chunk at most once, which
/// keeps cyclic import graphs finite.
pub fn style_files(manifest: &Manifest, entry: &str) -> Result<Vec<String>> {
  let root = resolve_entry(manifest, entry)?;

  let mut files = Vec::new();
  let mut visited: HashSet<&str> = HashSet::new();
  let mut pending: Vec<(&str, &Chunk)> = vec![(entry, root)];

  // Marking on pop keeps the depth-first order of a recursive walk.
  while let Some((name, chunk)) = pending.pop() {
    if !visited.insert(name) {
      continue;
    }
    files.extend(chunk_styles(chunk));

    for import in chunk.import_names().iter().rev() {
      if visited.contains(import.as_str()) {
        continue;
      }
      if let Some(imported) = lookup_import(manifest, import) {
        pending.push((import.as_str(), imported));
      }
    }
  }

  Ok(files)
}

/// Output files of the entry chunk's direct imports, for modulepreload hints.
pub fn preload_files(manifest: &Manifest, entry: &str) -> Result<Vec<String>> {
  let chunk = resolve_entry(manifest, entry)?;

  Ok(
    chunk
      .import_names()
      .iter()
      .filter_map(|name| lookup_import(manifest, name))
      .filter_map(|imported| imported.file.clone())
      .collect(),
  )
}

/// Style contribution of a single chunk.
///
/// A present `css` key replaces, rather than extends, the chunk's own stylesheet
/// output, even when the list is empty.
fn chunk_styles(chunk: &Chunk) -> Vec<String> {
  match &chunk.css {
    Some(css) => css.clone(),
    None => chunk.stylesheet_file().map(str::to_string).into_iter().collect(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn manifest(json: &str) -> Manifest {
    Manifest::from_json(json).expect("fixture manifest should parse")
  }

  fn site() -> Manifest {
    manifest(
      r#"{
        "_shared-B7PI925R.js": {
          "file": "assets/shared-B7PI925R.js",
          "css": ["assets/shared-ChJ_j-JJ.css"]
        },
        "views/foo.js": {
          "file": "assets/foo-BRBmoGS9.js",
          "isEntry": true,
          "imports": ["_shared-B7PI925R.js"],
          "css": ["assets/foo-5UjPuW-k.css"]
        },
        "views/bar.js": {
          "file": "assets/bar-gkvgaI9m.js",
          "isEntry": true,
          "imports": ["_shared-B7PI925R.js"]
        }
      }"#,
    )
  }

  #[test]
  fn strict_lookup_names_the_missing_entry() {
    let err = resolve_entry(&site(), "views/notFound.js").unwrap_err();
    assert_eq!(
      err.to_string(),
      "Entry `views/notFound.js` not found in manifest"
    );
  }

  #[test]
  fn lenient_lookup_returns_none() {
    assert!(lookup_import(&site(), "_missing.js").is_none());
    assert!(lookup_import(&site(), "views/bar.js").is_some());
  }

  #[test]
  fn scripts_only_return_the_entry_file() {
    assert_eq!(
      script_files(&site(), "views/foo.js").unwrap(),
      vec!["assets/foo-BRBmoGS9.js"]
    );
  }

  #[test]
  fn scripts_are_empty_without_a_file() {
    let manifest = manifest(r#"{"views/bar.js": {"imports": ["_missing.js"]}}"#);
    assert!(script_files(&manifest, "views/bar.js").unwrap().is_empty());
  }

  #[test]
  fn styles_follow_imports() {
    assert_eq!(
      style_files(&site(), "views/foo.js").unwrap(),
      vec!["assets/foo-5UjPuW-k.css", "assets/shared-ChJ_j-JJ.css"]
    );
    assert_eq!(
      style_files(&site(), "views/bar.js").unwrap(),
      vec!["assets/shared-ChJ_j-JJ.css"]
    );
  }

  #[test]
  fn styles_skip_missing_imports() {
    let manifest = manifest(
      r#"{
        "entry.js": {"css": ["a.css"], "imports": ["_gone.js", "_dep.js"]},
        "_dep.js": {"css": ["dep.css"]}
      }"#,
    );
    assert_eq!(
      style_files(&manifest, "entry.js").unwrap(),
      vec!["a.css", "dep.css"]
    );
  }

  #[test]
  fn styles_recurse_depth_first() {
    let manifest = manifest(
      r#"{
        "entry.js": {"css": ["entry.css"], "imports": ["_a.js", "_b.js"]},
        "_a.js": {"css": ["a.css"], "imports": ["_c.js"]},
        "_b.js": {"css": ["b.css"], "imports": ["_c.js"]},
        "_c.js": {"css": ["c.css"]}
      }"#,
    );
    assert_eq!(
      style_files(&manifest, "entry.js").unwrap(),
      vec!["entry.css", "a.css", "c.css", "b.css"]
    );
  }

  #[test]
  fn styles_terminate_on_cycles() {
    let manifest = manifest(
      r#"{
        "a.js": {"css": ["a.css"], "imports": ["b.js"]},
        "b.js": {"css": ["b.css"], "imports": ["a.js"]}
      }"#,
    );
    assert_eq!(style_files(&manifest, "a.js").unwrap(), vec!["a.css", "b.css"]);
    assert_eq!(style_files(&manifest, "b.js").unwrap(), vec!["b.css", "a.css"]);
  }

  #[test]
  fn standalone_stylesheet_entry_contributes_its_file() {
    let manifest = manifest(r#"{"theme.css": {"file": "assets/theme-1a2b.css"}}"#);
    assert_eq!(
      style_files(&manifest, "theme.css").unwrap(),
      vec!["assets/theme-1a2b.css"]
    );
  }

  #[test]
  fn css_list_replaces_stylesheet_file() {
    let manifest = manifest(
      r#"{
        "theme.css": {"file": "assets/theme.css", "css": ["assets/extra.css"]},
        "empty.css": {"file": "assets/empty.css", "css": []}
      }"#,
    );
    assert_eq!(
      style_files(&manifest, "theme.css").unwrap(),
      vec!["assets/extra.css"]
    );
    assert!(style_files(&manifest, "empty.css").unwrap().is_empty());
  }

  #[test]
  fn preloads_cover_direct_imports_only() {
    let manifest = manifest(
      r#"{
        "entry.js": {"file": "entry.js", "imports": ["_a.js", "_gone.js", "_nofile.js"]},
        "_a.js": {"file": "a.js", "imports": ["_b.js"]},
        "_b.js": {"file": "b.js"},
        "_nofile.js": {"css": ["x.css"]}
      }"#,
    );
    assert_eq!(preload_files(&manifest, "entry.js").unwrap(), vec!["a.js"]);
  }

  #[test]
  fn preloads_fail_for_missing_entry() {
    assert!(matches!(
      preload_files(&site(), "views/notFound.js"),
      Err(ViteError::EntrypointNotFound { .. })
    ));
  }
}
