//! Combiner and combined-file storage seams.
//!
//! Combined-file generation lives outside this crate. The injector only offers the
//! hook points: a pre-injection pass that may rewrite the collected requirement
//! maps, and a storage handle for purging previously generated artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::{ScriptMap, StylesheetMap};

/// Pre-injection hook allowed to merge or rewrite the collected requirement maps.
pub trait AssetCombiner {
  /// Rewrite the stylesheet and script maps in place, typically replacing several
  /// entries with a combined bundle.
  fn combine(&self, stylesheets: &mut StylesheetMap, scripts: &mut ScriptMap) -> Result<()>;
}

/// Combiner that leaves the collected maps untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCombiner;

impl AssetCombiner for NoopCombiner {
  fn combine(&self, _stylesheets: &mut StylesheetMap, _scripts: &mut ScriptMap) -> Result<()> {
    Ok(())
  }
}

/// Storage backend holding generated combined bundle artifacts.
pub trait CombinedStorage {
  /// Remove every artifact below the given folder. A folder that does not exist is
  /// not an error.
  fn remove_contents(&self, folder: &Path) -> Result<()>;
}

/// Storage backend keeping combined artifacts on the local filesystem.
#[derive(Debug, Clone)]
pub struct DiskCombinedStorage {
  root: PathBuf,
}

impl DiskCombinedStorage {
  /// Create a storage handle rooted at the given asset directory.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }
}

impl CombinedStorage for DiskCombinedStorage {
  fn remove_contents(&self, folder: &Path) -> Result<()> {
    let target = self.root.join(folder);
    if !target.is_dir() {
      return Ok(());
    }

    for entry in
      fs::read_dir(&target).with_context(|| format!("failed to read {}", target.display()))?
    {
      let entry = entry?;
      let path = entry.path();
      if entry.file_type()?.is_dir() {
        fs::remove_dir_all(&path)
          .with_context(|| format!("failed to remove {}", path.display()))?;
      } else {
        fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))?;
      }
    }

    Ok(())
  }
}
