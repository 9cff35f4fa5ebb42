//! Collaborator seams for path resolution, inline reads, URL classification and
//! themed asset lookup.
//!
//! Host frameworks own the real resource machinery; the injector only needs the
//! narrow operations modelled here. Filesystem-backed defaults are provided so the
//! crate is usable stand-alone and straightforward to exercise in tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;

/// Resolve registration specs into file identifiers and public URLs.
pub trait AssetResolver {
  /// Resolve a plain relative path or `package:resource` spec into a file
  /// identifier. Returns `None` when the spec cannot be mapped to a usable path.
  fn resolve(&self, spec: &str) -> Option<String>;

  /// Public URL emitted into `src`/`href` attributes and the `Link` header for a
  /// resolved file.
  fn url_for(&self, file: &str) -> String;

  /// Absolute filesystem path used when reading a file for inline embedding.
  fn absolute_path(&self, file: &str) -> Option<PathBuf>;
}

/// Reads asset contents when a registration asks for inline embedding.
pub trait AssetReader {
  /// Read the file at `path` as text.
  fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Classifies candidate paths to decide whether inline embedding is possible.
pub trait UrlClassifier {
  /// Absolute or protocol-relative URLs served from elsewhere.
  fn is_external(&self, path: &str) -> bool;

  /// Root-relative URLs addressed from the site root.
  fn is_root_relative(&self, path: &str) -> bool;

  /// Paths that cannot be inlined and must stay as links.
  fn refuses_inline(&self, path: &str) -> bool {
    self.is_external(path) || self.is_root_relative(path)
  }
}

/// Locates themed assets by name across the active theme list.
pub trait ThemeLookup {
  /// Find `<name>.css` within the given themes, most specific theme first.
  fn find_themed_css(&self, name: &str, themes: &[String]) -> Option<String>;

  /// Find `<name>.js` within the given themes, most specific theme first.
  fn find_themed_js(&self, name: &str, themes: &[String]) -> Option<String>;
}

fn external_url_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"(?i)^(//|https?:)").expect("invalid external URL regex"))
}

/// Default classifier following the `//host` and `http(s):` conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardUrlClassifier;

impl UrlClassifier for StandardUrlClassifier {
  fn is_external(&self, path: &str) -> bool {
    external_url_pattern().is_match(path)
  }

  fn is_root_relative(&self, path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
  }
}

/// Resolver mapping resolved files onto a single document-root directory.
///
/// `package:resource` specs are normalised onto `package/resource` below the same
/// root; external URLs pass through untouched.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
  base: PathBuf,
  url_prefix: String,
}

impl DirectoryResolver {
  /// Create a resolver rooted at the given document directory.
  pub fn new(base: impl Into<PathBuf>) -> Self {
    Self {
      base: base.into(),
      url_prefix: "/".into(),
    }
  }

  /// Replace the prefix prepended when building public URLs.
  pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
    self.url_prefix = prefix.into();
    self
  }
}

impl AssetResolver for DirectoryResolver {
  fn resolve(&self, spec: &str) -> Option<String> {
    let spec = spec.trim();
    if spec.is_empty() {
      return None;
    }
    if StandardUrlClassifier.is_external(spec) {
      return Some(spec.to_string());
    }
    match spec.split_once(':') {
      Some((package, resource)) if !package.is_empty() && !resource.is_empty() => Some(format!(
        "{}/{}",
        package.trim_matches('/'),
        resource.trim_start_matches('/')
      )),
      _ => Some(spec.to_string()),
    }
  }

  fn url_for(&self, file: &str) -> String {
    if StandardUrlClassifier.is_external(file) || file.starts_with('/') {
      return file.to_string();
    }
    format!("{}{}", self.url_prefix, file)
  }

  fn absolute_path(&self, file: &str) -> Option<PathBuf> {
    if StandardUrlClassifier.is_external(file) {
      return None;
    }
    Some(self.base.join(file.trim_start_matches('/')))
  }
}

/// Reader backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskAssetReader;

impl AssetReader for DiskAssetReader {
  fn read_to_string(&self, path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
  }
}

/// Theme lookup walking `<root>/<theme>/css` and `<root>/<theme>/javascript`
/// directories on disk.
#[derive(Debug, Clone)]
pub struct DirectoryThemeLookup {
  root: PathBuf,
}

impl DirectoryThemeLookup {
  /// Create a lookup over the given themes directory.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  fn find(&self, themes: &[String], subdir: &str, file_name: &str) -> Option<String> {
    for theme in themes {
      let candidate = self.root.join(theme).join(subdir).join(file_name);
      if candidate.is_file() {
        return Some(format!("{theme}/{subdir}/{file_name}"));
      }
    }
    None
  }
}

impl ThemeLookup for DirectoryThemeLookup {
  fn find_themed_css(&self, name: &str, themes: &[String]) -> Option<String> {
    self.find(themes, "css", &format!("{name}.css"))
  }

  fn find_themed_js(&self, name: &str, themes: &[String]) -> Option<String> {
    self.find(themes, "javascript", &format!("{name}.js"))
  }
}

/// Error raised when a themed asset cannot be located in any active theme.
#[derive(Debug)]
pub enum ThemedLookupError {
  /// No matching stylesheet was found for the requested name.
  Stylesheet {
    /// Themed name the lookup ran for.
    name: String,
  },
  /// No matching script was found for the requested name.
  Script {
    /// Themed name the lookup ran for.
    name: String,
  },
}

impl std::fmt::Display for ThemedLookupError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Stylesheet { name } => write!(
        f,
        "no stylesheet named {name}.css exists in any active theme; check themed stylesheet references naming it"
      ),
      Self::Script { name } => write!(
        f,
        "no script named {name}.js exists in any active theme; check themed script references naming it"
      ),
    }
  }
}

impl std::error::Error for ThemedLookupError {}
