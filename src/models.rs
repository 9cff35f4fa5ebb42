//! Records accumulated while collecting page requirements.

use indexmap::IndexMap;
use serde::Deserialize;

/// Insertion-ordered stylesheet registry keyed by resolved file identifier.
pub type StylesheetMap = IndexMap<String, StylesheetEntry>;

/// Insertion-ordered script registry keyed by resolved file identifier.
pub type ScriptMap = IndexMap<String, ScriptEntry>;

/// Attributes stored for a registered stylesheet link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetEntry {
  /// Comma-separated media types emitted as the `media` attribute.
  pub media: Option<String>,
  /// Subresource integrity hash for the linked file.
  pub integrity: Option<String>,
  /// Cross-origin policy for the linked file.
  pub crossorigin: Option<String>,
}

/// Attributes stored for a registered script, merged across repeated registrations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptEntry {
  /// Load the script asynchronously. Stays set once requested for a file.
  pub async_load: bool,
  /// Defer execution until the document has been parsed. Stays set once requested.
  pub defer: bool,
  /// Override for the `type` attribute; the rendered default is
  /// `application/javascript`.
  pub script_type: Option<String>,
  /// Subresource integrity hash for the linked file.
  pub integrity: Option<String>,
  /// Cross-origin policy for the linked file.
  pub crossorigin: Option<String>,
  /// Sub-resource identifiers bundled within this file, recorded for combiner
  /// bookkeeping.
  pub provides: Vec<String>,
}

/// Options accepted when registering a stylesheet.
#[derive(Debug, Clone, Default)]
pub struct StylesheetOptions {
  /// Subresource integrity hash to emit on the link tag.
  pub integrity: Option<String>,
  /// Cross-origin policy to emit on the link tag.
  pub crossorigin: Option<String>,
  /// Emit an eager `<link rel="preload" as="style">` head tag at registration time.
  pub preload: bool,
  /// Queue an HTTP/2 push hint for the `Link` response header.
  pub push: bool,
  /// Embed the file contents as a literal `<style>` block instead of linking.
  pub inline: bool,
}

/// Options accepted when registering a script.
#[derive(Debug, Clone, Default)]
pub struct ScriptOptions {
  /// Override for the script `type` attribute.
  pub script_type: Option<String>,
  /// Request asynchronous loading.
  pub async_load: bool,
  /// Request deferred execution.
  pub defer: bool,
  /// Subresource integrity hash to emit on the script tag.
  pub integrity: Option<String>,
  /// Cross-origin policy to emit on the script tag.
  pub crossorigin: Option<String>,
  /// Emit an eager `<link rel="preload" as="script">` head tag at registration time.
  pub preload: bool,
  /// Queue an HTTP/2 push hint for the `Link` response header.
  pub push: bool,
  /// Embed the file contents as a literal `<script>` block instead of linking.
  pub inline: bool,
  /// Sub-resource identifiers bundled within this file.
  pub provides: Vec<String>,
}

/// Asset kind discriminator used when emitting preload hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
  /// A stylesheet resource.
  Style,
  /// A script resource.
  Script,
}

impl AssetKind {
  /// Value emitted for the `as` attribute of preload hints.
  pub fn as_attr(self) -> &'static str {
    match self {
      Self::Style => "style",
      Self::Script => "script",
    }
  }

  /// MIME type emitted on eager preload link tags.
  pub fn mime_type(self) -> &'static str {
    match self {
      Self::Style => "text/css",
      Self::Script => "application/javascript",
    }
  }
}

/// Queued push hint consumed when building the `Link` response header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadAsset {
  /// Resolved file identifier of the hinted resource.
  pub file: String,
  /// Asset kind emitted as the `as` parameter.
  pub kind: AssetKind,
}

/// Placement policy for generated script tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptPlacement {
  /// Merge script tags into the head fragment, before `</head>`.
  #[default]
  Head,
  /// Insert script tags immediately after the opening `<body>` tag.
  BodyStart,
  /// Insert script tags immediately before the closing `</body>` tag.
  BodyEnd,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn preload_kinds_map_to_link_header_values() {
    assert_eq!(AssetKind::Style.as_attr(), "style");
    assert_eq!(AssetKind::Script.as_attr(), "script");
  }

  #[test]
  fn script_placement_deserialises_from_snake_case() {
    let placement: ScriptPlacement = serde_json::from_str("\"body_end\"").unwrap();
    assert_eq!(placement, ScriptPlacement::BodyEnd);
  }
}
