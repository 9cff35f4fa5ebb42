//! Request-scoped requirement collection and injection.
//!
//! One [`RequirementsInjector`] lives for the duration of a single page render:
//! registrations happen while templates evaluate, the injection pass runs once the
//! full document string is assembled, and the instance is discarded with the
//! request. Registration order of distinct files determines output order.

mod engine;
mod scripts;
mod stylesheets;
mod themed;

use std::path::Path;

use anyhow::Result;

use crate::combine::{AssetCombiner, CombinedStorage, DiskCombinedStorage, NoopCombiner};
use crate::config::InjectorConfig;
use crate::models::{PreloadAsset, ScriptMap, ScriptPlacement, StylesheetMap};
use crate::resolve::{
  AssetReader, AssetResolver, DirectoryResolver, DirectoryThemeLookup, DiskAssetReader,
  StandardUrlClassifier, ThemeLookup, UrlClassifier,
};

/// Collects CSS/JavaScript requirements for one rendered page and splices the
/// rendered tags into the response document.
pub struct RequirementsInjector {
  config: InjectorConfig,
  placement: ScriptPlacement,
  themes: Vec<String>,
  stylesheets: StylesheetMap,
  scripts: ScriptMap,
  custom_css: Vec<String>,
  custom_scripts: Vec<String>,
  custom_head_tags: Vec<String>,
  eager_head_tags: Vec<String>,
  preload_queue: Vec<PreloadAsset>,
  resolver: Box<dyn AssetResolver>,
  reader: Box<dyn AssetReader>,
  classifier: Box<dyn UrlClassifier>,
  theme_lookup: Box<dyn ThemeLookup>,
  combiner: Box<dyn AssetCombiner>,
  combined_storage: Box<dyn CombinedStorage>,
}

impl RequirementsInjector {
  /// Create an empty injector with filesystem-backed default collaborators.
  pub fn new(config: InjectorConfig) -> Self {
    let placement = config.script_placement;
    Self {
      config,
      placement,
      themes: Vec::new(),
      stylesheets: StylesheetMap::new(),
      scripts: ScriptMap::new(),
      custom_css: Vec::new(),
      custom_scripts: Vec::new(),
      custom_head_tags: Vec::new(),
      eager_head_tags: Vec::new(),
      preload_queue: Vec::new(),
      resolver: Box::new(DirectoryResolver::new(".")),
      reader: Box::new(DiskAssetReader),
      classifier: Box::new(StandardUrlClassifier),
      theme_lookup: Box::new(DirectoryThemeLookup::new("themes")),
      combiner: Box::new(NoopCombiner),
      combined_storage: Box::new(DiskCombinedStorage::new(".")),
    }
  }

  /// Replace the path resolver collaborator.
  pub fn with_resolver(mut self, resolver: impl AssetResolver + 'static) -> Self {
    self.resolver = Box::new(resolver);
    self
  }

  /// Replace the inline file reader collaborator.
  pub fn with_reader(mut self, reader: impl AssetReader + 'static) -> Self {
    self.reader = Box::new(reader);
    self
  }

  /// Replace the URL classifier collaborator.
  pub fn with_url_classifier(mut self, classifier: impl UrlClassifier + 'static) -> Self {
    self.classifier = Box::new(classifier);
    self
  }

  /// Replace the theme lookup collaborator.
  pub fn with_theme_lookup(mut self, lookup: impl ThemeLookup + 'static) -> Self {
    self.theme_lookup = Box::new(lookup);
    self
  }

  /// Replace the combiner hook run ahead of tag rendering.
  pub fn with_combiner(mut self, combiner: impl AssetCombiner + 'static) -> Self {
    self.combiner = Box::new(combiner);
    self
  }

  /// Replace the combined-file storage collaborator.
  pub fn with_combined_storage(mut self, storage: impl CombinedStorage + 'static) -> Self {
    self.combined_storage = Box::new(storage);
    self
  }

  /// Set the active theme list searched by themed registrations, most specific
  /// theme first.
  pub fn with_themes(mut self, themes: Vec<String>) -> Self {
    self.themes = themes;
    self
  }

  /// Override the configured script placement for this request.
  pub fn set_script_placement(&mut self, placement: ScriptPlacement) {
    self.placement = placement;
  }

  /// Currently effective script placement.
  pub fn script_placement(&self) -> ScriptPlacement {
    self.placement
  }

  /// Append a literal CSS block emitted as a `<style>` tag.
  pub fn custom_stylesheet(&mut self, css: impl Into<String>) {
    self.custom_css.push(css.into());
  }

  /// Append a literal JavaScript block emitted as an inline `<script>` tag.
  pub fn custom_script(&mut self, script: impl Into<String>) {
    self.custom_scripts.push(script.into());
  }

  /// Append a raw head tag emitted verbatim, such as a `<meta>` or `<link>` tag.
  pub fn custom_head_tag(&mut self, tag: impl Into<String>) {
    self.custom_head_tags.push(tag.into());
  }

  /// Registered stylesheet entries in registration order.
  pub fn stylesheets(&self) -> &StylesheetMap {
    &self.stylesheets
  }

  /// Registered script entries in registration order.
  pub fn scripts(&self) -> &ScriptMap {
    &self.scripts
  }

  /// Literal CSS blocks in registration order.
  pub fn custom_css(&self) -> &[String] {
    &self.custom_css
  }

  /// Literal JavaScript blocks in registration order.
  pub fn custom_scripts(&self) -> &[String] {
    &self.custom_scripts
  }

  /// Raw head tags in registration order.
  pub fn custom_head_tags(&self) -> &[String] {
    &self.custom_head_tags
  }

  /// Queued push hints in registration order.
  pub fn preload_queue(&self) -> &[PreloadAsset] {
    &self.preload_queue
  }

  /// Delete all previously generated combined bundle artifacts for the configured
  /// combined-files folder. A missing folder configuration is a no-op.
  pub fn purge_combined_assets(&self) -> Result<()> {
    match &self.config.combined_files_folder {
      Some(folder) => self.combined_storage.remove_contents(Path::new(folder)),
      None => Ok(()),
    }
  }

  /// Reset every collection, returning the injector to its freshly-created state.
  pub fn clear(&mut self) {
    self.stylesheets.clear();
    self.scripts.clear();
    self.custom_css.clear();
    self.custom_scripts.clear();
    self.custom_head_tags.clear();
    self.eager_head_tags.clear();
    self.preload_queue.clear();
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.stylesheets.is_empty()
      && self.scripts.is_empty()
      && self.custom_css.is_empty()
      && self.custom_scripts.is_empty()
      && self.custom_head_tags.is_empty()
      && self.eager_head_tags.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn starts_empty() {
    let injector = RequirementsInjector::new(InjectorConfig::default());
    assert!(injector.is_empty());
    assert!(injector.preload_queue().is_empty());
  }

  #[test]
  fn custom_collections_preserve_registration_order() {
    let mut injector = RequirementsInjector::new(InjectorConfig::default());
    injector.custom_head_tag("<meta a>");
    injector.custom_head_tag("<meta b>");
    injector.custom_stylesheet("body {}");
    injector.custom_script("init();");

    assert_eq!(injector.custom_head_tags(), ["<meta a>", "<meta b>"]);
    assert_eq!(injector.custom_css(), ["body {}"]);
    assert_eq!(injector.custom_scripts(), ["init();"]);
    assert!(!injector.is_empty());
  }

  #[test]
  fn clear_resets_all_collections() {
    let mut injector = RequirementsInjector::new(InjectorConfig::default());
    injector.custom_head_tag("<meta a>");
    injector.custom_script("init();");
    injector.clear();
    assert!(injector.is_empty());
  }

  #[test]
  fn placement_defaults_from_config_and_can_be_overridden() {
    let config = InjectorConfig {
      script_placement: ScriptPlacement::BodyStart,
      ..InjectorConfig::default()
    };
    let mut injector = RequirementsInjector::new(config);
    assert_eq!(injector.script_placement(), ScriptPlacement::BodyStart);

    injector.set_script_placement(ScriptPlacement::BodyEnd);
    assert_eq!(injector.script_placement(), ScriptPlacement::BodyEnd);
  }
}
