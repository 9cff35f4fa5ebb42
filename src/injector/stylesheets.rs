//! Stylesheet registration, including inline embedding and preload hints.

use crate::models::{AssetKind, PreloadAsset, StylesheetEntry, StylesheetOptions};
use crate::render::tags;

use super::RequirementsInjector;

impl RequirementsInjector {
  /// Register a stylesheet link, or embed its contents inline when requested.
  ///
  /// Re-registering the same resolved file overwrites the stored media, integrity
  /// and cross-origin attributes while keeping the original output position. An
  /// unresolvable path degrades to a no-op so template authors can register
  /// optional assets.
  pub fn stylesheet(&mut self, file: &str, media: Option<&str>, options: StylesheetOptions) {
    let Some(resolved) = self.resolver.resolve(file) else {
      log::warn!("skipping stylesheet registration: no usable path for {file}");
      return;
    };

    if options.inline {
      self.inline_stylesheet(&resolved);
      return;
    }

    self.stylesheets.insert(
      resolved.clone(),
      StylesheetEntry {
        media: media.map(str::to_string),
        integrity: options.integrity,
        crossorigin: options.crossorigin,
      },
    );

    if options.preload {
      let url = self.resolver.url_for(&resolved);
      self
        .eager_head_tags
        .push(tags::preload_tag(&url, AssetKind::Style));
    }

    if options.push {
      self.preload_queue.push(PreloadAsset {
        file: resolved,
        kind: AssetKind::Style,
      });
    }
  }

  /// Embed the file contents as a literal CSS block. External and root-relative
  /// sources cannot be read locally and stay registered as plain links.
  fn inline_stylesheet(&mut self, file: &str) {
    if self.classifier.refuses_inline(file) {
      self.stylesheet(file, None, StylesheetOptions::default());
      return;
    }

    match self.resolver.absolute_path(file) {
      Some(path) => match self.reader.read_to_string(&path) {
        Ok(css) => self.custom_css.push(css),
        Err(err) => log::warn!("cannot inline stylesheet {file}: {err:#}"),
      },
      None => log::warn!("cannot inline stylesheet {file}: no filesystem path"),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use crate::config::InjectorConfig;
  use crate::models::{AssetKind, StylesheetOptions};
  use crate::resolve::DirectoryResolver;

  use super::RequirementsInjector;

  fn injector() -> RequirementsInjector {
    RequirementsInjector::new(InjectorConfig::default())
  }

  #[test]
  fn re_registration_overwrites_attributes_without_duplicating() {
    let mut injector = injector();
    injector.stylesheet(
      "css/site.css",
      Some("screen"),
      StylesheetOptions {
        integrity: Some("sha384-old".into()),
        ..StylesheetOptions::default()
      },
    );
    injector.stylesheet("css/site.css", Some("print"), StylesheetOptions::default());

    assert_eq!(injector.stylesheets().len(), 1);
    let entry = &injector.stylesheets()["css/site.css"];
    assert_eq!(entry.media.as_deref(), Some("print"));
    assert_eq!(entry.integrity, None);
  }

  #[test]
  fn registration_order_of_distinct_files_is_preserved() {
    let mut injector = injector();
    injector.stylesheet("css/b.css", None, StylesheetOptions::default());
    injector.stylesheet("css/a.css", None, StylesheetOptions::default());
    injector.stylesheet("css/b.css", None, StylesheetOptions::default());

    let keys: Vec<_> = injector.stylesheets().keys().cloned().collect();
    assert_eq!(keys, ["css/b.css", "css/a.css"]);
  }

  #[test]
  fn unresolvable_paths_degrade_silently() {
    let mut injector = injector();
    injector.stylesheet("   ", None, StylesheetOptions::default());
    assert!(injector.stylesheets().is_empty());
  }

  #[test]
  fn inline_option_embeds_file_contents_instead_of_linking() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("css")).unwrap();
    fs::write(dir.path().join("css/site.css"), "body { margin: 0; }").unwrap();

    let mut injector = injector().with_resolver(DirectoryResolver::new(dir.path()));
    injector.stylesheet(
      "css/site.css",
      None,
      StylesheetOptions {
        inline: true,
        ..StylesheetOptions::default()
      },
    );

    assert!(injector.stylesheets().is_empty());
    assert_eq!(injector.custom_css(), ["body { margin: 0; }"]);
  }

  #[test]
  fn inline_falls_back_to_linking_for_external_sources() {
    let mut injector = injector();
    injector.stylesheet(
      "https://cdn.example.com/site.css",
      Some("screen"),
      StylesheetOptions {
        inline: true,
        ..StylesheetOptions::default()
      },
    );

    assert!(injector.custom_css().is_empty());
    let entry = &injector.stylesheets()["https://cdn.example.com/site.css"];
    // The fallback registers a plain link; the requested media does not survive.
    assert_eq!(entry.media, None);
  }

  #[test]
  fn missing_inline_sources_degrade_silently() {
    let dir = tempdir().unwrap();
    let mut injector = injector().with_resolver(DirectoryResolver::new(dir.path()));
    injector.stylesheet(
      "css/absent.css",
      None,
      StylesheetOptions {
        inline: true,
        ..StylesheetOptions::default()
      },
    );

    assert!(injector.stylesheets().is_empty());
    assert!(injector.custom_css().is_empty());
  }

  #[test]
  fn preload_option_emits_an_eager_head_tag() {
    let mut injector = injector();
    injector.stylesheet(
      "css/site.css",
      None,
      StylesheetOptions {
        preload: true,
        ..StylesheetOptions::default()
      },
    );

    assert_eq!(injector.eager_head_tags.len(), 1);
    assert!(injector.eager_head_tags[0].contains("rel=\"preload\""));
    assert!(injector.eager_head_tags[0].contains("as=\"style\""));
  }

  #[test]
  fn push_option_queues_a_style_hint() {
    let mut injector = injector();
    injector.stylesheet(
      "css/site.css",
      None,
      StylesheetOptions {
        push: true,
        ..StylesheetOptions::default()
      },
    );

    assert_eq!(injector.preload_queue().len(), 1);
    assert_eq!(injector.preload_queue()[0].kind, AssetKind::Style);
    assert_eq!(injector.preload_queue()[0].file, "css/site.css");
  }
}
