//! Script registration with attribute merging across repeated registrations.

use crate::models::{AssetKind, PreloadAsset, ScriptEntry, ScriptOptions};
use crate::render::tags;

use super::RequirementsInjector;

impl RequirementsInjector {
  /// Register a script, or embed its contents inline when requested.
  ///
  /// Repeated registrations of the same resolved file merge: async and defer stay
  /// set once requested, the latest explicit type override wins, and the recorded
  /// `provides` list survives registrations that omit it. Integrity and
  /// cross-origin always reflect the latest registration. An unresolvable path
  /// degrades to a no-op.
  pub fn script(&mut self, file: &str, options: ScriptOptions) {
    let Some(resolved) = self.resolver.resolve(file) else {
      log::warn!("skipping script registration: no usable path for {file}");
      return;
    };

    if options.inline {
      self.inline_script(&resolved);
      return;
    }

    let existing = self.scripts.get(&resolved);
    let merged = ScriptEntry {
      async_load: options.async_load || existing.is_some_and(|entry| entry.async_load),
      defer: options.defer || existing.is_some_and(|entry| entry.defer),
      script_type: options
        .script_type
        .or_else(|| existing.and_then(|entry| entry.script_type.clone())),
      integrity: options.integrity,
      crossorigin: options.crossorigin,
      provides: if options.provides.is_empty() {
        existing.map(|entry| entry.provides.clone()).unwrap_or_default()
      } else {
        options.provides
      },
    };
    self.scripts.insert(resolved.clone(), merged);

    if options.preload {
      let url = self.resolver.url_for(&resolved);
      self
        .eager_head_tags
        .push(tags::preload_tag(&url, AssetKind::Script));
    }

    if options.push {
      self.preload_queue.push(PreloadAsset {
        file: resolved,
        kind: AssetKind::Script,
      });
    }
  }

  /// Embed the file contents as a literal JavaScript block. External and
  /// root-relative sources stay registered as plain links.
  fn inline_script(&mut self, file: &str) {
    if self.classifier.refuses_inline(file) {
      self.script(file, ScriptOptions::default());
      return;
    }

    match self.resolver.absolute_path(file) {
      Some(path) => match self.reader.read_to_string(&path) {
        Ok(script) => self.custom_scripts.push(script),
        Err(err) => log::warn!("cannot inline script {file}: {err:#}"),
      },
      None => log::warn!("cannot inline script {file}: no filesystem path"),
    }
  }
}
