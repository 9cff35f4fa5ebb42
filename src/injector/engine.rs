//! The once-per-response injection pass.

use anyhow::Result;

use crate::models::ScriptPlacement;
use crate::render::{splice, tags};
use crate::response::{ResponseSink, preload_header_value};

use super::RequirementsInjector;

impl RequirementsInjector {
  /// Inject every collected requirement into the rendered document and emit the
  /// preload `Link` header for queued push hints.
  ///
  /// The document is left untouched when it lacks a closing head tag or when
  /// nothing has been registered. The string is mutated in place, so markup
  /// splices survive a failure in a later step; header side effects are never
  /// rolled back.
  pub fn inject_into(
    &mut self,
    content: &mut String,
    response: &mut dyn ResponseSink,
  ) -> Result<()> {
    if !splice::has_head_anchor(content) || self.is_empty() {
      return Ok(());
    }

    let mut head_fragment = String::new();
    let mut script_fragment = String::new();

    // Preload tags written eagerly at registration time come ahead of everything
    // produced by this pass.
    for tag in &self.eager_head_tags {
      head_fragment.push_str(tag);
      head_fragment.push('\n');
    }

    if self.config.custom_tags_first {
      for tag in &self.custom_head_tags {
        head_fragment.push_str(tag);
        head_fragment.push('\n');
      }
    }

    // The combiner may collapse several entries into generated bundles before
    // anything is rendered.
    self
      .combiner
      .combine(&mut self.stylesheets, &mut self.scripts)?;

    for (file, entry) in &self.scripts {
      script_fragment.push_str(&tags::script_tag(&self.resolver.url_for(file), entry));
      script_fragment.push('\n');
    }

    // Literal scripts run after the external files they might rely on.
    for script in &self.custom_scripts {
      script_fragment.push_str(&tags::inline_script_tag(script));
      script_fragment.push('\n');
    }

    for (file, entry) in &self.stylesheets {
      head_fragment.push_str(&tags::stylesheet_tag(&self.resolver.url_for(file), entry));
      head_fragment.push('\n');
    }

    for css in &self.custom_css {
      head_fragment.push_str(&tags::inline_style_tag(css));
      head_fragment.push('\n');
    }

    // Literal head tags land after the generated links so they can override them,
    // unless configured to come first.
    if !self.config.custom_tags_first {
      for tag in &self.custom_head_tags {
        head_fragment.push_str(tag);
        head_fragment.push('\n');
      }
    }

    if !head_fragment.is_empty() {
      splice::insert_before_head_close(content, &head_fragment);
    }

    if !script_fragment.is_empty() {
      let inserted = match self.placement {
        ScriptPlacement::BodyEnd => splice::insert_before_body_close(content, &script_fragment),
        ScriptPlacement::BodyStart => splice::insert_after_body_open(content, &script_fragment),
        ScriptPlacement::Head => splice::insert_before_head_close(content, &script_fragment),
      };
      if !inserted {
        log::warn!(
          "no body anchor for script placement {:?}; script tags were dropped",
          self.placement
        );
      }
    }

    self.emit_preload_header(response)
  }

  fn emit_preload_header(&self, response: &mut dyn ResponseSink) -> Result<()> {
    if self.preload_queue.is_empty() {
      return Ok(());
    }
    let value = preload_header_value(&self.preload_queue, self.resolver.as_ref());
    response.add_header("Link", &value)
  }
}
