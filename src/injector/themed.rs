//! Themed asset registration resolved against the active theme list.

use crate::models::{ScriptOptions, StylesheetOptions};
use crate::resolve::ThemedLookupError;

use super::RequirementsInjector;

impl RequirementsInjector {
  /// Register a stylesheet resolved by name against the active themes.
  ///
  /// Unlike plain registrations, a failed lookup is an error: themed references
  /// come from templates naming a file that must exist somewhere in the theme
  /// cascade, so a miss points at a broken template.
  pub fn themed_stylesheet(
    &mut self,
    name: &str,
    media: Option<&str>,
    options: StylesheetOptions,
  ) -> Result<(), ThemedLookupError> {
    match self.theme_lookup.find_themed_css(name, &self.themes) {
      Some(path) => {
        self.stylesheet(&path, media, options);
        Ok(())
      }
      None => Err(ThemedLookupError::Stylesheet {
        name: name.to_string(),
      }),
    }
  }

  /// Register a script resolved by name against the active themes.
  ///
  /// The separate `script_type` parameter merges into the options; an explicit
  /// type in `options` takes precedence when both are supplied.
  pub fn themed_script(
    &mut self,
    name: &str,
    script_type: Option<&str>,
    mut options: ScriptOptions,
  ) -> Result<(), ThemedLookupError> {
    match self.theme_lookup.find_themed_js(name, &self.themes) {
      Some(path) => {
        if options.script_type.is_none() {
          options.script_type = script_type.map(str::to_string);
        }
        self.script(&path, options);
        Ok(())
      }
      None => Err(ThemedLookupError::Script {
        name: name.to_string(),
      }),
    }
  }
}
