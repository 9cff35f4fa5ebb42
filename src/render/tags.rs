//! Tag builders emitting link, style and script markup in canonical attribute order.

use crate::models::{AssetKind, ScriptEntry, StylesheetEntry};

/// Ordered attribute collector for a single generated tag.
///
/// Attribute order follows insertion order so rendered markup is deterministic.
/// Values are attribute-escaped; element content is emitted verbatim because the
/// literal CSS/JS collections are trusted template-author input.
pub struct TagBuilder {
    name: &'static str,
    attributes: Vec<(String, String)>,
}

impl TagBuilder {
    /// Start a tag with the given element name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
        }
    }

    /// Append an attribute unconditionally.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    /// Append an attribute when a non-empty value is present.
    pub fn optional_attr(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.attr(name, value),
            _ => self,
        }
    }

    /// Append a boolean attribute rendered as `name="name"` when enabled.
    pub fn flag(self, name: &str, enabled: bool) -> Self {
        if enabled { self.attr(name, name) } else { self }
    }

    /// Render as a void element, e.g. `<link ... />`.
    pub fn void(self) -> String {
        format!("<{}{} />", self.name, self.render_attributes())
    }

    /// Render with element content and a closing tag.
    pub fn wrap(self, content: &str) -> String {
        let name = self.name;
        format!("<{name}{}>{content}</{name}>", self.render_attributes())
    }

    fn render_attributes(&self) -> String {
        let mut rendered = String::new();
        for (name, value) in &self.attributes {
            rendered.push(' ');
            rendered.push_str(name);
            rendered.push_str("=\"");
            rendered.push_str(&escape_attribute(value));
            rendered.push('"');
        }
        rendered
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render an external script tag.
pub fn script_tag(url: &str, entry: &ScriptEntry) -> String {
    TagBuilder::new("script")
        .attr(
            "type",
            entry.script_type.as_deref().unwrap_or("application/javascript"),
        )
        .attr("src", url)
        .flag("async", entry.async_load)
        .flag("defer", entry.defer)
        .optional_attr("integrity", entry.integrity.as_deref())
        .optional_attr("crossorigin", entry.crossorigin.as_deref())
        .wrap("")
}

/// Render a literal script block wrapped in a CDATA comment guard.
pub fn inline_script_tag(script: &str) -> String {
    TagBuilder::new("script")
        .attr("type", "application/javascript")
        .wrap(&format!("//<![CDATA[\n{script}\n//]]>"))
}

/// Render a stylesheet link tag.
pub fn stylesheet_tag(url: &str, entry: &StylesheetEntry) -> String {
    TagBuilder::new("link")
        .attr("rel", "stylesheet")
        .attr("type", "text/css")
        .attr("href", url)
        .optional_attr("media", entry.media.as_deref())
        .optional_attr("integrity", entry.integrity.as_deref())
        .optional_attr("crossorigin", entry.crossorigin.as_deref())
        .void()
}

/// Render a literal style block.
pub fn inline_style_tag(css: &str) -> String {
    TagBuilder::new("style")
        .attr("type", "text/css")
        .wrap(&format!("\n{css}\n"))
}

/// Render an eager preload link tag emitted at registration time.
pub fn preload_tag(url: &str, kind: AssetKind) -> String {
    TagBuilder::new("link")
        .attr("rel", "preload")
        .attr("as", kind.as_attr())
        .attr("type", kind.mime_type())
        .attr("href", url)
        .attr("crossorigin", "")
        .void()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_tag_renders_attributes_in_fixed_order() {
        let entry = ScriptEntry {
            async_load: true,
            defer: true,
            integrity: Some("sha384-abc".into()),
            crossorigin: Some("anonymous".into()),
            ..ScriptEntry::default()
        };

        assert_eq!(
            script_tag("/js/app.js", &entry),
            "<script type=\"application/javascript\" src=\"/js/app.js\" async=\"async\" \
             defer=\"defer\" integrity=\"sha384-abc\" crossorigin=\"anonymous\"></script>"
        );
    }

    #[test]
    fn script_tag_omits_absent_attributes() {
        let entry = ScriptEntry::default();
        assert_eq!(
            script_tag("/js/app.js", &entry),
            "<script type=\"application/javascript\" src=\"/js/app.js\"></script>"
        );
    }

    #[test]
    fn script_type_override_replaces_the_default() {
        let entry = ScriptEntry {
            script_type: Some("module".into()),
            ..ScriptEntry::default()
        };
        assert!(script_tag("/js/app.js", &entry).starts_with("<script type=\"module\""));
    }

    #[test]
    fn stylesheet_tag_includes_optional_media() {
        let entry = StylesheetEntry {
            media: Some("screen,projector".into()),
            ..StylesheetEntry::default()
        };
        assert_eq!(
            stylesheet_tag("/css/site.css", &entry),
            "<link rel=\"stylesheet\" type=\"text/css\" href=\"/css/site.css\" \
             media=\"screen,projector\" />"
        );
    }

    #[test]
    fn inline_script_carries_cdata_guard() {
        let rendered = inline_script_tag("alert(1 < 2);");
        assert!(rendered.contains("//<![CDATA[\nalert(1 < 2);\n//]]>"));
    }

    #[test]
    fn inline_style_wraps_content_verbatim() {
        assert_eq!(
            inline_style_tag("body { color: red; }"),
            "<style type=\"text/css\">\nbody { color: red; }\n</style>"
        );
    }

    #[test]
    fn preload_tag_names_kind_and_mime() {
        let rendered = preload_tag("/css/site.css", AssetKind::Style);
        assert_eq!(
            rendered,
            "<link rel=\"preload\" as=\"style\" type=\"text/css\" href=\"/css/site.css\" \
             crossorigin=\"\" />"
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let entry = StylesheetEntry {
            media: Some("screen and (max-width: \"600px\")".into()),
            ..StylesheetEntry::default()
        };
        let rendered = stylesheet_tag("/css/a&b.css", &entry);
        assert!(rendered.contains("href=\"/css/a&amp;b.css\""));
        assert!(rendered.contains("&quot;600px&quot;"));
    }
}
