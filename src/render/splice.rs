//! Anchor location and fragment splicing for HTML documents.
//!
//! Documents are treated as opaque text. Anchors are located with case-insensitive
//! regex matches and the first match wins, even when embedded literal markup
//! contains further `</head>` occurrences. Insertion functions return `false` when
//! no anchor is present so callers can degrade without error.

use std::sync::OnceLock;

use regex::Regex;

fn head_close_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)</head\b").expect("invalid head close regex"))
}

fn body_open_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)<body[^>]*>").expect("invalid body open regex"))
}

fn body_close_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)</body[^>]*>").expect("invalid body close regex"))
}

/// True when the document exposes a closing head tag eligible for injection.
pub fn has_head_anchor(content: &str) -> bool {
    head_close_pattern().is_match(content)
}

/// Insert the fragment immediately before the first closing head tag.
pub fn insert_before_head_close(content: &mut String, fragment: &str) -> bool {
    match head_close_pattern().find(content) {
        Some(anchor) => {
            content.insert_str(anchor.start(), fragment);
            true
        }
        None => false,
    }
}

/// Insert the fragment immediately after the first opening body tag.
pub fn insert_after_body_open(content: &mut String, fragment: &str) -> bool {
    match body_open_pattern().find(content) {
        Some(anchor) => {
            content.insert_str(anchor.end(), fragment);
            true
        }
        None => false,
    }
}

/// Insert the fragment immediately before the first closing body tag.
pub fn insert_before_body_close(content: &mut String, fragment: &str) -> bool {
    match body_close_pattern().find(content) {
        Some(anchor) => {
            content.insert_str(anchor.start(), fragment);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_head_anchors_case_insensitively() {
        assert!(has_head_anchor("<html><head></head></html>"));
        assert!(has_head_anchor("<HTML><HEAD></HEAD></HTML>"));
        assert!(!has_head_anchor("<html><body></body></html>"));
    }

    #[test]
    fn inserts_before_the_first_head_close() {
        let mut content = String::from("<head></head><template></head></template>");
        assert!(insert_before_head_close(&mut content, "X"));
        assert_eq!(content, "<head>X</head><template></head></template>");
    }

    #[test]
    fn inserts_after_opening_body_with_attributes() {
        let mut content = String::from("<body class=\"page\"><main></main></body>");
        assert!(insert_after_body_open(&mut content, "X"));
        assert_eq!(content, "<body class=\"page\">X<main></main></body>");
    }

    #[test]
    fn inserts_before_closing_body() {
        let mut content = String::from("<body><main></main></body>");
        assert!(insert_before_body_close(&mut content, "X"));
        assert_eq!(content, "<body><main></main>X</body>");
    }

    #[test]
    fn reports_missing_anchors_without_mutating() {
        let mut content = String::from("<main></main>");
        assert!(!insert_before_head_close(&mut content, "X"));
        assert!(!insert_after_body_open(&mut content, "X"));
        assert!(!insert_before_body_close(&mut content, "X"));
        assert_eq!(content, "<main></main>");
    }
}
