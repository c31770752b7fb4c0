//! Escaping of design text into the contexts an Astro component has.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// A JavaScript string literal, for parameter defaults in the frontmatter.
pub fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Markup text. Braces are encoded so text cannot open an expression.
pub fn markup_text(value: &str) -> String {
    neutralize_braces(&encode_text(value))
}

/// A double-quoted attribute value.
pub fn attribute(value: &str) -> String {
    neutralize_braces(&encode_double_quoted_attribute(value))
}

fn neutralize_braces(value: &str) -> String {
    value.replace('{', "&#123;").replace('}', "&#125;")
}
