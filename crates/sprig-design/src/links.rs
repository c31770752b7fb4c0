//! Design URL helpers.

use crate::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use sprig_core::ReadError;

static FILE_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/(?:file|design)/([A-Za-z0-9_-]+)").expect("file key pattern is valid")
});

const EMBED_BASE: &str = "https://www.figma.com/embed?embed_host=sprig&url=";

/// Extract the file key from a design share URL such as
/// `https://www.figma.com/design/AbC123/Landing-Page`.
pub fn extract_file_key(url: &str) -> Result<String> {
    FILE_KEY
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ReadError::InvalidUrl {
            url: url.to_string(),
        })
}

/// Build the embeddable preview URL for a design share URL.
pub fn embed_url(url: &str) -> Result<String> {
    extract_file_key(url)?;
    let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
    Ok(format!("{EMBED_BASE}{encoded}"))
}
