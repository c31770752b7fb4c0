//! Compilation options.

use serde::{Deserialize, Serialize};

/// Options for one compilation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileOptions {
    /// Page document settings.
    pub page: PageOptions,
    /// Area thresholds for frames whose name matches no keyword.
    pub classifier: ClassifierOptions,
}

/// Settings for the assembled page document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageOptions {
    /// Contents of the `<title>` element.
    pub title: String,
    /// `lang` attribute of the `<html>` element.
    pub lang: String,
    /// Import path of the directory holding the component files.
    pub components_dir: String,
    /// Stylesheet script to include in the head; `None` omits it.
    pub tailwind_cdn: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Generated from Figma".to_string(),
            lang: "en".to_string(),
            components_dir: "./components".to_string(),
            tailwind_cdn: Some("https://cdn.tailwindcss.com".to_string()),
        }
    }
}

/// Area thresholds, in square pixels, for the geometric fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierOptions {
    /// Frames larger than this are Sections.
    pub section_area: f64,
    /// Frames larger than this (and not Sections) are Heroes; the rest are Cards.
    pub hero_area: f64,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            section_area: 100_000.0,
            hero_area: 40_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options: CompileOptions =
            serde_json::from_str(r#"{ "page": { "title": "Landing" } }"#).unwrap();
        assert_eq!(options.page.title, "Landing");
        assert_eq!(options.page.components_dir, "./components");
        assert_eq!(options.classifier, ClassifierOptions::default());
    }

    #[test]
    fn test_null_cdn_omits_script() {
        let options: PageOptions = serde_json::from_str(r#"{ "tailwindCdn": null }"#).unwrap();
        assert!(options.tailwind_cdn.is_none());
    }
}
