//! Data models passed between compilation stages.

use serde::{Deserialize, Serialize};
use sprig_core::{BoundingBox, CompileError, ComponentCategory, StyleTokens};

/// Facts extracted from one frame of the design tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFrame {
    pub id: String,
    /// The frame's author-supplied name.
    #[serde(rename = "name")]
    pub source_name: String,
    /// Trimmed, non-empty text lines in document order.
    #[serde(default)]
    pub texts: Vec<String>,
    #[serde(default)]
    pub has_child_frames: bool,
    #[serde(default)]
    pub bounding_box: Option<BoundingBox>,
    #[serde(default)]
    pub style: StyleTokens,
}

impl ExtractedFrame {
    /// A pure layout container: no text of its own, only nested frames.
    pub fn is_container(&self) -> bool {
        self.texts.is_empty() && self.has_child_frames
    }
}

/// An extracted frame with its category, as handed from analysis to
/// generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAnalyzedFrame", rename_all = "camelCase")]
pub struct AnalyzedFrame {
    #[serde(flatten)]
    pub frame: ExtractedFrame,
    #[serde(rename = "type")]
    pub category: ComponentCategory,
    pub should_skip: bool,
}

impl AnalyzedFrame {
    pub fn new(frame: ExtractedFrame, category: ComponentCategory) -> Self {
        let should_skip = frame.is_container();
        Self {
            frame,
            category,
            should_skip,
        }
    }
}

/// Wire form of [`AnalyzedFrame`], with the category still a free label.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAnalyzedFrame {
    #[serde(flatten)]
    frame: ExtractedFrame,
    #[serde(rename = "type")]
    category: String,
    #[serde(default)]
    should_skip: bool,
}

impl TryFrom<RawAnalyzedFrame> for AnalyzedFrame {
    type Error = CompileError;

    fn try_from(raw: RawAnalyzedFrame) -> Result<Self, Self::Error> {
        let category = raw
            .category
            .parse()
            .map_err(|_| CompileError::UnknownCategory {
                id: raw.frame.id.clone(),
                category: raw.category.clone(),
            })?;
        Ok(Self {
            frame: raw.frame,
            category,
            should_skip: raw.should_skip,
        })
    }
}

/// One rendered component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedComponent {
    /// Id of the source frame.
    pub id: String,
    /// Name of the source frame.
    pub original_name: String,
    #[serde(rename = "componentType")]
    pub category: ComponentCategory,
    /// Unique within one compilation.
    #[serde(rename = "componentName")]
    pub symbolic_name: String,
    /// Rendered component definition.
    #[serde(rename = "code")]
    pub source: String,
    /// The texts the component was rendered from.
    #[serde(rename = "texts")]
    pub bound_texts: Vec<String>,
}

impl GeneratedComponent {
    /// File name of the component, e.g. `Gallery2.astro`.
    pub fn file_name(&self) -> String {
        format!("{}.astro", self.symbolic_name)
    }
}

/// The assembled page: components in page order plus the composing scaffold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    /// Navbar first, footer last, everything else in discovery order.
    pub components: Vec<GeneratedComponent>,
    /// The page source, importing and composing every component.
    #[serde(rename = "indexFile")]
    pub source: String,
}

impl PageDocument {
    pub const FILE_NAME: &'static str = "index.astro";
}

/// Counts gathered during one compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub total_frames: usize,
    pub generated_components: usize,
    /// Frames rejected as pure layout containers.
    pub skipped_frames: usize,
    /// Frames rejected because their singleton category was already emitted.
    pub rejected_duplicates: usize,
}

/// Output of one compilation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Compilation {
    pub page: PageDocument,
    #[serde(rename = "generationStats")]
    pub diagnostics: Diagnostics,
}

impl Compilation {
    /// Components in page order.
    pub fn components(&self) -> &[GeneratedComponent] {
        &self.page.components
    }
}
