//! Heuristic classification of frames into component categories.

use crate::options::ClassifierOptions;
use smallvec::SmallVec;
use sprig_core::{BoundingBox, ComponentCategory};

/// Keyword groups in priority order; the first group with a keyword contained
/// in the lowercased frame name wins.
///
/// `hero` precedes `header` so that a frame named "Hero Header" is a Hero.
const KEYWORD_GROUPS: &[(ComponentCategory, &[&str])] = &[
    (ComponentCategory::Hero, &["hero"]),
    (ComponentCategory::Navbar, &["header", "navbar"]),
    (ComponentCategory::Footer, &["footer"]),
    (ComponentCategory::AboutUs, &["about"]),
    (ComponentCategory::Newsletter, &["newsletter"]),
    (ComponentCategory::Blog, &["blog"]),
    (ComponentCategory::Testimonial, &["testimonial"]),
    (ComponentCategory::Gallery, &["gallery", "image"]),
    (ComponentCategory::Cta, &["cta"]),
];

/// What decided a classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassificationSource {
    /// The name contained this keyword.
    Keyword(&'static str),
    /// No keyword matched; the bounding-box area decided.
    Area(f64),
    /// Neither keyword nor geometry.
    Default,
}

/// Result of classifying one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: ComponentCategory,
    pub source: ClassificationSource,
    /// Lower-priority keyword groups that also matched the name. Non-empty
    /// means the name is ambiguous and only priority order resolved it.
    pub shadowed: SmallVec<[ComponentCategory; 2]>,
}

impl Classification {
    pub fn is_ambiguous(&self) -> bool {
        !self.shadowed.is_empty()
    }
}

/// Classifies frames from their name and bounding box.
///
/// Children are never inspected.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    options: ClassifierOptions,
}

impl Classifier {
    pub fn new(options: ClassifierOptions) -> Self {
        Self { options }
    }

    /// Classify a frame.
    pub fn classify(&self, name: &str, bounding_box: Option<&BoundingBox>) -> ComponentCategory {
        self.detect(name, bounding_box).category
    }

    /// Classify a frame, reporting which signal decided and any ambiguity.
    pub fn detect(&self, name: &str, bounding_box: Option<&BoundingBox>) -> Classification {
        let name_lower = name.to_lowercase();
        let mut matches = KEYWORD_GROUPS.iter().filter_map(|(category, keywords)| {
            keywords
                .iter()
                .find(|keyword| name_lower.contains(*keyword))
                .map(|keyword| (*category, *keyword))
        });

        if let Some((category, keyword)) = matches.next() {
            let shadowed: SmallVec<[ComponentCategory; 2]> = matches.map(|(c, _)| c).collect();
            if !shadowed.is_empty() {
                tracing::warn!(
                    frame = name,
                    chosen = %category,
                    also_matched = ?shadowed,
                    "ambiguous frame name, resolved by keyword priority"
                );
            }
            return Classification {
                category,
                source: ClassificationSource::Keyword(keyword),
                shadowed,
            };
        }

        match bounding_box {
            Some(bbox) => {
                let area = bbox.area();
                Classification {
                    category: self.category_for_area(area),
                    source: ClassificationSource::Area(area),
                    shadowed: SmallVec::new(),
                }
            }
            None => Classification {
                category: ComponentCategory::Card,
                source: ClassificationSource::Default,
                shadowed: SmallVec::new(),
            },
        }
    }

    fn category_for_area(&self, area: f64) -> ComponentCategory {
        if area > self.options.section_area {
            ComponentCategory::Section
        } else if area > self.options.hero_area {
            ComponentCategory::Hero
        } else {
            ComponentCategory::Card
        }
    }
}
