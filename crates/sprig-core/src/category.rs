//! Semantic component categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Semantic category assigned to every extracted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ComponentCategory {
    Navbar,
    Hero,
    Footer,
    AboutUs,
    Newsletter,
    Blog,
    Testimonial,
    Gallery,
    Cta,
    Card,
    Section,
}

/// How many instances of a category one compilation may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// At most one instance per compilation.
    Singleton,
    /// Unbounded instances.
    Repeatable,
}

impl ComponentCategory {
    /// Every category, in declaration order.
    pub const ALL: [ComponentCategory; 11] = [
        Self::Navbar,
        Self::Hero,
        Self::Footer,
        Self::AboutUs,
        Self::Newsletter,
        Self::Blog,
        Self::Testimonial,
        Self::Gallery,
        Self::Cta,
        Self::Card,
        Self::Section,
    ];

    /// The category's symbolic base name, also used as its wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Navbar => "Navbar",
            Self::Hero => "Hero",
            Self::Footer => "Footer",
            Self::AboutUs => "AboutUs",
            Self::Newsletter => "Newsletter",
            Self::Blog => "Blog",
            Self::Testimonial => "Testimonial",
            Self::Gallery => "Gallery",
            Self::Cta => "CTA",
            Self::Card => "Card",
            Self::Section => "Section",
        }
    }

    pub fn cardinality(&self) -> Cardinality {
        match self {
            Self::Gallery => Cardinality::Repeatable,
            Self::Navbar
            | Self::Hero
            | Self::Footer
            | Self::AboutUs
            | Self::Newsletter
            | Self::Cta
            | Self::Card
            | Self::Blog
            | Self::Testimonial
            | Self::Section => Cardinality::Singleton,
        }
    }

    pub fn is_singleton(&self) -> bool {
        self.cardinality() == Cardinality::Singleton
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category label outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown component category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for ComponentCategory {
    type Err = ParseCategoryError;

    /// Parse a category label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl TryFrom<String> for ComponentCategory {
    type Error = ParseCategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ComponentCategory> for String {
    fn from(category: ComponentCategory) -> Self {
        category.as_str().to_string()
    }
}
