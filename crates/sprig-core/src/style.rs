//! Style tokens: the small vocabulary a node's raw visual attributes map onto.

use crate::types::Color;
use serde::{Deserialize, Serialize};

/// Discrete font size bucket.
///
/// Buckets are half-open intervals `(lower, upper]` in ascending order; the
/// last one is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Xs,
    Sm,
    Base,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xl2,
    #[serde(rename = "3xl")]
    Xl3,
    #[serde(rename = "4xl")]
    Xl4,
    #[serde(rename = "5xl")]
    Xl5,
}

/// Inclusive upper bounds, in pixels, of every bucket but the last.
const FONT_SIZE_BOUNDS: [(f64, FontSize); 8] = [
    (12.0, FontSize::Xs),
    (14.0, FontSize::Sm),
    (16.0, FontSize::Base),
    (18.0, FontSize::Lg),
    (20.0, FontSize::Xl),
    (24.0, FontSize::Xl2),
    (30.0, FontSize::Xl3),
    (48.0, FontSize::Xl4),
];

impl FontSize {
    /// Bucket a pixel font size. Non-comparable input (NaN) lands in the
    /// unbounded top bucket.
    pub fn from_px(px: f64) -> Self {
        FONT_SIZE_BOUNDS
            .iter()
            .find(|(upper, _)| px <= *upper)
            .map(|(_, bucket)| *bucket)
            .unwrap_or(FontSize::Xl5)
    }

    /// Utility class suffix, e.g. `2xl`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xl2 => "2xl",
            Self::Xl3 => "3xl",
            Self::Xl4 => "4xl",
            Self::Xl5 => "5xl",
        }
    }

    pub fn class(&self) -> String {
        format!("text-{}", self.as_str())
    }
}

/// Discrete font weight bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    Light,
    Medium,
    Bold,
    ExtraBold,
}

impl FontWeight {
    /// Bucket a numeric weight: `<=300` light, `<=500` medium, `<=700` bold,
    /// anything else extra-bold.
    pub fn from_numeric(weight: f64) -> Self {
        if weight <= 300.0 {
            Self::Light
        } else if weight <= 500.0 {
            Self::Medium
        } else if weight <= 700.0 {
            Self::Bold
        } else {
            Self::ExtraBold
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Light => "font-light",
            Self::Medium => "font-medium",
            Self::Bold => "font-bold",
            Self::ExtraBold => "font-extrabold",
        }
    }
}

/// The style-token bundle of one frame. Every field is independent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleTokens {
    /// First solid fill.
    pub background: Option<Color>,
    /// Set when the node carries a drop shadow.
    pub elevated: bool,
    /// Stroke weight, when positive.
    pub border: Option<f64>,
    pub font_size: Option<FontSize>,
    pub font_weight: Option<FontWeight>,
}

impl StyleTokens {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Presentation classes for the root element, one per present token.
    pub fn classes(&self) -> Vec<String> {
        let mut classes = Vec::new();
        if let Some(color) = self.background {
            classes.push(format!("bg-[{}]", color.to_hex()));
        }
        if self.elevated {
            classes.push("shadow-lg".to_string());
        }
        if let Some(weight) = self.border {
            classes.push(format!("border-[{}px]", format_px(weight)));
        }
        if let Some(size) = self.font_size {
            classes.push(size.class());
        }
        if let Some(weight) = self.font_weight {
            classes.push(weight.class().to_string());
        }
        classes
    }
}

/// Format a pixel value without a trailing `.0` for whole numbers.
fn format_px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_font_size_bucket_edges() {
        assert_eq!(FontSize::from_px(0.0), FontSize::Xs);
        assert_eq!(FontSize::from_px(12.0), FontSize::Xs);
        assert_eq!(FontSize::from_px(12.5), FontSize::Sm);
        assert_eq!(FontSize::from_px(16.0), FontSize::Base);
        assert_eq!(FontSize::from_px(24.0), FontSize::Xl2);
        assert_eq!(FontSize::from_px(48.0), FontSize::Xl4);
        assert_eq!(FontSize::from_px(48.01), FontSize::Xl5);
        assert_eq!(FontSize::from_px(f64::NAN), FontSize::Xl5);
    }

    #[test]
    fn test_font_weight_bucket_edges() {
        assert_eq!(FontWeight::from_numeric(100.0), FontWeight::Light);
        assert_eq!(FontWeight::from_numeric(300.0), FontWeight::Light);
        assert_eq!(FontWeight::from_numeric(400.0), FontWeight::Medium);
        assert_eq!(FontWeight::from_numeric(700.0), FontWeight::Bold);
        assert_eq!(FontWeight::from_numeric(900.0), FontWeight::ExtraBold);
    }

    #[test]
    fn test_classes_skip_absent_tokens() {
        assert!(StyleTokens::default().classes().is_empty());

        let tokens = StyleTokens {
            background: Some(Color::WHITE),
            elevated: true,
            border: Some(2.0),
            font_size: Some(FontSize::Xl2),
            font_weight: None,
        };
        assert_eq!(
            tokens.classes(),
            vec!["bg-[#FFFFFF]", "shadow-lg", "border-[2px]", "text-2xl"]
        );
    }

    #[test]
    fn test_fractional_border() {
        let tokens = StyleTokens {
            border: Some(1.5),
            ..Default::default()
        };
        assert_eq!(tokens.classes(), vec!["border-[1.5px]"]);
    }

    #[test]
    fn test_whole_border_beyond_integer_range() {
        let tokens = StyleTokens {
            border: Some(1e20),
            ..Default::default()
        };
        assert_eq!(tokens.classes(), vec!["border-[100000000000000000000px]"]);
    }

    proptest! {
        #[test]
        fn font_size_buckets_are_monotonic(a in 0.0f64..200.0, b in 0.0f64..200.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(FontSize::from_px(lo) <= FontSize::from_px(hi));
        }

        #[test]
        fn font_weight_buckets_are_monotonic(a in 0.0f64..1200.0, b in 0.0f64..1200.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(FontWeight::from_numeric(lo) <= FontWeight::from_numeric(hi));
        }
    }
}
