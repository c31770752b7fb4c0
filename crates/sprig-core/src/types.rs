//! Core value types read off design nodes.

use serde::{Deserialize, Serialize};

/// A color value with normalized channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Return the same color with its alpha multiplied by `opacity`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            a: (self.a * opacity).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to 8-bit RGBA tuple, rounding and clamping each channel.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b), q(self.a))
    }

    /// Convert to hex string (e.g., "#FF5733", or "#FF573380" when translucent).
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Precomputed node geometry. Only the size matters to the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Kind of a paint in a fill or stroke list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaintKind {
    Solid,
    Gradient,
    Image,
    Other(String),
}

/// A single fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub kind: PaintKind,
    /// Present for solid paints.
    pub color: Option<Color>,
    /// Paint-level opacity, multiplied into the color alpha.
    pub opacity: Option<f32>,
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self {
            kind: PaintKind::Solid,
            color: Some(color),
            opacity: None,
        }
    }

    pub fn image() -> Self {
        Self {
            kind: PaintKind::Image,
            color: None,
            opacity: None,
        }
    }

    /// The effective color of a solid paint, with paint opacity applied.
    pub fn solid_color(&self) -> Option<Color> {
        match self.kind {
            PaintKind::Solid => self
                .color
                .map(|c| c.with_opacity(self.opacity.unwrap_or(1.0))),
            _ => None,
        }
    }
}

/// Kind of a visual effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    Other(String),
}

/// A visual effect applied to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    /// Shadow radius, when the effect carries one.
    pub radius: Option<f64>,
}

impl Effect {
    pub fn drop_shadow(radius: f64) -> Self {
        Self {
            kind: EffectKind::DropShadow,
            radius: Some(radius),
        }
    }
}

/// Raw font metrics of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
}
