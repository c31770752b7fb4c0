//! Core types for the Sprig design-to-component compiler.
//!
//! This crate provides the foundational types used across all other sprig crates:
//! - The design tree (`DesignNode` and its closed `NodeKind` variant)
//! - Value types (colors, bounding boxes, paints, effects)
//! - Component categories and their cardinality classes
//! - Style tokens and the discrete size/weight buckets
//! - Error types

pub mod category;
pub mod errors;
pub mod node;
pub mod style;
pub mod types;

pub use category::*;
pub use errors::*;
pub use node::*;
pub use style::*;
pub use types::*;
