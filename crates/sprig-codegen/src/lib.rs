//! Compilation of design trees into Astro components.
//!
//! The pipeline runs in pure stages over a read-only [`DesignNode`] tree:
//!
//! 1. [`analyzer`] walks the tree, extracts texts and style tokens per frame,
//!    and classifies each frame into a [`ComponentCategory`].
//! 2. [`CompilationContext`] admits or rejects frames (container skip,
//!    singleton categories) and assigns unique symbolic names.
//! 3. [`generators`] renders one component per admitted frame and assembles
//!    the page document.
//!
//! # Example
//!
//! ```ignore
//! use sprig_codegen::Compiler;
//!
//! let compilation = Compiler::default().compile(Some(&root))?;
//! for component in &compilation.page.components {
//!     println!("{}", component.file_name());
//! }
//! println!("{}", compilation.page.source);
//! ```
//!
//! [`DesignNode`]: sprig_core::DesignNode
//! [`ComponentCategory`]: sprig_core::ComponentCategory

pub mod analyzer;
pub mod compiler;
pub mod context;
pub mod generators;
pub mod model;
pub mod options;

pub use analyzer::{Classification, ClassificationSource, Classifier};
pub use compiler::{compile, compile_json, Compiler};
pub use context::{Admission, CompilationContext, RejectReason};
pub use generators::{assemble, render};
pub use model::{AnalyzedFrame, Compilation, Diagnostics, ExtractedFrame, GeneratedComponent, PageDocument};
pub use options::{ClassifierOptions, CompileOptions, PageOptions};
pub use sprig_core::{CompileError, SprigError};

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CompileError>;
