//! Error types for the Sprig compiler.

use thiserror::Error;

/// Top-level error type for the Sprig crates.
#[derive(Debug, Error)]
pub enum SprigError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Errors while reading a design document or design URL.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid design data: {0}")]
    InvalidData(String),

    #[error("Invalid design URL: {url}")]
    InvalidUrl { url: String },
}

/// Invariant violations that abort a compilation.
///
/// Missing texts, styles, or geometry are never errors; they are recovered
/// with fallback values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("Naming collision: component '{name}' (frame {id}, category {category}) was emitted twice")]
    NamingCollision {
        name: String,
        id: String,
        category: String,
    },

    #[error("Unknown component category '{category}' for frame {id}")]
    UnknownCategory { id: String, category: String },
}
