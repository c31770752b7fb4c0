//! Reader for design-tool JSON exports.
//!
//! Parses the body of a file export (or a bare node object) into the
//! [`DesignNode`] tree the compiler consumes, and provides helpers for
//! design URLs. Fetching the export is left to the caller.
//!
//! # Example
//!
//! ```ignore
//! use sprig_design::read_document;
//!
//! let file = read_document(&json)?;
//! let root = file.document.as_ref();
//! ```

mod links;
mod reader;
mod schema;

pub use links::{embed_url, extract_file_key};
pub use reader::{read_document, read_document_file, read_node, DesignFile};
pub use sprig_core::ReadError;

/// Result type for sprig-design operations.
pub type Result<T> = std::result::Result<T, ReadError>;
