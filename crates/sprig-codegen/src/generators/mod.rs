//! Astro code generation: per-category component templates and page assembly.

mod escape;
mod page;
mod templates;

pub use page::assemble;
pub use templates::render;
