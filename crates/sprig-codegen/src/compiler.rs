//! The compilation driver.

use crate::analyzer::{self, Classifier};
use crate::context::{Admission, CompilationContext, RejectReason};
use crate::generators::{assemble, render};
use crate::model::{AnalyzedFrame, Compilation, GeneratedComponent, RawAnalyzedFrame};
use crate::options::CompileOptions;
use crate::Result;
use sprig_core::{CompileError, DesignNode, ReadError, SprigError};
use tracing::{debug, info};

/// Compiles design trees into Astro components and a page.
///
/// A `Compiler` holds only configuration; all per-run state lives in a
/// fresh [`CompilationContext`], so one compiler can serve concurrent
/// compilations.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
    classifier: Classifier,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        let classifier = Classifier::new(options.classifier);
        Self {
            options,
            classifier,
        }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Walk the tree and classify every frame, without admitting or
    /// rendering anything.
    pub fn analyze(&self, root: Option<&DesignNode>) -> Vec<AnalyzedFrame> {
        analyzer::extract_frames(root)
            .into_iter()
            .map(|frame| {
                let category = self
                    .classifier
                    .classify(&frame.source_name, frame.bounding_box.as_ref());
                AnalyzedFrame::new(frame, category)
            })
            .collect()
    }

    /// Admit, name, and render analyzed frames, then assemble the page.
    ///
    /// Frames are processed in the order given. A frame's `should_skip`
    /// flag rejects it as a container even if its own facts say otherwise.
    pub fn generate(&self, frames: &[AnalyzedFrame]) -> Result<Compilation> {
        let mut context = CompilationContext::new();
        let mut components = Vec::new();

        for analyzed in frames {
            let frame = &analyzed.frame;
            let admission = if analyzed.should_skip {
                context.skip()
            } else {
                context.admit(analyzed.category, frame)
            };

            match admission {
                Admission::Admitted { name } => {
                    debug!(
                        frame = %frame.source_name,
                        id = %frame.id,
                        category = %analyzed.category,
                        component = %name,
                        "generating component"
                    );
                    let source = render(analyzed.category, &name, &frame.texts, &frame.style);
                    components.push(GeneratedComponent {
                        id: frame.id.clone(),
                        original_name: frame.source_name.clone(),
                        category: analyzed.category,
                        symbolic_name: name,
                        source,
                        bound_texts: frame.texts.clone(),
                    });
                }
                Admission::Rejected(RejectReason::Container) => {
                    debug!(frame = %frame.source_name, id = %frame.id, "skipping container frame");
                }
                Admission::Rejected(RejectReason::Duplicate(category)) => {
                    debug!(
                        frame = %frame.source_name,
                        id = %frame.id,
                        %category,
                        "skipping duplicate singleton"
                    );
                }
            }
        }

        let diagnostics = context.diagnostics();
        info!(
            total = diagnostics.total_frames,
            generated = diagnostics.generated_components,
            skipped = diagnostics.skipped_frames,
            duplicates = diagnostics.rejected_duplicates,
            "compilation finished"
        );

        let page = assemble(components, &self.options.page)?;
        Ok(Compilation { page, diagnostics })
    }

    /// Analyze and generate in one pass.
    pub fn compile(&self, root: Option<&DesignNode>) -> Result<Compilation> {
        let frames = self.analyze(root);
        self.generate(&frames)
    }

    /// Read a design export and compile it.
    pub fn compile_json(&self, json: &str) -> std::result::Result<Compilation, SprigError> {
        let file = sprig_design::read_document(json)?;
        Ok(self.compile(file.document.as_ref())?)
    }

    /// Generate from a JSON array of analyzed frames, as printed by the
    /// analysis stage.
    ///
    /// Malformed JSON is a read error; a frame with an unknown category label
    /// is a compile error naming that frame.
    pub fn generate_json(&self, json: &str) -> std::result::Result<Compilation, SprigError> {
        let raw: Vec<RawAnalyzedFrame> = serde_json::from_str(json).map_err(ReadError::from)?;
        let frames = raw
            .into_iter()
            .map(AnalyzedFrame::try_from)
            .collect::<std::result::Result<Vec<_>, CompileError>>()?;
        Ok(self.generate(&frames)?)
    }
}

/// Compile `root` with default options.
pub fn compile(root: Option<&DesignNode>) -> Result<Compilation> {
    Compiler::default().compile(root)
}

/// Read a design export and compile it with default options.
pub fn compile_json(json: &str) -> std::result::Result<Compilation, SprigError> {
    Compiler::default().compile_json(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Diagnostics;
    use sprig_core::{ComponentCategory, NodeKind};

    fn document() -> DesignNode {
        DesignNode::new("0", "Document", NodeKind::Other("DOCUMENT".into()))
    }

    fn section(id: &str, name: &str, text: &str) -> DesignNode {
        DesignNode::frame(id, name).with_child(DesignNode::text(format!("{id}:t"), text))
    }

    fn names(compilation: &Compilation) -> Vec<&str> {
        compilation
            .components()
            .iter()
            .map(|c| c.symbolic_name.as_str())
            .collect()
    }

    #[test]
    fn test_null_root_yields_empty_page() {
        let compilation = compile(None).unwrap();
        assert!(compilation.components().is_empty());
        assert_eq!(compilation.diagnostics, Diagnostics::default());
        assert!(compilation.page.source.contains("<html"));
    }

    #[test]
    fn test_navbar_and_footer_anchor_the_page() {
        let root = document()
            .with_child(section("1", "Footer", "© 2024"))
            .with_child(section("2", "Header", "Home"))
            .with_child(section("3", "Gallery", "Photo"));
        let compilation = compile(Some(&root)).unwrap();

        assert_eq!(names(&compilation), ["Navbar", "Gallery", "Footer"]);
        assert_eq!(compilation.diagnostics.total_frames, 3);
    }

    #[test]
    fn test_page_frame_with_text_is_content() {
        // Texts are gathered from the whole subtree, so a wrapping frame
        // that has text below it is not a container.
        let root = DesignNode::frame("0", "Page")
            .with_child(section("1", "Footer", "© 2024"));
        let compilation = compile(Some(&root)).unwrap();
        assert_eq!(names(&compilation), ["Card", "Footer"]);
        assert_eq!(compilation.components()[0].bound_texts, ["© 2024"]);

        let wrapper = DesignNode::frame("0", "Page")
            .with_child(DesignNode::frame("1", "Inner").with_child(DesignNode::frame("2", "Leaf")));
        let compilation = compile(Some(&wrapper)).unwrap();
        assert_eq!(names(&compilation), ["Card"]);
        assert_eq!(compilation.diagnostics.skipped_frames, 2);
    }

    #[test]
    fn test_singletons_deduplicated_galleries_numbered() {
        let root = document().with_children(vec![
            section("1", "Testimonial A", "Great"),
            section("2", "Testimonial B", "Also great"),
            section("3", "Gallery", "One"),
            section("4", "Image Grid", "Two"),
            section("5", "Gallery", "Three"),
        ]);
        let compilation = compile(Some(&root)).unwrap();
        assert_eq!(
            names(&compilation),
            ["Testimonial", "Gallery", "Gallery2", "Gallery3"]
        );
        assert_eq!(compilation.components()[0].id, "1");
        assert_eq!(compilation.diagnostics.rejected_duplicates, 1);
        assert_eq!(compilation.diagnostics.generated_components, 4);
    }

    #[test]
    fn test_analyze_then_generate_matches_compile() {
        let root = document()
            .with_child(section("1", "Hero Header", "Welcome"))
            .with_child(section("2", "CTA", "Join"))
            .with_child(DesignNode::frame("3", "Wrapper").with_child(DesignNode::frame("4", "Empty")));
        let compiler = Compiler::default();
        let frames = compiler.analyze(Some(&root));
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].category, ComponentCategory::Hero);
        assert_eq!(frames[1].category, ComponentCategory::Cta);
        assert!(frames[2].should_skip);
        assert!(!frames[3].should_skip);

        let staged = compiler.generate(&frames).unwrap();
        assert_eq!(staged, compiler.compile(Some(&root)).unwrap());
    }

    #[test]
    fn test_should_skip_flag_is_honored() {
        let compiler = Compiler::default();
        let mut frames = compiler.analyze(Some(&section("1", "Hero", "Hello")));
        frames[0].should_skip = true;
        let compilation = compiler.generate(&frames).unwrap();
        assert!(compilation.components().is_empty());
        assert_eq!(compilation.diagnostics.skipped_frames, 1);
    }

    #[test]
    fn test_options_reach_the_page() {
        let mut options = CompileOptions::default();
        options.page.title = "Landing".into();
        options.page.tailwind_cdn = None;
        let compilation = Compiler::new(options).compile(None).unwrap();
        assert!(compilation.page.source.contains("<title>Landing</title>"));
        assert!(!compilation.page.source.contains("<script"));
    }

    #[test]
    fn test_compile_json() {
        let json = r#"{
            "name": "Landing",
            "document": {
                "id": "0", "name": "Document", "type": "DOCUMENT",
                "children": [{
                    "id": "1", "name": "Gallery", "type": "FRAME",
                    "children": [{ "id": "2", "name": "Caption", "type": "TEXT", "characters": "Sunset" }]
                }]
            }
        }"#;
        let compilation = compile_json(json).unwrap();
        assert_eq!(names(&compilation), ["Gallery"]);
        assert_eq!(compilation.components()[0].bound_texts, ["Sunset"]);

        let empty = compile_json(r#"{ "document": null }"#).unwrap();
        assert!(empty.components().is_empty());
    }

    #[test]
    fn test_compile_json_reports_read_errors() {
        let err = compile_json("{ not json").unwrap_err();
        assert!(matches!(err, SprigError::Read(ReadError::Json(_))), "{err:?}");

        let err = compile_json("[1, 2]").unwrap_err();
        assert!(matches!(err, SprigError::Read(ReadError::InvalidData(_))), "{err:?}");
    }

    #[test]
    fn test_generate_json() {
        let compiler = Compiler::default();
        let frames = compiler.analyze(Some(&document().with_child(section("1", "CTA", "Join"))));
        let json = serde_json::to_string(&frames).unwrap();

        let compilation = compiler.generate_json(&json).unwrap();
        assert_eq!(names(&compilation), ["CTA"]);
    }

    #[test]
    fn test_generate_json_reports_unknown_category() {
        let compiler = Compiler::default();
        let json = r#"[{ "id": "7:1", "name": "Side", "type": "Sidebar", "texts": ["x"] }]"#;
        let err = compiler.generate_json(json).unwrap_err();
        assert!(
            matches!(
                &err,
                SprigError::Compile(CompileError::UnknownCategory { id, category })
                    if id == "7:1" && category == "Sidebar"
            ),
            "{err:?}"
        );

        let err = compiler.generate_json("{").unwrap_err();
        assert!(matches!(err, SprigError::Read(ReadError::Json(_))), "{err:?}");
    }

    #[test]
    fn test_parallel_compilations_are_independent() {
        let root = document().with_children(vec![
            section("1", "Gallery", "One"),
            section("2", "Gallery", "Two"),
        ]);
        let compiler = &Compiler::default();
        let root = &root;
        let results: Vec<Compilation> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || compiler.compile(Some(root)).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for compilation in &results {
            assert_eq!(names(compilation), ["Gallery", "Gallery2"]);
        }
    }
}
