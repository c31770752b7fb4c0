//! Per-compilation admission and naming state.
//!
//! A [`CompilationContext`] is created at the start of every compilation and
//! dropped at the end, so counters never leak between runs and independent
//! compilations can proceed in parallel.

use crate::model::{Diagnostics, ExtractedFrame};
use indexmap::IndexMap;
use sprig_core::ComponentCategory;

/// Outcome of [`CompilationContext::admit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// The frame becomes a component with this symbolic name.
    Admitted { name: String },
    Rejected(RejectReason),
}

/// Why a frame was not emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No text of its own and only nested frames.
    Container,
    /// A singleton category that was already emitted.
    Duplicate(ComponentCategory),
}

/// Admission and naming state for one compilation.
#[derive(Debug, Default)]
pub struct CompilationContext {
    /// Accepted instances per category, in first-acceptance order.
    counters: IndexMap<ComponentCategory, usize>,
    diagnostics: Diagnostics,
}

impl CompilationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether `frame`, classified as `category`, becomes a component.
    ///
    /// Must be called once per frame in discovery order.
    pub fn admit(&mut self, category: ComponentCategory, frame: &ExtractedFrame) -> Admission {
        self.diagnostics.total_frames += 1;

        if frame.is_container() {
            self.diagnostics.skipped_frames += 1;
            return Admission::Rejected(RejectReason::Container);
        }
        if category.is_singleton() && self.count(category) > 0 {
            self.diagnostics.rejected_duplicates += 1;
            return Admission::Rejected(RejectReason::Duplicate(category));
        }

        self.diagnostics.generated_components += 1;
        Admission::Admitted {
            name: self.unique_name(category),
        }
    }

    /// Reject a frame already flagged as a container during analysis.
    pub fn skip(&mut self) -> Admission {
        self.diagnostics.total_frames += 1;
        self.diagnostics.skipped_frames += 1;
        Admission::Rejected(RejectReason::Container)
    }

    /// Next symbolic name for `category`: the bare category name first, then
    /// the running count appended (`Gallery`, `Gallery2`, `Gallery3`, ...).
    pub fn unique_name(&mut self, category: ComponentCategory) -> String {
        let counter = self.counters.entry(category).or_insert(0);
        *counter += 1;
        if *counter > 1 {
            format!("{}{}", category.as_str(), counter)
        } else {
            category.as_str().to_string()
        }
    }

    /// How many instances of `category` were accepted so far.
    pub fn count(&self, category: ComponentCategory) -> usize {
        self.counters.get(&category).copied().unwrap_or(0)
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::StyleTokens;

    fn frame(id: &str, texts: &[&str], has_child_frames: bool) -> ExtractedFrame {
        ExtractedFrame {
            id: id.into(),
            source_name: id.into(),
            texts: texts.iter().map(|t| t.to_string()).collect(),
            has_child_frames,
            bounding_box: None,
            style: StyleTokens::default(),
        }
    }

    fn admitted(name: &str) -> Admission {
        Admission::Admitted { name: name.into() }
    }

    #[test]
    fn test_singletons_admit_once() {
        let mut ctx = CompilationContext::new();
        for category in ComponentCategory::ALL {
            if category.is_singleton() {
                assert_eq!(ctx.admit(category, &frame("a", &["x"], false)), admitted(category.as_str()));
                assert_eq!(
                    ctx.admit(category, &frame("b", &["y"], false)),
                    Admission::Rejected(RejectReason::Duplicate(category))
                );
            }
        }
        assert_eq!(ctx.diagnostics().generated_components, 10);
        assert_eq!(ctx.diagnostics().rejected_duplicates, 10);
    }

    #[test]
    fn test_gallery_names_count_up() {
        let mut ctx = CompilationContext::new();
        let names: Vec<_> = (0..3)
            .map(|i| ctx.admit(ComponentCategory::Gallery, &frame(&i.to_string(), &[], false)))
            .collect();
        assert_eq!(names, [admitted("Gallery"), admitted("Gallery2"), admitted("Gallery3")]);
        assert_eq!(ctx.count(ComponentCategory::Gallery), 3);
    }

    #[test]
    fn test_container_frames_are_skipped() {
        let mut ctx = CompilationContext::new();
        assert_eq!(
            ctx.admit(ComponentCategory::Section, &frame("wrapper", &[], true)),
            Admission::Rejected(RejectReason::Container)
        );
        // A skipped container does not use up the singleton slot.
        assert_eq!(
            ctx.admit(ComponentCategory::Section, &frame("real", &["Body"], true)),
            admitted("Section")
        );
        assert_eq!(
            ctx.diagnostics(),
            Diagnostics {
                total_frames: 2,
                generated_components: 1,
                skipped_frames: 1,
                rejected_duplicates: 0,
            }
        );
    }

    #[test]
    fn test_contexts_do_not_share_counters() {
        let mut first = CompilationContext::new();
        first.unique_name(ComponentCategory::Gallery);
        first.unique_name(ComponentCategory::Gallery);

        let mut second = CompilationContext::new();
        assert_eq!(second.unique_name(ComponentCategory::Gallery), "Gallery");
    }

    #[test]
    fn test_counts_track_admissions_only() {
        let mut ctx = CompilationContext::new();
        ctx.admit(ComponentCategory::Footer, &frame("f1", &["x"], false));
        ctx.admit(ComponentCategory::Footer, &frame("f2", &["y"], false));
        ctx.admit(ComponentCategory::Gallery, &frame("g1", &[], false));
        assert_eq!(ctx.skip(), Admission::Rejected(RejectReason::Container));

        assert_eq!(ctx.count(ComponentCategory::Footer), 1);
        assert_eq!(ctx.count(ComponentCategory::Gallery), 1);
        assert_eq!(ctx.count(ComponentCategory::Card), 0);
        assert_eq!(ctx.diagnostics().total_frames, 4);
        assert_eq!(ctx.diagnostics().skipped_frames, 1);
    }
}
