//! Pipeline entry point: cleanup, segmentation, ranking, role resolution,
//! keyword emphasis, assembly. One invocation per request; every stage
//! returns a fresh value, so invocations are independent and order-free.

use tracing::debug;

use crate::config::{HeaderMode, PipelineOptions};
use crate::keywords::{KeywordEmphasizer, KeywordSet};
use crate::models::{SectionTraits, StyledBlock};
use crate::pipeline::assembler::{assemble, ResolvedSection};
use crate::pipeline::cleanup::MarkdownCleanup;
use crate::structure::line::{
    HeaderDetector, LineClassifier, LooseHeaderDetector, StrictHeaderDetector,
};
use crate::structure::{rank_sections, resolve_roles, segment};

/// Runs the full structuring pipeline over one resume text and keyword list.
///
/// Total over any input: degenerate documents fall back to an all-header
/// result, unknown sections rank last, malformed keywords arrive here already
/// coerced to an empty set.
pub fn structure_resume(
    text: &str,
    keywords: &KeywordSet,
    options: &PipelineOptions,
) -> Vec<StyledBlock> {
    let classifier = LineClassifier::new();

    let cleaned;
    let text = if options.strip_markdown {
        cleaned = MarkdownCleanup::new().clean(text);
        cleaned.as_str()
    } else {
        text
    };

    let detector: &dyn HeaderDetector = match options.header_mode {
        HeaderMode::Strict => &StrictHeaderDetector,
        HeaderMode::Loose => &LooseHeaderDetector,
    };
    let document = segment(text, detector);
    let ranked = rank_sections(document.sections);

    let emphasizer = KeywordEmphasizer::new(keywords);
    let resolved: Vec<ResolvedSection> = ranked
        .into_iter()
        .map(|section| {
            let traits = SectionTraits::from_key(&section.key);
            let lines = resolve_roles(&section, &classifier);
            let lines = emphasizer.apply(lines, traits.emphasis_eligible);
            (section, lines)
        })
        .collect();

    let blocks = assemble(&document.header, &resolved, &classifier);
    debug!(
        header_lines = document.header.len(),
        sections = resolved.len(),
        blocks = blocks.len(),
        "structured document"
    );
    blocks
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
