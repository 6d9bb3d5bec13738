//! Splits raw resume text into a header block plus named sections.

use tracing::debug;

use crate::models::{Section, SegmentedDocument};
use crate::structure::line::HeaderDetector;

/// Scans top to bottom with the given header-detection strategy.
///
/// Lines before the first detected header form the header block; each header
/// line opens a section that accumulates until the next header or end of
/// input. Every input line lands in exactly one place, so reconstruction in
/// original order loses no text.
pub fn segment(text: &str, detector: &dyn HeaderDetector) -> SegmentedDocument {
    let mut header: Vec<String> = Vec::new();
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;

    for line in text.trim().lines() {
        let stripped = line.trim();
        if !stripped.is_empty() && detector.is_section_header(stripped) {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            current = Some(Section {
                key: section_key(stripped),
                label: stripped.to_string(),
                lines: Vec::new(),
            });
        } else if let Some(section) = current.as_mut() {
            section.lines.push(line.to_string());
        } else {
            header.push(line.to_string());
        }
    }
    if let Some(section) = current.take() {
        sections.push(section);
    }

    debug!(
        header_lines = header.len(),
        sections = sections.len(),
        "segmented document"
    );
    SegmentedDocument { header, sections }
}

/// Lower-cased, colon-stripped form of a header line, used for ranking and
/// role inference. The display label stays verbatim.
fn section_key(label: &str) -> String {
    let low = label.to_lowercase();
    low.trim_end_matches(':').trim().to_string()
}
