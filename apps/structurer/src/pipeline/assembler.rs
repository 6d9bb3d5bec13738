//! Composes header block and ranked, resolved sections into the ordered
//! StyledBlock sequence the external renderer consumes.
//!
//! Pure composition; no classification or ranking happens here. The block
//! count is a contract: header lines + per section (1 header + resolved line
//! count). Blank lines become Blank blocks instead of being skipped so the
//! renderer's round-trip fidelity checks stay exact.

use crate::models::{ClassifiedLine, LineRole, Section, StyledBlock};
use crate::structure::line::LineClassifier;

/// One ranked section paired with its role-resolved (and possibly emphasized)
/// lines.
pub type ResolvedSection = (Section, Vec<ClassifiedLine>);

pub fn assemble(
    header: &[String],
    sections: &[ResolvedSection],
    classifier: &LineClassifier,
) -> Vec<StyledBlock> {
    let mut blocks = Vec::new();

    // Header block: first non-blank line is the candidate's name, contact
    // lines keep their own role, anything else is body text.
    let mut saw_name = false;
    for line in header {
        let text = line.trim();
        let role = if text.is_empty() {
            LineRole::Blank
        } else if !saw_name {
            saw_name = true;
            LineRole::Name
        } else if classifier.is_contact_line(text) {
            LineRole::ContactLine
        } else {
            LineRole::Body
        };
        blocks.push(StyledBlock {
            role,
            text: text.to_string(),
            section_key: None,
        });
    }

    for (section, lines) in sections {
        blocks.push(StyledBlock {
            role: LineRole::SectionHeader,
            text: section.label.clone(),
            section_key: Some(section.key.clone()),
        });
        for line in lines {
            blocks.push(StyledBlock {
                role: line.role.clone(),
                text: line.text.clone(),
                section_key: Some(section.key.clone()),
            });
        }
    }

    blocks
}
