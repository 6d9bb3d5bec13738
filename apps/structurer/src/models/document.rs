#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// A labeled block of resume content.
///
/// `key` is the lower-cased, colon-stripped header text used for ranking and
/// role inference; `label` is the header exactly as it appeared in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub key: String,
    pub label: String,
    pub lines: Vec<String>,
}

/// Result of segmentation: the lines preceding the first section header, plus
/// every detected section in input order.
///
/// A document with zero detected headers yields an empty `sections` list and
/// everything in `header`; callers handle that shape, it is never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentedDocument {
    pub header: Vec<String>,
    pub sections: Vec<Section>,
}

impl SegmentedDocument {
    /// Re-joins header block and sections in original order. Used by
    /// content-preserving callers and by the conservation tests.
    pub fn reconstruct(&self) -> String {
        let mut parts: Vec<&str> = self.header.iter().map(String::as_str).collect();
        for section in &self.sections {
            parts.push(section.label.as_str());
            parts.extend(section.lines.iter().map(String::as_str));
        }
        parts.join("\n")
    }
}

// Substring markers deriving semantic category from a section key.
const EDUCATION_MARKERS: &[&str] = &["education", "academic", "credential"];
const SKILLS_MARKERS: &[&str] = &["skill", "competenc", "technolog", "expertise"];
const EXPERIENCE_MARKERS: &[&str] = &["experience", "employment", "history", "career"];
const EMPHASIS_MARKERS: &[&str] = &["experience", "projects", "summary"];

/// Semantic flags derived from a section key, driving role resolution and
/// keyword-emphasis eligibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionTraits {
    pub is_education: bool,
    pub is_skills: bool,
    pub is_experience: bool,
    pub emphasis_eligible: bool,
}

impl SectionTraits {
    pub fn from_key(key: &str) -> Self {
        let low = key.to_lowercase();
        let contains_any = |markers: &[&str]| markers.iter().any(|m| low.contains(m));
        Self {
            is_education: contains_any(EDUCATION_MARKERS),
            is_skills: contains_any(SKILLS_MARKERS),
            is_experience: contains_any(EXPERIENCE_MARKERS),
            emphasis_eligible: contains_any(EMPHASIS_MARKERS),
        }
    }
}
