//! ATS-priority section ordering.

use crate::models::Section;

/// Canonical section-name phrases in ATS priority order: summary-like
/// sections first, then experience, education, skills, certifications,
/// projects, achievements, publications, volunteer/other.
pub const ATS_SECTION_ORDER: &[&str] = &[
    "summary",
    "professional summary",
    "career summary",
    "executive summary",
    "objective",
    "career objective",
    "profile",
    "professional profile",
    "about",
    "experience",
    "work experience",
    "professional experience",
    "employment",
    "work history",
    "career history",
    "employment history",
    "education",
    "academic background",
    "academic credentials",
    "skills",
    "technical skills",
    "core competencies",
    "competencies",
    "technical expertise",
    "key skills",
    "areas of expertise",
    "certifications",
    "certification",
    "certificates",
    "licenses",
    "projects",
    "personal projects",
    "key projects",
    "notable projects",
    "achievements",
    "accomplishments",
    "key achievements",
    "awards",
    "honors",
    "honors & awards",
    "awards & honors",
    "publications",
    "research",
    "volunteer",
    "volunteer experience",
    "languages",
    "interests",
    "hobbies",
];

/// Rank assigned to section keys matching no table entry. Sorts last.
pub const RANK_UNMATCHED: usize = usize::MAX;

/// Lowest table index whose entry equals the key, is contained in the key, or
/// contains the key. The three-way match tolerates both abbreviated and
/// verbose phrasings ("Skills" vs. "Technical Skills & Competencies").
pub fn ats_rank(key: &str) -> usize {
    let low = key.to_lowercase();
    ATS_SECTION_ORDER
        .iter()
        .position(|&entry| low == entry || low.contains(entry) || entry.contains(low.as_str()))
        .unwrap_or(RANK_UNMATCHED)
}

/// Total order by rank, ties broken by input order. The output is always a
/// permutation of the input: unmatched sections sort last, never drop.
pub fn rank_sections(mut sections: Vec<Section>) -> Vec<Section> {
    sections.sort_by_key(|section| ats_rank(&section.key));
    sections
}
