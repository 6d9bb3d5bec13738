//! Line classifier: lexical and structural signals for a single resume line.
//!
//! Predicates here return signals, not final roles; `roles.rs` owns the
//! precedence order that turns signals into roles. Header detection comes in
//! two named strategies behind `HeaderDetector`: a strict canonical-vocabulary
//! match for content-preserving callers, and a loose heuristic for rendering.
//! Each call site picks exactly one strategy.

use regex::Regex;

use crate::structure::ranker::ATS_SECTION_ORDER;

/// Glyphs that open a bullet line when followed by whitespace.
pub const BULLET_GLYPHS: &[char] = &['•', '▪', '●', '-', '–', '*', '◦'];

/// Returns true if the line starts with a bullet glyph followed by whitespace.
pub fn is_bullet(line: &str) -> bool {
    let mut chars = line.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(glyph), Some(after)) if BULLET_GLYPHS.contains(&glyph) && after.is_whitespace()
    )
}

/// Strips one leading bullet glyph and the whitespace after it.
pub fn strip_bullet(line: &str) -> &str {
    match line.chars().next() {
        Some(glyph) if BULLET_GLYPHS.contains(&glyph) => line[glyph.len_utf8()..].trim_start(),
        _ => line,
    }
}

/// True when the line has at least one cased character and none lowercase.
pub fn is_all_caps(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Compiled lexical patterns shared across one pipeline invocation.
///
/// Patterns are built once in the constructor and owned by the value; there is
/// no process-wide regex cache.
#[derive(Debug)]
pub struct LineClassifier {
    date_re: Regex,
    us_phone_re: Regex,
    intl_phone_re: Regex,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            // Substring alternation: month abbreviations also hit their long
            // forms ("January" via "jan"), which is the intended tolerance.
            date_re: Regex::new(
                r"(?i)jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec|20\d{2}|19\d{2}|present|current",
            )
            .unwrap(),
            us_phone_re: Regex::new(r"\d{3}[-.\s]\d{3}[-.\s]\d{4}").unwrap(),
            intl_phone_re: Regex::new(r"\+\d[\d\s()\-]{7,}").unwrap(),
        }
    }

    /// True when the line carries a month abbreviation, a 4-digit year in
    /// 1900–2099, or the tokens "present"/"current".
    pub fn has_date(&self, line: &str) -> bool {
        self.date_re.is_match(line)
    }

    /// True for email, URL, profile-host, phone, or pipe-separated layouts.
    pub fn is_contact_line(&self, line: &str) -> bool {
        let low = line.to_lowercase();
        ["@", "linkedin", "github", "http", "phone:"]
            .iter()
            .any(|marker| low.contains(marker))
            || self.us_phone_re.is_match(line)
            || self.intl_phone_re.is_match(line)
            || line.contains('|')
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section-header detection strategies
// ────────────────────────────────────────────────────────────────────────────

/// One of the two named header-detection strategies. Selected once per call
/// site, never branched on ad hoc.
pub trait HeaderDetector {
    fn is_section_header(&self, line: &str) -> bool;
}

/// Canonical header vocabulary for the strict detector: the whole line, minus
/// an optional trailing colon, must equal one of these phrases.
const STRICT_HEADER_VOCABULARY: &[&str] = &[
    "professional summary",
    "summary",
    "objective",
    "profile",
    "professional experience",
    "work experience",
    "experience",
    "employment",
    "technical skills",
    "skills",
    "competencies",
    "education",
    "projects",
    "certification",
    "certifications",
    "certificates",
    "licenses",
    "achievement",
    "achievements",
    "awards",
    "honors",
    "publication",
    "publications",
    "research",
    "volunteer",
    "languages",
    "interests",
];

/// Broader token vocabulary for the loose detector's word-overlap rule.
const SECTION_TOKENS: &[&str] = &[
    "summary",
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
    "certification",
    "certificates",
    "achievements",
    "accomplishments",
    "awards",
    "honors",
    "publications",
    "volunteer",
    "languages",
    "interests",
    "profile",
    "objective",
    "history",
    "competencies",
    "expertise",
    "background",
    "credentials",
    "employment",
    "career",
    "research",
    "licenses",
    "hobbies",
];

/// Strict detection: exact canonical-vocabulary match, used where the caller
/// must never split a document on an invented header.
pub struct StrictHeaderDetector;

impl HeaderDetector for StrictHeaderDetector {
    fn is_section_header(&self, line: &str) -> bool {
        let stripped = line.trim();
        let without_colon = stripped.strip_suffix(':').unwrap_or(stripped).trim_end();
        STRICT_HEADER_VOCABULARY
            .iter()
            .any(|header| without_colon.eq_ignore_ascii_case(header))
    }
}

/// Loose detection for rendering: short ALL-CAPS lines, exact rank-table
/// phrases, or short lines sharing vocabulary with known section names.
///
/// Known tradeoff, kept deliberately: a long ALL-CAPS bullet or a short
/// ALL-CAPS company name can satisfy the ALL-CAPS rule and open a section.
pub struct LooseHeaderDetector;

impl HeaderDetector for LooseHeaderDetector {
    fn is_section_header(&self, line: &str) -> bool {
        let stripped = line.trim().trim_end_matches(':');
        if stripped.is_empty() || stripped.chars().count() > 65 {
            return false;
        }
        if is_all_caps(stripped) && stripped.chars().count() > 2 {
            return true;
        }
        let low = stripped.to_lowercase();
        if ATS_SECTION_ORDER.contains(&low.as_str()) {
            return true;
        }
        let cleaned: String = low
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
            .collect();
        let words: std::collections::HashSet<&str> = cleaned.split_whitespace().collect();
        let overlaps = SECTION_TOKENS.iter().any(|token| words.contains(token));
        if overlaps && stripped.split_whitespace().count() <= 5 {
            let rejected = ["•", "@", ".", "http"]
                .iter()
                .any(|marker| stripped.contains(marker));
            if !rejected {
                return true;
            }
        }
        false
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
