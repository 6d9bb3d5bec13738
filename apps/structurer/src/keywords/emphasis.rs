//! Wraps keyword phrases in emphasis markers inside qualifying lines.
//!
//! The match pattern is one case-insensitive alternation over the escaped
//! phrases, longest first, so a multi-word phrase is never partially shadowed
//! by a shorter substring it contains ("CI/CD" before "CI"). A match already
//! touching a marker on either side is left alone, which makes a second pass
//! over emphasized output a no-op.

use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::keywords::parse::KeywordSet;
use crate::models::{ClassifiedLine, LineRole};
use crate::structure::line::is_all_caps;

/// Marker the renderer treats as an emphasis delimiter.
pub const EMPHASIS_MARKER: &str = "**";

/// Body lines longer than this count as paragraphs and qualify for emphasis.
const BODY_MIN_CHARS: usize = 30;
/// Body lines shorter than this can qualify as project-name lines when a
/// bullet follows immediately.
const PROJECT_NAME_MAX_CHARS: usize = 80;

pub struct KeywordEmphasizer {
    pattern: Option<Regex>,
}

impl KeywordEmphasizer {
    /// Compiles the alternation once per request. An empty keyword set (or a
    /// pattern the engine rejects) disables emphasis rather than failing.
    pub fn new(keywords: &KeywordSet) -> Self {
        if keywords.is_empty() {
            return Self { pattern: None };
        }
        let mut phrases: Vec<&str> = keywords.phrases().iter().map(String::as_str).collect();
        phrases.sort_by_key(|p| std::cmp::Reverse(p.chars().count()));
        let alternation = phrases
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build();
        if let Err(err) = &pattern {
            warn!("keyword pattern rejected, emphasis disabled: {err}");
        }
        Self {
            pattern: pattern.ok(),
        }
    }

    /// Applies emphasis across one section's resolved lines.
    ///
    /// `section_eligible` is the per-section flag (experience / projects /
    /// summary); ineligible sections pass through untouched. Line count and
    /// roles are always preserved.
    pub fn apply(
        &self,
        lines: Vec<ClassifiedLine>,
        section_eligible: bool,
    ) -> Vec<ClassifiedLine> {
        let Some(pattern) = self.pattern.as_ref() else {
            return lines;
        };
        if !section_eligible {
            return lines;
        }
        (0..lines.len())
            .map(|idx| {
                let line = &lines[idx];
                if line_qualifies(&lines, idx) {
                    ClassifiedLine {
                        text: emphasize_text(pattern, &line.text),
                        role: line.role.clone(),
                    }
                } else {
                    line.clone()
                }
            })
            .collect()
    }
}

/// Bullets, body paragraphs, and short project-name lines qualify; section,
/// contact, date, and company lines are never modified.
fn line_qualifies(lines: &[ClassifiedLine], idx: usize) -> bool {
    let line = &lines[idx];
    match line.role {
        LineRole::Bullet => true,
        LineRole::Body => {
            if is_all_caps(&line.text) {
                return false;
            }
            let chars = line.text.chars().count();
            if chars > BODY_MIN_CHARS {
                return true;
            }
            let next_is_bullet =
                matches!(lines.get(idx + 1), Some(next) if next.role == LineRole::Bullet);
            chars < PROJECT_NAME_MAX_CHARS && next_is_bullet
        }
        _ => false,
    }
}

/// Wraps each match in markers unless the match already touches a `*` on
/// either side. Character order outside the inserted markers is untouched.
fn emphasize_text(pattern: &Regex, text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in pattern.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        let flanked = (m.start() > 0 && bytes[m.start() - 1] == b'*')
            || bytes.get(m.end()) == Some(&b'*');
        if flanked {
            out.push_str(m.as_str());
        } else {
            out.push_str(EMPHASIS_MARKER);
            out.push_str(m.as_str());
            out.push_str(EMPHASIS_MARKER);
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::KeywordSet;

    fn make_emphasizer(keywords: &[&str]) -> KeywordEmphasizer {
        KeywordEmphasizer::new(&KeywordSet::from_phrases(
            keywords.iter().map(|k| k.to_string()),
        ))
    }

    fn bullet(text: &str) -> ClassifiedLine {
        ClassifiedLine::new(text, LineRole::Bullet)
    }

    fn body(text: &str) -> ClassifiedLine {
        ClassifiedLine::new(text, LineRole::Body)
    }

    // ── matching ────────────────────────────────────────────────────────────

    #[test]
    fn test_bullet_line_gets_emphasis() {
        let emphasizer = make_emphasizer(&["Rust"]);
        let out = emphasizer.apply(vec![bullet("Rewrote the ingest path in Rust")], true);
        assert_eq!(out[0].text, "Rewrote the ingest path in **Rust**");
    }

    #[test]
    fn test_match_is_case_insensitive_but_keeps_original_casing() {
        let emphasizer = make_emphasizer(&["kubernetes"]);
        let out = emphasizer.apply(vec![bullet("Migrated workloads to Kubernetes")], true);
        assert_eq!(out[0].text, "Migrated workloads to **Kubernetes**");
    }

    #[test]
    fn test_longest_phrase_wins_over_contained_substring() {
        let emphasizer = make_emphasizer(&["CI", "CI/CD"]);
        let out = emphasizer.apply(vec![bullet("Built CI/CD pipelines")], true);
        assert_eq!(
            out[0].text, "Built **CI/CD** pipelines",
            "\"CI\" must not split the longer phrase"
        );
    }

    #[test]
    fn test_emphasis_is_idempotent() {
        let emphasizer = make_emphasizer(&["Rust", "CI/CD"]);
        let once = emphasizer.apply(vec![bullet("Shipped Rust CI/CD tooling")], true);
        let twice = emphasizer.apply(once.clone(), true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_line_count_and_roles_preserved() {
        let emphasizer = make_emphasizer(&["Rust"]);
        let lines = vec![
            ClassifiedLine::new("Acme Corp", LineRole::Company),
            bullet("Rust everywhere"),
            ClassifiedLine::blank(),
        ];
        let out = emphasizer.apply(lines.clone(), true);
        assert_eq!(out.len(), lines.len());
        assert_eq!(out[0].role, LineRole::Company);
        assert_eq!(out[2].role, LineRole::Blank);
    }

    // ── eligibility ─────────────────────────────────────────────────────────

    #[test]
    fn test_ineligible_section_passes_through() {
        let emphasizer = make_emphasizer(&["Rust"]);
        let out = emphasizer.apply(vec![bullet("Rust everywhere")], false);
        assert_eq!(out[0].text, "Rust everywhere");
    }

    #[test]
    fn test_company_and_date_lines_never_modified() {
        let emphasizer = make_emphasizer(&["Acme"]);
        let lines = vec![
            ClassifiedLine::new("Acme Corp", LineRole::Company),
            ClassifiedLine::new("Acme fellowship, 2020", LineRole::DateMeta),
        ];
        let out = emphasizer.apply(lines, true);
        assert_eq!(out[0].text, "Acme Corp");
        assert_eq!(out[1].text, "Acme fellowship, 2020");
    }

    #[test]
    fn test_short_body_line_skipped_unless_project_name() {
        let emphasizer = make_emphasizer(&["Rust"]);
        // 14 chars, no bullet after: too short for a paragraph.
        let out = emphasizer.apply(vec![body("Rust utilities")], true);
        assert_eq!(out[0].text, "Rust utilities");
    }

    #[test]
    fn test_project_name_line_before_bullet_gets_emphasis() {
        let emphasizer = make_emphasizer(&["Rust"]);
        let lines = vec![body("Rust utilities"), bullet("Parsing helpers")];
        let out = emphasizer.apply(lines, true);
        assert_eq!(out[0].text, "**Rust** utilities");
    }

    #[test]
    fn test_long_body_paragraph_gets_emphasis() {
        let emphasizer = make_emphasizer(&["Rust"]);
        let out = emphasizer.apply(
            vec![body("A decade of Rust and distributed systems experience")],
            true,
        );
        assert_eq!(
            out[0].text,
            "A decade of **Rust** and distributed systems experience"
        );
    }

    #[test]
    fn test_all_caps_body_line_never_emphasized() {
        let emphasizer = make_emphasizer(&["RUST"]);
        let out = emphasizer.apply(
            vec![body("RUST AND DISTRIBUTED SYSTEMS PLATFORM WORK")],
            true,
        );
        assert_eq!(out[0].text, "RUST AND DISTRIBUTED SYSTEMS PLATFORM WORK");
    }

    // ── idempotence internals ───────────────────────────────────────────────

    #[test]
    fn test_already_flanked_span_left_alone() {
        let emphasizer = make_emphasizer(&["Rust"]);
        let out = emphasizer.apply(vec![bullet("Shipped **Rust** tooling")], true);
        assert_eq!(out[0].text, "Shipped **Rust** tooling");
    }

    #[test]
    fn test_empty_keyword_set_is_a_no_op() {
        let emphasizer = make_emphasizer(&[]);
        let out = emphasizer.apply(vec![bullet("Shipped Rust tooling")], true);
        assert_eq!(out[0].text, "Shipped Rust tooling");
    }
}
