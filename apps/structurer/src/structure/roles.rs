//! Second-pass, per-section classification of lines into document roles.
//!
//! Resumes mix at least two layout conventions for job entries: a single
//! combined "Title — Company" line, and a two-line "Company" / "Role, Dates"
//! pair. The pair can only be recognized by looking at the line *after* the
//! candidate company name, so resolution carries one line of lookahead to the
//! next non-blank line.

use crate::models::{ClassifiedLine, LineRole, Section, SectionTraits};
use crate::structure::line::{self, LineClassifier};

/// Resolves every line of one section into a `ClassifiedLine`, in order.
/// Emits exactly one entry per input line; blanks become `Blank`.
pub fn resolve_roles(section: &Section, classifier: &LineClassifier) -> Vec<ClassifiedLine> {
    let traits = SectionTraits::from_key(&section.key);
    let lines: Vec<&str> = section.lines.iter().map(|l| l.trim()).collect();

    let mut resolved = Vec::with_capacity(lines.len());
    for (idx, &text) in lines.iter().enumerate() {
        resolved.push(resolve_line(text, idx, &lines, &traits, classifier));
    }
    resolved
}

/// Ordered predicate cascade for a single line. Precedence:
/// blank, bullet, skill entry, education rules, experience rules, body.
fn resolve_line(
    text: &str,
    idx: usize,
    lines: &[&str],
    traits: &SectionTraits,
    classifier: &LineClassifier,
) -> ClassifiedLine {
    if text.is_empty() {
        return ClassifiedLine::blank();
    }

    if line::is_bullet(text) {
        return ClassifiedLine::new(line::strip_bullet(text), LineRole::Bullet);
    }

    if traits.is_skills && text.contains(':') {
        let (label, value) = text.split_once(':').unwrap_or((text, ""));
        return ClassifiedLine::new(
            text,
            LineRole::SkillLabelValue {
                label: label.trim().to_string(),
                value: value.trim().to_string(),
            },
        );
    }

    if traits.is_education {
        let role = if classifier.has_date(text) || text.contains('|') {
            LineRole::DateMeta
        } else {
            LineRole::Body
        };
        return ClassifiedLine::new(text, role);
    }

    if traits.is_experience {
        return resolve_experience_line(text, idx, lines, classifier);
    }

    ClassifiedLine::new(text, LineRole::Body)
}

/// Experience-section rules, in order:
/// an em-dash (or an en-dash without a date) marks a combined title line; a
/// dateless line whose next non-blank neighbor is a non-bullet date line is a
/// company name; a line carrying a date is a title/date line; anything else
/// is body text.
fn resolve_experience_line(
    text: &str,
    idx: usize,
    lines: &[&str],
    classifier: &LineClassifier,
) -> ClassifiedLine {
    if text.contains('—') || (text.contains('–') && !classifier.has_date(text)) {
        return ClassifiedLine::new(text, LineRole::RoleTitle);
    }

    let next = lines[idx + 1..]
        .iter()
        .find(|l| !l.is_empty())
        .copied()
        .unwrap_or("");
    let next_has_date = classifier.has_date(next);
    let next_is_bullet = !next.is_empty() && line::is_bullet(next);

    if next_has_date && !next_is_bullet && !classifier.has_date(text) {
        return ClassifiedLine::new(text, LineRole::Company);
    }
    if classifier.has_date(text) {
        return ClassifiedLine::new(text, LineRole::RoleTitle);
    }
    ClassifiedLine::new(text, LineRole::Body)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_section(key: &str, lines: &[&str]) -> Section {
        Section {
            key: key.to_string(),
            label: key.to_uppercase(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn roles_of(section: &Section) -> Vec<LineRole> {
        resolve_roles(section, &LineClassifier::new())
            .into_iter()
            .map(|l| l.role)
            .collect()
    }

    // ── two-line company/role convention ────────────────────────────────────

    #[test]
    fn test_company_then_role_then_bullet() {
        let section = make_section(
            "experience",
            &["Acme Corp", "Senior Engineer, 2020–2023", "- Led a team of 5"],
        );
        assert_eq!(
            roles_of(&section),
            vec![LineRole::Company, LineRole::RoleTitle, LineRole::Bullet]
        );
    }

    #[test]
    fn test_company_detected_across_blank_line() {
        // Lookahead targets the next non-blank line, not the next line.
        let section = make_section("experience", &["Acme Corp", "", "Engineer, Jan 2020"]);
        assert_eq!(
            roles_of(&section),
            vec![LineRole::Company, LineRole::Blank, LineRole::RoleTitle]
        );
    }

    #[test]
    fn test_dateless_line_before_bullet_is_body_not_company() {
        // The neighbor is a bullet, so the company rule must not fire.
        let section = make_section("experience", &["Acme Corp", "- Shipped 2020 roadmap"]);
        assert_eq!(roles_of(&section), vec![LineRole::Body, LineRole::Bullet]);
    }

    // ── single-line title convention ────────────────────────────────────────

    #[test]
    fn test_em_dash_line_is_role_title_regardless_of_lookahead() {
        let section = make_section(
            "experience",
            &["Senior Engineer — Acme Corp", "Platform Lead, 2018"],
        );
        let roles = roles_of(&section);
        assert_eq!(roles[0], LineRole::RoleTitle);
    }

    #[test]
    fn test_en_dash_without_date_is_role_title() {
        let section = make_section("experience", &["Senior Engineer – Acme Corp"]);
        assert_eq!(roles_of(&section), vec![LineRole::RoleTitle]);
    }

    #[test]
    fn test_en_dash_with_date_falls_through_to_date_rule() {
        // "2020–2023" must not read as a combined title line.
        let section = make_section("experience", &["Jun 2020–2023"]);
        assert_eq!(roles_of(&section), vec![LineRole::RoleTitle]);
    }

    #[test]
    fn test_plain_experience_line_is_body() {
        let section = make_section("experience", &["Promoted twice within the org"]);
        assert_eq!(roles_of(&section), vec![LineRole::Body]);
    }

    // ── skills sections ─────────────────────────────────────────────────────

    #[test]
    fn test_skill_line_splits_at_first_colon() {
        let section = make_section("technical skills", &["Languages: Rust, Python: typed"]);
        let resolved = resolve_roles(&section, &LineClassifier::new());
        match &resolved[0].role {
            LineRole::SkillLabelValue { label, value } => {
                assert_eq!(label, "Languages");
                assert_eq!(value, "Rust, Python: typed");
            }
            other => panic!("expected SkillLabelValue, got {other:?}"),
        }
        assert_eq!(resolved[0].text, "Languages: Rust, Python: typed");
    }

    #[test]
    fn test_skill_line_without_colon_is_body() {
        let section = make_section("skills", &["Rust, Python, Go"]);
        assert_eq!(roles_of(&section), vec![LineRole::Body]);
    }

    #[test]
    fn test_bullet_beats_skill_split() {
        let section = make_section("skills", &["- Cloud: AWS, GCP"]);
        let resolved = resolve_roles(&section, &LineClassifier::new());
        assert_eq!(resolved[0].role, LineRole::Bullet);
        assert_eq!(resolved[0].text, "Cloud: AWS, GCP");
    }

    // ── education sections ──────────────────────────────────────────────────

    #[test]
    fn test_education_date_and_pipe_lines_are_date_meta() {
        let section = make_section(
            "education",
            &[
                "B.S. Computer Science",
                "Stanford University | Class of 2014",
                "Graduated 2014",
            ],
        );
        assert_eq!(
            roles_of(&section),
            vec![LineRole::Body, LineRole::DateMeta, LineRole::DateMeta]
        );
    }

    // ── generic sections ────────────────────────────────────────────────────

    #[test]
    fn test_unknown_section_lines_default_to_body() {
        let section = make_section("hackathons", &["Won the 48-hour build-off", ""]);
        assert_eq!(roles_of(&section), vec![LineRole::Body, LineRole::Blank]);
    }

    #[test]
    fn test_bullet_glyph_is_stripped_from_stored_text() {
        let section = make_section("projects", &["• Built a terminal emulator"]);
        let resolved = resolve_roles(&section, &LineClassifier::new());
        assert_eq!(resolved[0].text, "Built a terminal emulator");
    }

    #[test]
    fn test_one_classified_line_per_input_line() {
        let section = make_section("experience", &["Acme Corp", "", "Engineer, 2020", ""]);
        assert_eq!(roles_of(&section).len(), 4);
    }
}
