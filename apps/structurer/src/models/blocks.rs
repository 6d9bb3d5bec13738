use serde::{Deserialize, Serialize};

/// Structural role assigned to a single resume line.
///
/// The same literal text can resolve to different roles depending on which
/// section it sits in; resolution happens in `structure::roles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LineRole {
    /// A section header line ("EXPERIENCE", "Technical Skills:", ...).
    SectionHeader,
    /// First non-blank line of the header block: the candidate's name.
    Name,
    /// Email, phone, URL, or pipe-separated contact layout.
    ContactLine,
    /// Employer name on its own line, the line below carrying role + dates.
    Company,
    /// Job title line, either "Title — Company" or a title-with-dates line.
    RoleTitle,
    /// A line whose content is primarily a date range or metadata row.
    DateMeta,
    /// "Label: value" entry in a skills-like section. Both halves retained.
    SkillLabelValue { label: String, value: String },
    /// Bullet point; the leading glyph is stripped from the stored text.
    Bullet,
    /// Plain body text.
    Body,
    /// Empty line, rendered as vertical spacing rather than dropped.
    Blank,
}

/// A resume line paired with its resolved role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub text: String,
    pub role: LineRole,
}

impl ClassifiedLine {
    pub fn new(text: impl Into<String>, role: LineRole) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }

    pub fn blank() -> Self {
        Self {
            text: String::new(),
            role: LineRole::Blank,
        }
    }
}

/// Assembler output unit consumed by the external renderer.
///
/// `section_key` is the normalized key of the owning section, `None` for
/// header-block lines. The renderer owns the visual mapping; spans wrapped in
/// the emphasis marker must be rendered emphasized, everything else escaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledBlock {
    pub role: LineRole,
    pub text: String,
    pub section_key: Option<String>,
}
