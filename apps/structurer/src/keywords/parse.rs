//! Keyword-list intake: a bounded, ordered phrase collection supplied by an
//! external collaborator. Used only for emphasis, never for filtering.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Upper bound on accepted keyword phrases; the rest are ignored.
pub const MAX_KEYWORDS: usize = 30;

/// Ordered collection of short phrases to emphasize, capped at
/// [`MAX_KEYWORDS`]. Construction is total: malformed input coerces to an
/// empty set rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordSet {
    phrases: Vec<String>,
}

impl KeywordSet {
    /// Builds a set from raw text expected to hold a JSON array of strings.
    ///
    /// Generator output often wraps the array in prose; when the text does not
    /// parse outright, the first bracketed span is tried before giving up.
    /// Anything that still is not an array yields the empty set.
    pub fn from_json(raw: &str) -> Self {
        let value = serde_json::from_str::<Value>(raw)
            .ok()
            .or_else(|| recover_array_span(raw));
        match value {
            Some(Value::Array(items)) => {
                let phrases = items.into_iter().filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                });
                Self::from_phrases(phrases)
            }
            _ => {
                warn!("keyword input is not a JSON array; emphasis disabled");
                Self::default()
            }
        }
    }

    /// Builds a set from phrases directly: trims, drops empties, caps at
    /// [`MAX_KEYWORDS`] preserving input order.
    pub fn from_phrases(phrases: impl IntoIterator<Item = String>) -> Self {
        let mut accepted = Vec::new();
        let mut dropped = 0usize;
        for phrase in phrases {
            let trimmed = phrase.trim();
            if trimmed.is_empty() {
                continue;
            }
            if accepted.len() < MAX_KEYWORDS {
                accepted.push(trimmed.to_string());
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            debug!(dropped, cap = MAX_KEYWORDS, "keyword list truncated");
        }
        Self { phrases: accepted }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// Widest `[...]` span in the text, parsed as JSON if possible.
fn recover_array_span(raw: &str) -> Option<Value> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&raw[start..=end]).ok()
}
