//! Strips markdown artifacts a free-form text generator leaves behind.
//!
//! Heading markers, underscore emphasis, blockquote markers, and inline HTML
//! tags are removed line by line. Double-asterisk spans are deliberately kept:
//! they are the emphasis markers the renderer contract consumes.

use regex::Regex;

pub struct MarkdownCleanup {
    heading_re: Regex,
    underscore_re: Regex,
    blockquote_re: Regex,
    tag_re: Regex,
}

impl MarkdownCleanup {
    pub fn new() -> Self {
        Self {
            heading_re: Regex::new(r"^#{1,4}\s*").unwrap(),
            underscore_re: Regex::new(r"_{1,2}([^_\n]+)_{1,2}").unwrap(),
            blockquote_re: Regex::new(r"^>\s*").unwrap(),
            tag_re: Regex::new(r"<[^>]+>").unwrap(),
        }
    }

    pub fn clean(&self, text: &str) -> String {
        text.lines()
            .map(|line| {
                let line = self.heading_re.replace(line, "");
                let line = self.underscore_re.replace_all(&line, "$1");
                let line = self.blockquote_re.replace(&line, "");
                self.tag_re.replace_all(&line, "").into_owned()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for MarkdownCleanup {
    fn default() -> Self {
        Self::new()
    }
}
