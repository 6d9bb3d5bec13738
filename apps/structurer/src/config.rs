use serde::{Deserialize, Serialize};

/// Header-detection strategy chosen once per pipeline invocation.
///
/// Strict is the content-preserving mode: only the canonical vocabulary opens
/// a section. Loose is the rendering mode, tolerant of unconventional headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum HeaderMode {
    Strict,
    #[default]
    Loose,
}

/// Request-scoped pipeline configuration, constructed explicitly by the
/// caller and passed into the entry point. There is no process-wide state.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub header_mode: HeaderMode,
    /// Strip markdown artifacts before segmentation. Emphasis markers
    /// survive the cleanup either way.
    pub strip_markdown: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            header_mode: HeaderMode::Loose,
            strip_markdown: true,
        }
    }
}
