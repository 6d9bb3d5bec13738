// Document structuring: line signals, segmentation, ATS ranking, role
// resolution. Stages run strictly downstream; each returns a fresh value.

pub mod line;
pub mod ranker;
pub mod roles;
pub mod segmenter;

pub use line::{HeaderDetector, LineClassifier, LooseHeaderDetector, StrictHeaderDetector};
pub use ranker::rank_sections;
pub use roles::resolve_roles;
pub use segmenter::segment;
