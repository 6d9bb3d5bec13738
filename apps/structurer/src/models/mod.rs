pub mod blocks;
pub mod document;

pub use blocks::{ClassifiedLine, LineRole, StyledBlock};
pub use document::{Section, SectionTraits, SegmentedDocument};
