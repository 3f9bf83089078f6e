pub mod analysis;
pub mod media;

pub use analysis::AnalysisResult;
pub use media::{MediaKind, MediaPayload};
