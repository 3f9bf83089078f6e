//! Roadwatch Media Processing Library
//!
//! Downscales still images before they are sent to the analysis backend.
//! Video payloads are never touched.

pub mod codec;
pub mod image;
pub mod preprocessor;

// Re-export commonly used types
pub use codec::{decode_payload, encode_payload, DecodedPayload};
pub use image::{ImageEncoder, ImageProcessor, ImageResize, JPEG_MIME_TYPE};
pub use preprocessor::{MediaPreprocessor, PreprocessError, Unprocessed};
