//! Image processing module
//!
//! - Decoding and dimension probing (processor)
//! - Width-capped resize (resize)
//! - JPEG re-encoding (encoder)

pub mod encoder;
pub mod processor;
pub mod resize;

pub use encoder::{ImageEncoder, JPEG_MIME_TYPE};
pub use processor::ImageProcessor;
pub use resize::ImageResize;
