//! Image processor - decoding

use image::{DynamicImage, ImageReader};
use std::io::Cursor;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Decode image bytes, guessing the format from magic bytes.
    pub fn decode(data: &[u8]) -> Result<DynamicImage, image::ImageError> {
        let cursor = Cursor::new(data);
        let reader = ImageReader::new(cursor).with_guessed_format()?;
        reader.decode()
    }
}
