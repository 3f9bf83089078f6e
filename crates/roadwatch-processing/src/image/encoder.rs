use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView};

pub const JPEG_MIME_TYPE: &str = "image/jpeg";

/// Lossy re-encoding for outbound images
pub struct ImageEncoder;

impl ImageEncoder {
    /// Encode as baseline JPEG. Alpha is dropped; JPEG has no alpha channel.
    pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Bytes, image::ImageError> {
        let rgb_img = img.to_rgb8();
        let (width, height) = img.dimensions();

        let estimated_size = (width as usize * height as usize) / 4;
        let mut buffer = Vec::with_capacity(estimated_size);
        let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
        encoder.encode_image(&rgb_img)?;

        Ok(Bytes::from(buffer))
    }
}
