//! Media preprocessor - downscale still images before transmission
//!
//! Preprocessing is an optimisation only. Every failure hands back the
//! original payload through `Unprocessed`, so callers can always continue
//! with what they were given.

use roadwatch_core::config::{DEFAULT_JPEG_QUALITY, DEFAULT_MAX_IMAGE_WIDTH};
use roadwatch_core::{ClientConfig, MediaKind, MediaPayload};

use crate::codec::{decode_payload, encode_payload};
use crate::image::{ImageEncoder, ImageProcessor, ImageResize, JPEG_MIME_TYPE};

#[derive(Debug, thiserror::Error)]
pub enum PreprocessError {
    #[error("media is not a still image ({0})")]
    NotAnImage(String),

    #[error("max width must be greater than zero")]
    InvalidMaxWidth,

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),

    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
}

/// A payload the preprocessor declined to change, with the reason.
#[derive(Debug)]
pub struct Unprocessed {
    pub original: MediaPayload,
    pub reason: PreprocessError,
}

impl Unprocessed {
    fn new(original: MediaPayload, reason: PreprocessError) -> Self {
        Self { original, reason }
    }

    pub fn into_original(self) -> MediaPayload {
        self.original
    }
}

/// Downscales and re-encodes still images.
#[derive(Debug, Clone, Copy)]
pub struct MediaPreprocessor {
    max_width: u32,
    jpeg_quality: u8,
}

impl Default for MediaPreprocessor {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_IMAGE_WIDTH,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl MediaPreprocessor {
    pub fn new(max_width: u32, jpeg_quality: u8) -> Self {
        Self {
            max_width,
            jpeg_quality,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.max_image_width(), config.jpeg_quality())
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Cap the image width at `max_width` and re-encode as JPEG.
    ///
    /// Images already within the limit keep their dimensions but are still
    /// re-encoded. The result keeps the input's form (bare base64 or data
    /// URL) and is labelled `image/jpeg`. The caller's MIME type is not
    /// forwarded, so a PNG submission reaches the backend as `image/jpeg`.
    pub fn downscale(&self, media: MediaPayload) -> Result<MediaPayload, Unprocessed> {
        match self.try_downscale(&media) {
            Ok(processed) => Ok(processed),
            Err(reason) => Err(Unprocessed::new(media, reason)),
        }
    }

    fn try_downscale(&self, media: &MediaPayload) -> Result<MediaPayload, PreprocessError> {
        if media.kind() != MediaKind::Image {
            return Err(PreprocessError::NotAnImage(media.mime_type.clone()));
        }
        if self.max_width == 0 {
            return Err(PreprocessError::InvalidMaxWidth);
        }

        let decoded = decode_payload(&media.data)?;
        let img = ImageProcessor::decode(&decoded.bytes).map_err(PreprocessError::Decode)?;
        let resized = ImageResize::fit_width(img, self.max_width);
        let jpeg = ImageEncoder::encode_jpeg(&resized, self.jpeg_quality)
            .map_err(PreprocessError::Encode)?;

        tracing::debug!(
            original_bytes = decoded.bytes.len(),
            encoded_bytes = jpeg.len(),
            width = resized.width(),
            height = resized.height(),
            "Image re-encoded for upload"
        );

        Ok(MediaPayload {
            data: encode_payload(&jpeg, JPEG_MIME_TYPE, decoded.is_data_url),
            mime_type: JPEG_MIME_TYPE.to_string(),
        })
    }
}
