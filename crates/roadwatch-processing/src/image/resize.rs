use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// Image resize operations
pub struct ImageResize;

impl ImageResize {
    /// Target dimensions for a width cap.
    ///
    /// Only the width is constrained: an image narrower than `max_width`
    /// keeps its dimensions whatever its height.
    pub fn calculate_dimensions(orig_width: u32, orig_height: u32, max_width: u32) -> (u32, u32) {
        if orig_width <= max_width {
            return (orig_width, orig_height);
        }
        let scale = max_width as f64 / orig_width as f64;
        let height = (orig_height as f64 * scale).round() as u32;
        (max_width, height.max(1))
    }

    /// Select appropriate filter type based on resize ratio
    pub fn select_filter(
        orig_width: u32,
        orig_height: u32,
        new_width: u32,
        new_height: u32,
    ) -> FilterType {
        let width_ratio = orig_width as f32 / new_width as f32;
        let height_ratio = orig_height as f32 / new_height as f32;
        let max_ratio = width_ratio.max(height_ratio);

        if max_ratio > 2.0 {
            FilterType::Triangle
        } else if max_ratio > 1.5 {
            FilterType::CatmullRom
        } else {
            FilterType::Lanczos3
        }
    }

    /// Cap the image width, keeping aspect ratio. Returns the input unchanged
    /// when it already fits.
    pub fn fit_width(img: DynamicImage, max_width: u32) -> DynamicImage {
        let (orig_width, orig_height) = img.dimensions();
        let (width, height) = Self::calculate_dimensions(orig_width, orig_height, max_width);
        if (width, height) == (orig_width, orig_height) {
            return img;
        }

        let filter = Self::select_filter(orig_width, orig_height, width, height);
        tracing::debug!(
            from_width = orig_width,
            from_height = orig_height,
            to_width = width,
            to_height = height,
            filter = ?filter,
            "Downscaling image"
        );
        img.resize_exact(width, height, filter)
    }
}
