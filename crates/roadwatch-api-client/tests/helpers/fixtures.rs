use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{GenericImageView, ImageFormat, Rgba, RgbaImage};

/// Base64 PNG with a horizontal gradient.
pub fn png_base64(width: u32, height: u32) -> String {
    let mut img = RgbaImage::new(width, height);
    for (x, _, pixel) in img.enumerate_pixels_mut() {
        let shade = (x * 255 / width.max(1)) as u8;
        *pixel = Rgba([shade, 90, 255 - shade, 255]);
    }
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .unwrap();
    STANDARD.encode(buffer)
}

/// Dimensions of a base64 image (bare or data URL).
pub fn image_dimensions(data: &str) -> (u32, u32) {
    let body = data.split_once(',').map(|(_, b)| b).unwrap_or(data);
    let bytes = STANDARD.decode(body).unwrap();
    image::load_from_memory(&bytes).unwrap().dimensions()
}

pub fn sample_analysis() -> serde_json::Value {
    serde_json::json!({
        "condition": "poor",
        "severity": 7,
        "hazards": ["pothole", "cracking"],
        "summary": "Multiple potholes in the right lane"
    })
}
