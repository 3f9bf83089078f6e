//! Wire types for the analysis endpoints.

use roadwatch_core::{MediaKind, MediaPayload};
use serde::Serialize;

/// Body of `POST /analyze` and `POST /analyze/video`.
///
/// Exactly one of `image`/`video` is set; the other key is left out of the
/// JSON entirely.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<&'a str>,
    pub mime_type: &'a str,
}

impl<'a> AnalysisRequest<'a> {
    pub fn from_media(media: &'a MediaPayload) -> Self {
        let data = media.data.as_str();
        let (image, video) = match media.kind() {
            MediaKind::Image => (Some(data), None),
            MediaKind::Video => (None, Some(data)),
        };
        Self {
            image,
            video,
            mime_type: media.mime_type.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_body_has_no_video_key() {
        let media = MediaPayload::new("aW1n", "image/jpeg");
        let body = serde_json::to_value(AnalysisRequest::from_media(&media)).unwrap();
        assert_eq!(body, json!({"image": "aW1n", "mimeType": "image/jpeg"}));
        assert!(body.get("video").is_none());
    }

    #[test]
    fn video_body_has_no_image_key() {
        let media = MediaPayload::new("dmlk", "video/mp4");
        let body = serde_json::to_string(&AnalysisRequest::from_media(&media)).unwrap();
        assert_eq!(body, r#"{"video":"dmlk","mimeType":"video/mp4"}"#);
        assert!(!body.contains("image"));
        assert!(!body.contains("null"));
    }
}
