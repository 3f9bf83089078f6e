use serde::{Deserialize, Serialize};

/// Media kind, derived from the top-level MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a MIME type. Only `video/*` is treated as video; every other
    /// type goes down the image path.
    pub fn from_mime_type(mime_type: &str) -> Self {
        let top_level = mime_type
            .split('/')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        if top_level == "video" {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A base64-encoded media sample as supplied by the UI layer.
///
/// `data` is either plain base64 or a `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPayload {
    pub data: String,
    pub mime_type: String,
}

impl MediaPayload {
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::from_mime_type(&self.mime_type)
    }

    pub fn is_video(&self) -> bool {
        self.kind() == MediaKind::Video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_top_level_type() {
        assert_eq!(MediaKind::from_mime_type("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::from_mime_type("image/jpeg"), MediaKind::Image);
        assert_eq!(MediaKind::from_mime_type("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime_type("Video/QuickTime"), MediaKind::Video);
    }

    #[test]
    fn unknown_types_take_image_path() {
        assert_eq!(MediaKind::from_mime_type(""), MediaKind::Image);
        assert_eq!(
            MediaKind::from_mime_type("application/octet-stream"),
            MediaKind::Image
        );
    }

    #[test]
    fn payload_serializes_camel_case() {
        let payload = MediaPayload::new("AAAA", "image/png");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["mimeType"], "image/png");
        assert_eq!(json["data"], "AAAA");
        assert!(!payload.is_video());
    }
}
