//! Base64 payload codec.
//!
//! The UI hands over either bare base64 or a `data:` URL. The preprocessor
//! answers in the same form it was given.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::preprocessor::PreprocessError;

/// Raw bytes of a payload plus the form it arrived in.
#[derive(Debug, Clone)]
pub struct DecodedPayload {
    pub bytes: Vec<u8>,
    pub is_data_url: bool,
}

/// Split `data:<mime>;base64,<body>` into its body. Returns `None` for
/// anything that is not a data URL.
fn data_url_body(data: &str) -> Option<Result<&str, PreprocessError>> {
    let rest = data.strip_prefix("data:")?;
    let parsed = match rest.split_once(',') {
        Some((header, body)) if header.ends_with(";base64") => Ok(body),
        Some(_) => Err(PreprocessError::InvalidBase64(
            "data URL is not base64-encoded".to_string(),
        )),
        None => Err(PreprocessError::InvalidBase64(
            "data URL has no payload".to_string(),
        )),
    };
    Some(parsed)
}

pub fn decode_payload(data: &str) -> Result<DecodedPayload, PreprocessError> {
    let trimmed = data.trim();
    let (body, is_data_url) = match data_url_body(trimmed) {
        Some(body) => (body?, true),
        None => (trimmed, false),
    };

    let compact: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if compact.is_empty() {
        return Err(PreprocessError::InvalidBase64("payload is empty".to_string()));
    }

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| PreprocessError::InvalidBase64(e.to_string()))?;

    Ok(DecodedPayload { bytes, is_data_url })
}

pub fn encode_payload(bytes: &[u8], mime_type: &str, as_data_url: bool) -> String {
    let body = STANDARD.encode(bytes);
    if as_data_url {
        format!("data:{};base64,{}", mime_type, body)
    } else {
        body
    }
}
