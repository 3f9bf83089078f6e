//! Configuration module
//!
//! The client configuration is resolved once, when the client is constructed,
//! and never changes afterwards.

use std::env;
use std::time::Duration;

use crate::error::AnalysisError;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_MAX_IMAGE_WIDTH: u32 = 1024;
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

/// Analysis client configuration
#[derive(Clone, Debug)]
pub struct ClientConfig {
    backend_url: String,
    request_timeout: Duration,
    max_image_width: u32,
    jpeg_quality: u8,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_image_width: DEFAULT_MAX_IMAGE_WIDTH,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: normalize_base_url(&backend_url.into()),
            ..Self::default()
        }
    }

    /// Load from environment: ROADWATCH_BACKEND_URL (or BACKEND_URL), falling
    /// back to `http://localhost:5000`. A `.env` file is honoured if present.
    pub fn from_env() -> Result<Self, AnalysisError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AnalysisError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
        let backend_url = non_blank("ROADWATCH_BACKEND_URL")
            .or_else(|| non_blank("BACKEND_URL"))
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let config = Self::new(backend_url.trim());
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        let parsed = url::Url::parse(&self.backend_url).map_err(|e| {
            AnalysisError::InvalidConfig(format!(
                "backend URL \"{}\" is not valid: {}",
                self.backend_url, e
            ))
        })?;

        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(AnalysisError::InvalidConfig(format!(
                "backend URL must use http or https scheme, got \"{}\"",
                scheme
            )));
        }

        if self.max_image_width == 0 {
            return Err(AnalysisError::InvalidConfig(
                "max image width must be greater than zero".to_string(),
            ));
        }

        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(AnalysisError::InvalidConfig(format!(
                "JPEG quality must be within 1..=100, got {}",
                self.jpeg_quality
            )));
        }

        Ok(())
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_max_image_width(mut self, max_width: u32) -> Self {
        self.max_image_width = max_width;
        self
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn max_image_width(&self) -> u32 {
        self.max_image_width
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
