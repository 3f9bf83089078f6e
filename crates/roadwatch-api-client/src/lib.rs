//! HTTP client for the Roadwatch analysis backend.
//!
//! `AnalysisClient::analyze` runs one submission end to end:
//! preprocess (images only) → health probe → dispatch under a deadline →
//! status check → JSON parse. Each stage returns its own `AnalysisError`
//! variant and the first failure short-circuits the call. Nothing is retried.

pub mod deadline;
pub mod request;

use reqwest::{Client, Response};
use roadwatch_core::{AnalysisError, AnalysisResult, ClientConfig, MediaKind, MediaPayload};
use roadwatch_processing::MediaPreprocessor;
use serde::de::DeserializeOwned;

pub use deadline::DeadlineGuard;
pub use request::AnalysisRequest;

pub const HEALTH_PATH: &str = "/health";
pub const IMAGE_ANALYSIS_PATH: &str = "/analyze";
pub const VIDEO_ANALYSIS_PATH: &str = "/analyze/video";

/// Client for the analysis backend. Cheap to clone; holds no per-call state.
#[derive(Clone, Debug)]
pub struct AnalysisClient {
    client: Client,
    config: ClientConfig,
    preprocessor: MediaPreprocessor,
}

impl AnalysisClient {
    pub fn new(config: ClientConfig) -> Result<Self, AnalysisError> {
        config.validate()?;

        let client = Client::builder().build().map_err(AnalysisError::request)?;

        Ok(Self {
            client,
            preprocessor: MediaPreprocessor::from_config(&config),
            config,
        })
    }

    /// Create client from environment: ROADWATCH_BACKEND_URL (or BACKEND_URL),
    /// defaulting to `http://localhost:5000`.
    pub fn from_env() -> Result<Self, AnalysisError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.backend_url()
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    pub fn endpoint_for(&self, kind: MediaKind) -> String {
        match kind {
            MediaKind::Image => self.build_url(IMAGE_ANALYSIS_PATH),
            MediaKind::Video => self.build_url(VIDEO_ANALYSIS_PATH),
        }
    }

    /// Submit media for analysis and return the backend's record as-is.
    pub async fn analyze(&self, media: MediaPayload) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_as(media).await
    }

    /// Like `analyze`, deserializing the response into `T`.
    pub async fn analyze_as<T>(&self, media: MediaPayload) -> Result<T, AnalysisError>
    where
        T: DeserializeOwned,
    {
        let kind = media.kind();
        let result = self.run_pipeline(media).await;
        if let Err(err) = &result {
            report_failure(err, kind);
        }
        result
    }

    async fn run_pipeline<T>(&self, media: MediaPayload) -> Result<T, AnalysisError>
    where
        T: DeserializeOwned,
    {
        let media = self.preprocess(media).await;
        self.health().await?;
        let response = self.dispatch(&media).await?;
        let response = validate_response(response).await?;
        parse_result(response).await
    }

    /// Downscale still images. Never fails: on any problem the original
    /// payload is sent.
    async fn preprocess(&self, media: MediaPayload) -> MediaPayload {
        if media.is_video() {
            return media;
        }

        let preprocessor = self.preprocessor;
        let fallback = media.clone();
        match tokio::task::spawn_blocking(move || preprocessor.downscale(media)).await {
            Ok(Ok(processed)) => {
                tracing::debug!("Image resized for optimization");
                processed
            }
            Ok(Err(unprocessed)) => {
                tracing::warn!(
                    error = %unprocessed.reason,
                    "Image resize failed, sending original"
                );
                unprocessed.into_original()
            }
            Err(join_error) => {
                tracing::warn!(
                    error = %join_error,
                    "Image resize task failed, sending original"
                );
                fallback
            }
        }
    }

    /// Liveness probe against `/health`.
    pub async fn health(&self) -> Result<(), AnalysisError> {
        let url = self.build_url(HEALTH_PATH);
        tracing::debug!(url = %url, "Checking backend health");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::BackendUnavailable {
                url: self.base_url().to_string(),
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    async fn dispatch(&self, media: &MediaPayload) -> Result<Response, AnalysisError> {
        let url = self.endpoint_for(media.kind());
        let body = AnalysisRequest::from_media(media);
        tracing::debug!(
            url = %url,
            media_kind = %media.kind(),
            mime_type = %media.mime_type,
            payload_bytes = media.data.len(),
            "Dispatching analysis request"
        );

        let request = self.client.post(&url).json(&body);
        let guard = DeadlineGuard::arm(self.config.request_timeout());

        match guard.run(request.send()).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => Err(self.transport_error(e)),
            Err(deadline) => Err(AnalysisError::Aborted { deadline }),
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> AnalysisError {
        if err.is_connect() {
            AnalysisError::Network {
                url: self.base_url().to_string(),
                source: err.into(),
            }
        } else {
            AnalysisError::request(err)
        }
    }
}

async fn validate_response(response: Response) -> Result<Response, AnalysisError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.map_err(|e| {
        tracing::debug!(status = status.as_u16(), error = %e, "Failed to read error body");
        AnalysisError::request(e)
    })?;

    Err(AnalysisError::HttpStatus {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    })
}

async fn parse_result<T>(response: Response) -> Result<T, AnalysisError>
where
    T: DeserializeOwned,
{
    let bytes = response.bytes().await.map_err(AnalysisError::request)?;
    let parsed = serde_json::from_slice(&bytes)?;
    Ok(parsed)
}

fn report_failure(err: &AnalysisError, media_kind: MediaKind) {
    tracing::error!(
        error_kind = %err.kind(),
        media_kind = %media_kind,
        suggested_action = err.suggested_action().unwrap_or_default(),
        error = %err,
        "Road condition analysis error"
    );
}
