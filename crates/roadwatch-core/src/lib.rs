//! Roadwatch Core Library
//!
//! This crate provides the domain models, error types and configuration shared
//! by the media preprocessor and the analysis transport.

pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::{AnalysisError, ErrorKind};
pub use models::{AnalysisResult, MediaKind, MediaPayload};
