//! Virtual visit summary wire/boundary support.
//!
//! This crate turns a visit summary response body from the virtual-care backend into a typed
//! [`VisitSummary`]. The backend schema keeps evolving, so the decoder distinguishes between:
//! - required fields, which fail the whole decode when absent or malformed
//! - optional fields, which silently degrade to `None`
//!
//! This crate focuses on:
//! - decoding and rendering the visit summary document
//! - classifying [`VisitStatus`] values as active or terminal
//!
//! Transport, authentication and the resume flow itself live elsewhere.

pub mod config;
pub mod constants;
mod document;
pub mod integrations;
pub mod modality;
pub mod session;
pub mod status;
pub mod visit_summary;

// Re-export facades
pub use visit_summary::{VisitSummaries, VisitSummaryDecoder};

// Re-export public domain-level types
pub use config::{DecoderConfig, DeprecatedStatusPolicy};
pub use integrations::IntegrationFlag;
pub use modality::VisitModality;
pub use session::{SessionInfo, SessionToken};
pub use status::{StatusWireError, VisitStatus};
pub use visit_summary::VisitSummary;

/// Errors returned by the `visit-summary` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// A mandatory field is absent or has the wrong shape. Holds the dotted field path.
    #[error("missing field: {0}")]
    MissingField(String),

    /// A mandatory enumerated field carries a value that is not a known wire string.
    #[error("invalid value for {field}: {value:?}")]
    InvalidEnumValue { field: String, value: String },

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("render error: {0}")]
    Render(String),
}

/// Type alias for Results that can fail with a [`VisitError`].
pub type VisitResult<T> = Result<T, VisitError>;
