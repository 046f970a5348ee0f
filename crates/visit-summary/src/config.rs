//! Decoder configuration.
//!
//! Configuration is resolved once by the caller and passed into
//! [`crate::VisitSummaryDecoder::new`]. Decoding never consults the environment.

/// What to do when a document carries a retired status spelling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeprecatedStatusPolicy {
    /// Fail the decode with [`crate::VisitError::InvalidEnumValue`].
    #[default]
    Reject,
    /// Decode the retired spelling as the status that replaced it.
    MapToCanonical,
}

/// Options controlling how a visit summary is decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    deprecated_status: DeprecatedStatusPolicy,
}

impl DecoderConfig {
    /// Create a new `DecoderConfig`.
    pub fn new(deprecated_status: DeprecatedStatusPolicy) -> Self {
        Self { deprecated_status }
    }

    pub fn deprecated_status(&self) -> DeprecatedStatusPolicy {
        self.deprecated_status
    }
}
