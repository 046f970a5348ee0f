//! Visit summary decoding and rendering.
//!
//! A visit summary is returned by the backend when looking up a visit to resume. Its schema
//! has drifted across API versions, so fields fall into two groups:
//! - required: `visitId`, `userId`, `status`, `integrations.tytoCare`
//! - optional: `tokBoxVisit` (legacy video sessions only) and `modality` (v9 onwards)
//!
//! Required fields are always evaluated first. A malformed record therefore reports the
//! required-field failure even when its optional fields are broken too.

use crate::config::{DecoderConfig, DeprecatedStatusPolicy};
use crate::constants::{MODALITY_KEY, SESSION_INFO_KEY, STATUS_KEY, USER_ID_KEY, VISIT_ID_KEY};
use crate::document::Document;
use crate::integrations::{IntegrationFlag, IntegrationsWire};
use crate::modality::VisitModality;
use crate::session::SessionInfo;
use crate::status::{StatusWireError, VisitStatus};
use crate::{VisitError, VisitResult};
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Public domain-level types
// ============================================================================

/// Domain-level visit summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitSummary {
    /// Backend identifier of the visit.
    pub visit_id: String,

    /// Backend identifier of the user who owns the visit.
    pub user_id: String,

    /// Current status; use [`VisitStatus::is_active`] to decide whether to offer a resume.
    pub status: VisitStatus,

    /// Legacy video session details, `None` for visits not hosted by the legacy provider.
    pub session_info: Option<SessionInfo>,

    /// Connected peripheral integration flag.
    pub device_integration: IntegrationFlag,

    /// How the visit is conducted. `None` for pre-v9 visits and for values this crate does
    /// not recognise.
    pub modality: Option<VisitModality>,
}

impl VisitSummary {
    /// Shorthand for `self.status.is_active()`.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

// ============================================================================
// Decoder
// ============================================================================

/// Decodes visit summary documents using a fixed [`DecoderConfig`].
#[derive(Clone, Copy, Debug, Default)]
pub struct VisitSummaryDecoder {
    config: DecoderConfig,
}

impl VisitSummaryDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> DecoderConfig {
        self.config
    }

    /// Parse a visit summary from a JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`VisitError::InvalidJson`] if the text is not JSON, otherwise the same errors
    /// as [`VisitSummaryDecoder::decode`].
    pub fn parse(&self, json_text: &str) -> VisitResult<VisitSummary> {
        let value: Value = serde_json::from_str(json_text)?;
        self.decode(&value)
    }

    /// Decode a visit summary from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`VisitError`] if:
    /// - the value is not an object, or a required field is absent or wrongly typed
    ///   ([`VisitError::MissingField`] naming the dotted field path),
    /// - `status` is not a known wire string ([`VisitError::InvalidEnumValue`]).
    ///
    /// Optional fields never cause an error.
    pub fn decode(&self, value: &Value) -> VisitResult<VisitSummary> {
        let document = Document::root(value)?;

        let visit_id = document.required_str(VISIT_ID_KEY)?.to_owned();
        let user_id = document.required_str(USER_ID_KEY)?.to_owned();
        let status = self.decode_status(&document)?;
        let device_integration = IntegrationFlag::from_document(&document)?;

        let session_info = document.optional::<SessionInfo>(SESSION_INFO_KEY);
        let modality = document
            .optional::<String>(MODALITY_KEY)
            .and_then(|raw| decode_modality(&raw));

        Ok(VisitSummary {
            visit_id,
            user_id,
            status,
            session_info,
            device_integration,
            modality,
        })
    }

    fn decode_status(&self, document: &Document<'_>) -> VisitResult<VisitStatus> {
        let raw = document.required_str(STATUS_KEY)?;

        match VisitStatus::from_wire(raw) {
            Ok(status) => Ok(status),
            Err(StatusWireError::Deprecated { replacement, .. })
                if self.config.deprecated_status() == DeprecatedStatusPolicy::MapToCanonical =>
            {
                tracing::debug!(value = raw, %replacement, "mapping deprecated visit status");
                Ok(replacement)
            }
            Err(err) => {
                tracing::debug!(error = %err, "rejecting visit status");
                Err(VisitError::InvalidEnumValue {
                    field: document.field_path(STATUS_KEY),
                    value: raw.to_owned(),
                })
            }
        }
    }
}

fn decode_modality(raw: &str) -> Option<VisitModality> {
    let modality = VisitModality::from_wire(raw);
    if modality.is_none() {
        tracing::debug!(value = raw, "ignoring unrecognised visit modality");
    }
    modality
}

// ============================================================================
// Public VisitSummaries operations
// ============================================================================

/// Visit summary operations using the default [`DecoderConfig`].
///
/// This is a zero-sized type used for namespacing visit summary operations.
/// All methods are associated functions.
pub struct VisitSummaries;

impl VisitSummaries {
    /// Parse a visit summary from a JSON response body. See [`VisitSummaryDecoder::parse`].
    pub fn parse(json_text: &str) -> VisitResult<VisitSummary> {
        VisitSummaryDecoder::default().parse(json_text)
    }

    /// Decode a visit summary from a JSON value. See [`VisitSummaryDecoder::decode`].
    pub fn decode(value: &Value) -> VisitResult<VisitSummary> {
        VisitSummaryDecoder::default().decode(value)
    }

    /// Render a visit summary back into its wire document.
    ///
    /// Optional fields that are `None` are omitted, matching what the backend sends for
    /// visits that never had them.
    ///
    /// # Errors
    ///
    /// Returns [`VisitError::Render`] if serialisation fails.
    pub fn render(summary: &VisitSummary) -> VisitResult<Value> {
        let wire = domain_to_wire(summary);
        serde_json::to_value(&wire)
            .map_err(|e| VisitError::Render(format!("Failed to serialize visit summary: {e}")))
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

/// Wire representation of a visit summary, used for rendering only.
///
/// Decoding goes through [`Document`] instead so each field gets its own failure policy.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VisitSummaryWire<'a> {
    visit_id: &'a str,
    user_id: &'a str,
    status: VisitStatus,
    #[serde(rename = "tokBoxVisit", skip_serializing_if = "Option::is_none")]
    session_info: Option<&'a SessionInfo>,
    integrations: IntegrationsWire,
    #[serde(skip_serializing_if = "Option::is_none")]
    modality: Option<VisitModality>,
}

fn domain_to_wire(summary: &VisitSummary) -> VisitSummaryWire<'_> {
    VisitSummaryWire {
        visit_id: &summary.visit_id,
        user_id: &summary.user_id,
        status: summary.status,
        session_info: summary.session_info.as_ref(),
        integrations: IntegrationsWire {
            device_integration: summary.device_integration,
        },
        modality: summary.modality,
    }
}
