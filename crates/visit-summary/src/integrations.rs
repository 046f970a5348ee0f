//! Connected peripheral integrations.
//!
//! On the wire the integration flag is nested under an `integrations` grouping object:
//!
//! ```json
//! { "integrations": { "tytoCare": { "enabled": true } } }
//! ```
//!
//! The grouping object is mandatory and is expected to gain more members over time, so the
//! decoder descends into it explicitly instead of flattening its keys.

use crate::constants::{DEVICE_INTEGRATION_KEY, INTEGRATIONS_KEY};
use crate::document::Document;
use crate::VisitResult;
use serde::{Deserialize, Serialize};

/// Whether the connected peripheral integration is enabled for a visit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationFlag {
    pub enabled: bool,
}

impl IntegrationFlag {
    /// Read the flag from the `integrations` object of a visit summary document.
    pub(crate) fn from_document(document: &Document<'_>) -> VisitResult<Self> {
        let integrations = document.required_object(INTEGRATIONS_KEY)?;
        let flag = integrations.required_object(DEVICE_INTEGRATION_KEY)?;
        Ok(Self {
            enabled: flag.required_bool("enabled")?,
        })
    }
}

/// Wire shape of the `integrations` grouping object, used when rendering.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct IntegrationsWire {
    #[serde(rename = "tytoCare")]
    pub device_integration: IntegrationFlag,
}
