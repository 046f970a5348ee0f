//! Visit status classification.
//!
//! [`VisitStatus`] only has the six live variants. Earlier protocol revisions used different
//! wire spellings for three of them; those spellings are kept in a private table so they are
//! recognised (and reported as deprecated) but can never be constructed as a status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a virtual visit.
///
/// Each variant has exactly one canonical wire string, see [`VisitStatus::as_wire`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitStatus {
    /// Visit has been requested.
    #[serde(rename = "requested")]
    Requested,
    /// Patient is in the waiting room.
    #[serde(rename = "waitingroom")]
    WaitingRoom,
    /// Patient is currently in the virtual visit.
    #[serde(rename = "invisit")]
    InVisit,
    /// Visit has completed.
    #[serde(rename = "done")]
    Done,
    /// Visit was cancelled.
    #[serde(rename = "cancelled")]
    Cancelled,
    /// Visit was declined by staff before the patient saw a provider.
    #[serde(rename = "staffdeclined")]
    StaffDeclined,
}

/// Wire spellings retired by the backend, paired with the status that replaced them.
const DEPRECATED_WIRE_VALUES: &[(&str, VisitStatus)] = &[
    ("old waitingroom", VisitStatus::WaitingRoom),
    ("old invisit", VisitStatus::InVisit),
    ("old staffdeclined", VisitStatus::StaffDeclined),
];

/// Reasons a wire string could not be turned into a [`VisitStatus`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatusWireError {
    #[error("unknown visit status: {0:?}")]
    Unknown(String),

    #[error("deprecated visit status {value:?} (replaced by {replacement})")]
    Deprecated {
        value: String,
        replacement: VisitStatus,
    },
}

impl VisitStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [VisitStatus; 6] = [
        VisitStatus::Requested,
        VisitStatus::WaitingRoom,
        VisitStatus::InVisit,
        VisitStatus::Done,
        VisitStatus::Cancelled,
        VisitStatus::StaffDeclined,
    ];

    /// Whether a visit with this status can still be resumed.
    ///
    /// When this returns `false` the visit has ended and a new virtual visit must be started.
    pub fn is_active(self) -> bool {
        match self {
            VisitStatus::Requested | VisitStatus::WaitingRoom | VisitStatus::InVisit => true,
            VisitStatus::Done | VisitStatus::Cancelled | VisitStatus::StaffDeclined => false,
        }
    }

    /// Canonical wire string for this status.
    pub fn as_wire(self) -> &'static str {
        match self {
            VisitStatus::Requested => "requested",
            VisitStatus::WaitingRoom => "waitingroom",
            VisitStatus::InVisit => "invisit",
            VisitStatus::Done => "done",
            VisitStatus::Cancelled => "cancelled",
            VisitStatus::StaffDeclined => "staffdeclined",
        }
    }

    /// Parse a canonical wire string.
    ///
    /// # Errors
    ///
    /// Returns [`StatusWireError::Deprecated`] for a retired spelling, and
    /// [`StatusWireError::Unknown`] for anything else that is not a canonical wire string.
    pub fn from_wire(s: &str) -> Result<Self, StatusWireError> {
        if let Some(status) = Self::ALL.into_iter().find(|status| status.as_wire() == s) {
            return Ok(status);
        }

        match DEPRECATED_WIRE_VALUES
            .iter()
            .find(|(deprecated, _)| *deprecated == s)
        {
            Some((_, replacement)) => Err(StatusWireError::Deprecated {
                value: s.to_owned(),
                replacement: *replacement,
            }),
            None => Err(StatusWireError::Unknown(s.to_owned())),
        }
    }
}

impl fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for VisitStatus {
    type Err = StatusWireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s)
    }
}
