//! Wire keys used by the visit summary document.
//!
//! Keeping them in one place means error messages and the renderer always agree with the
//! decoder on field names.

/// Visit identifier.
pub const VISIT_ID_KEY: &str = "visitId";

/// Identifier of the user who owns the visit.
pub const USER_ID_KEY: &str = "userId";

/// Visit status wire string.
pub const STATUS_KEY: &str = "status";

/// Legacy video session details, only present on older visits.
pub const SESSION_INFO_KEY: &str = "tokBoxVisit";

/// Grouping object for connected peripheral integrations.
pub const INTEGRATIONS_KEY: &str = "integrations";

/// Peripheral integration flag, nested under [`INTEGRATIONS_KEY`].
pub const DEVICE_INTEGRATION_KEY: &str = "tytoCare";

/// Visit modality, added in v9 of the visit API.
pub const MODALITY_KEY: &str = "modality";

/// Placeholder used in error paths when the document itself is not an object.
pub const ROOT_PATH: &str = "<root>";
