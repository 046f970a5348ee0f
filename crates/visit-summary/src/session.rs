//! Legacy video session details.
//!
//! Visits provisioned through the legacy video session provider carry a `tokBoxVisit` object
//! on their summary. Newer visits omit it entirely, so it is always decoded optionally.

use crate::document::Document;
use crate::VisitResult;
use serde::{Deserialize, Serialize};

/// Session details for a visit hosted by the legacy video session provider.
///
/// Unknown keys are ignored: the provider payload has grown fields over time that the
/// resume flow never reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    /// Provider session identifier.
    pub session_id: String,
    /// Provider project key the session belongs to.
    pub api_key: String,
}

/// Token response for joining a legacy video session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
}

impl SessionToken {
    /// Parse a token response body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::VisitError::InvalidJson`] if `json_text` is not JSON, and
    /// [`crate::VisitError::MissingField`] if the body has no string `token`.
    pub fn parse(json_text: &str) -> VisitResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json_text)?;
        Self::decode(&value)
    }

    /// Decode a token response from an already-parsed JSON value.
    pub fn decode(value: &serde_json::Value) -> VisitResult<Self> {
        let document = Document::root(value)?;
        Ok(Self {
            token: document.required_str("token")?.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VisitError;
    use serde_json::json;

    #[test]
    fn session_info_uses_camel_case_keys() {
        let info: SessionInfo = serde_json::from_value(json!({
            "sessionId": "1_MX4xMjM",
            "apiKey": "46123456",
            "archived": false
        }))
        .expect("session info");

        assert_eq!(
            info,
            SessionInfo {
                session_id: "1_MX4xMjM".into(),
                api_key: "46123456".into(),
            }
        );

        let rendered = serde_json::to_value(&info).expect("serialize session info");
        assert_eq!(
            rendered,
            json!({ "sessionId": "1_MX4xMjM", "apiKey": "46123456" })
        );
    }

    #[test]
    fn parses_token_response() {
        let token = SessionToken::parse(r#"{"token":"T1==cGFydG5lcl9pZD0"}"#).expect("token");
        assert_eq!(token.token, "T1==cGFydG5lcl9pZD0");
    }

    #[test]
    fn token_response_requires_token() {
        let err = SessionToken::parse(r#"{"tok":"abc"}"#).expect_err("missing token");
        match err {
            VisitError::MissingField(path) => assert_eq!(path, "token"),
            other => panic!("expected MissingField error, got {other:?}"),
        }

        let err = SessionToken::parse("not json").expect_err("invalid JSON");
        assert!(matches!(err, VisitError::InvalidJson(_)));
    }
}
