//! Field access over a parsed JSON object.
//!
//! [`Document`] is the only place that decides whether a field failure is fatal. Required
//! accessors return [`VisitError::MissingField`] with the dotted path of the field; the single
//! optional accessor swallows every failure and returns `None`.

use crate::constants::ROOT_PATH;
use crate::{VisitError, VisitResult};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A borrowed view over one JSON object, remembering where it sits in the parent document.
#[derive(Clone, Debug)]
pub(crate) struct Document<'a> {
    fields: &'a Map<String, Value>,
    path: Option<String>,
}

impl<'a> Document<'a> {
    /// Treat `value` as the top-level document. Anything other than an object is rejected.
    pub(crate) fn root(value: &'a Value) -> VisitResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields, path: None }),
            _ => Err(VisitError::MissingField(ROOT_PATH.to_owned())),
        }
    }

    /// Dotted path of `key` inside this document, e.g. `integrations.tytoCare`.
    pub(crate) fn field_path(&self, key: &str) -> String {
        match &self.path {
            Some(parent) => format!("{parent}.{key}"),
            None => key.to_owned(),
        }
    }

    pub(crate) fn required_str(&self, key: &str) -> VisitResult<&'a str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| VisitError::MissingField(self.field_path(key)))
    }

    pub(crate) fn required_bool(&self, key: &str) -> VisitResult<bool> {
        self.fields
            .get(key)
            .and_then(Value::as_bool)
            .ok_or_else(|| VisitError::MissingField(self.field_path(key)))
    }

    /// Descend one level into a nested object. The nested object is mandatory.
    pub(crate) fn required_object(&self, key: &str) -> VisitResult<Document<'a>> {
        let path = self.field_path(key);
        match self.fields.get(key) {
            Some(Value::Object(fields)) => Ok(Document {
                fields,
                path: Some(path),
            }),
            _ => Err(VisitError::MissingField(path)),
        }
    }

    /// Attempt to decode an optional field.
    ///
    /// Absent keys, `null`, and values that do not match `T` all yield `None`. Failures are
    /// reported at debug level only; they are expected on older or newer schema versions.
    pub(crate) fn optional<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.fields.get(key).filter(|value| !value.is_null())?;

        match serde_path_to_error::deserialize::<_, T>(value) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                tracing::debug!(
                    field = %self.field_path(key),
                    at = %err.path(),
                    error = %err.inner(),
                    "ignoring undecodable optional field"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pair {
        left: u32,
        right: u32,
    }

    #[test]
    fn root_must_be_an_object() {
        for value in [json!([]), json!("visit"), json!(null), json!(1)] {
            let err = Document::root(&value).expect_err("non-object root");
            match err {
                VisitError::MissingField(path) => assert_eq!(path, ROOT_PATH),
                other => panic!("expected MissingField error, got {other:?}"),
            }
        }
    }

    #[test]
    fn nested_paths_are_dotted() {
        let value = json!({ "outer": { "inner": { "flag": "yes" } } });
        let root = Document::root(&value).expect("object root");
        let inner = root
            .required_object("outer")
            .and_then(|outer| outer.required_object("inner"))
            .expect("nested objects");

        let err = inner.required_bool("flag").expect_err("string is not a bool");
        match err {
            VisitError::MissingField(path) => assert_eq!(path, "outer.inner.flag"),
            other => panic!("expected MissingField error, got {other:?}"),
        }
    }

    #[test]
    fn required_object_rejects_scalars() {
        let value = json!({ "outer": true });
        let root = Document::root(&value).expect("object root");
        let err = root.required_object("outer").expect_err("scalar is not an object");
        assert!(matches!(err, VisitError::MissingField(path) if path == "outer"));
    }

    #[test]
    fn required_str_rejects_wrong_type() {
        let value = json!({ "id": 42 });
        let root = Document::root(&value).expect("object root");
        assert!(matches!(
            root.required_str("id"),
            Err(VisitError::MissingField(path)) if path == "id"
        ));
        assert!(matches!(
            root.required_str("absent"),
            Err(VisitError::MissingField(path)) if path == "absent"
        ));
    }

    #[test]
    fn optional_swallows_failures() {
        let value = json!({
            "good": { "left": 1, "right": 2 },
            "bad": { "left": "one" },
            "empty": null,
        });
        let root = Document::root(&value).expect("object root");

        assert_eq!(
            root.optional::<Pair>("good"),
            Some(Pair { left: 1, right: 2 })
        );
        assert_eq!(root.optional::<Pair>("bad"), None);
        assert_eq!(root.optional::<Pair>("empty"), None);
        assert_eq!(root.optional::<Pair>("absent"), None);
    }
}
