//! Wire form of an error record

use crate::kind::UnknownKindCode;
use crate::{Error, Kind, MetaData};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Serializes as `{"detail": {..}, "type": "..", "error": "..", "code": N}`.
///
/// `detail` is omitted when the record has no metadata or it is empty.
/// `error` is the short message, so the chain below the outermost message
/// is never exposed.
impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let detail = self.meta().filter(|meta| !meta.is_empty());

        let mut state = serializer.serialize_struct("Error", 3 + usize::from(detail.is_some()))?;
        match detail {
            Some(detail) => state.serialize_field("detail", detail)?,
            None => state.skip_field("detail")?,
        }
        state.serialize_field("type", self.kind.as_str())?;
        state.serialize_field("error", &self.msg())?;
        state.serialize_field("code", &self.kind)?;
        state.end()
    }
}

impl Error {
    /// Convert to a JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self)
            .unwrap_or_else(|_| serde_json::json!({ "error": "serialization failed" }))
    }

    /// Convert to a JSON string
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// An error body as received by an API client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<MetaData>,
    #[serde(rename = "type")]
    pub label: String,
    pub error: String,
    pub code: u8,
}

impl ErrorBody {
    /// The kind named by `code`
    pub fn kind(&self) -> Result<Kind, UnknownKindCode> {
        Kind::try_from(self.code)
    }
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        Self {
            detail: err.meta().filter(|meta| !meta.is_empty()).cloned(),
            label: err.kind().as_str().to_string(),
            error: err.msg(),
            code: err.kind().code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::e;
    use serde_json::json;

    #[test]
    fn test_marshal() {
        let err = e![
            crate::new("foo"),
            "network latency",
            Kind::Io,
            MetaData::new().with("foo", "bar")
        ]
        .unwrap();

        assert_eq!(
            err.to_json_string().unwrap(),
            r#"{"detail":{"foo":"bar"},"type":"I/O error","error":"network latency","code":3}"#
        );
    }

    #[test]
    fn test_marshal_without_detail() {
        let err = e![crate::new("foo"), Kind::NotExist].unwrap();
        assert_eq!(
            err.to_json_string().unwrap(),
            r#"{"type":"item does not exist","error":"foo","code":5}"#
        );

        let err = e![crate::new("foo"), MetaData::new()].unwrap();
        assert_eq!(
            err.to_json_string().unwrap(),
            r#"{"type":"Unknown error","error":"foo","code":0}"#
        );
    }

    #[test]
    fn test_marshal_uses_short_message() {
        let inner = e![crate::new("EOF"), "read body", Kind::Unmarshal].unwrap();
        let err = e![inner, "decode request"].unwrap();

        let json = err.to_json();
        assert_eq!(json["error"], "decode request");
        assert_eq!(json["type"], "invalid data");
        assert_eq!(json["code"], 9);
    }

    #[test]
    fn test_marshal_inherited_detail() {
        let inner = e![crate::new("dup key"), Kind::Duplicated, MetaData::new().with("id", 7)]
            .unwrap();
        let err = e![inner, "create user"].unwrap();
        assert_eq!(err.to_json()["detail"], json!({ "id": 7 }));
    }

    #[test]
    fn test_error_body_round_trip() {
        let err = e![
            crate::new("expired"),
            "token rejected",
            Kind::Permission,
            MetaData::new().with("sub", "alice")
        ]
        .unwrap();

        let body: ErrorBody = serde_json::from_str(&err.to_json_string().unwrap()).unwrap();
        assert_eq!(body, ErrorBody::from(&err));
        assert_eq!(body.kind(), Ok(Kind::Permission));
        assert_eq!(body.label, "permission denied");
        assert_eq!(body.error, "token rejected");
    }

    #[test]
    fn test_error_body_unknown_code() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"type":"teapot","error":"short and stout","code":99}"#)
                .unwrap();
        assert!(body.detail.is_none());
        assert_eq!(body.kind(), Err(UnknownKindCode(99)));
    }
}
