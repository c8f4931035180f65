use serde_json::Value;

use crate::{FailureKind, FetchError};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("body is not valid json: {0}")]
    Malformed(String),
    #[error("expected a json list, found {found}")]
    NotAList { found: &'static str },
}

impl From<DecodeError> for FetchError {
    fn from(err: DecodeError) -> Self {
        let kind = match err {
            DecodeError::Malformed(_) => FailureKind::MalformedBody,
            DecodeError::NotAList { .. } => FailureKind::NotAList,
        };
        FetchError::new(kind, err.to_string())
    }
}

/// Decode a response body into its list of untyped records.
///
/// Elements are kept as-is; shaping them into postings is the normalizer's job.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<Value>, DecodeError> {
    let body: Value =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::Malformed(err.to_string()))?;
    match body {
        Value::Array(records) => Ok(records),
        other => Err(DecodeError::NotAList {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_body_yields_records_in_order() {
        let records = decode_records(br#"[{"id":2},{"id":1},3]"#).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["id"], 2);
        assert_eq!(records[2], 3);
    }

    #[test]
    fn object_body_is_rejected() {
        let err = decode_records(br#"{"statusCode":200,"body":"[]"}"#).unwrap_err();
        assert_eq!(err, DecodeError::NotAList { found: "an object" });
    }

    #[test]
    fn garbage_is_malformed() {
        let err = decode_records(b"<html>").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
        assert_eq!(FetchError::from(err).kind, FailureKind::MalformedBody);
    }
}
