use std::fmt;

use serde_json::Value;

/// Mount the request was issued for; echoed back untouched.
pub type MountId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ListingsCompleted {
        mount: MountId,
        result: Result<FetchOutput, FetchError>,
    },
}

/// Raw records as returned by the endpoint, not yet normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutput {
    pub records: Vec<Value>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub endpoint: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

impl fmt::Display for FetchMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}, {} bytes)",
            self.endpoint,
            self.status,
            self.content_type.as_deref().unwrap_or("no content type"),
            self.byte_len
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedBody,
    NotAList,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedBody => write!(f, "malformed json body"),
            FailureKind::NotAList => write!(f, "body is not a list"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_summary_names_endpoint_status_and_type() {
        let metadata = FetchMetadata {
            endpoint: "https://x/jobs".to_string(),
            status: 200,
            content_type: Some("application/json".to_string()),
            byte_len: 42,
        };
        assert_eq!(
            metadata.to_string(),
            "https://x/jobs -> 200 (application/json, 42 bytes)"
        );

        let bare = FetchMetadata {
            content_type: None,
            ..metadata
        };
        assert_eq!(
            bare.to_string(),
            "https://x/jobs -> 200 (no content type, 42 bytes)"
        );
    }
}
