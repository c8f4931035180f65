use std::time::Duration;

use futures_util::StreamExt;
use jobhub_logging::{jobhub_debug, jobhub_info};
use reqwest::header::CONTENT_TYPE;

use crate::decode::decode_records;
use crate::{FailureKind, FetchError, FetchMetadata, FetchOutput};

pub const DEFAULT_ENDPOINT: &str = "https://9loe6yy9pk.execute-api.us-east-1.amazonaws.com/prod/jobs";

/// Characters of the response body echoed to the debug log.
const BODY_LOG_LIMIT: usize = 2048;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// One-shot retrieval of the whole listing collection.
#[async_trait::async_trait]
pub trait ListingFetcher: Send + Sync {
    async fn fetch(&self) -> Result<FetchOutput, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ListingFetcher for ReqwestFetcher {
    async fn fetch(&self) -> Result<FetchOutput, FetchError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        jobhub_info!("GET {}", endpoint);
        let response = client.get(endpoint).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        // Only a plain 200 carries the listing collection.
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        let body = String::from_utf8_lossy(&bytes);
        jobhub_debug!(
            "Listing response ({} bytes): {}",
            bytes.len(),
            body.chars().take(BODY_LOG_LIMIT).collect::<String>()
        );

        let records = decode_records(&bytes)?;
        let metadata = FetchMetadata {
            endpoint: self.settings.endpoint.clone(),
            status: status.as_u16(),
            content_type,
            byte_len: bytes.len() as u64,
        };

        Ok(FetchOutput { records, metadata })
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
